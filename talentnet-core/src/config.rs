use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Generator {
    /// Fixed seed for the mock data. A random one is drawn when unset.
    pub seed: Option<u64>,
    /// Users generated on top of the hand-authored seed set
    pub extra_users: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leaderboard {
    pub limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Network {
    pub recommendations: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub generator: Generator,
    pub leaderboard: Leaderboard,
    pub network: Network,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: Generator {
                seed: None,
                extra_users: 16,
            },
            leaderboard: Leaderboard { limit: 10 },
            network: Network { recommendations: 8 },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 1. Optional talentnet.toml
        let config_file_name = "talentnet.toml";

        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        // Check in talentnet-core directory (for development)
        let dev_path = PathBuf::from("talentnet-core").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        // 2. Defaults, then environment variables (highest priority)
        let defaults = Settings::default();
        builder = builder
            .set_default("generator.extra_users", defaults.generator.extra_users as u64)?
            .set_default("leaderboard.limit", defaults.leaderboard.limit as u64)?
            .set_default("network.recommendations", defaults.network.recommendations as u64)?;

        if let Ok(seed) = std::env::var("TALENTNET_SEED") {
            builder = builder.set_override("generator.seed", seed)?;
        }
        if let Ok(count) = std::env::var("TALENTNET_EXTRA_USERS") {
            builder = builder.set_override("generator.extra_users", count)?;
        }
        if let Ok(limit) = std::env::var("TALENTNET_LEADERBOARD_LIMIT") {
            builder = builder.set_override("leaderboard.limit", limit)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }
}
