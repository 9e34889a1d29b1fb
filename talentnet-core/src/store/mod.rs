mod activity;
mod messaging;
mod users;

use chrono::{DateTime, Utc};

use talentnet_types::{ConnectionRequest, Conversation, Message, Notification, User};

use crate::config::Settings;
use crate::generator::UserGenerator;
use crate::seed;

/// The five collections the store owns
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
    pub connection_requests: Vec<ConnectionRequest>,
    pub notifications: Vec<Notification>,
}

/// Single owner of the in-memory dataset.
///
/// Built once at start-up and handed to consumers by reference: `&TalentStore`
/// for queries, `&mut TalentStore` for mutations. Nothing is ever deleted and
/// nothing outlives the process.
#[derive(Debug, Clone)]
pub struct TalentStore {
    data: Dataset,
    seed: Option<u64>,
    anchored_at: DateTime<Utc>,
}

impl TalentStore {
    /// Build the dataset described by `settings`, anchored at the current time
    pub fn initialize(settings: &Settings) -> Self {
        let seed = settings.generator.seed.unwrap_or_else(rand::random);
        let store = Self::generate(seed, settings.generator.extra_users, Utc::now());

        tracing::info!(
            seed,
            users = store.data.users.len(),
            conversations = store.data.conversations.len(),
            messages = store.data.messages.len(),
            "TalentNet dataset initialized"
        );

        store
    }

    /// Seed users plus `extra_users` generated ones, with the static relationship tables
    pub fn generate(seed: u64, extra_users: usize, now: DateTime<Utc>) -> Self {
        let users = UserGenerator::new(seed, now).all_users(extra_users);
        let data = Dataset {
            users,
            conversations: seed::conversations(),
            messages: seed::messages(now),
            connection_requests: seed::connection_requests(now),
            notifications: seed::notifications(now),
        };

        Self {
            data,
            seed: Some(seed),
            anchored_at: now,
        }
    }

    /// Wrap an explicit dataset (useful for testing).
    /// The reference time is the newest message timestamp.
    pub fn from_dataset(data: Dataset) -> Self {
        let anchored_at = data
            .messages
            .iter()
            .map(|m| m.timestamp)
            .max()
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        Self {
            data,
            seed: None,
            anchored_at,
        }
    }

    /// Seed the generator ran with, if this store was generated
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Reference time the seed timestamps are offsets from
    pub fn anchored_at(&self) -> DateTime<Utc> {
        self.anchored_at
    }

    /// Timestamp for new records: wall-clock time, never earlier than the reference time
    pub(crate) fn clock(&self) -> DateTime<Utc> {
        Utc::now().max(self.anchored_at)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    pub fn into_dataset(self) -> Dataset {
        self.data
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    /// Seed tables plus 16 generated users
    pub fn store() -> TalentStore {
        TalentStore::generate(2024, 16, fixed_now())
    }
}
