mod render;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talentnet_core::config::Settings;
use talentnet_core::TalentStore;
use talentnet_types::{ProfileUpdate, RequestStatus, SearchFilters, UserRole};

/// TalentNet dataset explorer
///
/// Builds the in-memory athlete/sponsor/scout dataset and queries it.
/// Every run starts from a fresh dataset; nothing is written anywhere.
#[derive(Parser, Debug)]
#[command(name = "talentnet")]
#[command(about = "Explore the TalentNet mock dataset", long_about = None)]
struct Args {
    /// Generator seed (overrides settings and TALENTNET_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of generated users on top of the seed set
    #[arg(long, global = true)]
    extra_users: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Athletes ordered by ranking
    Leaderboard {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Search users by name or bio
    Search {
        #[arg(default_value = "")]
        query: String,
        #[arg(long, value_parser = parse_role)]
        role: Option<UserRole>,
        /// Athlete sport or scout specialty
        #[arg(long)]
        sport: Option<String>,
        /// Keep athletes ranked at or above this placement
        #[arg(long)]
        ranking: Option<u32>,
    },
    /// Show a user's profile
    Profile { id: String },
    /// Edit a user's profile; fields that do not apply to the role are ignored
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        /// Athletes only
        #[arg(long)]
        sport: Option<String>,
        /// Sponsors and scouts only
        #[arg(long)]
        specialty: Option<String>,
        /// Sponsors and scouts only
        #[arg(long)]
        company: Option<String>,
    },
    /// Users listed in a user's connections
    Connections { id: String },
    /// A user's conversations with their latest message
    Conversations { user_id: String },
    /// Messages of a conversation, oldest first
    Thread { conversation_id: String },
    /// Open (or start) the conversation between two users, optionally sending a first message
    Message {
        from: String,
        to: String,
        content: Option<String>,
    },
    /// Send a message and print the resulting thread
    Send {
        conversation_id: String,
        #[arg(long)]
        from: String,
        content: String,
    },
    /// Connection requests addressed to a user
    Requests {
        user_id: String,
        #[arg(long, value_parser = parse_status)]
        status: Option<RequestStatus>,
    },
    /// A user's notifications
    Notifications { user_id: String },
    /// Network page recommendations for a role
    Recommend {
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn parse_role(s: &str) -> Result<UserRole, String> {
    UserRole::parse(s).ok_or_else(|| format!("unknown role '{}' (athlete, sponsor, scout)", s))
}

fn parse_status(s: &str) -> Result<RequestStatus, String> {
    RequestStatus::parse(s)
        .ok_or_else(|| format!("unknown status '{}' (pending, accepted, rejected)", s))
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talentnet=info,talentnet_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut settings = Settings::new().context("Failed to load settings")?;
    if let Some(seed) = args.seed {
        settings.generator.seed = Some(seed);
    }
    if let Some(extra_users) = args.extra_users {
        settings.generator.extra_users = extra_users;
    }
    tracing::debug!(?settings, "Settings loaded");

    let mut store = TalentStore::initialize(&settings);
    run(&mut store, &settings, args.command, args.json)
}

fn run(store: &mut TalentStore, settings: &Settings, command: Command, json: bool) -> Result<()> {
    let now = Utc::now();

    match command {
        Command::Leaderboard { limit } => {
            let athletes = store.top_athletes(limit.unwrap_or(settings.leaderboard.limit));
            if json {
                return print_json(&athletes);
            }
            println!("TalentNet Leaderboard");
            println!("=====================");
            for (position, athlete) in athletes.iter().enumerate() {
                println!("{:>3}. {}", position + 1, render::user_line(athlete.user));
            }
        }

        Command::Search {
            query,
            role,
            sport,
            ranking,
        } => {
            let filters = SearchFilters {
                role,
                sport,
                ranking,
            };
            let users = store.search_users(&query, &filters);
            if json {
                return print_json(&users);
            }
            if users.is_empty() {
                if filters.is_empty() {
                    println!("No users found. Try adjusting your search terms.");
                } else {
                    println!("No users found. Try adjusting your search terms or filters.");
                }
            }
            for user in users {
                println!("{}", render::user_line(user));
            }
        }

        Command::Profile { id } => {
            let Some(user) = store.find_user_by_id(&id) else {
                bail!("User not found: {}", id);
            };
            if json {
                return print_json(user);
            }
            println!("{}", render::profile_block(user));
        }

        Command::Edit {
            id,
            name,
            bio,
            avatar,
            sport,
            specialty,
            company,
        } => {
            let update = ProfileUpdate {
                name,
                bio,
                avatar,
                sport,
                specialty,
                company,
            };
            if update.is_empty() {
                bail!("Nothing to update; pass at least one field");
            }
            let Some(user) = store.update_user_profile(&id, &update) else {
                bail!("User not found: {}", id);
            };
            if json {
                return print_json(user);
            }
            println!("{}", render::profile_block(user));
        }

        Command::Message { from, to, content } => {
            let conversation_id = store
                .find_or_create_conversation(&from, &to)
                .with_context(|| format!("Failed to open conversation with {}", to))?
                .id
                .clone();
            if let Some(content) = content {
                store
                    .send_message(&conversation_id, &from, &content)
                    .with_context(|| {
                        format!("Failed to send message to conversation {}", conversation_id)
                    })?;
            }
            if !json {
                println!("Conversation #{}", conversation_id);
            }
            print_thread(store, &conversation_id, json)?;
        }

        Command::Connections { id } => {
            if store.find_user_by_id(&id).is_none() {
                bail!("User not found: {}", id);
            }
            let connections = store.user_connections(&id);
            if json {
                return print_json(&connections);
            }
            for user in connections {
                println!("{}", render::user_line(user));
            }
        }

        Command::Conversations { user_id } => {
            let summaries = store.conversation_summaries(&user_id);
            if json {
                return print_json(&summaries);
            }
            println!(
                "{} conversation(s), {} unread message(s)",
                summaries.len(),
                store.unread_message_count(&user_id)
            );
            for summary in &summaries {
                println!("{}", render::summary_line(summary, &now));
            }
        }

        Command::Thread { conversation_id } => {
            print_thread(store, &conversation_id, json)?;
        }

        Command::Send {
            conversation_id,
            from,
            content,
        } => {
            store
                .send_message(&conversation_id, &from, &content)
                .with_context(|| {
                    format!("Failed to send message to conversation {}", conversation_id)
                })?;
            print_thread(store, &conversation_id, json)?;
        }

        Command::Requests { user_id, status } => {
            let store = &*store;
            let requests = store.connection_requests(&user_id, status);
            if json {
                return print_json(&requests);
            }
            for request in requests {
                let sender = display_name(store, &request.sender_id);
                println!("{}", render::request_line(request, &sender));
            }
        }

        Command::Notifications { user_id } => {
            let notifications = store.user_notifications(&user_id);
            if json {
                return print_json(&notifications);
            }
            println!(
                "{} unread of {}",
                store.unread_notification_count(&user_id),
                notifications.len()
            );
            for notification in notifications {
                println!("{}", render::notification_line(notification, &now));
            }
        }

        Command::Recommend { role, limit } => {
            let users =
                store.recommended_users(role, limit.unwrap_or(settings.network.recommendations));
            if json {
                return print_json(&users);
            }
            for user in users {
                println!("{}", render::user_line(user));
            }
        }
    }

    Ok(())
}

fn print_thread(store: &TalentStore, conversation_id: &str, json: bool) -> Result<()> {
    if store.find_conversation(conversation_id).is_none() {
        bail!("Conversation not found: {}", conversation_id);
    }

    let messages = store.conversation_messages(conversation_id);
    if json {
        return print_json(&messages);
    }

    let now = Utc::now();
    for message in messages {
        let sender = display_name(store, &message.sender_id);
        println!("{}", render::message_line(message, &sender, &now));
    }
    Ok(())
}

fn display_name(store: &TalentStore, user_id: &str) -> String {
    store
        .find_user_by_id(user_id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| format!("User {}", user_id))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
