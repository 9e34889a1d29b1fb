use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{NotificationKind, RequestStatus, UserRole};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339_opts(SecondsFormat::Millis, true);
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    /// Ids this user links to. Not mirrored on the other side.
    pub connections: Vec<String>,
    pub verified: bool,
    #[serde(with = "datetime_format")]
    pub joined: DateTime<Utc>,
    #[serde(with = "datetime_format")]
    pub last_active: DateTime<Utc>,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

/// Role-specific attributes, tagged by `role` in the serialized user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Athlete(AthleteProfile),
    Sponsor(SponsorProfile),
    Scout(ScoutProfile),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub sport: String,
    pub achievements: Vec<String>,
    /// Competitive placement, 1 is best. Not unique across athletes.
    pub ranking: u32,
    pub sponsorships: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorProfile {
    pub company: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutProfile {
    pub company: String,
    /// The sport this scout covers; matched by the sport search filter
    pub specialty: String,
}

impl RoleProfile {
    pub fn role(&self) -> UserRole {
        match self {
            RoleProfile::Athlete(_) => UserRole::Athlete,
            RoleProfile::Sponsor(_) => UserRole::Sponsor,
            RoleProfile::Scout(_) => UserRole::Scout,
        }
    }
}

impl User {
    pub fn role(&self) -> UserRole {
        self.profile.role()
    }

    pub fn as_athlete(&self) -> Option<Athlete<'_>> {
        match &self.profile {
            RoleProfile::Athlete(profile) => Some(Athlete { user: self, profile }),
            _ => None,
        }
    }

    pub fn as_sponsor(&self) -> Option<Sponsor<'_>> {
        match &self.profile {
            RoleProfile::Sponsor(profile) => Some(Sponsor { user: self, profile }),
            _ => None,
        }
    }

    pub fn as_scout(&self) -> Option<Scout<'_>> {
        match &self.profile {
            RoleProfile::Scout(profile) => Some(Scout { user: self, profile }),
            _ => None,
        }
    }

    /// Sport this user is associated with: an athlete's sport or a scout's specialty.
    /// Sponsors have none.
    pub fn sport_key(&self) -> Option<&str> {
        match &self.profile {
            RoleProfile::Athlete(a) => Some(&a.sport),
            RoleProfile::Scout(s) => Some(&s.specialty),
            RoleProfile::Sponsor(_) => None,
        }
    }

    pub fn ranking(&self) -> Option<u32> {
        match &self.profile {
            RoleProfile::Athlete(a) => Some(a.ranking),
            _ => None,
        }
    }
}

/// A user narrowed to the athlete role
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Athlete<'a> {
    #[serde(flatten)]
    pub user: &'a User,
    #[serde(skip)]
    pub profile: &'a AthleteProfile,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sponsor<'a> {
    #[serde(flatten)]
    pub user: &'a User,
    #[serde(skip)]
    pub profile: &'a SponsorProfile,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scout<'a> {
    #[serde(flatten)]
    pub user: &'a User,
    #[serde(skip)]
    pub profile: &'a ScoutProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// Whether both ends of this message are participants of `conversation`
    pub fn belongs_to(&self, conversation: &Conversation) -> bool {
        conversation.includes(&self.sender_id) && conversation.includes(&self.receiver_id)
    }
}

/// Two-party thread. Messages are not stored on it; they are matched by
/// sender and receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub participants: [String; 2],
    pub unread_count: u32,
}

impl Conversation {
    pub fn includes(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// Same unordered pair of participants, in either order
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        let [p0, p1] = &self.participants;
        (p0 == a && p1 == b) || (p0 == b && p1 == a)
    }

    /// The participant that is not `user_id`, if `user_id` takes part at all
    pub fn other_participant(&self, user_id: &str) -> Option<&str> {
        let [p0, p1] = &self.participants;
        if p0 == user_id {
            Some(p1)
        } else if p1 == user_id {
            Some(p0)
        } else {
            None
        }
    }
}

/// Sidebar view of a conversation from one participant's side
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSummary<'a> {
    pub conversation: &'a Conversation,
    pub other_participant: Option<&'a User>,
    pub last_message: Option<&'a Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub content: String,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    /// Id of the user, message or request the notification points at
    #[serde(default)]
    pub action_id: Option<String>,
}
