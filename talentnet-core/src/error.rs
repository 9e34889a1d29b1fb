use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejected mutations. Lookups never fail; they return `None` or an empty list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("conversation not found: {0}")]
    ConversationNotFound(String),

    #[error("a conversation needs two different participants, got {0} twice")]
    SelfConversation(String),

    #[error("user {user_id} is not a participant of conversation {conversation_id}")]
    NotAParticipant {
        conversation_id: String,
        user_id: String,
    },

    #[error("message content is empty")]
    EmptyMessage,
}
