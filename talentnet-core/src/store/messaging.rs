use talentnet_types::{Conversation, ConversationSummary, Message};

use super::TalentStore;
use crate::error::{StoreError, StoreResult};
use crate::ids::generate_id;

impl TalentStore {
    pub fn find_conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.data
            .conversations
            .iter()
            .find(|c| c.id == conversation_id)
    }

    /// Messages exchanged between the conversation's participants, oldest first
    pub fn conversation_messages(&self, conversation_id: &str) -> Vec<&Message> {
        let Some(conversation) = self.find_conversation(conversation_id) else {
            return Vec::new();
        };

        let mut messages: Vec<&Message> = self
            .data
            .messages
            .iter()
            .filter(|m| m.belongs_to(conversation))
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    pub fn last_message(&self, conversation_id: &str) -> Option<&Message> {
        self.conversation_messages(conversation_id).pop()
    }

    /// Conversations `user_id` takes part in, in storage order
    pub fn user_conversations(&self, user_id: &str) -> Vec<&Conversation> {
        self.data
            .conversations
            .iter()
            .filter(|c| c.includes(user_id))
            .collect()
    }

    pub fn unread_conversations(&self, user_id: &str) -> Vec<&Conversation> {
        self.user_conversations(user_id)
            .into_iter()
            .filter(|c| c.unread_count > 0)
            .collect()
    }

    /// Each conversation of `user_id` with the other side and the latest message
    pub fn conversation_summaries(&self, user_id: &str) -> Vec<ConversationSummary<'_>> {
        self.user_conversations(user_id)
            .into_iter()
            .map(|conversation| ConversationSummary {
                conversation,
                other_participant: conversation
                    .other_participant(user_id)
                    .and_then(|id| self.find_user_by_id(id)),
                last_message: self.last_message(&conversation.id),
            })
            .collect()
    }

    pub fn unread_message_count(&self, user_id: &str) -> u32 {
        self.user_conversations(user_id)
            .iter()
            .map(|c| c.unread_count)
            .sum()
    }

    /// The conversation between `user_a` and `user_b`, created on first use.
    ///
    /// Order of the pair does not matter; repeated calls never create a second
    /// conversation for the same pair.
    pub fn find_or_create_conversation(
        &mut self,
        user_a: &str,
        user_b: &str,
    ) -> StoreResult<&Conversation> {
        if user_a == user_b {
            return Err(StoreError::SelfConversation(user_a.to_string()));
        }
        for id in [user_a, user_b] {
            if self.find_user_by_id(id).is_none() {
                return Err(StoreError::UserNotFound(id.to_string()));
            }
        }

        let index = match self
            .data
            .conversations
            .iter()
            .position(|c| c.is_between(user_a, user_b))
        {
            Some(index) => index,
            None => {
                let conversation = Conversation {
                    id: generate_id(),
                    participants: [user_a.to_string(), user_b.to_string()],
                    unread_count: 0,
                };
                tracing::debug!(
                    conversation_id = %conversation.id,
                    user_a,
                    user_b,
                    "Created conversation"
                );
                self.data.conversations.push(conversation);
                self.data.conversations.len() - 1
            }
        };

        Ok(&self.data.conversations[index])
    }

    /// Append a message from `sender_id` to the other participant of the conversation.
    ///
    /// The message table is the only copy; threads are read back through
    /// [`TalentStore::conversation_messages`].
    pub fn send_message(
        &mut self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
    ) -> StoreResult<&Message> {
        let conversation = self
            .find_conversation(conversation_id)
            .ok_or_else(|| StoreError::ConversationNotFound(conversation_id.to_string()))?;

        let receiver_id = conversation
            .other_participant(sender_id)
            .ok_or_else(|| StoreError::NotAParticipant {
                conversation_id: conversation_id.to_string(),
                user_id: sender_id.to_string(),
            })?
            .to_string();

        if content.trim().is_empty() {
            tracing::warn!(conversation_id, sender_id, "Rejected empty message");
            return Err(StoreError::EmptyMessage);
        }

        let message = Message {
            id: generate_id(),
            sender_id: sender_id.to_string(),
            receiver_id,
            content: content.to_string(),
            timestamp: self.clock(),
            read: false,
        };

        tracing::debug!(
            conversation_id,
            message_id = %message.id,
            sender_id,
            receiver_id = %message.receiver_id,
            "Message sent"
        );

        self.data.messages.push(message);
        let index = self.data.messages.len() - 1;
        Ok(&self.data.messages[index])
    }

    /// Mark every message addressed to `reader_id` in the conversation as read.
    /// Returns how many messages changed.
    ///
    /// The unread counter is cleared only when something addressed to the
    /// reader was flipped; opening a thread from the sending side leaves the
    /// receiver's count alone.
    pub fn mark_conversation_read(
        &mut self,
        conversation_id: &str,
        reader_id: &str,
    ) -> StoreResult<usize> {
        let index = self
            .data
            .conversations
            .iter()
            .position(|c| c.id == conversation_id)
            .ok_or_else(|| StoreError::ConversationNotFound(conversation_id.to_string()))?;

        let conversation = &self.data.conversations[index];
        if !conversation.includes(reader_id) {
            return Err(StoreError::NotAParticipant {
                conversation_id: conversation_id.to_string(),
                user_id: reader_id.to_string(),
            });
        }

        let mut marked = 0;
        for message in self.data.messages.iter_mut() {
            if !message.read
                && message.receiver_id == reader_id
                && message.belongs_to(conversation)
            {
                message.read = true;
                marked += 1;
            }
        }

        if marked > 0 {
            self.data.conversations[index].unread_count = 0;
        }
        tracing::debug!(
            conversation_id,
            reader_id,
            marked,
            "Conversation marked read"
        );

        Ok(marked)
    }
}
