//! Hand-authored conversations, messages, connection requests and notifications.
//! Timestamps are offsets back from the reference time.

use chrono::{DateTime, Duration, Utc};

use talentnet_types::{
    ConnectionRequest, Conversation, Message, Notification, NotificationKind, RequestStatus,
};

fn conversation(id: &str, a: &str, b: &str, unread_count: u32) -> Conversation {
    Conversation {
        id: id.to_string(),
        participants: [a.to_string(), b.to_string()],
        unread_count,
    }
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        conversation("1", "1", "5", 0),
        conversation("2", "2", "6", 2),
        conversation("3", "3", "7", 0),
        conversation("4", "1", "8", 1),
    ]
}

pub fn messages(now: DateTime<Utc>) -> Vec<Message> {
    let table: [(&str, &str, &str, &str, Duration, bool); 8] = [
        (
            "1",
            "5",
            "1",
            "Hi Alex, we're interested in discussing a potential sponsorship opportunity with you.",
            Duration::days(3),
            true,
        ),
        (
            "2",
            "1",
            "5",
            "Thanks for reaching out! I'd be very interested in hearing more about the opportunity.",
            Duration::days(2),
            true,
        ),
        (
            "3",
            "5",
            "1",
            "Great! We're preparing a proposal with details. Are you available for a call next week?",
            Duration::days(1),
            true,
        ),
        (
            "4",
            "6",
            "2",
            "Samantha, we loved your recent championship performance. Would you be interested in a nutrition sponsorship?",
            Duration::days(2),
            true,
        ),
        (
            "5",
            "6",
            "2",
            "We have a new product line launching next month that would align perfectly with your brand.",
            Duration::hours(1),
            false,
        ),
        (
            "6",
            "7",
            "3",
            "David, our new racket technology would be perfect for your style of play. Would you be interested in testing it?",
            Duration::days(4),
            true,
        ),
        (
            "7",
            "3",
            "7",
            "That sounds interesting. I'm always looking for equipment that can enhance my performance.",
            Duration::days(3),
            true,
        ),
        (
            "8",
            "8",
            "1",
            "Alex, I was impressed by your recent performance. Let's discuss some potential opportunities.",
            Duration::minutes(30),
            false,
        ),
    ];

    table
        .into_iter()
        .map(|(id, sender, receiver, content, age, read)| Message {
            id: id.to_string(),
            sender_id: sender.to_string(),
            receiver_id: receiver.to_string(),
            content: content.to_string(),
            timestamp: now - age,
            read,
        })
        .collect()
}

pub fn connection_requests(now: DateTime<Utc>) -> Vec<ConnectionRequest> {
    let table: [(&str, &str, &str, &str, Duration, RequestStatus); 3] = [
        (
            "1",
            "11",
            "1",
            "I'd like to connect with you as a fellow athlete.",
            Duration::days(3),
            RequestStatus::Pending,
        ),
        (
            "2",
            "12",
            "2",
            "I'm a scout specializing in basketball and would love to connect.",
            Duration::days(2),
            RequestStatus::Accepted,
        ),
        (
            "3",
            "13",
            "3",
            "We're a sports tech company and would like to discuss a potential partnership.",
            Duration::days(5),
            RequestStatus::Rejected,
        ),
    ];

    table
        .into_iter()
        .map(|(id, sender, receiver, message, age, status)| ConnectionRequest {
            id: id.to_string(),
            sender_id: sender.to_string(),
            receiver_id: receiver.to_string(),
            message: Some(message.to_string()),
            timestamp: now - age,
            status,
        })
        .collect()
}

pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let table: [(&str, &str, NotificationKind, &str, Duration, bool, Option<&str>); 4] = [
        (
            "1",
            "1",
            NotificationKind::Connection,
            "Global Sports Co. accepted your connection request",
            Duration::days(1),
            false,
            Some("5"),
        ),
        (
            "2",
            "1",
            NotificationKind::Message,
            "You have a new message from Global Sports Co.",
            Duration::hours(12),
            true,
            Some("3"),
        ),
        (
            "3",
            "2",
            NotificationKind::Sponsorship,
            "HealthFit Nutrition has offered you a sponsorship",
            Duration::days(2),
            false,
            Some("6"),
        ),
        (
            "4",
            "3",
            NotificationKind::Ranking,
            "Congratulations! Your ranking has improved to #3",
            Duration::days(7),
            true,
            None,
        ),
    ];

    table
        .into_iter()
        .map(|(id, user_id, kind, content, age, read, action_id)| Notification {
            id: id.to_string(),
            user_id: user_id.to_string(),
            kind,
            content: content.to_string(),
            timestamp: now - age,
            read,
            action_id: action_id.map(str::to_string),
        })
        .collect()
}
