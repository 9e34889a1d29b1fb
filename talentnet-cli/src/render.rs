use chrono::{DateTime, Utc};

use talentnet_types::{
    ConnectionRequest, ConversationSummary, Message, Notification, RoleProfile, User,
};

/// Format timestamp for display
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Coarse "time ago" label, e.g. "3 days ago"
pub fn relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = *now - *timestamp;
    let (amount, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

/// One-line description of a user, with role details
pub fn user_line(user: &User) -> String {
    let details = match &user.profile {
        RoleProfile::Athlete(a) => format!("athlete, {}, #{}", a.sport, a.ranking),
        RoleProfile::Sponsor(s) => format!("sponsor, {} / {}", s.company, s.specialty),
        RoleProfile::Scout(s) => format!("scout, {} / {}", s.company, s.specialty),
    };
    let verified = if user.verified { " ✓" } else { "" };
    format!("[{}] {} ({}){}", user.id, user.name, details, verified)
}

pub fn profile_block(user: &User) -> String {
    let mut lines = vec![user_line(user), format!("  {}", user.bio)];

    if let RoleProfile::Athlete(a) = &user.profile {
        lines.push(format!("  Sponsorships: {}", a.sponsorships));
        lines.push(format!("  Achievements: {}", a.achievements.join(", ")));
    }

    lines.push(format!("  Connections: {}", user.connections.len()));
    lines.push(format!("  Joined: {}", format_timestamp(&user.joined)));
    lines.push(format!("  Last active: {}", format_timestamp(&user.last_active)));
    lines.join("\n")
}

pub fn message_line(message: &Message, sender_name: &str, now: &DateTime<Utc>) -> String {
    let marker = if message.read { " " } else { "*" };
    format!(
        "{} {} ({}): {}",
        marker,
        sender_name,
        relative_time(&message.timestamp, now),
        message.content
    )
}

pub fn summary_line(summary: &ConversationSummary<'_>, now: &DateTime<Utc>) -> String {
    let other = summary
        .other_participant
        .map(|u| u.name.as_str())
        .unwrap_or("Unknown user");
    let preview = summary
        .last_message
        .map(|m| format!("{} ({})", m.content, relative_time(&m.timestamp, now)))
        .unwrap_or_else(|| "No messages yet".to_string());
    let unread = match summary.conversation.unread_count {
        0 => String::new(),
        n => format!(" [{} unread]", n),
    };
    format!("#{} {}{}: {}", summary.conversation.id, other, unread, preview)
}

pub fn request_line(request: &ConnectionRequest, sender_name: &str) -> String {
    format!(
        "#{} from {} [{}] {}",
        request.id,
        sender_name,
        request.status.as_str(),
        request.message.as_deref().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

pub fn notification_line(notification: &Notification, now: &DateTime<Utc>) -> String {
    let marker = if notification.read { " " } else { "*" };
    format!(
        "{} [{}] {} ({})",
        marker,
        notification.kind.as_str(),
        notification.content,
        relative_time(&notification.timestamp, now)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use talentnet_types::{AthleteProfile, NotificationKind, RequestStatus};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn athlete() -> User {
        User {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            avatar: String::new(),
            bio: "Sprinter".to_string(),
            connections: vec!["5".to_string()],
            verified: true,
            joined: now() - Duration::days(400),
            last_active: now() - Duration::hours(2),
            profile: RoleProfile::Athlete(AthleteProfile {
                sport: "Track & Field".to_string(),
                achievements: vec!["Olympic Gold Medal".to_string()],
                ranking: 1,
                sponsorships: 5,
            }),
        }
    }

    #[test]
    fn test_relative_time() {
        assert_eq!(relative_time(&(now() - Duration::seconds(20)), &now()), "just now");
        assert_eq!(relative_time(&(now() - Duration::minutes(1)), &now()), "1 minute ago");
        assert_eq!(relative_time(&(now() - Duration::minutes(30)), &now()), "30 minutes ago");
        assert_eq!(relative_time(&(now() - Duration::hours(5)), &now()), "5 hours ago");
        assert_eq!(relative_time(&(now() - Duration::days(3)), &now()), "3 days ago");
    }

    #[test]
    fn test_user_line() {
        assert_eq!(
            user_line(&athlete()),
            "[1] Alex Johnson (athlete, Track & Field, #1) ✓"
        );
    }

    #[test]
    fn test_profile_block_lists_achievements() {
        let block = profile_block(&athlete());
        assert!(block.contains("Achievements: Olympic Gold Medal"));
        assert!(block.contains("Sponsorships: 5"));
        assert!(block.contains("Joined: 2023-04-28 12:00"));
    }

    #[test]
    fn test_request_line_without_message() {
        let request = ConnectionRequest {
            id: "9".to_string(),
            sender_id: "11".to_string(),
            receiver_id: "1".to_string(),
            message: None,
            timestamp: now(),
            status: RequestStatus::Pending,
        };
        assert_eq!(request_line(&request, "User 11"), "#9 from User 11 [pending]");
    }

    #[test]
    fn test_notification_line_marks_unread() {
        let notification = Notification {
            id: "1".to_string(),
            user_id: "1".to_string(),
            kind: NotificationKind::Connection,
            content: "Accepted".to_string(),
            timestamp: now() - Duration::days(1),
            read: false,
            action_id: None,
        };
        assert_eq!(
            notification_line(&notification, &now()),
            "* [connection] Accepted (1 day ago)"
        );
    }
}
