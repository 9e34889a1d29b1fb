// Property tests for the TalentNet store
// Each case regenerates the dataset from an arbitrary seed and size.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use talentnet_core::TalentStore;
use talentnet_types::{SearchFilters, UserRole};

fn store(seed: u64, extra_users: usize) -> TalentStore {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    TalentStore::generate(seed, extra_users, now)
}

fn role_strategy() -> impl Strategy<Value = Option<UserRole>> {
    prop_oneof![
        Just(None),
        Just(Some(UserRole::Athlete)),
        Just(Some(UserRole::Sponsor)),
        Just(Some(UserRole::Scout)),
    ]
}

fn sport_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Tennis".to_string())),
        Just(Some("Basketball".to_string())),
        Just(Some("Track & Field".to_string())),
    ]
}

proptest! {
    #[test]
    fn prop_user_ids_are_unique_and_resolvable(seed in any::<u64>(), extra in 0usize..60) {
        let store = store(seed, extra);
        let users = store.all_users();

        let mut ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), users.len());

        for user in users {
            prop_assert_eq!(store.find_user_by_id(&user.id), Some(user));
        }
        prop_assert!(store.find_user_by_id("nonexistent").is_none());
    }

    #[test]
    fn prop_top_athletes_sorted_and_bounded(seed in any::<u64>(), extra in 0usize..60, limit in 0usize..40) {
        let store = store(seed, extra);
        let top = store.top_athletes(limit);

        prop_assert!(top.len() <= limit);
        prop_assert!(top.windows(2).all(|w| w[0].profile.ranking <= w[1].profile.ranking));
        if limit >= 1 {
            prop_assert_eq!(top[0].user.id.as_str(), "1");
        }
    }

    #[test]
    fn prop_search_filters_are_conjunctive(
        seed in any::<u64>(),
        role in role_strategy(),
        sport in sport_strategy(),
        ranking in proptest::option::of(1u32..120),
    ) {
        let store = store(seed, 30);
        let filters = SearchFilters { role, sport: sport.clone(), ranking };

        for user in store.search_users("", &filters) {
            if let Some(role) = role {
                prop_assert_eq!(user.role(), role);
            }
            if let Some(sport) = &sport {
                prop_assert_eq!(user.sport_key(), Some(sport.as_str()));
            }
            if let Some(threshold) = ranking {
                prop_assert!(user.ranking().is_some_and(|r| r <= threshold));
            }
        }

        let unfiltered = store.search_users("", &SearchFilters::default());
        prop_assert_eq!(unfiltered.len(), store.all_users().len());
    }

    #[test]
    fn prop_unread_count_matches_conversations(seed in any::<u64>(), user in 1u32..27) {
        let store = store(seed, 16);
        let user_id = user.to_string();

        let expected: u32 = store
            .user_conversations(&user_id)
            .iter()
            .map(|c| c.unread_count)
            .sum();
        prop_assert_eq!(store.unread_message_count(&user_id), expected);
    }

    #[test]
    fn prop_find_or_create_is_order_independent(seed in any::<u64>(), a in 1u32..27, b in 1u32..27) {
        prop_assume!(a != b);
        let mut store = store(seed, 16);
        let (a, b) = (a.to_string(), b.to_string());
        let before = store.dataset().conversations.len();

        let first = store.find_or_create_conversation(&a, &b).unwrap().id.clone();
        let second = store.find_or_create_conversation(&b, &a).unwrap().id.clone();

        prop_assert_eq!(&first, &second);
        let after = store.dataset().conversations.len();
        prop_assert!(after == before || after == before + 1);

        let matching = store
            .dataset()
            .conversations
            .iter()
            .filter(|c| c.is_between(&a, &b))
            .count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn prop_conversation_messages_belong_to_conversation(seed in any::<u64>()) {
        let store = store(seed, 16);

        for conversation in &store.dataset().conversations {
            let messages = store.conversation_messages(&conversation.id);
            prop_assert!(messages.iter().all(|m| m.belongs_to(conversation)));
            prop_assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        }
    }
}
