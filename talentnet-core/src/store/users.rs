use talentnet_types::{
    Athlete, ProfileUpdate, RoleProfile, Scout, SearchFilters, Sponsor, User, UserRole,
};

use super::TalentStore;

impl TalentStore {
    pub fn all_users(&self) -> &[User] {
        &self.data.users
    }

    /// Get user by ID
    pub fn find_user_by_id(&self, id: &str) -> Option<&User> {
        self.data.users.iter().find(|u| u.id == id)
    }

    pub fn find_athlete_by_id(&self, id: &str) -> Option<Athlete<'_>> {
        self.find_user_by_id(id).and_then(User::as_athlete)
    }

    pub fn find_sponsor_by_id(&self, id: &str) -> Option<Sponsor<'_>> {
        self.find_user_by_id(id).and_then(User::as_sponsor)
    }

    pub fn find_scout_by_id(&self, id: &str) -> Option<Scout<'_>> {
        self.find_user_by_id(id).and_then(User::as_scout)
    }

    pub fn users_by_role(&self, role: UserRole) -> Vec<&User> {
        self.data.users.iter().filter(|u| u.role() == role).collect()
    }

    /// Athletes ordered by ranking, best first. Ties keep storage order.
    pub fn top_athletes(&self, limit: usize) -> Vec<Athlete<'_>> {
        let mut athletes: Vec<Athlete<'_>> =
            self.data.users.iter().filter_map(User::as_athlete).collect();
        athletes.sort_by_key(|a| a.profile.ranking);
        athletes.truncate(limit);
        athletes
    }

    /// Users listed in `user_id`'s own connections, in storage order.
    /// Users who list `user_id` are not included.
    pub fn user_connections(&self, user_id: &str) -> Vec<&User> {
        let Some(user) = self.find_user_by_id(user_id) else {
            return Vec::new();
        };

        self.data
            .users
            .iter()
            .filter(|u| user.connections.contains(&u.id))
            .collect()
    }

    /// Whether `user_id` lists `other_id` as a connection
    pub fn is_connected(&self, user_id: &str, other_id: &str) -> bool {
        self.find_user_by_id(user_id)
            .map(|u| u.connections.iter().any(|c| c == other_id))
            .unwrap_or(false)
    }

    /// Case-insensitive match on name or bio, narrowed by every filter that is set
    pub fn search_users(&self, query: &str, filters: &SearchFilters) -> Vec<&User> {
        let query = query.to_lowercase();

        self.data
            .users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&query) || u.bio.to_lowercase().contains(&query)
            })
            .filter(|u| filters.role.map_or(true, |role| u.role() == role))
            .filter(|u| {
                filters
                    .sport_filter()
                    .map_or(true, |sport| u.sport_key() == Some(sport))
            })
            .filter(|u| {
                filters.ranking_filter().map_or(true, |threshold| {
                    u.ranking().is_some_and(|ranking| ranking <= threshold)
                })
            })
            .collect()
    }

    /// First `limit` users of a role, as shown on the network page
    pub fn recommended_users(&self, role: UserRole, limit: usize) -> Vec<&User> {
        let mut users = self.search_users("", &SearchFilters::role(role));
        users.truncate(limit);
        users
    }

    /// Merge `update` into the user's record in place
    pub fn update_user_profile(&mut self, user_id: &str, update: &ProfileUpdate) -> Option<&User> {
        let Some(user) = self.data.users.iter_mut().find(|u| u.id == user_id) else {
            tracing::warn!(user_id, "Profile update for unknown user");
            return None;
        };

        if update.is_empty() {
            return Some(&*user);
        }

        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(bio) = &update.bio {
            user.bio = bio.clone();
        }
        if let Some(avatar) = &update.avatar {
            user.avatar = avatar.clone();
        }

        match &mut user.profile {
            RoleProfile::Athlete(athlete) => {
                if let Some(sport) = &update.sport {
                    athlete.sport = sport.clone();
                }
                if update.specialty.is_some() || update.company.is_some() {
                    tracing::debug!(user_id, "Ignoring specialty/company for athlete");
                }
            }
            RoleProfile::Sponsor(org) => {
                apply_organization(&mut org.specialty, &mut org.company, update);
            }
            RoleProfile::Scout(org) => {
                apply_organization(&mut org.specialty, &mut org.company, update);
            }
        }

        if update.sport.is_some() && user.role() != UserRole::Athlete {
            tracing::debug!(
                user_id,
                role = user.role().as_str(),
                "Ignoring sport for non-athlete"
            );
        }

        tracing::debug!(user_id, "Profile updated");
        Some(&*user)
    }
}

fn apply_organization(specialty: &mut String, company: &mut String, update: &ProfileUpdate) {
    if let Some(value) = &update.specialty {
        *specialty = value.clone();
    }
    if let Some(value) = &update.company {
        *company = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;

    #[test]
    fn test_find_user_by_id() {
        let store = fixtures::store();

        for user in store.all_users() {
            assert_eq!(store.find_user_by_id(&user.id), Some(user));
        }
        assert!(store.find_user_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_role_narrowed_lookups() {
        let store = fixtures::store();

        assert_eq!(store.find_athlete_by_id("1").unwrap().user.name, "Alex Johnson");
        assert!(store.find_athlete_by_id("5").is_none());
        assert_eq!(
            store.find_sponsor_by_id("6").unwrap().profile.company,
            "HealthFit Nutrition"
        );
        assert!(store.find_sponsor_by_id("8").is_none());
        assert_eq!(store.find_scout_by_id("10").unwrap().profile.specialty, "Tennis");
        assert!(store.find_scout_by_id("1").is_none());
        assert!(store.find_scout_by_id("missing").is_none());
    }

    #[test]
    fn test_top_athletes_scenario() {
        let store = fixtures::store();

        let top = store.top_athletes(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].user.id, "1");

        let top = store.top_athletes(4);
        let ids: Vec<&str> = top.iter().map(|a| a.user.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_top_athletes_lists_each_athlete_once() {
        let store = fixtures::store();
        let athlete_count = store.users_by_role(UserRole::Athlete).len();

        let top = store.top_athletes(usize::MAX);
        assert_eq!(top.len(), athlete_count);
        assert!(top.windows(2).all(|w| w[0].profile.ranking <= w[1].profile.ranking));
    }

    #[test]
    fn test_user_connections_are_one_directional() {
        let store = fixtures::store();

        let ids: Vec<&str> = store
            .user_connections("3")
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, vec!["7", "10"]);

        // 7 lists only 3, so the link back to 1 is absent
        assert!(store.is_connected("6", "2"));
        assert!(store.is_connected("2", "6"));
        assert!(!store.is_connected("7", "1"));
        assert!(store.user_connections("missing").is_empty());
    }

    #[test]
    fn test_search_users_by_role() {
        let store = fixtures::store();

        let athletes = store.search_users("", &SearchFilters::role(UserRole::Athlete));
        assert!(!athletes.is_empty());
        assert!(athletes.iter().all(|u| u.role() == UserRole::Athlete));

        assert!(store.search_users("zzz-no-match", &SearchFilters::default()).is_empty());
    }

    #[test]
    fn test_search_users_query_is_case_insensitive_on_name_and_bio() {
        let store = fixtures::store();

        let by_name: Vec<&str> = store
            .search_users("aLeX", &SearchFilters::default())
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert!(by_name.contains(&"1"));

        let by_bio: Vec<&str> = store
            .search_users("SUSTAINABILITY", &SearchFilters::default())
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(by_bio, vec!["3"]);
    }

    #[test]
    fn test_search_users_sport_matches_athletes_and_scouts() {
        let store = fixtures::store();

        let tennis = store.search_users("", &SearchFilters::default().with_sport("Tennis"));
        let ids: Vec<&str> = tennis.iter().map(|u| u.id.as_str()).collect();
        assert!(ids.contains(&"3"));
        assert!(ids.contains(&"10"));
        assert!(tennis.iter().all(|u| u.sport_key() == Some("Tennis")));
        assert!(tennis.iter().all(|u| u.role() != UserRole::Sponsor));
    }

    #[test]
    fn test_search_users_ranking_excludes_non_athletes() {
        let store = fixtures::store();

        let ranked = store.search_users("", &SearchFilters::default().with_ranking(4));
        let ids: Vec<&str> = ranked.iter().map(|u| u.id.as_str()).collect();
        // Generated athletes rank 5 or worse
        assert_eq!(ids, vec!["1", "2", "3", "4"]);

        let scouts_ranked = store.search_users(
            "",
            &SearchFilters::role(UserRole::Scout).with_ranking(100),
        );
        assert!(scouts_ranked.is_empty());
    }

    #[test]
    fn test_search_users_zero_ranking_and_blank_sport_do_not_filter() {
        let store = fixtures::store();
        let everyone = store.search_users("", &SearchFilters::default());

        let unset = SearchFilters::default().with_ranking(0).with_sport("");
        assert_eq!(store.search_users("", &unset), everyone);
        assert_eq!(everyone.len(), store.all_users().len());
    }

    #[test]
    fn test_recommended_users() {
        let store = fixtures::store();

        let sponsors = store.recommended_users(UserRole::Sponsor, 2);
        assert_eq!(sponsors.len(), 2);
        assert_eq!(sponsors[0].id, "5");
        assert_eq!(sponsors[1].id, "6");
    }

    #[test]
    fn test_update_user_profile_bio() {
        let mut store = fixtures::store();
        let before = store.find_user_by_id("1").cloned().unwrap();

        let updated = store.update_user_profile("1", &ProfileUpdate::bio("new bio")).unwrap();
        assert_eq!(updated.bio, "new bio");

        let after = store.find_user_by_id("1").unwrap();
        assert_eq!(after.bio, "new bio");
        assert_eq!(after.name, before.name);
        assert_eq!(after.profile, before.profile);
        assert_eq!(after.connections, before.connections);
        assert_eq!(after.joined, before.joined);
    }

    #[test]
    fn test_update_user_profile_respects_role() {
        let mut store = fixtures::store();

        let update = ProfileUpdate {
            sport: Some("Swimming".to_string()),
            specialty: Some("Apparel".to_string()),
            ..Default::default()
        };

        store.update_user_profile("1", &update);
        let athlete = store.find_athlete_by_id("1").unwrap();
        assert_eq!(athlete.profile.sport, "Swimming");

        store.update_user_profile("8", &update);
        let scout = store.find_scout_by_id("8").unwrap();
        assert_eq!(scout.profile.specialty, "Apparel");
        assert_eq!(scout.profile.company, "Elite Athletics Agency");
    }

    #[test]
    fn test_empty_update_leaves_user_unchanged() {
        let mut store = fixtures::store();
        let before = store.find_user_by_id("6").cloned().unwrap();

        let after = store
            .update_user_profile("6", &ProfileUpdate::default())
            .cloned()
            .unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_update_unknown_user() {
        let mut store = fixtures::store();
        assert!(store
            .update_user_profile("missing", &ProfileUpdate::bio("x"))
            .is_none());
    }
}
