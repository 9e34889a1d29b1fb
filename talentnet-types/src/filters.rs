use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// Optional predicates for user search. Every field left as `None` matches all users,
/// and so do a ranking of 0 and a blank sport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub role: Option<UserRole>,
    /// Exact match against an athlete's sport or a scout's specialty
    #[serde(default)]
    pub sport: Option<String>,
    /// Keep athletes ranked at or above this placement
    #[serde(default)]
    pub ranking: Option<u32>,
}

impl SearchFilters {
    pub fn role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }

    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn with_ranking(mut self, ranking: u32) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// Sport key to match, if one is set and not blank
    pub fn sport_filter(&self) -> Option<&str> {
        self.sport.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Ranking threshold, if one is set and non-zero
    pub fn ranking_filter(&self) -> Option<u32> {
        self.ranking.filter(|&r| r > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.sport_filter().is_none() && self.ranking_filter().is_none()
    }
}

/// Partial profile edit. Fields that do not apply to the user's role are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Athletes only
    #[serde(default)]
    pub sport: Option<String>,
    /// Sponsors and scouts only
    #[serde(default)]
    pub specialty: Option<String>,
    /// Sponsors and scouts only
    #[serde(default)]
    pub company: Option<String>,
}

impl ProfileUpdate {
    pub fn bio(bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.bio.is_none()
            && self.avatar.is_none()
            && self.sport.is_none()
            && self.specialty.is_none()
            && self.company.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_builder() {
        let filters = SearchFilters::role(UserRole::Athlete)
            .with_sport("Tennis")
            .with_ranking(10);

        assert_eq!(filters.role, Some(UserRole::Athlete));
        assert_eq!(filters.sport.as_deref(), Some("Tennis"));
        assert_eq!(filters.ranking, Some(10));
        assert!(!filters.is_empty());
        assert!(SearchFilters::default().is_empty());
    }

    #[test]
    fn test_zero_ranking_and_blank_sport_are_unset() {
        let filters = SearchFilters {
            role: None,
            sport: Some("  ".to_string()),
            ranking: Some(0),
        };

        assert_eq!(filters.sport_filter(), None);
        assert_eq!(filters.ranking_filter(), None);
        assert!(filters.is_empty());
        assert_eq!(SearchFilters::default().with_ranking(3).ranking_filter(), Some(3));
    }

    #[test]
    fn test_filters_deserialize_partial_object() {
        let filters: SearchFilters = serde_json::from_str(r#"{"role":"scout"}"#).unwrap();
        assert_eq!(filters, SearchFilters::role(UserRole::Scout));
    }

    #[test]
    fn test_profile_update_empty() {
        assert!(ProfileUpdate::default().is_empty());
        assert!(!ProfileUpdate::bio("new bio").is_empty());
    }
}
