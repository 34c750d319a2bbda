const NAMESPACE: &str = "ecoquest";

/// One independently persisted collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Actions,
    Challenges,
    PersonalStats,
    Points,
    Badges,
    Unlocks,
    Achievements,
    City,
    FavoriteTips,
    LastReset,
}

pub const ALL_KEYS: [Key; 10] = [
    Key::Actions,
    Key::Challenges,
    Key::PersonalStats,
    Key::Points,
    Key::Badges,
    Key::Unlocks,
    Key::Achievements,
    Key::City,
    Key::FavoriteTips,
    Key::LastReset,
];

impl Key {
    pub fn to_string(&self) -> String {
        let name = match self {
            Key::Actions => "actions",
            Key::Challenges => "challenges",
            Key::PersonalStats => "personal_stats",
            Key::Points => "points",
            Key::Badges => "badges",
            Key::Unlocks => "unlocks",
            Key::Achievements => "achievements",
            Key::City => "city",
            Key::FavoriteTips => "favorite_tips",
            Key::LastReset => "last_reset",
        };
        format!("{}.{}", NAMESPACE, name)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{Key, ALL_KEYS};

    #[test]
    fn names_are_namespaced_and_distinct() {
        let names: Vec<String> = ALL_KEYS.iter().map(|key| key.to_string()).collect();
        assert!(names.iter().all(|name| name.starts_with("ecoquest.")));
        assert!(names.iter().all_unique());
        assert_eq!(Key::City.to_string(), "ecoquest.city");
        assert_eq!(Key::LastReset.to_string(), "ecoquest.last_reset");
    }
}
