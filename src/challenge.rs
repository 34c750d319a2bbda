use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Achievement,
}

impl FromStr for ChallengeKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(Self::Daily),
            "daily" => Ok(Self::Daily),
            "w" => Ok(Self::Weekly),
            "weekly" => Ok(Self::Weekly),
            "m" => Ok(Self::Monthly),
            "monthly" => Ok(Self::Monthly),
            "a" => Ok(Self::Achievement),
            "achievement" => Ok(Self::Achievement),
            _ => Err(anyhow!("Wrong challenge kind.")),
        }
    }
}

impl ChallengeKind {
    pub fn to_string(&self) -> String {
        match self {
            ChallengeKind::Daily => "daily",
            ChallengeKind::Weekly => "weekly",
            ChallengeKind::Monthly => "monthly",
            ChallengeKind::Achievement => "achievement",
        }
        .to_owned()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn to_string(&self) -> String {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
        .to_owned()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reward {
    Badge(String),
    Points(u64),
    Unlock(String),
}

impl Default for Reward {
    fn default() -> Self {
        Reward::Points(0)
    }
}

impl Reward {
    pub fn describe(&self) -> String {
        match self {
            Reward::Badge(name) => format!("Badge: {}", name),
            Reward::Points(amount) => format!("{} points", amount),
            Reward::Unlock(description) => description.clone(),
        }
    }
}

/// A stored record with missing fields still loads, the gaps take the
/// `Default` values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ChallengeKind,
    pub progress: u32,
    pub target: u32,
    pub reward: Reward,
    pub difficulty: Difficulty,
    pub deadline: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl Challenge {
    pub fn is_reached(&self) -> bool {
        self.progress >= self.target
    }

    /// Progress as a fraction of the target, for progress bars.
    pub fn fraction(&self) -> f64 {
        if self.target == 0 {
            1.0
        } else {
            (self.progress as f64 / self.target as f64).min(1.0)
        }
    }

    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<String> {
        let deadline = self.deadline?;
        let diff = deadline - now;
        if diff.num_seconds() <= 0 {
            return Some("expired".to_owned());
        }
        let hours = diff.num_hours();
        let minutes = diff.num_minutes() % 60;
        if hours > 24 {
            Some(format!("{}d {}h", hours / 24, hours % 24))
        } else {
            Some(format!("{}h {}m", hours, minutes))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{Challenge, ChallengeKind, Difficulty, Reward};

    fn challenge() -> Challenge {
        Challenge {
            id: "1".to_owned(),
            title: "Plastic reducer".to_owned(),
            description: String::new(),
            kind: ChallengeKind::Daily,
            progress: 8,
            target: 15,
            reward: Reward::Badge("Ocean Guardian".to_owned()),
            difficulty: Difficulty::Medium,
            deadline: None,
            completed: false,
        }
    }

    #[test]
    fn kinds() {
        assert_eq!("w".parse::<ChallengeKind>().unwrap(), ChallengeKind::Weekly);
        assert_eq!("monthly".parse::<ChallengeKind>().unwrap(), ChallengeKind::Monthly);
        assert_eq!(ChallengeKind::Achievement.to_string(), "achievement");
        assert!("yearly".parse::<ChallengeKind>().is_err());
    }

    #[test]
    fn time_remaining() {
        let now = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let mut challenge = challenge();
        assert_eq!(challenge.time_remaining(now), None);
        challenge.deadline = Some(now + Duration::hours(7 * 24));
        assert_eq!(challenge.time_remaining(now).unwrap(), "7d 0h");
        challenge.deadline = Some(now + Duration::minutes(5 * 60 + 12));
        assert_eq!(challenge.time_remaining(now).unwrap(), "5h 12m");
        challenge.deadline = Some(now - Duration::minutes(1));
        assert_eq!(challenge.time_remaining(now).unwrap(), "expired");
    }

    #[test]
    fn reward_serialization() {
        let json = serde_json::to_string(&Reward::Points(500)).unwrap();
        assert_eq!(json, r#"{"points":500}"#);
        let reward: Reward = serde_json::from_str(r#"{"badge":"Green Mobility"}"#).unwrap();
        assert_eq!(reward, Reward::Badge("Green Mobility".to_owned()));
        assert_eq!(Reward::Unlock("New buildings".to_owned()).describe(), "New buildings");
    }

    #[test]
    fn partial_record() {
        let challenge: Challenge =
            serde_json::from_str(r#"{"id": "9", "title": "Walk", "progress": 2}"#).unwrap();
        assert_eq!(challenge.id, "9");
        assert_eq!(challenge.progress, 2);
        assert_eq!(challenge.kind, ChallengeKind::Daily);
        assert_eq!(challenge.difficulty, Difficulty::Medium);
        assert_eq!(challenge.reward, Reward::Points(0));
        assert!(!challenge.completed);
    }

    #[test]
    fn fraction() {
        let mut challenge = challenge();
        challenge.progress = 15;
        assert!(challenge.is_reached());
        assert_eq!(challenge.fraction(), 1.0);
        challenge.target = 0;
        assert_eq!(challenge.fraction(), 1.0);
    }
}
