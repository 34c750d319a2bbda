use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stats::Impact;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Plastic,
    Water,
    Energy,
    Waste,
    Transport,
    #[default]
    Other,
}

impl ActionCategory {
    pub fn to_string(&self) -> String {
        match self {
            ActionCategory::Plastic => "plastic",
            ActionCategory::Water => "water",
            ActionCategory::Energy => "energy",
            ActionCategory::Waste => "waste",
            ActionCategory::Transport => "transport",
            ActionCategory::Other => "other",
        }
        .to_owned()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyAction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ActionCategory,
    pub impact: Impact,
    pub completed: bool,
    pub streak: u32,
    pub last_completed: Option<NaiveDate>,
}

impl DailyAction {
    pub fn completion_feedback(&self) -> String {
        format!(
            "Well done! You saved {}kg of CO2 and {}€!",
            self.impact.co2_saved, self.impact.money_saved
        )
    }

    pub fn streak_achievement(&self) -> String {
        format!("{} - 7 days in a row!", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionCategory, DailyAction};
    use crate::stats::Impact;

    #[test]
    fn feedback_embeds_savings() {
        let action = DailyAction {
            id: "1".to_owned(),
            title: "Use my reusable bottle".to_owned(),
            description: String::new(),
            category: ActionCategory::Plastic,
            impact: Impact {
                co2_saved: 0.1,
                money_saved: 2.0,
                eco_score: 3.0,
                ..Impact::default()
            },
            completed: false,
            streak: 0,
            last_completed: None,
        };
        assert_eq!(
            action.completion_feedback(),
            "Well done! You saved 0.1kg of CO2 and 2€!"
        );
        assert_eq!(
            action.streak_achievement(),
            "Use my reusable bottle - 7 days in a row!"
        );
    }

    #[test]
    fn category_names() {
        assert_eq!(ActionCategory::Transport.to_string(), "transport");
        assert_eq!(ActionCategory::Water.to_string(), "water");
    }

    #[test]
    fn partial_record() {
        let action: DailyAction =
            serde_json::from_str(r#"{"id": "7", "title": "Walk", "streak": 4}"#).unwrap();
        assert_eq!(action.streak, 4);
        assert_eq!(action.category, ActionCategory::Other);
        assert_eq!(action.impact, Impact::default());
        assert_eq!(action.last_completed, None);
    }
}
