use crate::stats::{CityStat, CityStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionCategory {
    Plastic,
    Transport,
    Waste,
    Energy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecisionOption {
    pub text: &'static str,
    pub impact: Vec<(CityStat, f64)>,
    pub cost: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: DecisionCategory,
    pub options: Vec<DecisionOption>,
}

pub const INSUFFICIENT_BUDGET: &str = "Insufficient budget for this action!";
const DEFAULT_FEEDBACK: &str = "Decision made!";

const PLASTIC_FEEDBACK: [&str; 3] = [
    "Excellent decision! Cutting plastic protects our oceans and wildlife.",
    "A good compromise that raises awareness without being too restrictive.",
    "This decision could harm the environment in the long run.",
];

const TRANSPORT_FEEDBACK: [&str; 3] = [
    "Great! Electric transport drastically reduces emissions.",
    "Cycle lanes encourage a healthy and green way of life.",
    "Missing this chance to improve air quality is a pity.",
];

const WASTE_FEEDBACK: [&str; 3] = [
    "Investing in modern recycling is key to a circular economy.",
    "Community composting strengthens social ties and reduces waste.",
    "Without better waste management, things will get worse.",
];

pub fn feedback_for(category: DecisionCategory, option_index: usize) -> &'static str {
    let feedbacks: &[&str] = match category {
        DecisionCategory::Plastic => &PLASTIC_FEEDBACK,
        DecisionCategory::Transport => &TRANSPORT_FEEDBACK,
        DecisionCategory::Waste => &WASTE_FEEDBACK,
        DecisionCategory::Energy => &[],
    };
    feedbacks.get(option_index).copied().unwrap_or(DEFAULT_FEEDBACK)
}

struct Threshold {
    name: &'static str,
    reached: fn(&CityStats) -> bool,
}

const CITY_ACHIEVEMENTS: [Threshold; 3] = [
    Threshold {
        name: "Green City",
        reached: |stats| stats.eco_score >= 70.0,
    },
    Threshold {
        name: "Zero Plastic",
        reached: |stats| stats.plastic_usage <= 30.0,
    },
    Threshold {
        name: "Clean Air",
        reached: |stats| stats.pollution <= 20.0,
    },
];

/// Achievements reached by `stats` that are not in `unlocked` yet.
pub fn newly_reached_achievements(stats: &CityStats, unlocked: &[String]) -> Vec<String> {
    CITY_ACHIEVEMENTS
        .iter()
        .filter(|threshold| (threshold.reached)(stats))
        .filter(|threshold| !unlocked.iter().any(|name| name == threshold.name))
        .map(|threshold| threshold.name.to_owned())
        .collect()
}
