use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;

use crate::{
    challenge::{Challenge, ChallengeKind, Difficulty, Reward},
    daily_action::{ActionCategory, DailyAction},
    decision::{Decision, DecisionCategory, DecisionOption},
    simulation::Dice,
    stats::{CityStat, Impact},
    tip::{filter_by_category, ImpactLevel, Tip, TipCategory},
};

pub const INITIAL_POINTS: u64 = 750;
pub const INITIAL_BUDGET: u32 = 1000;
pub const INITIAL_BADGES: [&str; 2] = ["Eco Beginner", "First Steps"];

fn action(
    id: &str,
    title: &str,
    description: &str,
    category: ActionCategory,
    impact: Impact,
) -> DailyAction {
    DailyAction {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        impact,
        completed: false,
        streak: 0,
        last_completed: None,
    }
}

pub fn default_actions() -> Vec<DailyAction> {
    vec![
        action(
            "1",
            "Use my reusable bottle",
            "Avoid buying plastic bottles today",
            ActionCategory::Plastic,
            Impact {
                plastic_reduction: Some(5.0),
                co2_saved: 0.1,
                money_saved: 2.0,
                eco_score: 3.0,
                ..Impact::default()
            },
        ),
        action(
            "2",
            "Take a shower of 5 minutes max",
            "Limit my hot water consumption",
            ActionCategory::Water,
            Impact {
                water_saving: Some(8.0),
                energy_saving: Some(3.0),
                co2_saved: 0.8,
                money_saved: 1.5,
                eco_score: 4.0,
                ..Impact::default()
            },
        ),
        action(
            "3",
            "Unplug my devices on standby",
            "Switch off TV, computer and chargers completely",
            ActionCategory::Energy,
            Impact {
                energy_saving: Some(5.0),
                co2_saved: 0.5,
                money_saved: 1.0,
                eco_score: 2.0,
                ..Impact::default()
            },
        ),
        action(
            "4",
            "Use my reusable bags",
            "Do my shopping without plastic bags",
            ActionCategory::Plastic,
            Impact {
                plastic_reduction: Some(3.0),
                co2_saved: 0.2,
                money_saved: 0.5,
                eco_score: 2.0,
                ..Impact::default()
            },
        ),
        action(
            "5",
            "Sort my waste properly",
            "Separate recyclables, compost and household waste",
            ActionCategory::Waste,
            Impact {
                waste_reduction: Some(10.0),
                co2_saved: 0.3,
                money_saved: 0.8,
                eco_score: 3.0,
                ..Impact::default()
            },
        ),
    ]
}

pub fn default_challenges(now: DateTime<Utc>) -> Vec<Challenge> {
    vec![
        Challenge {
            id: "1".to_owned(),
            title: "Plastic Reducer".to_owned(),
            description: "Reduce your city's plastic use by 15%".to_owned(),
            kind: ChallengeKind::Daily,
            progress: 8,
            target: 15,
            reward: Reward::Badge("Ocean Guardian".to_owned()),
            difficulty: Difficulty::Medium,
            deadline: Some(now + Duration::days(1)),
            completed: false,
        },
        Challenge {
            id: "2".to_owned(),
            title: "Recycling Master".to_owned(),
            description: "Reach 80% efficiency in waste management".to_owned(),
            kind: ChallengeKind::Weekly,
            progress: 65,
            target: 80,
            reward: Reward::Points(500),
            difficulty: Difficulty::Hard,
            deadline: Some(now + Duration::days(7)),
            completed: false,
        },
        Challenge {
            id: "3".to_owned(),
            title: "Green City".to_owned(),
            description: "Keep an eco score above 70".to_owned(),
            kind: ChallengeKind::Achievement,
            progress: 45,
            target: 70,
            reward: Reward::Unlock("New green buildings".to_owned()),
            difficulty: Difficulty::Hard,
            deadline: None,
            completed: false,
        },
        Challenge {
            id: "4".to_owned(),
            title: "Clean Transport".to_owned(),
            description: "Implement 3 green transport solutions".to_owned(),
            kind: ChallengeKind::Daily,
            progress: 1,
            target: 3,
            reward: Reward::Badge("Green Mobility".to_owned()),
            difficulty: Difficulty::Easy,
            deadline: Some(now + Duration::days(1)),
            completed: false,
        },
    ]
}

lazy_static! {
    pub static ref TIPS: Vec<Tip> = vec![
        Tip {
            id: "1",
            category: TipCategory::Plastic,
            title: "Use a reusable bottle",
            description: "Replace plastic bottles with a reusable bottle. You will avoid 167 plastic bottles a year!",
            impact: ImpactLevel::High,
            difficulty: Difficulty::Easy,
            co2_saved: 23.0,
            money_saved: 120.0,
        },
        Tip {
            id: "2",
            category: TipCategory::Plastic,
            title: "Reusable shopping bags",
            description: "Always keep reusable bags in your car or handbag. No more plastic bags!",
            impact: ImpactLevel::Medium,
            difficulty: Difficulty::Easy,
            co2_saved: 12.0,
            money_saved: 30.0,
        },
        Tip {
            id: "3",
            category: TipCategory::Transport,
            title: "Car sharing and public transport",
            description: "Car-share or take public transport twice a week to significantly reduce your carbon footprint.",
            impact: ImpactLevel::High,
            difficulty: Difficulty::Medium,
            co2_saved: 480.0,
            money_saved: 800.0,
        },
        Tip {
            id: "4",
            category: TipCategory::Home,
            title: "Lower the heating by 1°C",
            description: "Lowering your thermostat by only 1°C can cut your energy consumption by 7%.",
            impact: ImpactLevel::Medium,
            difficulty: Difficulty::Easy,
            co2_saved: 230.0,
            money_saved: 180.0,
        },
        Tip {
            id: "5",
            category: TipCategory::Food,
            title: "Reduce food waste",
            description: "Plan your meals and use your leftovers. Food waste accounts for 8% of global emissions.",
            impact: ImpactLevel::High,
            difficulty: Difficulty::Medium,
            co2_saved: 300.0,
            money_saved: 400.0,
        },
        Tip {
            id: "6",
            category: TipCategory::Plastic,
            title: "Avoid over-packaged products",
            description: "Choose products with less packaging or buy in bulk. Prefer recyclable packaging.",
            impact: ImpactLevel::Medium,
            difficulty: Difficulty::Medium,
            co2_saved: 45.0,
            money_saved: 60.0,
        },
        Tip {
            id: "7",
            category: TipCategory::Home,
            title: "Unplug your devices",
            description: "Devices on standby use up to 10% of your electricity. Unplug them when not in use.",
            impact: ImpactLevel::Medium,
            difficulty: Difficulty::Easy,
            co2_saved: 67.0,
            money_saved: 85.0,
        },
        Tip {
            id: "8",
            category: TipCategory::General,
            title: "Repair instead of throwing away",
            description: "Repair broken things or give them a second life. The circular economy starts at home!",
            impact: ImpactLevel::High,
            difficulty: Difficulty::Medium,
            co2_saved: 150.0,
            money_saved: 250.0,
        },
    ];

    pub static ref DECISIONS: Vec<Decision> = vec![
        Decision {
            id: "1",
            title: "Plastic bag policy",
            description: "How should your city handle plastic bags?",
            category: DecisionCategory::Plastic,
            options: vec![
                DecisionOption {
                    text: "Ban all plastic bags",
                    impact: vec![
                        (CityStat::PlasticUsage, -20.0),
                        (CityStat::Pollution, -15.0),
                        (CityStat::EcoScore, 15.0),
                        (CityStat::Happiness, -5.0),
                    ],
                    cost: 200,
                },
                DecisionOption {
                    text: "Tax plastic bags",
                    impact: vec![
                        (CityStat::PlasticUsage, -10.0),
                        (CityStat::Pollution, -8.0),
                        (CityStat::EcoScore, 8.0),
                    ],
                    cost: 50,
                },
                DecisionOption {
                    text: "Change nothing",
                    impact: vec![
                        (CityStat::PlasticUsage, 5.0),
                        (CityStat::Pollution, 3.0),
                        (CityStat::Happiness, 5.0),
                    ],
                    cost: 0,
                },
            ],
        },
        Decision {
            id: "2",
            title: "Green public transport",
            description: "How should transport in your city improve?",
            category: DecisionCategory::Transport,
            options: vec![
                DecisionOption {
                    text: "Electric buses for the whole city",
                    impact: vec![
                        (CityStat::Pollution, -25.0),
                        (CityStat::EcoScore, 20.0),
                        (CityStat::Happiness, 10.0),
                    ],
                    cost: 500,
                },
                DecisionOption {
                    text: "Extended cycle lanes",
                    impact: vec![
                        (CityStat::Pollution, -15.0),
                        (CityStat::EcoScore, 12.0),
                        (CityStat::Happiness, 8.0),
                    ],
                    cost: 300,
                },
                DecisionOption {
                    text: "Keep the current system",
                    impact: vec![(CityStat::Pollution, 2.0), (CityStat::Happiness, -3.0)],
                    cost: 0,
                },
            ],
        },
        Decision {
            id: "3",
            title: "Recycling centre",
            description: "What should be done to improve waste management?",
            category: DecisionCategory::Waste,
            options: vec![
                DecisionOption {
                    text: "Build a modern sorting centre",
                    impact: vec![
                        (CityStat::WasteManagement, 30.0),
                        (CityStat::EcoScore, 15.0),
                        (CityStat::Pollution, -10.0),
                    ],
                    cost: 400,
                },
                DecisionOption {
                    text: "Community composting programme",
                    impact: vec![
                        (CityStat::WasteManagement, 15.0),
                        (CityStat::Biodiversity, 10.0),
                        (CityStat::EcoScore, 12.0),
                    ],
                    cost: 150,
                },
                DecisionOption {
                    text: "Carry on with the current system",
                    impact: vec![(CityStat::Pollution, 3.0), (CityStat::WasteManagement, -5.0)],
                    cost: 0,
                },
            ],
        },
        Decision {
            id: "4",
            title: "Street lighting",
            description: "How should the city light its streets at night?",
            category: DecisionCategory::Energy,
            options: vec![
                DecisionOption {
                    text: "Solar powered LED lamps",
                    impact: vec![
                        (CityStat::Pollution, -10.0),
                        (CityStat::EcoScore, 12.0),
                        (CityStat::Biodiversity, 5.0),
                    ],
                    cost: 350,
                },
                DecisionOption {
                    text: "Dim the lights after midnight",
                    impact: vec![(CityStat::EcoScore, 5.0), (CityStat::Happiness, -2.0)],
                    cost: 20,
                },
                DecisionOption {
                    text: "Leave the lights as they are",
                    impact: vec![(CityStat::Pollution, 1.0)],
                    cost: 0,
                },
            ],
        },
    ];
}

pub fn find_decision(decision_id: &str) -> Option<&'static Decision> {
    DECISIONS.iter().find(|decision| decision.id == decision_id)
}

pub fn find_tip(tip_id: &str) -> Option<&'static Tip> {
    TIPS.iter().find(|tip| tip.id == tip_id)
}

pub fn random_tip(category: Option<TipCategory>, dice: &mut dyn Dice) -> Option<&'static Tip> {
    let candidates = filter_by_category(&TIPS, category);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[dice.pick(candidates.len())])
}

pub fn random_decision(dice: &mut dyn Dice) -> &'static Decision {
    &DECISIONS[dice.pick(DECISIONS.len())]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use itertools::Itertools;

    use super::{
        default_actions, default_challenges, find_decision, random_tip, DECISIONS, TIPS,
    };
    use crate::{simulation::tests::ScriptedDice, tip::TipCategory};

    #[test]
    fn ids_are_unique() {
        assert!(default_actions().iter().map(|action| &action.id).all_unique());
        let now = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!(default_challenges(now).iter().map(|c| &c.id).all_unique());
        assert!(TIPS.iter().map(|tip| tip.id).all_unique());
        assert!(DECISIONS.iter().map(|decision| decision.id).all_unique());
    }

    #[test]
    fn decisions_have_two_or_three_options() {
        for decision in DECISIONS.iter() {
            assert!((2..=3).contains(&decision.options.len()));
        }
        assert_eq!(find_decision("2").unwrap().options[0].cost, 500);
        assert!(find_decision("42").is_none());
    }

    #[test]
    fn random_tip_respects_category() {
        let mut dice = ScriptedDice::new(&[], &[1]);
        let tip = random_tip(Some(TipCategory::Home), &mut dice).unwrap();
        assert_eq!(tip.id, "7");
    }
}
