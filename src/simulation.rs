use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    catalog,
    decision::Decision,
    state::{ChallengeProgress, EcoState},
    tip::{Tip, TipCategory},
};

/// Share of challenge ticks that advance a challenge.
pub const SIMULATION_CHANCE: f64 = 0.3;
pub const MIN_INCREMENT: u32 = 1;
pub const MAX_INCREMENT: u32 = 5;

/// Source of randomness for the simulated events.
pub trait Dice {
    /// Uniform in [0, 1).
    fn roll(&mut self) -> f64;
    /// Uniform index in [0, len). `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
    /// Uniform in [low, high].
    fn between(&mut self, low: u32, high: u32) -> u32;
}

pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    pub fn new() -> RandomDice {
        RandomDice {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> RandomDice {
        RandomDice {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        RandomDice::new()
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> f64 {
        self.rng.random()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

#[derive(Debug, PartialEq)]
pub struct SimulatedProgress {
    pub challenge_id: String,
    pub progress: ChallengeProgress,
}

/// Maybe advances one incomplete challenge by a small random amount.
pub fn challenge_tick(state: &mut EcoState, dice: &mut dyn Dice) -> Option<SimulatedProgress> {
    if dice.roll() >= SIMULATION_CHANCE {
        return None;
    }
    let candidates: Vec<(String, u32)> = state
        .challenges
        .iter()
        .filter(|challenge| !challenge.completed)
        .map(|challenge| (challenge.id.clone(), challenge.progress))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let (challenge_id, progress) = &candidates[dice.pick(candidates.len())];
    let increment = dice.between(MIN_INCREMENT, MAX_INCREMENT);
    log::debug!("Simulated +{} on challenge {}", increment, challenge_id);
    let progress = state.update_challenge_progress(challenge_id, progress + increment)?;
    Some(SimulatedProgress {
        challenge_id: challenge_id.clone(),
        progress,
    })
}

pub fn budget_tick(state: &mut EcoState, amount: u32) -> u32 {
    state.add_budget(amount);
    state.city.budget
}

/// Next featured tip, drawn from `category` or from every tip.
pub fn tip_tick(category: Option<TipCategory>, dice: &mut dyn Dice) -> Option<&'static Tip> {
    catalog::random_tip(category, dice)
}

/// Decision to put to the city once the current one is resolved.
pub fn next_decision(dice: &mut dyn Dice) -> &'static Decision {
    catalog::random_decision(dice)
}

pub fn daily_reset_tick(state: &mut EcoState, today: NaiveDate) -> bool {
    let reset = state.check_daily_reset(today);
    if reset {
        log::info!("New day {}, daily actions reset", today);
    }
    reset
}

#[cfg(test)]
pub mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::VecDeque;

    use super::{
        budget_tick, challenge_tick, daily_reset_tick, next_decision, tip_tick, Dice, RandomDice,
    };
    use crate::{
        challenge::Reward,
        state::{ChallengeProgress, EcoState},
        tip::TipCategory,
    };

    /// Plays back fixed values. `between` reuses the integer script.
    pub struct ScriptedDice {
        rolls: VecDeque<f64>,
        integers: VecDeque<usize>,
    }

    impl ScriptedDice {
        pub fn new(rolls: &[f64], integers: &[usize]) -> ScriptedDice {
            ScriptedDice {
                rolls: rolls.iter().copied().collect(),
                integers: integers.iter().copied().collect(),
            }
        }
    }

    impl Dice for ScriptedDice {
        fn roll(&mut self) -> f64 {
            self.rolls.pop_front().unwrap()
        }

        fn pick(&mut self, len: usize) -> usize {
            let value = self.integers.pop_front().unwrap();
            assert!(value < len);
            value
        }

        fn between(&mut self, low: u32, high: u32) -> u32 {
            let value = self.integers.pop_front().unwrap() as u32;
            assert!(low <= value && value <= high);
            value
        }
    }

    fn state() -> EcoState {
        EcoState::new(Utc.with_ymd_and_hms(1970, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn quiet_tick_changes_nothing() {
        let mut state = state();
        let before = state.clone();
        let mut dice = ScriptedDice::new(&[0.3], &[]);
        assert_eq!(challenge_tick(&mut state, &mut dice), None);
        assert_eq!(state, before);
    }

    #[test]
    fn tick_advances_picked_challenge() {
        let mut state = state();
        let mut dice = ScriptedDice::new(&[0.1], &[0, 4]);
        let simulated = challenge_tick(&mut state, &mut dice).unwrap();
        assert_eq!(simulated.challenge_id, "1");
        assert_eq!(
            simulated.progress,
            ChallengeProgress::Advanced {
                progress: 12,
                target: 15
            }
        );
    }

    #[test]
    fn tick_skips_completed_challenges_and_clamps() {
        let mut state = state();
        state.update_challenge_progress("1", 15).unwrap();
        state.update_challenge_progress("2", 80).unwrap();
        // Index 1 among the incomplete ones is challenge "4" at 1/3.
        let mut dice = ScriptedDice::new(&[0.0], &[1, 5]);
        let simulated = challenge_tick(&mut state, &mut dice).unwrap();
        assert_eq!(simulated.challenge_id, "4");
        assert_eq!(
            simulated.progress,
            ChallengeProgress::Completed(Reward::Badge("Green Mobility".to_owned()))
        );
        assert_eq!(state.challenges[3].progress, 3);
    }

    #[test]
    fn tick_without_candidates() {
        let mut state = state();
        for id in &["1", "2", "3", "4"] {
            state.update_challenge_progress(id, 100).unwrap();
        }
        let mut dice = ScriptedDice::new(&[0.0], &[]);
        assert_eq!(challenge_tick(&mut state, &mut dice), None);
    }

    #[test]
    fn random_ticks_keep_invariants() {
        let mut state = state();
        let mut dice = RandomDice::seeded(7);
        for _ in 0..500 {
            challenge_tick(&mut state, &mut dice);
            for challenge in state.challenges.iter() {
                assert!(challenge.progress <= challenge.target);
                assert_eq!(challenge.completed, challenge.is_reached());
            }
        }
        assert!(state.challenges.iter().all(|challenge| challenge.completed));
        assert_eq!(state.points, 750 + 500);
    }

    #[test]
    fn budget_and_reset_ticks() {
        let mut state = state();
        assert_eq!(budget_tick(&mut state, 50), 1050);
        let today = NaiveDate::from_ymd_opt(1970, 01, 01).unwrap();
        assert!(daily_reset_tick(&mut state, today));
        assert!(!daily_reset_tick(&mut state, today));
    }

    #[test]
    fn tip_and_decision_ticks() {
        let mut dice = ScriptedDice::new(&[], &[0, 3]);
        let tip = tip_tick(Some(TipCategory::Food), &mut dice).unwrap();
        assert_eq!(tip.category, TipCategory::Food);
        assert_eq!(next_decision(&mut dice).id, "4");
        let mut dice = RandomDice::default();
        assert!(tip_tick(None, &mut dice).is_some());
    }
}
