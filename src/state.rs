use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    catalog,
    challenge::{Challenge, Reward},
    daily_action::DailyAction,
    database::{
        key::{Key, ALL_KEYS},
        Database,
    },
    decision::{self, Decision, INSUFFICIENT_BUDGET},
    stats::{CityStats, PersonalStats},
    streak::{is_new_day, next_streak, STREAK_ACHIEVEMENT_DAYS},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub stats: CityStats,
    pub budget: u32,
    pub current_decision: Option<String>,
    pub achievements: Vec<String>,
}

impl Default for City {
    fn default() -> Self {
        City {
            stats: CityStats::default(),
            budget: catalog::INITIAL_BUDGET,
            current_decision: first_decision_id(),
            achievements: vec![],
        }
    }
}

fn first_decision_id() -> Option<String> {
    catalog::DECISIONS.first().map(|decision| decision.id.to_owned())
}

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub completed_actions: usize,
    pub total_actions: usize,
    pub points: u64,
    pub badges: usize,
    pub budget: u32,
    pub co2_saved: f64,
    pub money_saved: f64,
}

#[derive(Debug, PartialEq)]
pub struct ActionCompletion {
    pub feedback: String,
    pub streak: u32,
    pub achievement: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum ChallengeProgress {
    Advanced { progress: u32, target: u32 },
    Completed(Reward),
}

#[derive(Debug, PartialEq)]
pub enum DecisionOutcome {
    Ignored,
    InsufficientBudget(String),
    Applied {
        feedback: String,
        achievements: Vec<String>,
    },
}

/// Everything the application tracks. Owned by the shell loop and mutated
/// only through the methods below.
#[derive(Clone, Debug, PartialEq)]
pub struct EcoState {
    pub actions: Vec<DailyAction>,
    pub challenges: Vec<Challenge>,
    pub personal_stats: PersonalStats,
    pub points: u64,
    pub badges: Vec<String>,
    pub unlocks: Vec<String>,
    pub achievements: Vec<String>,
    pub city: City,
    pub favorite_tips: Vec<String>,
    pub last_reset: Option<NaiveDate>,
}

impl EcoState {
    pub fn new(now: DateTime<Utc>) -> EcoState {
        EcoState {
            actions: catalog::default_actions(),
            challenges: catalog::default_challenges(now),
            personal_stats: PersonalStats::default(),
            points: catalog::INITIAL_POINTS,
            badges: catalog::INITIAL_BADGES
                .iter()
                .map(|badge| badge.to_string())
                .collect(),
            unlocks: vec![],
            achievements: vec![],
            city: City::default(),
            favorite_tips: vec![],
            last_reset: None,
        }
    }

    pub fn load(database: &Database, now: DateTime<Utc>) -> EcoState {
        let defaults = EcoState::new(now);
        let mut state = EcoState {
            actions: database.load(Key::Actions, defaults.actions),
            challenges: database.load(Key::Challenges, defaults.challenges),
            personal_stats: database.load(Key::PersonalStats, defaults.personal_stats),
            points: database.load(Key::Points, defaults.points),
            badges: database.load(Key::Badges, defaults.badges),
            unlocks: database.load(Key::Unlocks, defaults.unlocks),
            achievements: database.load(Key::Achievements, defaults.achievements),
            city: database.load(Key::City, defaults.city),
            favorite_tips: database.load(Key::FavoriteTips, defaults.favorite_tips),
            last_reset: database.load(Key::LastReset, defaults.last_reset),
        };
        if state.current_decision().is_none() {
            log::warn!(
                "Stored decision {:?} is unknown, starting over",
                state.city.current_decision
            );
            state.city.current_decision = first_decision_id();
        }
        state
    }

    pub fn save(&self, database: &Database, key: Key) -> Result<()> {
        match key {
            Key::Actions => database.save(key, &self.actions),
            Key::Challenges => database.save(key, &self.challenges),
            Key::PersonalStats => database.save(key, &self.personal_stats),
            Key::Points => database.save(key, &self.points),
            Key::Badges => database.save(key, &self.badges),
            Key::Unlocks => database.save(key, &self.unlocks),
            Key::Achievements => database.save(key, &self.achievements),
            Key::City => database.save(key, &self.city),
            Key::FavoriteTips => database.save(key, &self.favorite_tips),
            Key::LastReset => database.save(key, &self.last_reset),
        }
    }

    pub fn save_all(&self, database: &Database) -> Result<()> {
        for key in ALL_KEYS.iter() {
            self.save(database, *key)?;
        }
        Ok(())
    }

    pub fn complete_action(&mut self, action_id: &str, today: NaiveDate) -> Option<ActionCompletion> {
        let action = self
            .actions
            .iter_mut()
            .find(|action| action.id == action_id && !action.completed)?;
        action.completed = true;
        action.streak = next_streak(action.streak, action.last_completed, today);
        action.last_completed = Some(today);
        self.personal_stats.apply(&action.impact);

        let mut achievement = None;
        if action.streak == STREAK_ACHIEVEMENT_DAYS {
            let name = action.streak_achievement();
            if !self.achievements.contains(&name) {
                self.achievements.push(name.clone());
                achievement = Some(name);
            }
        }
        Some(ActionCompletion {
            feedback: action.completion_feedback(),
            streak: action.streak,
            achievement,
        })
    }

    pub fn completed_today(&self) -> usize {
        self.actions.iter().filter(|action| action.completed).count()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            completed_actions: self.completed_today(),
            total_actions: self.actions.len(),
            points: self.points,
            badges: self.badges.len(),
            budget: self.city.budget,
            co2_saved: self.personal_stats.co2_saved,
            money_saved: self.personal_stats.money_saved,
        }
    }

    /// Sets the progress of a challenge, clamped to its target. Completed
    /// challenges stay untouched, so the reward is applied at most once.
    pub fn update_challenge_progress(
        &mut self,
        challenge_id: &str,
        new_progress: u32,
    ) -> Option<ChallengeProgress> {
        let challenge = self
            .challenges
            .iter_mut()
            .find(|challenge| challenge.id == challenge_id && !challenge.completed)?;
        challenge.progress = new_progress.min(challenge.target);
        if !challenge.is_reached() {
            return Some(ChallengeProgress::Advanced {
                progress: challenge.progress,
                target: challenge.target,
            });
        }
        challenge.completed = true;
        let reward = challenge.reward.clone();
        self.apply_reward(&reward);
        Some(ChallengeProgress::Completed(reward))
    }

    fn apply_reward(&mut self, reward: &Reward) {
        match reward {
            Reward::Points(amount) => self.points += amount,
            Reward::Badge(name) => {
                if !self.badges.contains(name) {
                    self.badges.push(name.clone());
                }
            }
            Reward::Unlock(description) => self.unlocks.push(description.clone()),
        }
    }

    pub fn reset_daily_actions(&mut self) {
        for action in self.actions.iter_mut() {
            action.completed = false;
        }
    }

    /// Resets the daily actions once per calendar day. Returns whether a
    /// reset happened.
    pub fn check_daily_reset(&mut self, today: NaiveDate) -> bool {
        if !is_new_day(self.last_reset, today) {
            return false;
        }
        self.reset_daily_actions();
        self.last_reset = Some(today);
        true
    }

    pub fn current_decision(&self) -> Option<&'static Decision> {
        self.city
            .current_decision
            .as_deref()
            .and_then(catalog::find_decision)
    }

    pub fn handle_decision(&mut self, decision: &Decision, option_index: usize) -> DecisionOutcome {
        let option = match decision.options.get(option_index) {
            Some(option) => option,
            None => return DecisionOutcome::Ignored,
        };
        if self.city.budget < option.cost {
            return DecisionOutcome::InsufficientBudget(INSUFFICIENT_BUDGET.to_owned());
        }
        self.city.budget -= option.cost;
        self.city.stats.apply(&option.impact);
        let achievements =
            decision::newly_reached_achievements(&self.city.stats, &self.city.achievements);
        self.city.achievements.extend(achievements.iter().cloned());
        DecisionOutcome::Applied {
            feedback: decision::feedback_for(decision.category, option_index).to_owned(),
            achievements,
        }
    }

    pub fn add_budget(&mut self, amount: u32) {
        self.city.budget = self.city.budget.saturating_add(amount);
    }

    /// Adds or removes a tip from the favourites. Returns whether it is a
    /// favourite afterwards.
    pub fn toggle_favorite_tip(&mut self, tip_id: &str) -> Option<bool> {
        catalog::find_tip(tip_id)?;
        match self.favorite_tips.iter().position(|id| id == tip_id) {
            Some(index) => {
                self.favorite_tips.remove(index);
                Some(false)
            }
            None => {
                self.favorite_tips.push(tip_id.to_owned());
                Some(true)
            }
        }
    }
}
