use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::{
    config::Config,
    database::Database,
    simulation::{self, Dice},
    state::EcoState,
    tip::{Tip, TipCategory},
};

/// The root controller: application state plus everything needed to
/// mutate and persist it.
pub struct App {
    pub state: EcoState,
    pub database: Database,
    pub dice: Box<dyn Dice>,
    pub budget_increment: u32,
    pub tip_category: Option<TipCategory>,
    pub featured_tip: Option<&'static Tip>,
}

impl App {
    /// Loads the stored state and writes it straight back, so a fresh
    /// database starts out holding the seed data.
    pub fn new(
        database: Database,
        dice: Box<dyn Dice>,
        config: &Config,
        now: DateTime<Utc>,
    ) -> Result<App> {
        let state = EcoState::load(&database, now);
        state
            .save_all(&database)
            .context("While writing initial state")?;
        let mut app = App {
            state,
            database,
            dice,
            budget_increment: config.budget_increment,
            tip_category: None,
            featured_tip: None,
        };
        app.rotate_tip();
        Ok(app)
    }

    pub fn rotate_tip(&mut self) {
        self.featured_tip = simulation::tip_tick(self.tip_category, self.dice.as_mut());
    }
}
