pub mod command;
pub mod response_handling;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use std::time::Duration;
use tokio::{
    io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader},
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};

use self::{command::Command, response_handling::render_response};
use crate::{
    action::{Action, View},
    action_handling::perform_action,
    app::App,
    config::Config,
    database::Database,
    response::Response,
    simulation::RandomDice,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

#[tokio::main(flavor = "current_thread")]
pub async fn run_shell(config: Config) -> Result<()> {
    log::info!("Starting ecoquest with database {}", config.db_path.display());

    let database = Database::open(&config.db_path)?;
    let dice = match config.seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::new(),
    };
    let mut app = App::new(database, Box::new(dice), &config, Utc::now())?;
    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    let response = perform_action(&mut app, &Action::CheckDailyReset, today());
    write_response(&mut stdout, &app, &response).await?;
    write_text(&mut stdout, "EcoLife Quest. Type help for the list of commands.").await?;

    let mut challenge_timer = timer(config.challenge_tick);
    let mut budget_timer = timer(config.budget_tick);
    let mut reset_timer = timer(config.reset_check);
    let mut tip_timer = timer(config.tip_rotation);

    loop {
        let action = tokio::select! {
            line = lines.next_line() => {
                match line.context("While reading from stdin")? {
                    None => break,
                    Some(line) => match convert_line_to_action(&line) {
                        Some(action) => action,
                        None => break,
                    },
                }
            }
            _ = challenge_timer.tick() => Action::SimulateChallengeProgress,
            _ = budget_timer.tick() => Action::AccrueBudget,
            _ = reset_timer.tick() => Action::CheckDailyReset,
            _ = tip_timer.tick() => Action::RotateTip,
        };
        let response = perform_action(&mut app, &action, today());
        write_response(&mut stdout, &app, &response).await?;
    }

    log::info!("Stopping ecoquest");
    Ok(())
}

/// `None` means the user asked to leave.
fn convert_line_to_action(line: &str) -> Option<Action> {
    if line.trim().is_empty() {
        return Some(Action::Nothing);
    }
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(err) => return Some(Action::ErrorMessage(format!("Error: {:#}", err))),
    };
    let action = match command {
        Command::Help => Action::SendHelp,
        Command::Status => Action::Show(View::Status),
        Command::Actions => Action::Show(View::Actions),
        Command::Do { action_id } => Action::CompleteAction(action_id),
        Command::Challenges { kind } => Action::Show(View::Challenges(kind)),
        Command::Progress {
            challenge_id,
            value,
        } => Action::UpdateChallengeProgress(challenge_id, value),
        Command::City => Action::Show(View::City),
        Command::Choose { option } => Action::MakeDecision(option - 1),
        Command::Tips { category } => Action::BrowseTips(category),
        Command::Tip => Action::Show(View::FeaturedTip),
        Command::Fav { tip_id } => Action::ToggleFavoriteTip(tip_id),
        Command::Badges => Action::Show(View::Badges),
        Command::Reset => Action::ResetDailyActions,
        Command::Quit => return None,
    };
    Some(action)
}

async fn write_text(stdout: &mut io::Stdout, text: &str) -> Result<()> {
    stdout
        .write_all(format!("{}\n", text).as_bytes())
        .await
        .context("While writing to stdout")?;
    stdout.flush().await.context("While writing to stdout")?;
    Ok(())
}

async fn write_response(stdout: &mut io::Stdout, app: &App, response: &Response) -> Result<()> {
    match render_response(response, app, Utc::now()) {
        Some(text) => write_text(stdout, &text).await,
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::convert_line_to_action;
    use crate::action::{Action, View};

    #[test]
    fn lines_to_actions() {
        assert_eq!(convert_line_to_action("   "), Some(Action::Nothing));
        assert_eq!(
            convert_line_to_action("choose 1"),
            Some(Action::MakeDecision(0))
        );
        assert_eq!(
            convert_line_to_action("do 2"),
            Some(Action::CompleteAction("2".to_owned()))
        );
        assert_eq!(
            convert_line_to_action("status"),
            Some(Action::Show(View::Status))
        );
        assert_eq!(convert_line_to_action("quit"), None);
        assert!(matches!(
            convert_line_to_action("fly"),
            Some(Action::ErrorMessage(_))
        ));
    }
}
