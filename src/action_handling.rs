use anyhow::Result;
use chrono::NaiveDate;
use itertools::Itertools;

use crate::{
    action::{Action, View},
    app::App,
    challenge::Reward,
    database::key::Key,
    response::Response,
    simulation,
    state::{ChallengeProgress, DecisionOutcome},
    tip::TipCategory,
};

pub fn perform_action(app: &mut App, action: &Action, today: NaiveDate) -> Response {
    let mb_response = match action {
        Action::CompleteAction(action_id) => complete_action(app, action_id, today),
        Action::UpdateChallengeProgress(challenge_id, progress) => {
            update_challenge_progress(app, challenge_id, *progress)
        }
        Action::MakeDecision(option_index) => make_decision(app, *option_index),
        Action::ToggleFavoriteTip(tip_id) => toggle_favorite_tip(app, tip_id),
        Action::BrowseTips(category) => browse_tips(app, *category),
        Action::ResetDailyActions => reset_daily_actions(app),
        Action::Show(view) => Ok(Response::Show(*view)),
        Action::SimulateChallengeProgress => simulate_challenge_progress(app),
        Action::AccrueBudget => accrue_budget(app),
        Action::CheckDailyReset => check_daily_reset(app, today),
        Action::RotateTip => {
            app.rotate_tip();
            Ok(Response::Nothing)
        }
        Action::SendHelp => Ok(Response::SendHelp),
        Action::ErrorMessage(message_text) => reply(message_text),
        Action::Nothing => Ok(Response::Nothing),
    };
    mb_response.unwrap_or_else(|err| Response::Reply(format!("Error: {:#}", err)))
}

fn reply(message_text: &str) -> Result<Response> {
    Ok(Response::Reply(message_text.to_string()))
}

fn save(app: &App, keys: &[Key]) -> Result<()> {
    for key in keys {
        app.state.save(&app.database, *key)?;
    }
    Ok(())
}

fn complete_action(app: &mut App, action_id: &str, today: NaiveDate) -> Result<Response> {
    let completion = match app.state.complete_action(action_id, today) {
        Some(completion) => completion,
        None => return Ok(Response::Nothing),
    };
    save(app, &[Key::Actions, Key::PersonalStats, Key::Achievements])?;
    log::info!("Completed action {} (streak {})", action_id, completion.streak);
    let mut text = completion.feedback;
    if let Some(achievement) = completion.achievement {
        text.push_str(&format!("\nAchievement unlocked: {}", achievement));
    }
    Ok(Response::Reply(text))
}

fn update_challenge_progress(app: &mut App, challenge_id: &str, progress: u32) -> Result<Response> {
    match app.state.update_challenge_progress(challenge_id, progress) {
        Some(progress) => challenge_progress_response(app, challenge_id, progress),
        None => Ok(Response::Nothing),
    }
}

fn challenge_progress_response(
    app: &App,
    challenge_id: &str,
    progress: ChallengeProgress,
) -> Result<Response> {
    match progress {
        ChallengeProgress::Advanced { progress, target } => {
            save(app, &[Key::Challenges])?;
            Ok(Response::Reply(format!(
                "Challenge {}: {}/{}",
                challenge_id, progress, target
            )))
        }
        ChallengeProgress::Completed(reward) => {
            let reward_key = match reward {
                Reward::Points(_) => Key::Points,
                Reward::Badge(_) => Key::Badges,
                Reward::Unlock(_) => Key::Unlocks,
            };
            save(app, &[Key::Challenges, reward_key])?;
            log::info!("Challenge {} completed", challenge_id);
            Ok(Response::Reply(format!(
                "Challenge {} completed! Reward: {}",
                challenge_id,
                reward.describe()
            )))
        }
    }
}

fn make_decision(app: &mut App, option_index: usize) -> Result<Response> {
    let decision = match app.state.current_decision() {
        Some(decision) => decision,
        None => return Ok(Response::Nothing),
    };
    match app.state.handle_decision(decision, option_index) {
        DecisionOutcome::Ignored => Ok(Response::Nothing),
        DecisionOutcome::InsufficientBudget(message) => Ok(Response::Reply(message)),
        DecisionOutcome::Applied {
            feedback,
            achievements,
        } => {
            let next = simulation::next_decision(app.dice.as_mut());
            app.state.city.current_decision = Some(next.id.to_owned());
            save(app, &[Key::City])?;
            log::info!(
                "Decision {} resolved with option {}, budget left {}",
                decision.id,
                option_index + 1,
                app.state.city.budget
            );
            let mut text = feedback;
            if !achievements.is_empty() {
                text.push_str(&format!(
                    "\nAchievements unlocked: {}",
                    achievements.iter().join(", ")
                ));
            }
            Ok(Response::Reply(text))
        }
    }
}

fn toggle_favorite_tip(app: &mut App, tip_id: &str) -> Result<Response> {
    let is_favorite = match app.state.toggle_favorite_tip(tip_id) {
        Some(is_favorite) => is_favorite,
        None => return Ok(Response::Nothing),
    };
    save(app, &[Key::FavoriteTips])?;
    Ok(Response::Reply(if is_favorite {
        format!("Tip {} added to favorites.", tip_id)
    } else {
        format!("Tip {} removed from favorites.", tip_id)
    }))
}

fn browse_tips(app: &mut App, category: Option<TipCategory>) -> Result<Response> {
    app.tip_category = category;
    app.rotate_tip();
    Ok(Response::Show(View::Tips))
}

fn reset_daily_actions(app: &mut App) -> Result<Response> {
    app.state.reset_daily_actions();
    save(app, &[Key::Actions])?;
    reply("Daily actions reset.")
}

fn simulate_challenge_progress(app: &mut App) -> Result<Response> {
    let simulated = match simulation::challenge_tick(&mut app.state, app.dice.as_mut()) {
        Some(simulated) => simulated,
        None => return Ok(Response::Nothing),
    };
    challenge_progress_response(app, &simulated.challenge_id, simulated.progress)
}

fn accrue_budget(app: &mut App) -> Result<Response> {
    let budget = simulation::budget_tick(&mut app.state, app.budget_increment);
    save(app, &[Key::City])?;
    log::debug!("Budget is now {}", budget);
    Ok(Response::Nothing)
}

fn check_daily_reset(app: &mut App, today: NaiveDate) -> Result<Response> {
    if !simulation::daily_reset_tick(&mut app.state, today) {
        return Ok(Response::Nothing);
    }
    save(app, &[Key::Actions, Key::LastReset])?;
    reply("A new day begins: your daily actions are available again.")
}
