use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{
    action::View,
    app::App,
    catalog::TIPS,
    challenge::{Challenge, ChallengeKind},
    response::Response,
    stats::CityStat,
    tip::{filter_by_category, Tip},
};

use super::command::descriptions;

/// Text to print for a response, if any.
pub fn render_response(response: &Response, app: &App, now: DateTime<Utc>) -> Option<String> {
    match response {
        Response::Reply(text) => Some(text.clone()),
        Response::SendHelp => Some(descriptions()),
        Response::Show(view) => Some(render_view(*view, app, now)),
        Response::Nothing => None,
    }
}

fn render_view(view: View, app: &App, now: DateTime<Utc>) -> String {
    match view {
        View::Status => render_status(app),
        View::Actions => render_actions(app),
        View::Challenges(kind) => render_challenges(&app.state.challenges, kind, now),
        View::City => render_city(app),
        View::Badges => render_badges(app),
        View::Tips => render_tips(app),
        View::FeaturedTip => match app.featured_tip {
            Some(tip) => render_tip(tip, app),
            None => "No tip available.".to_owned(),
        },
    }
}

fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.max(0.0).min(1.0) * 20.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

fn render_status(app: &App) -> String {
    let summary = app.state.summary();
    let mut lines = vec![
        format!(
            "{}/{} actions today | {:.1}kg CO2 saved | {:.0}€ saved this month",
            summary.completed_actions,
            summary.total_actions,
            summary.co2_saved,
            summary.money_saved
        ),
        format!(
            "{} points | {} badges | budget {}€",
            summary.points, summary.badges, summary.budget
        ),
    ];
    lines.extend(
        app.state
            .personal_stats
            .percentages()
            .iter()
            .map(|(label, value)| {
                format!("{:<18} {} {:.0}%", label, progress_bar(value / 100.0), value)
            }),
    );
    lines.join("\n")
}

fn render_actions(app: &App) -> String {
    app.state
        .actions
        .iter()
        .map(|action| {
            let mut line = format!(
                "{} {} [{}] {} ({}kg CO2, {}€)",
                if action.completed { "[x]" } else { "[ ]" },
                action.id,
                action.category.to_string(),
                action.title,
                action.impact.co2_saved,
                action.impact.money_saved
            );
            if action.streak > 0 {
                line.push_str(&format!(" streak {} days", action.streak));
            }
            line.push_str(&format!("\n    {}", action.description));
            line
        })
        .join("\n")
}

fn render_challenge(challenge: &Challenge, now: DateTime<Utc>) -> String {
    let mut line = format!(
        "{} {} ({}, {}) {} {}/{} reward: {}",
        challenge.id,
        challenge.title,
        challenge.kind.to_string(),
        challenge.difficulty.to_string(),
        progress_bar(challenge.fraction()),
        challenge.progress,
        challenge.target,
        challenge.reward.describe()
    );
    if let Some(remaining) = challenge.time_remaining(now) {
        line.push_str(&format!(" [{}]", remaining));
    }
    line.push_str(&format!("\n    {}", challenge.description));
    line
}

fn render_challenges(
    challenges: &[Challenge],
    kind: Option<ChallengeKind>,
    now: DateTime<Utc>,
) -> String {
    let (completed, active): (Vec<&Challenge>, Vec<&Challenge>) = challenges
        .iter()
        .filter(|challenge| kind.map_or(true, |kind| challenge.kind == kind))
        .partition(|challenge| challenge.completed);
    let mut text = "Active challenges:".to_owned();
    for challenge in active {
        text.push_str(&format!("\n  {}", render_challenge(challenge, now)));
    }
    text.push_str("\nCompleted challenges:");
    if completed.is_empty() {
        text.push_str("\n  None yet. Keep going!");
    }
    for challenge in completed {
        text.push_str(&format!(
            "\n  {} {} reward: {}",
            challenge.id,
            challenge.title,
            challenge.reward.describe()
        ));
    }
    text
}

fn render_city(app: &App) -> String {
    let city = &app.state.city;
    let mut lines = vec![format!(
        "Budget: {}€ | Population: {:.0}",
        city.budget, city.stats.population
    )];
    lines.extend(
        city.stats
            .all()
            .iter()
            .filter(|(stat, _)| *stat != CityStat::Population)
            .map(|(stat, value)| {
                format!("{:<18} {} {:.0}%", stat.label(), progress_bar(value / 100.0), value)
            }),
    );
    if !city.achievements.is_empty() {
        lines.push(format!("Achievements: {}", city.achievements.iter().join(", ")));
    }
    if let Some(decision) = app.state.current_decision() {
        lines.push(format!("{}: {}", decision.title, decision.description));
        for (index, option) in decision.options.iter().enumerate() {
            let affordable = if city.budget < option.cost {
                " (not enough budget)"
            } else {
                ""
            };
            lines.push(format!(
                "  {}. {} cost {}€{}",
                index + 1,
                option.text,
                option.cost,
                affordable
            ));
        }
    }
    lines.join("\n")
}

fn render_badges(app: &App) -> String {
    let state = &app.state;
    let mut lines = vec![format!("Badges: {}", state.badges.iter().join(", "))];
    if !state.achievements.is_empty() {
        lines.push(format!("Achievements: {}", state.achievements.iter().join(", ")));
    }
    if !state.unlocks.is_empty() {
        lines.push(format!("Unlocked: {}", state.unlocks.iter().join(", ")));
    }
    lines.join("\n")
}

fn render_tip(tip: &Tip, app: &App) -> String {
    let favorite = app.state.favorite_tips.iter().any(|id| id == tip.id);
    format!(
        "{}{} {}\n  {}\n  impact {:?}, difficulty {}, saves {}kg CO2 and {}€ per year",
        if favorite { "* " } else { "" },
        tip.id,
        tip.title,
        tip.description,
        tip.impact,
        tip.difficulty.to_string(),
        tip.co2_saved,
        tip.money_saved
    )
}

fn render_tips(app: &App) -> String {
    let mut text = filter_by_category(&TIPS, app.tip_category)
        .into_iter()
        .sorted_by_key(|tip| {
            !app.state
                .favorite_tips
                .iter()
                .any(|id| id == tip.id)
        })
        .map(|tip| render_tip(tip, app))
        .join("\n");
    if let Some(tip) = app.featured_tip {
        text.push_str(&format!("\nTip of the moment: {}", tip.title));
    }
    text
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{progress_bar, render_response};
    use crate::{
        action::View,
        app::App,
        challenge::ChallengeKind,
        config::Config,
        database::Database,
        response::Response,
        simulation::tests::ScriptedDice,
    };

    fn app() -> App {
        let now = Utc.with_ymd_and_hms(1970, 1, 1, 12, 0, 0).unwrap();
        App::new(
            Database::in_memory().unwrap(),
            Box::new(ScriptedDice::new(&[], &[0])),
            &Config::default(),
            now,
        )
        .unwrap()
    }

    #[test]
    fn bars() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(1.5), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(0.5), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn nothing_prints_nothing() {
        let app = app();
        assert_eq!(render_response(&Response::Nothing, &app, Utc::now()), None);
    }

    #[test]
    fn views() {
        let mut app = app();
        let now = Utc.with_ymd_and_hms(1970, 1, 1, 12, 0, 0).unwrap();
        let status = render_response(&Response::Show(View::Status), &app, now).unwrap();
        assert!(status.starts_with("0/5 actions today"));
        let challenges =
            render_response(&Response::Show(View::Challenges(None)), &app, now).unwrap();
        assert!(challenges.contains("Recycling Master"));
        assert!(challenges.contains("[7d 0h]"));
        assert!(challenges.contains("None yet"));
        let weekly = render_response(
            &Response::Show(View::Challenges(Some(ChallengeKind::Weekly))),
            &app,
            now,
        )
        .unwrap();
        assert!(weekly.contains("Recycling Master"));
        assert!(!weekly.contains("Plastic Reducer"));
        let city = render_response(&Response::Show(View::City), &app, now).unwrap();
        assert!(city.contains("Budget: 1000€"));
        assert!(city.contains("1. Ban all plastic bags cost 200€"));

        app.state.city.budget = 100;
        let city = render_response(&Response::Show(View::City), &app, now).unwrap();
        assert!(city.contains("Ban all plastic bags cost 200€ (not enough budget)"));

        app.state.toggle_favorite_tip("8").unwrap();
        let tips = render_response(&Response::Show(View::Tips), &app, now).unwrap();
        assert!(tips.starts_with("* 8 Repair instead of throwing away"));
        assert!(tips.ends_with("Tip of the moment: Use a reusable bottle"));
    }
}
