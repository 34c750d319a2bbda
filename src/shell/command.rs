use anyhow::{anyhow, Context, Result};
use std::str::FromStr;

use crate::{challenge::ChallengeKind, tip::TipCategory};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Status,
    Actions,
    Do { action_id: String },
    Challenges { kind: Option<ChallengeKind> },
    Progress { challenge_id: String, value: u32 },
    City,
    Choose { option: usize },
    Tips { category: Option<TipCategory> },
    Tip,
    Fav { tip_id: String },
    Badges,
    Reset,
    Quit,
}

const DESCRIPTIONS: [(&str, &str); 14] = [
    ("help", "Display help text."),
    ("status", "Show points, badges and today's progress."),
    ("actions", "List the daily actions."),
    ("do <action-id>", "Complete a daily action."),
    ("challenges [kind]", "List challenges, optionally of one kind."),
    ("progress <challenge-id> <value>", "Set the progress of a challenge."),
    ("city", "Show the city and the pending decision."),
    ("choose <option>", "Pick an option of the pending decision."),
    ("tips [category]", "List tips, optionally of one category."),
    ("tip", "Show the featured tip."),
    ("fav <tip-id>", "Add or remove a tip from the favorites."),
    ("badges", "Show badges and achievements."),
    ("reset", "Reset today's actions."),
    ("quit", "Leave."),
];

pub fn descriptions() -> String {
    let mut text = "These commands are supported:".to_owned();
    for (usage, description) in DESCRIPTIONS.iter() {
        text.push_str(&format!("\n  {:<34}{}", usage, description));
    }
    text
}

fn argument<'a>(args: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<&'a str> {
    args.next().ok_or_else(|| anyhow!("Missing argument: {}", name))
}

impl FromStr for Command {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| anyhow!("Empty command."))?
            .to_lowercase();
        let command = match name.as_str() {
            "help" | "?" => Command::Help,
            "status" => Command::Status,
            "actions" => Command::Actions,
            "do" => Command::Do {
                action_id: argument(&mut words, "action-id")?.to_owned(),
            },
            "challenges" => Command::Challenges {
                kind: match words.next() {
                    None | Some("all") => None,
                    Some(kind) => Some(kind.parse()?),
                },
            },
            "progress" => Command::Progress {
                challenge_id: argument(&mut words, "challenge-id")?.to_owned(),
                value: argument(&mut words, "value")?
                    .parse()
                    .context("Progress must be a non-negative number")?,
            },
            "city" => Command::City,
            "choose" => {
                let option: usize = argument(&mut words, "option")?
                    .parse()
                    .context("Option must be a number")?;
                if option == 0 {
                    return Err(anyhow!("Options are numbered from 1."));
                }
                Command::Choose { option }
            }
            "tips" => Command::Tips {
                category: match words.next() {
                    None | Some("all") => None,
                    Some(category) => Some(category.parse()?),
                },
            },
            "tip" => Command::Tip,
            "fav" => Command::Fav {
                tip_id: argument(&mut words, "tip-id")?.to_owned(),
            },
            "badges" => Command::Badges,
            "reset" => Command::Reset,
            "quit" | "exit" => Command::Quit,
            _ => return Err(anyhow!("Unknown command: {}. Try help.", name)),
        };
        if let Some(extra) = words.next() {
            return Err(anyhow!("Unexpected argument: {}", extra));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::{descriptions, Command};
    use crate::{challenge::ChallengeKind, tip::TipCategory};

    #[test]
    fn parse_commands() {
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!(
            "do 3".parse::<Command>().unwrap(),
            Command::Do {
                action_id: "3".to_owned()
            }
        );
        assert_eq!(
            "  progress 2   80 ".parse::<Command>().unwrap(),
            Command::Progress {
                challenge_id: "2".to_owned(),
                value: 80
            }
        );
        assert_eq!(
            "CHOOSE 2".parse::<Command>().unwrap(),
            Command::Choose { option: 2 }
        );
        assert_eq!(
            "tips".parse::<Command>().unwrap(),
            Command::Tips { category: None }
        );
        assert_eq!(
            "tips all".parse::<Command>().unwrap(),
            Command::Tips { category: None }
        );
        assert_eq!(
            "tips home".parse::<Command>().unwrap(),
            Command::Tips {
                category: Some(TipCategory::Home)
            }
        );
        assert_eq!(
            "challenges".parse::<Command>().unwrap(),
            Command::Challenges { kind: None }
        );
        assert_eq!(
            "challenges w".parse::<Command>().unwrap(),
            Command::Challenges {
                kind: Some(ChallengeKind::Weekly)
            }
        );
        assert_eq!(
            "fav 4".parse::<Command>().unwrap(),
            Command::Fav {
                tip_id: "4".to_owned()
            }
        );
        for (line, command) in &[
            ("status", Command::Status),
            ("actions", Command::Actions),
            ("city", Command::City),
            ("tip", Command::Tip),
            ("badges", Command::Badges),
            ("reset", Command::Reset),
            ("quit", Command::Quit),
            ("exit", Command::Quit),
        ] {
            assert_eq!(&line.parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn reject_garbage() {
        assert!("".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("do".parse::<Command>().is_err());
        assert!("progress 2 -1".parse::<Command>().is_err());
        assert!("choose 0".parse::<Command>().is_err());
        assert!("tips lava".parse::<Command>().is_err());
        assert!("challenges yearly".parse::<Command>().is_err());
        assert!("status now".parse::<Command>().is_err());
    }

    #[test]
    fn help_lists_every_command() {
        let help = descriptions();
        for name in &["do", "progress", "choose", "fav", "quit"] {
            assert!(help.contains(name));
        }
    }
}
