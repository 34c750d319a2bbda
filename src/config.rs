use anyhow::{Context, Result};
use std::{env, path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_DB_PATH: &str = "ecoquest.db";
pub const DEFAULT_CHALLENGE_TICK_SECS: u64 = 5;
pub const DEFAULT_BUDGET_TICK_SECS: u64 = 10;
pub const DEFAULT_BUDGET_INCREMENT: u32 = 50;
pub const DEFAULT_RESET_CHECK_SECS: u64 = 30;
pub const DEFAULT_TIP_ROTATION_SECS: u64 = 15;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
    pub challenge_tick: Duration,
    pub budget_tick: Duration,
    pub budget_increment: u32,
    pub reset_check: Duration,
    pub tip_rotation: Duration,
    /// Fixed seed for the simulated events, random when unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            challenge_tick: Duration::from_secs(DEFAULT_CHALLENGE_TICK_SECS),
            budget_tick: Duration::from_secs(DEFAULT_BUDGET_TICK_SECS),
            budget_increment: DEFAULT_BUDGET_INCREMENT,
            reset_check: Duration::from_secs(DEFAULT_RESET_CHECK_SECS),
            tip_rotation: Duration::from_secs(DEFAULT_TIP_ROTATION_SECS),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let defaults = Config::default();
        let secs = |name: &str, default: Duration| -> Result<Duration> {
            Ok(parse_var::<u64>(&lookup, name)?
                .map(Duration::from_secs)
                .unwrap_or(default))
        };
        Ok(Config {
            db_path: lookup("ECOQUEST_DB_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            challenge_tick: secs("ECOQUEST_CHALLENGE_TICK_SECS", defaults.challenge_tick)?,
            budget_tick: secs("ECOQUEST_BUDGET_TICK_SECS", defaults.budget_tick)?,
            budget_increment: parse_var(&lookup, "ECOQUEST_BUDGET_INCREMENT")?
                .unwrap_or(defaults.budget_increment),
            reset_check: secs("ECOQUEST_RESET_CHECK_SECS", defaults.reset_check)?,
            tip_rotation: secs("ECOQUEST_TIP_ROTATION_SECS", defaults.tip_rotation)?,
            seed: parse_var(&lookup, "ECOQUEST_SEED")?,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {}: {}", name, value)),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::PathBuf, time::Duration};

    use super::Config;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ECOQUEST_DB_PATH", "/tmp/eco.db"),
            ("ECOQUEST_CHALLENGE_TICK_SECS", "1"),
            ("ECOQUEST_BUDGET_INCREMENT", " 75 "),
            ("ECOQUEST_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/eco.db"));
        assert_eq!(config.challenge_tick, Duration::from_secs(1));
        assert_eq!(config.budget_increment, 75);
        assert_eq!(config.budget_tick, Duration::from_secs(10));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = Config::from_lookup(lookup(&[("ECOQUEST_RESET_CHECK_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("ECOQUEST_RESET_CHECK_SECS"));
    }
}
