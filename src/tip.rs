use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::challenge::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Plastic,
    Transport,
    Home,
    Food,
    General,
}

impl FromStr for TipCategory {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plastic" => Ok(Self::Plastic),
            "transport" => Ok(Self::Transport),
            "home" => Ok(Self::Home),
            "food" => Ok(Self::Food),
            "general" => Ok(Self::General),
            _ => Err(anyhow!(
                "Wrong tip category. Use plastic, transport, home, food or general."
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tip {
    pub id: &'static str,
    pub category: TipCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: ImpactLevel,
    pub difficulty: Difficulty,
    /// kg CO2 per year
    pub co2_saved: f64,
    /// euros per year
    pub money_saved: f64,
}

pub fn filter_by_category<'a>(tips: &'a [Tip], category: Option<TipCategory>) -> Vec<&'a Tip> {
    tips.iter()
        .filter(|tip| category.map_or(true, |category| tip.category == category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_by_category, TipCategory};
    use crate::catalog::TIPS;

    #[test]
    fn filtering() {
        assert_eq!(filter_by_category(&TIPS, None).len(), TIPS.len());
        let plastic = filter_by_category(&TIPS, Some(TipCategory::Plastic));
        assert_eq!(plastic.len(), 3);
        assert!(plastic.iter().all(|tip| tip.category == TipCategory::Plastic));
    }

    #[test]
    fn category_parsing() {
        assert_eq!("food".parse::<TipCategory>().unwrap(), TipCategory::Food);
        assert!("all".parse::<TipCategory>().is_err());
    }
}
