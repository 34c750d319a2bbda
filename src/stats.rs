use serde::{Deserialize, Serialize};

pub const PERCENTAGE_MIN: f64 = 0.0;
pub const PERCENTAGE_MAX: f64 = 100.0;

pub fn clamp_percentage(value: f64) -> f64 {
    value.max(PERCENTAGE_MIN).min(PERCENTAGE_MAX)
}

fn add_counter(counter: f64, delta: f64) -> f64 {
    (counter + delta).max(0.0)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalStats {
    pub plastic_reduction: f64,
    pub water_saving: f64,
    pub energy_saving: f64,
    pub waste_reduction: f64,
    pub eco_score: f64,
    /// kg per month
    pub co2_saved: f64,
    /// euros per month
    pub money_saved: f64,
}

impl Default for PersonalStats {
    fn default() -> Self {
        PersonalStats {
            plastic_reduction: 25.0,
            water_saving: 15.0,
            energy_saving: 30.0,
            waste_reduction: 40.0,
            eco_score: 28.0,
            co2_saved: 12.0,
            money_saved: 45.0,
        }
    }
}

impl PersonalStats {
    pub fn apply(&mut self, impact: &Impact) {
        self.plastic_reduction =
            clamp_percentage(self.plastic_reduction + impact.plastic_reduction.unwrap_or(0.0));
        self.water_saving = clamp_percentage(self.water_saving + impact.water_saving.unwrap_or(0.0));
        self.energy_saving =
            clamp_percentage(self.energy_saving + impact.energy_saving.unwrap_or(0.0));
        self.waste_reduction =
            clamp_percentage(self.waste_reduction + impact.waste_reduction.unwrap_or(0.0));
        self.eco_score = clamp_percentage(self.eco_score + impact.eco_score);
        self.co2_saved = add_counter(self.co2_saved, impact.co2_saved);
        self.money_saved = add_counter(self.money_saved, impact.money_saved);
    }

    pub fn percentages(&self) -> [(&'static str, f64); 5] {
        [
            ("plastic reduction", self.plastic_reduction),
            ("water saving", self.water_saving),
            ("energy saving", self.energy_saving),
            ("waste reduction", self.waste_reduction),
            ("eco score", self.eco_score),
        ]
    }
}

/// Effect of completing a daily action. Only the last three fields are
/// mandatory; the others are left out for actions that do not touch them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Impact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plastic_reduction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_saving: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_saving: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_reduction: Option<f64>,
    pub co2_saved: f64,
    pub money_saved: f64,
    pub eco_score: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityStat {
    Pollution,
    Biodiversity,
    WasteManagement,
    PlasticUsage,
    EcoScore,
    Population,
    Happiness,
}

impl CityStat {
    pub fn label(&self) -> &'static str {
        match self {
            CityStat::Pollution => "Pollution",
            CityStat::Biodiversity => "Biodiversity",
            CityStat::WasteManagement => "Waste management",
            CityStat::PlasticUsage => "Plastic usage",
            CityStat::EcoScore => "Eco score",
            CityStat::Population => "Population",
            CityStat::Happiness => "Happiness",
        }
    }

    pub fn is_percentage(&self) -> bool {
        !matches!(self, CityStat::Population)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityStats {
    pub pollution: f64,
    pub biodiversity: f64,
    pub waste_management: f64,
    pub plastic_usage: f64,
    pub eco_score: f64,
    pub population: f64,
    pub happiness: f64,
}

impl Default for CityStats {
    fn default() -> Self {
        CityStats {
            pollution: 60.0,
            biodiversity: 40.0,
            waste_management: 50.0,
            plastic_usage: 70.0,
            eco_score: 35.0,
            population: 10000.0,
            happiness: 60.0,
        }
    }
}

impl CityStats {
    pub fn get(&self, stat: CityStat) -> f64 {
        match stat {
            CityStat::Pollution => self.pollution,
            CityStat::Biodiversity => self.biodiversity,
            CityStat::WasteManagement => self.waste_management,
            CityStat::PlasticUsage => self.plastic_usage,
            CityStat::EcoScore => self.eco_score,
            CityStat::Population => self.population,
            CityStat::Happiness => self.happiness,
        }
    }

    fn get_mut(&mut self, stat: CityStat) -> &mut f64 {
        match stat {
            CityStat::Pollution => &mut self.pollution,
            CityStat::Biodiversity => &mut self.biodiversity,
            CityStat::WasteManagement => &mut self.waste_management,
            CityStat::PlasticUsage => &mut self.plastic_usage,
            CityStat::EcoScore => &mut self.eco_score,
            CityStat::Population => &mut self.population,
            CityStat::Happiness => &mut self.happiness,
        }
    }

    pub fn apply(&mut self, impact: &[(CityStat, f64)]) {
        for (stat, delta) in impact {
            let value = self.get_mut(*stat);
            *value = if stat.is_percentage() {
                clamp_percentage(*value + delta)
            } else {
                add_counter(*value, *delta)
            };
        }
    }

    pub fn all(&self) -> Vec<(CityStat, f64)> {
        [
            CityStat::Pollution,
            CityStat::Biodiversity,
            CityStat::WasteManagement,
            CityStat::PlasticUsage,
            CityStat::EcoScore,
            CityStat::Population,
            CityStat::Happiness,
        ]
        .iter()
        .map(|stat| (*stat, self.get(*stat)))
        .collect()
    }
}
