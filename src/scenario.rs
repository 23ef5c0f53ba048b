use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Win condition configured in the ObjectiveSelection stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    HaveFunGuests,
    GuestsAndRating,
    ParkValue,
    MonthlyRideIncome,
    RepayLoanAndParkValue,
}

impl Objective {
    pub const ALL: [Objective; 5] = [
        Objective::HaveFunGuests,
        Objective::GuestsAndRating,
        Objective::ParkValue,
        Objective::MonthlyRideIncome,
        Objective::RepayLoanAndParkValue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Objective::HaveFunGuests => "Have fun",
            Objective::GuestsAndRating => "Guests in park with a minimum rating",
            Objective::ParkValue => "Achieve a given park value",
            Objective::MonthlyRideIncome => "Monthly income from ride tickets",
            Objective::RepayLoanAndParkValue => "Repay loan and achieve a park value",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Scenario metadata gathered across the editor stages and written out by the
/// save dialog.
pub struct ScenarioDetails {
    pub name: String,
    pub park_name: String,
    pub description: String,
    pub objective: Option<Objective>,
}

impl Default for ScenarioDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            park_name: String::new(),
            description: String::new(),
            objective: None,
        }
    }
}

impl ScenarioDetails {
    /// Writes the scenario to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// File name the save dialog pre-populates, derived from the scenario
    /// name with filesystem-hostile characters stripped.
    pub fn suggested_filename(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == ' ' || c == '-' { c } else { '_' })
            .collect();
        let stem = stem.trim();
        if stem.is_empty() {
            "scenario.park.json".to_string()
        } else {
            format!("{}.park.json", stem)
        }
    }
}

/// Default directory offered by the save dialog.
pub fn default_save_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Scenarios")
}
