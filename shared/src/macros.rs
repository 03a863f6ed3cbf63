//! Macro allocation
//!
//! Splits a calorie target into protein/fat/carb gram amounts according to
//! a named percentage template.

use serde::{Deserialize, Serialize};

/// Calories per gram of protein and carbohydrate.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// Calories per gram of carbohydrate.
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Named macro split templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroSplit {
    #[default]
    Balanced,
    HighProtein,
    HighCarb,
    LowCarb,
    Keto,
}

/// Percentage allocation of calories across macros
///
/// Invariant: the three percentages of every template sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein: f64,
    pub fats: f64,
    pub carbs: f64,
}

/// Gram amounts for a daily calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

/// All macro split templates.
pub const MACRO_SPLITS: [MacroSplit; 5] = [
    MacroSplit::Balanced,
    MacroSplit::HighProtein,
    MacroSplit::HighCarb,
    MacroSplit::LowCarb,
    MacroSplit::Keto,
];

impl MacroSplit {
    /// Percentage template for this split
    pub fn percentages(&self) -> MacroPercentages {
        match self {
            MacroSplit::Balanced => MacroPercentages {
                protein: 30.0,
                fats: 35.0,
                carbs: 35.0,
            },
            MacroSplit::HighProtein => MacroPercentages {
                protein: 40.0,
                fats: 30.0,
                carbs: 30.0,
            },
            MacroSplit::HighCarb => MacroPercentages {
                protein: 25.0,
                fats: 20.0,
                carbs: 55.0,
            },
            MacroSplit::LowCarb => MacroPercentages {
                protein: 40.0,
                fats: 40.0,
                carbs: 20.0,
            },
            MacroSplit::Keto => MacroPercentages {
                protein: 25.0,
                fats: 70.0,
                carbs: 5.0,
            },
        }
    }

    /// Get a short display label
    pub fn label(&self) -> &'static str {
        match self {
            MacroSplit::Balanced => "Balanced",
            MacroSplit::HighProtein => "High Protein",
            MacroSplit::HighCarb => "High Carb",
            MacroSplit::LowCarb => "Low Carb",
            MacroSplit::Keto => "Keto",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            MacroSplit::Balanced => "Sustainable balance.",
            MacroSplit::HighProtein => "Best for retention/growth.",
            MacroSplit::HighCarb => "Endurance focused.",
            MacroSplit::LowCarb => "Insulin control.",
            MacroSplit::Keto => "Ketosis state.",
        }
    }
}

/// Split target calories into daily gram amounts.
pub fn allocate(target_calories: f64, split: MacroSplit) -> MacroGrams {
    let pct = split.percentages();
    MacroGrams {
        protein_g: target_calories * (pct.protein / 100.0) / KCAL_PER_G_PROTEIN,
        fat_g: target_calories * (pct.fats / 100.0) / KCAL_PER_G_FAT,
        carb_g: target_calories * (pct.carbs / 100.0) / KCAL_PER_G_CARB,
    }
}
