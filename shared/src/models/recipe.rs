//! Pour-over recipe models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A pour-over recipe as dialled in on the widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Grind setting, 1.0 (fine) to 10.0 (coarse)
    pub grind: f64,
    /// Water temperature in °C, 85-100
    pub temp: f64,
    /// Coffee dose in grams, 10-25
    pub dose: f64,
    /// Total brew water in grams, 150-350
    pub water: f64,
    /// Bloom time in seconds, 10-60
    pub bloom: f64,
    /// Total brew time in seconds, 120-300
    pub total: f64,
    /// Number of pours, 1-6
    pub pours: i32,
}

impl Recipe {
    /// Read one parameter as an f64 (pours included)
    pub fn get(&self, field: RecipeField) -> f64 {
        match field {
            RecipeField::Grind => self.grind,
            RecipeField::Temp => self.temp,
            RecipeField::Dose => self.dose,
            RecipeField::Water => self.water,
            RecipeField::Bloom => self.bloom,
            RecipeField::Total => self.total,
            RecipeField::Pours => f64::from(self.pours),
        }
    }

    /// Set one parameter, clamped to its slider domain
    ///
    /// The input surface owns clamping; the scorer never does.
    pub fn set(&mut self, field: RecipeField, value: f64) {
        let spec = ParameterSpec::for_field(field);
        let value = value.clamp(spec.min, spec.max);
        match field {
            RecipeField::Grind => self.grind = value,
            RecipeField::Temp => self.temp = value,
            RecipeField::Dose => self.dose = value,
            RecipeField::Water => self.water = value,
            RecipeField::Bloom => self.bloom = value,
            RecipeField::Total => self.total = value,
            RecipeField::Pours => self.pours = value.round() as i32,
        }
    }

    /// Copy of this recipe with every parameter clamped to its domain
    pub fn clamped(&self) -> Self {
        let mut clamped = *self;
        for spec in &PARAMETERS {
            clamped.set(spec.field, self.get(spec.field));
        }
        clamped
    }

    /// Brew ratio (water per gram of coffee)
    pub fn ratio(&self) -> f64 {
        self.water / self.dose
    }
}

impl Default for Recipe {
    /// The starting recipe shown on first load, tuned to land mid-table
    fn default() -> Self {
        Self {
            grind: 3.5,
            temp: 88.0,
            dose: 13.0,
            water: 270.0,
            bloom: 50.0,
            total: 150.0,
            pours: 5,
        }
    }
}

/// The seven tunable recipe parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeField {
    Grind,
    Temp,
    Dose,
    Water,
    Bloom,
    Total,
    Pours,
}

impl RecipeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeField::Grind => "grind",
            RecipeField::Temp => "temp",
            RecipeField::Dose => "dose",
            RecipeField::Water => "water",
            RecipeField::Bloom => "bloom",
            RecipeField::Total => "total",
            RecipeField::Pours => "pours",
        }
    }
}

impl std::fmt::Display for RecipeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeField {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grind" => Ok(RecipeField::Grind),
            "temp" => Ok(RecipeField::Temp),
            "dose" => Ok(RecipeField::Dose),
            "water" => Ok(RecipeField::Water),
            "bloom" => Ok(RecipeField::Bloom),
            "total" => Ok(RecipeField::Total),
            "pours" => Ok(RecipeField::Pours),
            _ => Err("Unknown recipe parameter"),
        }
    }
}

/// Slider metadata for one recipe parameter
///
/// Single source of truth for the host page's controls: domain, step, and
/// the hint shown under each slider.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterSpec {
    pub field: RecipeField,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub hint: &'static str,
}

impl ParameterSpec {
    pub fn for_field(field: RecipeField) -> &'static Self {
        match field {
            RecipeField::Grind => &PARAMETERS[0],
            RecipeField::Temp => &PARAMETERS[1],
            RecipeField::Dose => &PARAMETERS[2],
            RecipeField::Water => &PARAMETERS[3],
            RecipeField::Bloom => &PARAMETERS[4],
            RecipeField::Total => &PARAMETERS[5],
            RecipeField::Pours => &PARAMETERS[6],
        }
    }

    /// Whether a value lies inside this parameter's domain
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// All seven parameters in display order
pub const PARAMETERS: [ParameterSpec; 7] = [
    ParameterSpec {
        field: RecipeField::Grind,
        label: "Grind (1–10)",
        min: 1.0,
        max: 10.0,
        step: 0.1,
        hint: "Sweet spot: 6–7.5",
    },
    ParameterSpec {
        field: RecipeField::Temp,
        label: "Temperature (°C)",
        min: 85.0,
        max: 100.0,
        step: 1.0,
        hint: "Target: 94°C (±4)",
    },
    ParameterSpec {
        field: RecipeField::Dose,
        label: "Dose (g)",
        min: 10.0,
        max: 25.0,
        step: 0.5,
        hint: "Baseline: 15g",
    },
    ParameterSpec {
        field: RecipeField::Water,
        label: "Water (g)",
        min: 150.0,
        max: 350.0,
        step: 5.0,
        hint: "Baseline: 250g",
    },
    ParameterSpec {
        field: RecipeField::Bloom,
        label: "Bloom (s)",
        min: 10.0,
        max: 60.0,
        step: 1.0,
        hint: "Target: 35s (±10)",
    },
    ParameterSpec {
        field: RecipeField::Total,
        label: "Total Time (s)",
        min: 120.0,
        max: 300.0,
        step: 5.0,
        hint: "Target: 180s (±30)",
    },
    ParameterSpec {
        field: RecipeField::Pours,
        label: "Pours",
        min: 1.0,
        max: 6.0,
        step: 1.0,
        hint: "Target: 4 pours",
    },
];

/// The reference recipe all scores are measured against
///
/// Grind is a window rather than a point target; everything else is a
/// single ideal value.
#[derive(Debug, Clone, Copy)]
pub struct IdealRecipe {
    pub grind_min: f64,
    pub grind_max: f64,
    pub temp: f64,
    pub dose: f64,
    pub water: f64,
    pub bloom: f64,
    pub total: f64,
    pub pours: i32,
}

impl IdealRecipe {
    /// Brew ratio implied by the reference dose and water (~1:16.7)
    pub fn target_ratio(&self) -> f64 {
        self.water / self.dose
    }
}

/// Process-wide scoring reference
pub const IDEAL: IdealRecipe = IdealRecipe {
    grind_min: 6.0,
    grind_max: 7.5,
    temp: 94.0,
    dose: 15.0,
    water: 250.0,
    bloom: 35.0,
    total: 180.0,
    pours: 4,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps_to_domain() {
        let mut recipe = Recipe::default();
        recipe.set(RecipeField::Temp, 140.0);
        assert_eq!(recipe.temp, 100.0);
        recipe.set(RecipeField::Grind, -3.0);
        assert_eq!(recipe.grind, 1.0);
    }

    #[test]
    fn test_set_pours_rounds() {
        let mut recipe = Recipe::default();
        recipe.set(RecipeField::Pours, 2.6);
        assert_eq!(recipe.pours, 3);
    }

    #[test]
    fn test_field_round_trip() {
        for spec in &PARAMETERS {
            let parsed: RecipeField = spec.field.as_str().parse().unwrap();
            assert_eq!(parsed, spec.field);
        }
        assert!("pressure".parse::<RecipeField>().is_err());
    }

    #[test]
    fn test_parameter_lookup_matches_table() {
        for spec in &PARAMETERS {
            assert_eq!(ParameterSpec::for_field(spec.field).label, spec.label);
        }
    }

    #[test]
    fn test_default_recipe_in_domain() {
        let recipe = Recipe::default();
        assert_eq!(recipe.clamped(), recipe);
    }
}
