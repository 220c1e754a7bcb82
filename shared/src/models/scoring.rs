//! Recipe scoring
//!
//! Maps a recipe to an integer score in 0-1000 against the [`IDEAL`]
//! reference. Six dimensions earn points independently: full credit inside
//! a tolerance band, then a linear taper down to a floor of zero. Pours is
//! the exception and uses a fixed lookup table. Pure computation, no
//! validation: out-of-range inputs just accumulate error and bottom out
//! at zero points.

use serde::{Deserialize, Serialize};

use super::recipe::{Recipe, IDEAL};

/// Upper bound of the final score
pub const MAX_SCORE: u32 = 1000;

const RATIO_POINTS: f64 = 250.0;
const RATIO_TOLERANCE: f64 = 0.8;
const RATIO_SLOPE: f64 = 120.0;

const TEMP_POINTS: f64 = 150.0;
const TEMP_TOLERANCE: f64 = 4.0;
const TEMP_SLOPE: f64 = 150.0 / 6.0;

const BLOOM_POINTS: f64 = 150.0;
const BLOOM_TOLERANCE: f64 = 10.0;
const BLOOM_SLOPE: f64 = 150.0 / 15.0;

const POURS_POINTS: [f64; 5] = [100.0, 80.0, 60.0, 40.0, 20.0];

const TOTAL_POINTS: f64 = 200.0;
const TOTAL_TOLERANCE: f64 = 30.0;
const TOTAL_SLOPE: f64 = 200.0 / 50.0;

const GRIND_POINTS: f64 = 150.0;
const GRIND_TAPER_WIDTH: f64 = 2.5;

/// Points per dimension for one recipe evaluation
///
/// Each entry is already clamped to its dimension's maximum, so the sum
/// never exceeds 1000 and never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ratio: f64,
    pub temperature: f64,
    pub bloom: f64,
    pub pours: f64,
    pub total_time: f64,
    pub grind: f64,
}

impl ScoreBreakdown {
    /// Evaluate every dimension for the given recipe
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            ratio: ratio_points(recipe),
            temperature: temperature_points(recipe),
            bloom: bloom_points(recipe),
            pours: pours_points(recipe),
            total_time: total_time_points(recipe),
            grind: grind_points(recipe),
        }
    }

    /// Sum of the six dimension scores
    pub fn total(&self) -> f64 {
        self.ratio + self.temperature + self.bloom + self.pours + self.total_time + self.grind
    }

    /// Final integer score: total clamped to 0-1000, rounded to nearest
    pub fn final_score(&self) -> u32 {
        self.total().clamp(0.0, f64::from(MAX_SCORE)).round() as u32
    }
}

/// Score a recipe against the ideal reference
///
/// Deterministic and side-effect free: the same recipe always produces
/// the same score.
pub fn score_recipe(recipe: &Recipe) -> u32 {
    ScoreBreakdown::for_recipe(recipe).final_score()
}

/// Full credit inside the tolerance band, linear taper outside, floor 0
fn taper(error: f64, tolerance: f64, max_points: f64, slope: f64) -> f64 {
    if error <= tolerance {
        max_points
    } else {
        (max_points - (error - tolerance) * slope).clamp(0.0, max_points)
    }
}

/// Dose and water are scored together as a brew ratio, so the same ratio
/// earns the same points at any absolute dose.
fn ratio_points(recipe: &Recipe) -> f64 {
    let error = (recipe.ratio() - IDEAL.target_ratio()).abs();
    taper(error, RATIO_TOLERANCE, RATIO_POINTS, RATIO_SLOPE)
}

fn temperature_points(recipe: &Recipe) -> f64 {
    let error = (recipe.temp - IDEAL.temp).abs();
    taper(error, TEMP_TOLERANCE, TEMP_POINTS, TEMP_SLOPE)
}

fn bloom_points(recipe: &Recipe) -> f64 {
    let error = (recipe.bloom - IDEAL.bloom).abs();
    taper(error, BLOOM_TOLERANCE, BLOOM_POINTS, BLOOM_SLOPE)
}

/// Discrete table on the distance from the ideal pour count. The table is
/// exact, not interpolated: distance 4 keeps 20 points, anything further
/// scores nothing.
fn pours_points(recipe: &Recipe) -> f64 {
    let distance = (recipe.pours - IDEAL.pours).unsigned_abs() as usize;
    POURS_POINTS.get(distance).copied().unwrap_or(0.0)
}

fn total_time_points(recipe: &Recipe) -> f64 {
    let error = (recipe.total - IDEAL.total).abs();
    taper(error, TOTAL_TOLERANCE, TOTAL_POINTS, TOTAL_SLOPE)
}

/// Grind scores against a window rather than a point: anywhere inside
/// [grind_min, grind_max] is full credit, then the usual linear taper on
/// the distance to the nearer edge.
fn grind_points(recipe: &Recipe) -> f64 {
    if recipe.grind >= IDEAL.grind_min && recipe.grind <= IDEAL.grind_max {
        return GRIND_POINTS;
    }
    let distance = if recipe.grind < IDEAL.grind_min {
        IDEAL.grind_min - recipe.grind
    } else {
        recipe.grind - IDEAL.grind_max
    };
    (GRIND_POINTS - (distance / GRIND_TAPER_WIDTH) * GRIND_POINTS).clamp(0.0, GRIND_POINTS)
}
