//! Widget session state
//!
//! The score stays hidden until the user explicitly reveals it; touching
//! any slider hides it again. The best score is only persisted after a
//! reveal — the scorer itself knows nothing about this gate.

use crate::store::{BestScoreStore, StoreError};

use super::recipe::{Recipe, RecipeField};
use super::scoring::score_recipe;

/// One user's interaction state: the current recipe plus the reveal flag
#[derive(Debug, Clone)]
pub struct BrewSession {
    recipe: Recipe,
    revealed: bool,
}

impl BrewSession {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe: recipe.clamped(),
            revealed: false,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Score of the current recipe, whether or not it is revealed
    pub fn current_score(&self) -> u32 {
        score_recipe(&self.recipe)
    }

    /// Update one parameter and hide the result until the next reveal
    pub fn set_parameter(&mut self, field: RecipeField, value: f64) {
        self.revealed = false;
        self.recipe.set(field, value);
    }

    /// Swap in a whole recipe (clamped) and hide the result
    pub fn replace_recipe(&mut self, recipe: Recipe) {
        self.revealed = false;
        self.recipe = recipe.clamped();
    }

    /// Show the result and return it
    pub fn reveal(&mut self) -> u32 {
        self.revealed = true;
        self.current_score()
    }

    /// Persist the current score as a best-score candidate
    ///
    /// Returns `Ok(None)` without touching the store when the result has
    /// not been revealed — a policy gate, not an error. Otherwise returns
    /// the new stored best.
    pub fn save_best(&self, store: &mut dyn BestScoreStore) -> Result<Option<u32>, StoreError> {
        if !self.revealed {
            return Ok(None);
        }
        store.commit(self.current_score()).map(Some)
    }
}

impl Default for BrewSession {
    fn default() -> Self {
        Self::new(Recipe::default())
    }
}
