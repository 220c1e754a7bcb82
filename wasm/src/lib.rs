//! WebAssembly bindings for the V60 Brew Trainer widget
//!
//! Exposes the shared logic to the host page:
//! - stateless helpers that score recipes passed as JSON
//! - a stateful [`BrewWidget`] handle covering the full tune → reveal →
//!   save → share flow, persisting the best score in `localStorage`

mod config;
mod storage;
mod toast;

use wasm_bindgen::prelude::*;

use shared::messaging;
use shared::models::{
    score_recipe, BrewSession, LeadEnquiry, Recipe, RecipeField, ScoreBreakdown, PARAMETERS,
};
use shared::store::BestScoreStore;
use shared::validation::validate_lead;

pub use config::ShareConfig;
pub use storage::LocalStorageStore;
pub use toast::{notify, TOAST_DISMISS_MS, TOAST_EVENT};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Surface Rust panics in the browser console
    console_error_panic_hook::set_once();
}

/// Score a recipe supplied as JSON
#[wasm_bindgen]
pub fn score_recipe_json(recipe_json: &str) -> Result<u32, JsValue> {
    let recipe: Recipe = serde_json::from_str(recipe_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipe JSON: {}", e)))?;
    Ok(score_recipe(&recipe))
}

/// Per-dimension point breakdown for a recipe supplied as JSON
#[wasm_bindgen]
pub fn score_breakdown_json(recipe_json: &str) -> Result<String, JsValue> {
    let recipe: Recipe = serde_json::from_str(recipe_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipe JSON: {}", e)))?;
    serde_json::to_string(&ScoreBreakdown::for_recipe(&recipe))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// The documented starting recipe
#[wasm_bindgen]
pub fn default_recipe_json() -> String {
    serde_json::to_string(&Recipe::default()).unwrap_or_default()
}

/// Slider metadata for all seven parameters, in display order
#[wasm_bindgen]
pub fn parameter_specs_json() -> String {
    serde_json::to_string(PARAMETERS.as_slice()).unwrap_or_default()
}

/// Stateful widget handle for the host page
///
/// Owns the session (recipe + reveal flag), the `localStorage` best-score
/// store, and the deployment share settings.
#[wasm_bindgen]
pub struct BrewWidget {
    session: BrewSession,
    store: LocalStorageStore,
    config: ShareConfig,
}

#[wasm_bindgen]
impl BrewWidget {
    /// Create a widget on the default starting recipe
    ///
    /// `config_json` carries the deployment share settings; pass an empty
    /// string to fall back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<BrewWidget, JsValue> {
        let config = if config_json.is_empty() {
            ShareConfig::default()
        } else {
            ShareConfig::from_json(config_json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {}", e)))?
        };
        Ok(Self {
            session: BrewSession::default(),
            store: LocalStorageStore::new(),
            config,
        })
    }

    /// Update one slider by name; hides the current result
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        let field: RecipeField = name.parse().map_err(JsValue::from_str)?;
        self.session.set_parameter(field, value);
        Ok(())
    }

    /// Replace the whole recipe from JSON (clamped); hides the current result
    pub fn replace_recipe(&mut self, recipe_json: &str) -> Result<(), JsValue> {
        let recipe: Recipe = serde_json::from_str(recipe_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid recipe JSON: {}", e)))?;
        self.session.replace_recipe(recipe);
        Ok(())
    }

    /// Current recipe as JSON
    pub fn recipe_json(&self) -> String {
        serde_json::to_string(self.session.recipe()).unwrap_or_default()
    }

    /// Per-dimension breakdown of the current recipe as JSON
    pub fn breakdown_json(&self) -> String {
        serde_json::to_string(&ScoreBreakdown::for_recipe(self.session.recipe()))
            .unwrap_or_default()
    }

    /// Score of the current recipe, revealed or not
    pub fn current_score(&self) -> u32 {
        self.session.current_score()
    }

    pub fn is_revealed(&self) -> bool {
        self.session.is_revealed()
    }

    /// Show the result and return it
    pub fn reveal(&mut self) -> u32 {
        self.session.reveal()
    }

    /// Best score on record, if any
    pub fn best(&self) -> Option<u32> {
        self.store.load()
    }

    /// Persist the current score as the best if it beats the stored one
    ///
    /// Returns the stored best and announces "Saved!" as a toast; returns
    /// `undefined` without saving while the result is still hidden.
    pub fn save_best(&mut self) -> Result<Option<u32>, JsValue> {
        match self.session.save_best(&mut self.store) {
            Ok(Some(best)) => {
                toast::notify("Saved!");
                Ok(Some(best))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    /// Share link for the current revealed score; empty while hidden,
    /// mirroring the disabled share button
    pub fn share_link(&self) -> String {
        if !self.session.is_revealed() {
            return String::new();
        }
        messaging::build_deep_link(
            &self.config.whatsapp_number,
            &messaging::share_text(self.session.current_score()),
        )
    }

    /// Link for the floating CTA: shares the score once revealed,
    /// otherwise opens the chat with the improvement prompt
    pub fn cta_link(&self) -> String {
        let message = if self.session.is_revealed() {
            messaging::share_text(self.session.current_score())
        } else {
            messaging::improve_prompt(&self.config.business_name)
        };
        messaging::build_deep_link(&self.config.whatsapp_number, &message)
    }

    /// Compose the enquiry message for the chat panel preview
    ///
    /// Includes the stored best score when one exists.
    pub fn lead_message(&self, lead_json: &str) -> Result<String, JsValue> {
        let lead = parse_lead(lead_json)?;
        Ok(messaging::lead_message(
            &self.config.business_name,
            &lead,
            self.store.load(),
        ))
    }

    /// Link sending the enquiry; rejects a lead without a name
    pub fn lead_link(&self, lead_json: &str) -> Result<String, JsValue> {
        let lead = parse_lead(lead_json)?;
        validate_lead(&lead).map_err(JsValue::from_str)?;
        let message =
            messaging::lead_message(&self.config.business_name, &lead, self.store.load());
        Ok(messaging::build_deep_link(
            &self.config.whatsapp_number,
            &message,
        ))
    }
}

fn parse_lead(lead_json: &str) -> Result<LeadEnquiry, JsValue> {
    serde_json::from_str(lead_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid lead JSON: {}", e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_score_recipe_json() {
        let json = default_recipe_json();
        assert_eq!(score_recipe_json(&json).unwrap(), 480);
    }

    #[wasm_bindgen_test]
    fn test_score_recipe_json_rejects_garbage() {
        assert!(score_recipe_json("{}").is_err());
        assert!(score_recipe_json("not json").is_err());
    }

    #[wasm_bindgen_test]
    fn test_breakdown_json_round_trips() {
        let breakdown: ScoreBreakdown =
            serde_json::from_str(&score_breakdown_json(&default_recipe_json()).unwrap()).unwrap();
        assert_eq!(breakdown.final_score(), 480);
    }

    #[wasm_bindgen_test]
    fn test_parameter_specs_cover_all_fields() {
        let specs: Vec<serde_json::Value> =
            serde_json::from_str(&parameter_specs_json()).unwrap();
        assert_eq!(specs.len(), 7);
        assert_eq!(specs[0]["field"], "grind");
        assert_eq!(specs[6]["field"], "pours");
    }
}
