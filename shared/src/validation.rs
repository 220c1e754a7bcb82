//! Validation utilities for the V60 Brew Trainer
//!
//! The sliders keep values in range on their own; these checks exist for
//! recipes that arrive over the wasm boundary as JSON and for the lead
//! form.

use crate::models::{LeadEnquiry, Recipe, RecipeField, PARAMETERS};

/// Validate that every recipe parameter lies inside its slider domain
pub fn validate_recipe(recipe: &Recipe) -> Result<(), &'static str> {
    for spec in &PARAMETERS {
        if !spec.contains(recipe.get(spec.field)) {
            return Err(match spec.field {
                RecipeField::Grind => "Grind must be between 1 and 10",
                RecipeField::Temp => "Temperature must be between 85 and 100°C",
                RecipeField::Dose => "Dose must be between 10 and 25g",
                RecipeField::Water => "Water must be between 150 and 350g",
                RecipeField::Bloom => "Bloom must be between 10 and 60s",
                RecipeField::Total => "Total time must be between 120 and 300s",
                RecipeField::Pours => "Pours must be between 1 and 6",
            });
        }
    }
    Ok(())
}

/// Validate a contact phone number (lenient: 7-15 digits, separators ok)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < 7 {
        return Err("Phone number is too short");
    }
    if digits > 15 {
        return Err("Phone number is too long");
    }
    Ok(())
}

/// Validate a lead enquiry before it can be sent
///
/// Only the name is required; phone and note stay free-form.
pub fn validate_lead(lead: &LeadEnquiry) -> Result<(), &'static str> {
    if lead.name.trim().is_empty() {
        return Err("Name is required");
    }
    Ok(())
}
