//! Lead enquiry models

use serde::{Deserialize, Serialize};

/// Offerings an enquirer can ask about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    #[default]
    BaristaTraining,
    CoffeeGadgets,
    MachineRental,
    General,
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interest::BaristaTraining => write!(f, "Barista Training"),
            Interest::CoffeeGadgets => write!(f, "Coffee Gadgets"),
            Interest::MachineRental => write!(f, "Machine Rental"),
            Interest::General => write!(f, "General"),
        }
    }
}

/// An enquiry composed in the chat panel
///
/// Only the name is required; phone and note are free-form extras the
/// message builder includes when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadEnquiry {
    pub name: String,
    pub interest: Interest,
    pub phone: Option<String>,
    pub note: Option<String>,
}
