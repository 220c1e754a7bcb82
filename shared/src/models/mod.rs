//! Domain models for the V60 Brew Trainer

mod lead;
mod recipe;
mod scoring;
mod session;

pub use lead::*;
pub use recipe::*;
pub use scoring::*;
pub use session::*;
