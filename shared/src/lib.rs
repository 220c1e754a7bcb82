//! Shared domain logic for the V60 Brew Trainer widget
//!
//! This crate holds everything the widget computes: the recipe model, the
//! scorer, the reveal session, best-score storage, and outbound message
//! building. It is browser-free and natively testable; the `wasm` crate
//! wraps it for the host page.

pub mod messaging;
pub mod models;
pub mod store;
pub mod validation;

pub use messaging::*;
pub use models::*;
pub use store::*;
pub use validation::*;
