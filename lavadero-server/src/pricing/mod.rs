//! Pricing Engine
//!
//! Pure selection-to-total expansion, parameterized by a versioned
//! rule set.

mod engine;
mod rules;

pub use engine::{PricedSelection, price_selection};
pub use rules::PricingRules;
