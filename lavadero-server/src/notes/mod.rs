//! Note state machine and aggregates
//!
//! A note advances along two independent axes (payment and
//! fulfillment); every mutation funnels through [`NoteMachine`].

mod machine;
mod stats;
pub mod status;

pub use machine::NoteMachine;
pub use stats::{MonthlyStat, compute_monthly};
