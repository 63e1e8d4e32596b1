//! Utility module
//!
//! - [`logger`] - tracing setup

pub mod logger;
