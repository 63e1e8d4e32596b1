//! Tenant lifecycle
//!
//! Business creation and deletion move multiple collections together;
//! this module owns those transactions and the owner back-references.

mod billing;
mod lifecycle;

pub use billing::{BillingClient, BillingError, HttpBillingClient, NullBillingClient};
pub use lifecycle::BusinessLifecycle;

#[cfg(test)]
pub use billing::mock;
