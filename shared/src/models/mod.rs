//! Domain models
//!
//! Entities shared between the server and its clients. Each aggregate
//! carries its create/update payload types alongside the entity,
//! mirroring how they travel over the API.

pub mod business;
pub mod note;
pub mod service;
pub mod user;

pub use business::{Business, BusinessCreate, BusinessUpdate, DayHours, Subscription, SubscriptionStatus};
pub use note::{
    Abono, AbonoInput, FulfillmentStatus, Note, NoteCreate, PaymentStatus, SelectionItem,
    SelectionLine,
};
pub use service::{Service, ServiceInput, ServiceKind, ServiceUpdate, ServiceVariant, VariantInput};
pub use user::{OnboardingStep, Role, User, UserCreate};
