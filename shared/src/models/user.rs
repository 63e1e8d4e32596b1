//! Principal (user / guest) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform role of a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Owner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Owner => "owner",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Onboarding progress of an owner principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    #[default]
    Pending,
    Completed,
}

/// Principal entity — a registered user or a temporary guest
///
/// Guests are created for unauthenticated checkout. They either get
/// converted into full principals or expire at `guest_expires_at`.
/// A guest can never own a business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub verified: bool,
    pub onboarding_step: OnboardingStep,
    /// Businesses owned by this principal (denormalized back-references,
    /// mutated only by the business lifecycle manager)
    #[serde(default)]
    pub business_ids: Vec<String>,
    pub default_business: Option<String>,
    #[serde(default)]
    pub is_guest: bool,
    pub guest_expires_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub is_guest: Option<bool>,
    pub guest_expires_at: Option<DateTime<Utc>>,
}
