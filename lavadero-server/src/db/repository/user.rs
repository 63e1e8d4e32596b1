//! User Repository

use super::{BaseRepository, RepoResult, bare_id, full_id, new_id};
use chrono::Utc;
use shared::models::{OnboardingStep, Role, User, UserCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const USER_TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user by id (accepts bare or `user:` prefixed form)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM ONLY type::thing($tb, $id)")
            .bind(("tb", USER_TABLE))
            .bind(("id", bare_id(USER_TABLE, id).to_string()))
            .await?;
        let user: Option<User> = result.take(0)?;
        Ok(user)
    }

    /// Create a new user or guest principal
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let id = new_id();
        let now = Utc::now();
        let user = User {
            id: None,
            name: data.name,
            email: data.email,
            role: data.role.unwrap_or(Role::Customer),
            verified: false,
            onboarding_step: OnboardingStep::Pending,
            business_ids: Vec::new(),
            default_business: None,
            is_guest: data.is_guest.unwrap_or(false),
            guest_expires_at: data.guest_expires_at,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.base
            .db()
            .query("CREATE type::thing($tb, $id) CONTENT $data")
            .bind(("tb", USER_TABLE))
            .bind(("id", id.clone()))
            .bind(("data", user))
            .await?
            .check()?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| super::RepoError::Database("created user not readable".into()))
    }

    /// Mark a user's contact as verified
    pub async fn set_verified(&self, id: &str, verified: bool) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE type::thing($tb, $id) SET verified = $v, updated_at = time::now()")
            .bind(("tb", USER_TABLE))
            .bind(("id", bare_id(USER_TABLE, id).to_string()))
            .bind(("v", verified))
            .await?
            .check()?;
        Ok(())
    }

    /// Full id form for cross-table references
    pub fn reference(id: &str) -> String {
        full_id(USER_TABLE, id)
    }
}
