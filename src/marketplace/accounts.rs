//! Registration, login, logout and profile.

use super::{storage_failure, validation, Marketplace};
use crate::domain::{Credentials, MarketError, MarketResult, NewUser, User};
use crate::session::Session;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

/// The logged-in user with their listing count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    // ---
    pub user: User,
    pub products_count: usize,
}

impl Marketplace {
    // ---

    /// Create an account.
    ///
    /// Fails with a validation error for a malformed form and with
    /// [`MarketError::DuplicateEmail`] when the exact email is taken.
    /// Does not open a session.
    #[tracing::instrument(skip(self, form), fields(email = %form.email))]
    pub async fn register(&self, form: NewUser) -> MarketResult<User> {
        // ---
        validation::validate_registration(&form)?;

        let _guard = self.collections.lock_writes().await;

        let mut users = self
            .collections
            .users()
            .await
            .map_err(|e| storage_failure("registration", e))?;

        if users.iter().any(|u| u.email == form.email) {
            warn!("Registration rejected, email already registered");
            return Err(MarketError::DuplicateEmail);
        }

        let user = User {
            id: self.ids.next_id(),
            name: form.name,
            email: form.email,
            phone: form.phone,
            password: form.password,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        self.collections
            .save_users(&users)
            .await
            .map_err(|e| storage_failure("registration", e))?;

        self.metrics.record_user_registered();
        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Open a session for the user whose email and password both match
    /// exactly.
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: Credentials) -> MarketResult<Session> {
        // ---
        validation::validate_credentials(&credentials)?;

        let users = self
            .collections
            .users()
            .await
            .map_err(|e| storage_failure("login", e))?;

        let Some(user) = users
            .into_iter()
            .find(|u| u.email == credentials.email && u.password == credentials.password)
        else {
            self.metrics.record_login_attempt(false);
            warn!("Login rejected, invalid credentials");
            return Err(MarketError::InvalidCredentials);
        };

        self.collections
            .set_current_user(&user)
            .await
            .map_err(|e| storage_failure("login", e))?;

        self.metrics.record_login_attempt(true);
        info!(user_id = %user.id, "Session opened");

        Ok(Session::new(user))
    }

    /// Clear the current session, whether or not one exists.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> MarketResult<()> {
        // ---
        self.collections
            .clear_current_user()
            .await
            .map_err(|e| storage_failure("logout", e))?;

        info!("Session cleared");
        Ok(())
    }

    /// The persisted session, if a user is logged in.
    pub async fn current_session(&self) -> MarketResult<Option<Session>> {
        // ---
        let user = self
            .collections
            .current_user()
            .await
            .map_err(|e| storage_failure("session lookup", e))?;

        Ok(user.map(Session::new))
    }

    /// Like [`Marketplace::current_session`], but a missing session is an error.
    pub async fn require_session(&self) -> MarketResult<Session> {
        // ---
        self.current_session()
            .await?
            .ok_or(MarketError::NotLoggedIn)
    }

    pub async fn profile(&self, session: &Session) -> MarketResult<Profile> {
        // ---
        let products = self
            .collections
            .products()
            .await
            .map_err(|e| storage_failure("profile", e))?;

        let products_count = products
            .iter()
            .filter(|p| p.seller_id == session.user_id())
            .count();

        Ok(Profile {
            user: session.user().clone(),
            products_count,
        })
    }
}
