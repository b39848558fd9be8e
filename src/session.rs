//! Session context for the logged-in user.
//!
//! Login produces a [`Session`]; operations that act on behalf of a user
//! (posting a product, reading the profile) take it as an explicit
//! argument. Its persisted form is the `currentUser` collection, so a
//! session survives restarts of the process that owns the store.

use crate::domain::User;
use serde::Serialize;

// ---

/// The user an operation is performed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Session {
    //
    user: User,
}

impl Session {
    // ---
    pub fn new(user: User) -> Self {
        // ---
        Self { user }
    }

    pub fn user(&self) -> &User {
        // ---
        &self.user
    }

    pub fn user_id(&self) -> &str {
        // ---
        &self.user.id
    }

    pub fn into_user(self) -> User {
        // ---
        self.user
    }
}
