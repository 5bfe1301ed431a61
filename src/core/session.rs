//! Session management
//!
//! The session holds only the id of the authenticated user. The current user
//! is always read back from the store, so it can never drift from the user
//! collection.

use crate::core::ledger_store::LedgerStore;
use crate::types::{LedgerError, User, UserId};

#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    active: Option<UserId>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate by phone and password
    ///
    /// On success the session points at the matched user. On failure the
    /// session is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidCredentials` if no user matches.
    pub fn login<'a>(
        &mut self,
        store: &'a LedgerStore,
        phone: &str,
        password: &str,
    ) -> Result<&'a User, LedgerError> {
        let user = store
            .find_by_credentials(phone.trim(), password)
            .ok_or(LedgerError::InvalidCredentials)?;
        self.active = Some(user.id.clone());
        Ok(user)
    }

    /// Clear the session; idempotent
    pub fn logout(&mut self) {
        self.active = None;
    }

    pub fn active_user_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Id of the authenticated user
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Unauthenticated` when nobody is logged in.
    pub fn require(&self) -> Result<&str, LedgerError> {
        self.active_user_id().ok_or(LedgerError::Unauthenticated)
    }

    /// The authenticated user as currently stored
    pub fn current_user<'a>(&self, store: &'a LedgerStore) -> Option<&'a User> {
        self.active.as_deref().and_then(|id| store.user(id))
    }
}
