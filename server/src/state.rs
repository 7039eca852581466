//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the RPC procedure router and the identity-verifier seam; the
//! bridge itself keeps no mutable state.

use std::sync::Arc;

use crate::rpc::Router;
use crate::services::identity::IdentityVerifier;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Optional identity verifier. `None` if provider env vars are not
    /// configured; every bearer token then resolves to an anonymous caller.
    pub verifier: Option<Arc<dyn IdentityVerifier>>,
    /// Development mode enables diagnostic logging of failed RPC dispatches.
    pub dev_mode: bool,
    /// Procedure routing table the bridge forwards into.
    pub rpc: Arc<Router>,
}

impl AppState {
    #[must_use]
    pub fn new(verifier: Option<Arc<dyn IdentityVerifier>>, dev_mode: bool, rpc: Router) -> Self {
        Self { verifier, dev_mode, rpc: Arc::new(rpc) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::identity::{CurrentUser, IdentityError};
    use async_trait::async_trait;
    use uuid::Uuid;

    /// Verifier that accepts exactly one token.
    pub struct StaticVerifier {
        token: String,
        user: CurrentUser,
    }

    #[async_trait]
    impl IdentityVerifier for StaticVerifier {
        async fn verify(&self, token: &str) -> Result<Option<CurrentUser>, IdentityError> {
            Ok((token == self.token).then(|| self.user.clone()))
        }
    }

    /// Verifier whose provider is always unreachable.
    pub struct FailingVerifier;

    #[async_trait]
    impl IdentityVerifier for FailingVerifier {
        async fn verify(&self, _token: &str) -> Result<Option<CurrentUser>, IdentityError> {
            Err(IdentityError::Request("connection refused".to_owned()))
        }
    }

    /// Create a dummy verified user for testing.
    #[must_use]
    pub fn dummy_user() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_owned(),
            name: "Alice".to_owned(),
            avatar_url: None,
        }
    }

    /// App state with no verifier configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, false, crate::rpc::procedures::router())
    }

    /// App state whose verifier accepts `token` for `user`.
    #[must_use]
    pub fn test_app_state_with_user(token: &str, user: CurrentUser) -> AppState {
        let verifier = StaticVerifier { token: token.to_owned(), user };
        AppState::new(Some(Arc::new(verifier)), false, crate::rpc::procedures::router())
    }

    /// App state whose verifier always errors.
    #[must_use]
    pub fn test_app_state_with_failing_verifier() -> AppState {
        AppState::new(Some(Arc::new(FailingVerifier)), false, crate::rpc::procedures::router())
    }
}
