//! In-process RPC procedure routing.
//!
//! ARCHITECTURE
//! ============
//! The HTTP layer stays a thin adapter: it builds a [`Context`] from the
//! request and hands `(procedure, input)` to [`Router::dispatch`].
//! Procedures are plain async functions registered by name, so the routing
//! table is data the application supplies, not something the bridge owns.

pub mod error;
pub mod procedures;

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::services::identity::CurrentUser;
use error::RpcError;

/// Per-request call context handed to every procedure.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// Verified caller, when the request carried a valid bearer token.
    pub user: Option<CurrentUser>,
}

impl Context {
    /// Context for an unauthenticated call.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Require a signed-in caller.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::Unauthorized`] when no user is attached.
    pub fn require_user(&self) -> Result<&CurrentUser, RpcError> {
        self.user
            .as_ref()
            .ok_or_else(|| RpcError::Unauthorized("sign-in required".to_owned()))
    }
}

type ProcedureFuture = Pin<Box<dyn Future<Output = Result<Value, RpcError>> + Send>>;
type Procedure = Arc<dyn Fn(Context, Value) -> ProcedureFuture + Send + Sync>;

/// Name → procedure routing table.
#[derive(Clone, Default)]
pub struct Router {
    procedures: HashMap<String, Procedure>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a procedure under `name`. A later registration for the same
    /// name replaces the earlier one.
    #[must_use]
    pub fn procedure<F, Fut>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(Context, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, RpcError>> + Send + 'static,
    {
        self.procedures.insert(
            name.to_owned(),
            Arc::new(move |ctx, input| Box::pin(handler(ctx, input)) as ProcedureFuture),
        );
        self
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.procedures.contains_key(name)
    }

    /// Dispatch a call. Unknown names yield [`RpcError::NotFound`]; every
    /// other error comes from the procedure itself, unchanged.
    pub async fn dispatch(&self, name: &str, ctx: Context, input: Value) -> Result<Value, RpcError> {
        match self.procedures.get(name) {
            Some(procedure) => procedure(ctx, input).await,
            None => Err(RpcError::NotFound(name.to_owned())),
        }
    }
}
