//! Authorization gate.
//!
//! Turns a presented token into a `Principal` and checks it against the
//! access policy. Token failures are `Unauthenticated`; policy denials are
//! `Forbidden`.

mod policy;

use std::sync::Arc;

use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{UserId, UserRole};

use crate::token::{Claims, TokenService};

pub use policy::{AccessPolicy, Operation, Rule};

/// Authenticated identity extracted from a token.
///
/// Only the id and role are carried; the email claim is a login-time
/// snapshot and may be stale after a profile update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub role: UserRole,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

/// Claim extraction plus policy evaluation.
pub struct AccessGate {
    tokens: Arc<TokenService>,
    policy: AccessPolicy,
}

impl AccessGate {
    pub fn new(tokens: Arc<TokenService>, policy: AccessPolicy) -> Self {
        Self { tokens, policy }
    }

    /// Extract the principal from a raw token.
    pub fn authenticate(&self, token: &str) -> AppResult<Principal> {
        self.tokens
            .parse_claims(token)
            .map(Principal::from)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                AppError::from(e)
            })
    }

    /// Check an already-authenticated principal.
    pub fn authorize(
        &self,
        principal: &Principal,
        operation: Operation,
        target: Option<UserId>,
    ) -> AppResult<()> {
        if self.policy.permits(principal, operation, target) {
            Ok(())
        } else {
            warn!(
                user_id = %principal.user_id,
                role = %principal.role,
                ?operation,
                "Permission denied"
            );
            Err(AppError::Forbidden)
        }
    }

    /// Authenticate and authorize in one step.
    pub fn check(
        &self,
        token: &str,
        operation: Operation,
        target: Option<UserId>,
    ) -> AppResult<Principal> {
        let principal = self.authenticate(token)?;
        self.authorize(&principal, operation, target)?;
        Ok(principal)
    }
}
