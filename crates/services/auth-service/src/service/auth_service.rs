//! Authentication flow: signup, login and token verification.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use validator::ValidateEmail;

use common::{AppError, AppResult};
use domain::{
    DirectoryError, NewUser, Password, SecretHasher, User, UserId, UserRole, MAX_NAME_LENGTH,
    MIN_PASSWORD_LENGTH,
};

use super::hashing::{hash_secret, verify_secret};
use crate::directory::UserDirectory;
use crate::token::{Claims, IssuedToken, TokenService};

/// Secret hashed at construction to give unknown identifiers the same verify cost
const DUMMY_SECRET: &str = "timing-equalisation-placeholder";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with the restricted role. No token is issued.
    async fn sign_up(&self, new_user: NewUser) -> AppResult<User>;

    /// Register a user with an explicit role (startup seeding)
    async fn provision(&self, new_user: NewUser, role: UserRole) -> AppResult<User>;

    /// Check credentials and issue a session token
    async fn log_in(&self, email: &str, password: &str) -> AppResult<IssuedToken>;

    /// Verify a session token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// `AuthService` over a user directory, a secret hasher and the token service.
pub struct Authenticator {
    directory: Arc<dyn UserDirectory>,
    hasher: Arc<dyn SecretHasher>,
    tokens: Arc<TokenService>,
    dummy: Password,
}

impl Authenticator {
    /// Create the flow, hashing the dummy secret up front so no login pays for it.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<dyn SecretHasher>,
        tokens: Arc<TokenService>,
    ) -> AppResult<Self> {
        let dummy = hasher.hash(DUMMY_SECRET)?;

        Ok(Self {
            directory,
            hasher,
            tokens,
            dummy,
        })
    }

    async fn register(&self, new_user: NewUser, role: UserRole) -> AppResult<User> {
        check_new_user(&new_user)?;

        let NewUser {
            email,
            password,
            name,
        } = new_user;
        let hash = hash_secret(self.hasher.clone(), password).await?;
        let user = User::new(UserId::generate(), email, hash.into_string(), name, role);

        self.directory
            .create_user(user.clone())
            .await
            .map_err(|e| match e {
                DirectoryError::DuplicateIdentifier(_) => AppError::IdentifierAlreadyExists,
                other => AppError::persistence(other.to_string()),
            })?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }
}

fn check_new_user(new_user: &NewUser) -> AppResult<()> {
    if new_user.email.trim().is_empty() {
        return Err(AppError::invalid_input("email is required"));
    }
    check_email(&new_user.email)?;
    if new_user.name.trim().is_empty() || char_len(&new_user.name) > MAX_NAME_LENGTH {
        return Err(AppError::invalid_input(format!(
            "name must be 1 to {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if char_len(&new_user.password) < MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid_input(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

pub(crate) fn check_email(email: &str) -> AppResult<()> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(AppError::invalid_input("Invalid email format"))
    }
}

pub(crate) fn char_len(value: &str) -> u64 {
    value.chars().count() as u64
}

#[async_trait]
impl AuthService for Authenticator {
    async fn sign_up(&self, new_user: NewUser) -> AppResult<User> {
        self.register(new_user, UserRole::Employee).await
    }

    async fn provision(&self, new_user: NewUser, role: UserRole) -> AppResult<User> {
        self.register(new_user, role).await
    }

    async fn log_in(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let found = match self.directory.find_by_identifier(email).await {
            Ok(user) => Some(user),
            Err(DirectoryError::NotFound) => None,
            Err(e) => return Err(e.into()),
        };

        // Unknown identifiers still pay for one verification
        let stored = match &found {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => self.dummy.clone(),
        };
        let matched = verify_secret(self.hasher.clone(), stored, password.to_string()).await?;

        match found {
            Some(user) if matched => {
                let issued = self.tokens.issue(user.id, user.role, &user.email)?;
                info!(user_id = %user.id, "User logged in");
                Ok(issued)
            }
            _ => {
                warn!("Rejected login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.parse_claims(token).map_err(|e| {
            debug!("Token verification failed: {}", e);
            AppError::from(e)
        })
    }
}
