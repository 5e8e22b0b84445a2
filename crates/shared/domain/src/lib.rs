//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users and roles, the password value object with its hashing seam, and the
//! failure contract of the user directory.

pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DirectoryError, DomainError, DomainResult};
pub use password::{Argon2Hasher, HashCost, Password, SecretHasher};
pub use user::{
    BriefUser, NewUser, User, UserChanges, UserId, UserPatch, UserResponse, UserRole,
};
