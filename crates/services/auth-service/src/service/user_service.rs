//! User service - profile reads, listing, self-updates and deletion.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use common::{AppError, AppResult};
use domain::{
    BriefUser, SecretHasher, User, UserChanges, UserId, UserPatch, MAX_NAME_LENGTH,
    MIN_PASSWORD_LENGTH,
};

use super::auth_service::{char_len, check_email};
use super::hashing::hash_secret;
use crate::directory::UserDirectory;
use crate::pagination::PageRequest;

/// User service trait for dependency injection.
///
/// Callers are expected to have passed the access gate already.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get a user by id
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List user summaries for one page
    async fn list_users(&self, page: PageRequest) -> AppResult<Vec<BriefUser>>;

    /// Apply profile changes and return the updated record
    async fn update_user(&self, id: UserId, changes: UserChanges) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService over the user directory.
pub struct UserManager {
    directory: Arc<dyn UserDirectory>,
    hasher: Arc<dyn SecretHasher>,
}

impl UserManager {
    pub fn new(directory: Arc<dyn UserDirectory>, hasher: Arc<dyn SecretHasher>) -> Self {
        Self { directory, hasher }
    }

    /// Turn requested changes into a directory patch, hashing a new password.
    async fn to_patch(&self, changes: UserChanges) -> AppResult<UserPatch> {
        let UserChanges {
            name,
            email,
            password,
        } = changes;
        let name = non_empty(name);
        let email = non_empty(email);
        let password = non_empty(password);

        if let Some(email) = &email {
            check_email(email)?;
        }
        if let Some(name) = &name {
            if char_len(name) > MAX_NAME_LENGTH {
                return Err(AppError::invalid_input(format!(
                    "name must be at most {} characters",
                    MAX_NAME_LENGTH
                )));
            }
        }

        let password_hash = match password {
            Some(plain) => {
                if char_len(&plain) < MIN_PASSWORD_LENGTH {
                    return Err(AppError::invalid_input(format!(
                        "password must be at least {} characters",
                        MIN_PASSWORD_LENGTH
                    )));
                }
                Some(hash_secret(self.hasher.clone(), plain).await?.into_string())
            }
            None => None,
        };

        Ok(UserPatch {
            name,
            email,
            password_hash,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: UserId) -> AppResult<User> {
        Ok(self.directory.find_by_id(id).await?)
    }

    async fn list_users(&self, page: PageRequest) -> AppResult<Vec<BriefUser>> {
        debug!(page = page.page(), limit = page.limit(), "Listing users");
        Ok(self
            .directory
            .list_brief(page.limit(), page.offset())
            .await?)
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> AppResult<User> {
        let patch = self.to_patch(changes).await?;

        if patch.is_empty() {
            debug!(user_id = %id, "Empty update, returning current record");
            return self.get_user(id).await;
        }

        self.directory.update_user(id, patch).await?;
        info!(user_id = %id, "User updated");
        self.get_user(id).await
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.directory.delete_user(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockUserDirectory;
    use domain::{Argon2Hasher, DirectoryError, HashCost, UserRole};
    use mockall::predicate::eq;

    fn hasher() -> Arc<dyn SecretHasher> {
        Arc::new(
            Argon2Hasher::new(HashCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            })
            .unwrap(),
        )
    }

    fn create_test_user(id: UserId) -> User {
        User::new(
            id,
            "budi@example.com".to_string(),
            "$argon2id$stored".to_string(),
            "Budi".to_string(),
            UserRole::Employee,
        )
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let user_id = UserId::new(7);

        let mut directory = MockUserDirectory::new();
        directory
            .expect_find_by_id()
            .with(eq(user_id))
            .returning(|id| Ok(create_test_user(id)));

        let service = UserManager::new(Arc::new(directory), hasher());
        let user = service.get_user(user_id).await.unwrap();
        assert_eq!(user.id, user_id);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_find_by_id()
            .returning(|_| Err(DirectoryError::NotFound));

        let service = UserManager::new(Arc::new(directory), hasher());
        let result = service.get_user(UserId::new(7)).await;
        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_list_users_passes_limit_and_offset() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_list_brief()
            .with(eq(10), eq(20))
            .returning(|_, _| Ok(vec![BriefUser::from(&create_test_user(UserId::new(1)))]));

        let service = UserManager::new(Arc::new(directory), hasher());
        let page = PageRequest::new(3, 10).unwrap();
        assert_eq!(service.list_users(page).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_hashes_new_password() {
        let user_id = UserId::new(7);

        let mut directory = MockUserDirectory::new();
        directory
            .expect_update_user()
            .withf(|_, patch| {
                patch.name.is_none()
                    && patch
                        .password_hash
                        .as_deref()
                        .map_or(false, |h| h.starts_with("$argon2id$"))
            })
            .times(1)
            .returning(|_, _| Ok(()));
        directory
            .expect_find_by_id()
            .returning(|id| Ok(create_test_user(id)));

        let service = UserManager::new(Arc::new(directory), hasher());
        let changes = UserChanges {
            password: Some("baru12345".to_string()),
            ..Default::default()
        };
        assert!(service.update_user(user_id, changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_with_empty_password_keeps_hash() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_update_user()
            .withf(|_, patch| {
                patch.password_hash.is_none() && patch.name.as_deref() == Some("Budi S")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        directory
            .expect_find_by_id()
            .returning(|id| Ok(create_test_user(id)));

        let service = UserManager::new(Arc::new(directory), hasher());
        let changes = UserChanges {
            name: Some("Budi S".to_string()),
            password: Some(String::new()),
            ..Default::default()
        };
        assert!(service.update_user(UserId::new(7), changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_update_issues_no_mutation() {
        let mut directory = MockUserDirectory::new();
        directory.expect_update_user().never();
        directory
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(create_test_user(id)));

        let service = UserManager::new(Arc::new(directory), hasher());
        assert!(service
            .update_user(UserId::new(7), UserChanges::default())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_email() {
        let mut directory = MockUserDirectory::new();
        directory.expect_update_user().never();

        let service = UserManager::new(Arc::new(directory), hasher());
        let changes = UserChanges {
            email: Some("bukan-email".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update_user(UserId::new(7), changes).await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_fields_are_absent() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_update_user()
            .withf(|_, patch| {
                patch.name.as_deref() == Some("Budi S")
                    && patch.email.is_none()
                    && patch.password_hash.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(()));
        directory
            .expect_find_by_id()
            .returning(|id| Ok(create_test_user(id)));

        let service = UserManager::new(Arc::new(directory), hasher());
        let changes = UserChanges {
            name: Some("Budi S".to_string()),
            email: Some(String::new()),
            password: Some("  ".to_string()),
        };
        assert!(service.update_user(UserId::new(7), changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_update_user()
            .returning(|_, _| Err(DirectoryError::NotFound));

        let service = UserManager::new(Arc::new(directory), hasher());
        let changes = UserChanges {
            name: Some("Budi".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update_user(UserId::new(7), changes).await,
            Err(AppError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_to_taken_email_conflicts() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_update_user()
            .returning(|_, patch| {
                Err(DirectoryError::DuplicateIdentifier(patch.email.unwrap_or_default()))
            });

        let service = UserManager::new(Arc::new(directory), hasher());
        let changes = UserChanges {
            email: Some("taken@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update_user(UserId::new(7), changes).await,
            Err(AppError::IdentifierAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_delete_user()
            .with(eq(UserId::new(7)))
            .returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(directory), hasher());
        assert!(service.delete_user(UserId::new(7)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_delete_user()
            .returning(|_| Err(DirectoryError::NotFound));

        let service = UserManager::new(Arc::new(directory), hasher());
        assert!(matches!(
            service.delete_user(UserId::new(7)).await,
            Err(AppError::UserNotFound)
        ));
    }
}
