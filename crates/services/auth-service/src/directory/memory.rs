//! In-memory user directory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{BriefUser, DirectoryError, User, UserId, UserPatch};

use super::{DirectoryResult, UserDirectory};

/// `UserDirectory` backed by a map behind a single async lock.
///
/// Every mutation holds the write lock for its whole check-then-write, so
/// uniqueness checks and writes are atomic.
#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn email_taken(users: &HashMap<UserId, User>, email: &str, except: Option<UserId>) -> bool {
    users
        .values()
        .any(|u| u.email == email && Some(u.id) != except)
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn create_user(&self, user: User) -> DirectoryResult<()> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(DirectoryError::DuplicateId(user.id));
        }
        if email_taken(&users, &user.email, None) {
            return Err(DirectoryError::DuplicateIdentifier(user.email));
        }

        users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_identifier(&self, email: &str) -> DirectoryResult<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(DirectoryError::NotFound)
    }

    async fn find_by_id(&self, id: UserId) -> DirectoryResult<User> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DirectoryError::NotFound)
    }

    async fn list_brief(&self, limit: u64, offset: u64) -> DirectoryResult<Vec<BriefUser>> {
        let users = self.users.read().await;
        let mut rows: Vec<BriefUser> = users.values().map(BriefUser::from).collect();
        rows.sort_by_key(|u| u.id);

        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> DirectoryResult<()> {
        let mut users = self.users.write().await;

        if !users.contains_key(&id) {
            return Err(DirectoryError::NotFound);
        }
        if let Some(email) = &patch.email {
            if email_taken(&users, email, Some(id)) {
                return Err(DirectoryError::DuplicateIdentifier(email.clone()));
            }
        }

        let user = users.get_mut(&id).ok_or(DirectoryError::NotFound)?;
        user.apply(patch);
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> DirectoryResult<()> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(DirectoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserRole;

    fn user(id: u64, email: &str) -> User {
        User::new(
            UserId::new(id),
            email.to_string(),
            "hash".to_string(),
            format!("user{}", id),
            UserRole::Employee,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let dir = InMemoryDirectory::new();
        dir.create_user(user(1, "a@example.com")).await.unwrap();

        assert_eq!(dir.find_by_id(UserId::new(1)).await.unwrap().email, "a@example.com");
        assert_eq!(
            dir.find_by_identifier("a@example.com").await.unwrap().id,
            UserId::new(1)
        );
        assert_eq!(dir.find_by_id(UserId::new(2)).await, Err(DirectoryError::NotFound));
        assert_eq!(
            dir.find_by_identifier("nobody@example.com").await,
            Err(DirectoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_duplicates_rejected() {
        let dir = InMemoryDirectory::new();
        dir.create_user(user(1, "a@example.com")).await.unwrap();

        assert_eq!(
            dir.create_user(user(2, "a@example.com")).await,
            Err(DirectoryError::DuplicateIdentifier("a@example.com".to_string()))
        );
        assert_eq!(
            dir.create_user(user(1, "b@example.com")).await,
            Err(DirectoryError::DuplicateId(UserId::new(1)))
        );
        assert_eq!(dir.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_brief_pages_in_id_order() {
        let dir = InMemoryDirectory::new();
        for id in [5, 3, 9, 1] {
            dir.create_user(user(id, &format!("{}@example.com", id)))
                .await
                .unwrap();
        }

        let first: Vec<u64> = dir
            .list_brief(2, 0)
            .await
            .unwrap()
            .iter()
            .map(|u| u.id.get())
            .collect();
        assert_eq!(first, vec![1, 3]);

        let second: Vec<u64> = dir
            .list_brief(2, 2)
            .await
            .unwrap()
            .iter()
            .map(|u| u.id.get())
            .collect();
        assert_eq!(second, vec![5, 9]);

        assert!(dir.list_brief(2, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_taken_email() {
        let dir = InMemoryDirectory::new();
        dir.create_user(user(1, "a@example.com")).await.unwrap();
        dir.create_user(user(2, "b@example.com")).await.unwrap();

        let patch = UserPatch {
            email: Some("a@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            dir.update_user(UserId::new(2), patch).await,
            Err(DirectoryError::DuplicateIdentifier(_))
        ));

        // Re-setting one's own email is not a conflict
        let patch = UserPatch {
            email: Some("b@example.com".to_string()),
            ..Default::default()
        };
        assert!(dir.update_user(UserId::new(2), patch).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let dir = InMemoryDirectory::new();
        assert_eq!(
            dir.update_user(UserId::new(1), UserPatch::default()).await,
            Err(DirectoryError::NotFound)
        );
        assert_eq!(dir.delete_user(UserId::new(1)).await, Err(DirectoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_is_terminal() {
        let dir = InMemoryDirectory::new();
        dir.create_user(user(1, "a@example.com")).await.unwrap();
        dir.delete_user(UserId::new(1)).await.unwrap();

        assert!(dir.is_empty().await);
        assert_eq!(dir.delete_user(UserId::new(1)).await, Err(DirectoryError::NotFound));
    }
}
