// src/store/users.rs

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::user::{ProgressEntry, ProgressMap, User, progress_key},
    utils::hash::hash_password,
};

#[derive(Debug)]
struct UserTable {
    users: HashMap<i64, User>,
    next_id: i64,
}

/// Learners and their exercise progress.
///
/// The only state mutated at runtime. Every write happens while holding
/// the table's write guard, so concurrent progress updates for the same
/// user are applied one after another.
#[derive(Debug)]
pub struct UserStore {
    table: RwLock<UserTable>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn get_user(&self, id: i64) -> Option<User> {
        self.table.read().await.users.get(&id).cloned()
    }

    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.table
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Creates a user with an Argon2-hashed password.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        let hashed_password = hash_password(password)?;

        let mut table = self.table.write().await;
        if table.users.values().any(|u| u.username == username) {
            return Err(AppError::Conflict(format!(
                "Username '{}' already exists",
                username
            )));
        }
        Ok(insert_user(&mut table, username, hashed_password))
    }

    /// Returns the user with this name, creating it first if needed.
    /// Concurrent callers all observe the same user.
    pub async fn ensure_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        if let Some(user) = self.find_by_username(username).await {
            return Ok(user);
        }

        // Hash before taking the write guard; argon2 is slow.
        let hashed_password = hash_password(password)?;

        let mut table = self.table.write().await;
        if let Some(user) = table.users.values().find(|u| u.username == username) {
            return Ok(user.clone());
        }
        let user = insert_user(&mut table, username, hashed_password);
        tracing::info!(id = user.id, username = %user.username, "Learner created");
        Ok(user)
    }

    /// Merges one progress entry into the user's map and returns the full map.
    pub async fn record_progress(
        &self,
        user_id: i64,
        lesson_id: i64,
        exercise_id: i64,
        completed: bool,
        score: i32,
    ) -> Result<ProgressMap, AppError> {
        let mut table = self.table.write().await;
        let user = table
            .users
            .get_mut(&user_id)
            .ok_or(AppError::NotFound("User not found".to_string()))?;

        user.progress.insert(
            progress_key(lesson_id, exercise_id),
            ProgressEntry {
                completed,
                score,
                updated_at: Utc::now(),
            },
        );
        Ok(user.progress.clone())
    }
}

fn insert_user(table: &mut UserTable, username: &str, hashed_password: String) -> User {
    let id = table.next_id;
    table.next_id += 1;

    let user = User {
        id,
        username: username.to_string(),
        password: hashed_password,
        progress: ProgressMap::new(),
    };
    table.users.insert(id, user.clone());
    user
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn create_hashes_password_and_rejects_duplicates() {
        let store = UserStore::new();
        let user = store.create_user("ana", "secreto").await.unwrap();
        assert_eq!(user.id, 1);
        assert_ne!(user.password, "secreto");
        assert!(user.password.starts_with("$argon2"));

        let err = store.create_user("ana", "otro").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn ensure_user_is_idempotent() {
        let store = UserStore::new();
        let first = store.ensure_user("estudiante", "password").await.unwrap();
        let second = store.ensure_user("estudiante", "password").await.unwrap();
        assert_eq!(first.id, second.id);
        assert!(store.get_user(first.id).await.is_some());
        assert!(store.get_user(first.id + 1).await.is_none());
    }

    #[tokio::test]
    async fn progress_merges_by_exercise_key() {
        let store = UserStore::new();
        let user = store.ensure_user("estudiante", "password").await.unwrap();

        store.record_progress(user.id, 1, 1, false, 40).await.unwrap();
        store.record_progress(user.id, 2, 2, true, 100).await.unwrap();
        let progress = store.record_progress(user.id, 1, 1, true, 90).await.unwrap();

        assert_eq!(progress.len(), 2);
        assert!(progress["1-1"].completed);
        assert_eq!(progress["1-1"].score, 90);
        assert_eq!(progress["2-2"].score, 100);
    }

    #[tokio::test]
    async fn progress_for_unknown_user_is_not_found() {
        let store = UserStore::new();
        let err = store.record_progress(42, 1, 1, true, 100).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn concurrent_updates_are_not_lost() {
        let store = Arc::new(UserStore::new());
        let user_id = store.ensure_user("estudiante", "password").await.unwrap().id;

        let mut handles = Vec::new();
        for exercise_id in 1..=20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .record_progress(user_id, 1, exercise_id, true, 100)
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let user = store.get_user(user_id).await.unwrap();
        assert_eq!(user.progress.len(), 20);
    }
}
