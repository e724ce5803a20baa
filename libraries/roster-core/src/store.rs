//! In-memory user store
//!
//! An ordered `Vec<User>` plus the next-id counter, both behind one mutex.
//! Every public operation takes the lock exactly once, so check-then-mutate
//! sequences (uniqueness check + insert, lookup + replace) and the counter
//! increment cannot interleave with other requests.

use crate::error::{Result, RosterError};
use crate::types::{NewUser, User, UserId, UserPatch};
use crate::validation;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: UserId) -> Result<usize> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| RosterError::not_found(id))
    }
}

/// Authoritative collection of users for the lifetime of the process
#[derive(Debug)]
pub struct UserStore {
    inner: Mutex<Inner>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Empty store; the first user gets id 1
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store holding `users` in the given order
    ///
    /// The counter starts above the largest id present.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: Vec<User> = users.into_iter().collect();
        let next_id = users.iter().map(|u| u.id.get()).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner { users, next_id }),
        }
    }

    /// Store preloaded with the two demo accounts
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::with_users([
            User::new(
                UserId::new(1),
                "Alice Johnson".to_string(),
                "alice@example.com".to_string(),
                now,
            ),
            User::new(
                UserId::new(2),
                "Bob Smith".to_string(),
                "bob@example.com".to_string(),
                now,
            ),
        ])
    }

    // A panic while the lock is held cannot leave the Vec half-mutated, so
    // poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All users in insertion order
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.lock().users.is_empty()
    }

    /// Look up a user by id
    pub fn find_by_id(&self, id: UserId) -> Result<User> {
        let inner = self.lock();
        let idx = inner.position(id)?;
        Ok(inner.users[idx].clone())
    }

    /// First user (in insertion order) holding `email`, skipping `exclude`
    pub fn find_by_email(&self, email: &str, exclude: Option<UserId>) -> Option<User> {
        self.lock()
            .users
            .iter()
            .find(|user| Some(user.id) != exclude && user.email == email)
            .cloned()
    }

    /// Validate and append a new user
    pub fn insert(&self, new_user: NewUser) -> Result<User> {
        self.insert_at(new_user, Utc::now())
    }

    fn insert_at(&self, new_user: NewUser, now: DateTime<Utc>) -> Result<User> {
        validation::require("name", &new_user.name)?;
        validation::require("email", &new_user.email)?;
        validation::validate_email(&new_user.email)?;

        let mut inner = self.lock();
        validation::ensure_email_available(&inner.users, &new_user.email, None)?;

        let user = User::new(UserId::new(inner.next_id), new_user.name, new_user.email, now);
        inner.users.push(user.clone());
        inner.next_id += 1;

        tracing::debug!(id = %user.id, "inserted user");
        Ok(user)
    }

    /// Replace the supplied fields of user `id` and refresh `updated_at`
    ///
    /// All checks run before any field is written.
    pub fn update_partial(&self, id: UserId, patch: UserPatch) -> Result<User> {
        self.update_partial_at(id, patch, Utc::now())
    }

    fn update_partial_at(
        &self,
        id: UserId,
        patch: UserPatch,
        now: DateTime<Utc>,
    ) -> Result<User> {
        let name = validation::normalize_patch_field(patch.name);
        let email = validation::normalize_patch_field(patch.email);

        let mut inner = self.lock();
        let idx = inner.position(id)?;

        if let Some(email) = &email {
            validation::validate_email(email)?;
            validation::ensure_email_available(&inner.users, email, Some(id))?;
        }

        let user = &mut inner.users[idx];
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        user.updated_at = now.max(user.created_at);

        tracing::debug!(id = %id, "updated user");
        Ok(user.clone())
    }

    /// Remove user `id`, keeping the order of the rest
    pub fn delete(&self, id: UserId) -> Result<User> {
        let mut inner = self.lock();
        let idx = inner.position(id)?;
        let removed = inner.users.remove(idx);

        tracing::debug!(id = %id, "deleted user");
        Ok(removed)
    }
}
