//! In-memory user directory.
//!
//! Backs the user administration screen: listing, search, invitations,
//! status switches, removal and the single save of an edited user.

use chrono::{DateTime, Utc};
use maestro_common::{Role, UserStatus};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use super::models::{InviteUserRequest, User, DEFAULT_JOB_TITLE};
use super::seed::seed_users;
use crate::error::{AuthzError, AuthzResult};

/// Per-status user counts for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

/// Trimmed, lowercased form used for every email and search comparison.
fn fold_case(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Users in display order, newest invitation first.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory holding the demo accounts.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: Uuid) -> AuthzResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(AuthzError::UserNotFound(id))
    }

    /// Case-insensitive email lookup.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let wanted = fold_case(email);
        self.users.iter().find(|u| fold_case(&u.email) == wanted)
    }

    /// Users whose name, email or job title contains `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&User> {
        let needle = fold_case(query);
        self.users
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || fold_case(&u.name).contains(&needle)
                    || fold_case(&u.email).contains(&needle)
                    || fold_case(&u.job_title).contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        self.users
            .iter()
            .fold(StatusCounts::default(), |mut counts, u| {
                counts.total += 1;
                match u.status {
                    UserStatus::Active => counts.active += 1,
                    UserStatus::Pending => counts.pending += 1,
                    UserStatus::Inactive => counts.inactive += 1,
                }
                counts
            })
    }

    /// Invite a new user.
    ///
    /// The user starts pending, with no access recorded and the default
    /// permissions of the requested role (viewer when none is given).
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub fn invite(&mut self, request: InviteUserRequest) -> AuthzResult<User> {
        request
            .validate()
            .map_err(|e| AuthzError::Validation(e.to_string()))?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(AuthzError::Validation("name must not be blank".into()));
        }
        let email = request.email.trim();
        if self.find_by_email(email).is_some() {
            return Err(AuthzError::DuplicateEmail(email.to_string()));
        }

        let job_title = request
            .job_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_JOB_TITLE);
        let user = User::new(
            name,
            email,
            job_title,
            request.role.unwrap_or(Role::Viewer),
        );

        tracing::info!(user_id = %user.id, role = %user.role(), "User invited");
        self.users.insert(0, user.clone());
        Ok(user)
    }

    /// Commit an edited user. The stored user with the same id is replaced
    /// by `user` as a whole, with its email trimmed.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    pub fn save(&mut self, mut user: User) -> AuthzResult<()> {
        user.email = user.email.trim().to_string();
        if self
            .find_by_email(&user.email)
            .is_some_and(|other| other.id != user.id)
        {
            return Err(AuthzError::DuplicateEmail(user.email));
        }

        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AuthzError::UserNotFound(user.id))?;
        *slot = user;

        tracing::info!("User saved");
        Ok(())
    }

    /// Flip a user between active and inactive; pending users become active.
    #[tracing::instrument(skip(self))]
    pub fn toggle_status(&mut self, id: Uuid) -> AuthzResult<UserStatus> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AuthzError::UserNotFound(id))?;
        user.status = user.status.toggled();

        tracing::info!(status = %user.status, "User status changed");
        Ok(user.status)
    }

    /// Stamp the last access time of a user.
    #[tracing::instrument(skip(self))]
    pub fn record_access(&mut self, id: Uuid, at: DateTime<Utc>) -> AuthzResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AuthzError::UserNotFound(id))?;
        user.last_access = Some(at);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: Uuid) -> AuthzResult<User> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AuthzError::UserNotFound(id))?;

        tracing::info!("User removed");
        Ok(self.users.remove(index))
    }
}
