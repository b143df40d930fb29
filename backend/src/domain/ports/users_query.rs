//! Driving port for user profile lookups.

use async_trait::async_trait;

use crate::domain::UserProfile;

use super::CatalogueReadError;

/// Read-side port resolving a user id to a profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the profile for `user_id`, or `None` when no such user exists.
    async fn find_user(&self, user_id: u32) -> Result<Option<UserProfile>, CatalogueReadError>;
}
