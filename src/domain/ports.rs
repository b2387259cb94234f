use async_trait::async_trait;

use super::errors::AdminApiError;
use super::models::{CreateUserRequest, CreateUserResponse};

/// Administrative user-management surface of the hosted auth service
///
/// Implemented over HTTP by `SupabaseAdminClient`; tests substitute
/// in-memory doubles.
#[async_trait]
pub trait AdminAuthClient: Send + Sync {
    /// Create a user account
    ///
    /// # Returns
    /// * `Ok(response)` when the platform accepted the request; `response.user`
    ///   may still be `None`
    /// * `Err(AdminApiError)` on transport or remote failure
    async fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<CreateUserResponse, AdminApiError>;
}
