pub mod client;

pub use client::{SupabaseAdminClient, ADMIN_USERS_PATH};
