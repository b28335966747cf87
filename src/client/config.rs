//! Client-wide constants: API location and persisted storage keys.

/// Base URL of the backend API.
pub const API_BASE_URL: &str = "http://localhost:4000";

/// Local-storage key holding the bearer credential.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Local-storage key holding the persisted identity blob.
pub const USER_STORAGE_KEY: &str = "userData";

/// Local-storage key holding the remembered login username.
pub const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";

/// Milliseconds a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS_MS: u32 = 3_000;

/// Rows per page on the inventory table.
pub const ITEMS_PER_PAGE: usize = 10;

/// Full URL for a path under the API base.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}
