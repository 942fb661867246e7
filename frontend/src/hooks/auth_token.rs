use shared::constants::TOKEN_STORAGE_KEY;
use web_sys::window;

use crate::error::ApiError;

// Session login writes to sessionStorage, "remember me" to localStorage
pub fn get_auth_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .or_else(|| window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten()))
        .filter(|token| !token.is_empty())
}

pub fn bearer_header() -> Result<String, ApiError> {
    get_auth_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::Unauthenticated)
}
