use shared::constants::{API_PREFIX, TUNING_STORAGE_KEY};
use shared::roulette_engine::SpinTuning;
use web_sys::window;

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            // Same-origin deployments proxy /api to the club API
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}{}", protocol, host, API_PREFIX);
        }
    }

    // Default to 127.0.0.1 for development
    format!("http://127.0.0.1:3000{}", API_PREFIX)
}

pub fn api_url(endpoint: &str) -> String {
    format!("{}{}", get_api_base_url(), endpoint)
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") || path.is_empty() {
        path.to_string()
    } else {
        let base = get_api_base_url();
        let origin = base.strip_suffix(API_PREFIX).unwrap_or(&base);
        format!("{}{}", origin, path)
    }
}

/// Wheel tuning, optionally overridden with JSON under `roulette_tuning` in
/// local storage.
pub fn spin_tuning() -> SpinTuning {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(TUNING_STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => match serde_json::from_str::<SpinTuning>(&json) {
            Ok(tuning) => tuning.sanitized(),
            Err(e) => {
                log::warn!("Ignoring stored wheel tuning: {}", e);
                SpinTuning::default()
            }
        },
        None => SpinTuning::default(),
    }
}
