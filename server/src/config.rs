//! Environment configuration helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup reads everything once from the process environment (after
//! `dotenvy` has loaded `.env`); the rest of the server receives plain
//! values through `AppState`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

const DEFAULT_PORT: u16 = 3000;

/// Parse a boolean environment variable. Accepts `1/true/yes/on` and
/// `0/false/no/off`, case-insensitive, surrounding whitespace ignored.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Listen port from `PORT`.
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub(crate) fn is_dev_env(app_env: Option<&str>) -> bool {
    match app_env {
        Some(value) => value.trim().to_ascii_lowercase() != "production",
        None => true,
    }
}

/// Development mode gates diagnostic logging of failed RPC dispatches.
///
/// `DEV_MODE` overrides explicitly; otherwise any `APP_ENV` other than
/// `production` counts as development.
pub fn dev_mode() -> bool {
    if let Some(value) = env_bool("DEV_MODE") {
        return value;
    }
    is_dev_env(std::env::var("APP_ENV").ok().as_deref())
}
