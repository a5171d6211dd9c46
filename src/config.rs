//! Runtime configuration for the storefront client.
//!
//! The server may embed a JSON object in
//! `<script type="application/json" id="storefront-config">` to override the
//! defaults below. A missing element means defaults; a malformed one is logged
//! and ignored so a bad template never disables the cart.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_CART_STORAGE_KEY: &str = "carrito";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 1800;
pub const DEFAULT_PROCESSING_LABEL: &str = "Procesando...";

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

/// Error returned by [`StorefrontConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// `localStorage` key holding the serialized cart.
    pub cart_storage_key: String,
    /// How long a toast stays on screen before it is removed.
    pub toast_duration_ms: u32,
    /// Label shown on a submit button while its form is being submitted.
    pub processing_label: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_storage_key: DEFAULT_CART_STORAGE_KEY.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            processing_label: DEFAULT_PROCESSING_LABEL.to_owned(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a JSON override. Absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config from the optional embedded JSON.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("storefront config ignored: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cart_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("cart_storage_key must not be empty"));
        }
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::Invalid("toast_duration_ms must be positive"));
        }
        Ok(())
    }
}
