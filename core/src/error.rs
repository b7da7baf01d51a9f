//! Error types for the overlay core

use thiserror::Error;

/// Errors reported by a [`HudSurface`](crate::HudSurface) while attaching the panel
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("host UI root is not available yet")]
    UiRootMissing,

    #[error("failed to attach panel: {reason}")]
    Attach { reason: String },
}

/// Errors while resolving the optional effective-level lookup
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("effective level lookup is not supported by this host")]
    Unsupported,

    #[error("effective level lookup could not be resolved: {0}")]
    Unresolved(String),
}

/// Errors while loading or validating overlay settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse overlay settings")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
