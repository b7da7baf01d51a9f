//! Overlay settings loading and validation
//!
//! Settings types live in skill-overlay-types; this module adds TOML parsing
//! and the range checks the core relies on.

pub use skill_overlay_types::{Color, OverlaySettings, PanelAnchor, overlay_colors};

use crate::error::SettingsError;

/// Extension trait for parsing and validating [`OverlaySettings`]
pub trait OverlaySettingsExt: Sized {
    fn from_toml_str(text: &str) -> Result<Self, SettingsError>;
    fn validate(&self) -> Result<(), SettingsError>;
}

impl OverlaySettingsExt for OverlaySettings {
    /// Parse settings from TOML. Missing fields take their defaults.
    fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: OverlaySettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(self.refresh_interval.is_finite() && self.refresh_interval > 0.0) {
            return Err(invalid("refresh_interval", "must be a positive number"));
        }
        if !(self.show_delay.is_finite() && self.show_delay >= 0.0) {
            return Err(invalid("show_delay", "must be zero or a positive number"));
        }
        if !self.level_threshold.is_finite() {
            return Err(invalid("level_threshold", "must be a finite number"));
        }
        if !(self.max_level.is_finite() && self.max_level > 0.0) {
            return Err(invalid("max_level", "must be a positive number"));
        }
        for (field, value) in [
            ("bar_width", self.bar_width),
            ("bar_height", self.bar_height),
            ("row_height", self.row_height),
            ("icon_size", self.icon_size),
            ("font_size", self.font_size),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, "must be zero or a positive number"));
            }
        }
        Ok(())
    }
}

/// Parse settings from TOML text supplied by the host glue
pub fn parse_settings(text: &str) -> Result<OverlaySettings, SettingsError> {
    OverlaySettings::from_toml_str(text)
}

fn invalid(field: &'static str, reason: &'static str) -> SettingsError {
    SettingsError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, OverlaySettings::default());
        assert_eq!(settings.refresh_interval, 1.0);
        assert_eq!(settings.show_delay, 0.5);
        assert_eq!(settings.level_threshold, 15.0);
        assert_eq!(settings.bar_width, 120.0);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings = parse_settings(
            r#"
            refresh_interval = 2.0
            label_color = [10, 20, 30, 255]

            [anchor]
            y = -40.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.refresh_interval, 2.0);
        assert_eq!(settings.label_color, [10, 20, 30, 255]);
        assert_eq!(settings.anchor.x, 15.0);
        assert_eq!(settings.anchor.y, -40.0);
        assert_eq!(settings.show_delay, 0.5);
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        let err = parse_settings("refresh_interval = 0.0").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "refresh_interval",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_show_delay() {
        let settings = OverlaySettings {
            show_delay: -0.1,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = parse_settings("refresh_interval = \"soon\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
