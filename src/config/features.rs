//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Show detailed error messages in HTTP error bodies (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Fall back to the compiled-in content when no content path is set
    #[serde(default = "default_bundled_content")]
    pub bundled_content: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            bundled_content: default_bundled_content(),
        }
    }
}

fn default_bundled_content() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.verbose_errors);
        assert!(flags.bundled_content);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "verbose_errors": true,
            "bundled_content": false
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(flags.verbose_errors);
        assert!(!flags.bundled_content);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(!flags.verbose_errors);
        assert!(flags.bundled_content);
    }
}
