//! Validation configuration.

/// Configuration for catalog-backed validation.
///
/// Set at construction and immutable thereafter; components copy the flag they
/// need instead of consulting a global toggle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    catalog_check_enabled: bool,
}

impl ValidationConfig {
    pub fn new(catalog_check_enabled: bool) -> Self {
        Self {
            catalog_check_enabled,
        }
    }

    /// Catalog-existence checks enforced.
    pub fn enabled() -> Self {
        Self::new(true)
    }

    /// Catalog-existence checks skipped entirely.
    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn catalog_check_enabled(&self) -> bool {
        self.catalog_check_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_round_trips_for_both_values() {
        assert!(ValidationConfig::new(true).catalog_check_enabled());
        assert!(!ValidationConfig::new(false).catalog_check_enabled());
        assert!(ValidationConfig::enabled().catalog_check_enabled());
        assert!(!ValidationConfig::disabled().catalog_check_enabled());
    }
}
