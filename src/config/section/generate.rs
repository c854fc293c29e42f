//! `[generate]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [generate]
//! threads = 0       # worker threads for record expansion (0 = all cores)
//! minify = false    # strip whitespace from generated XML
//! ```

use serde::{Deserialize, Serialize};

/// Generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Worker threads for record expansion. `0` uses all cores.
    pub threads: usize,

    /// Strip indentation and empty lines from generated XML.
    pub minify: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            minify: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_generate_config() {
        let config = test_parse_config("[generate]\nthreads = 4\nminify = true");
        assert_eq!(config.generate.threads, 4);
        assert!(config.generate.minify);
    }

    #[test]
    fn test_generate_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.generate.threads, 0);
        assert!(!config.generate.minify);
    }
}
