//! Sitemap change frequency values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `<changefreq>` values defined by the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        changefreq: ChangeFreq,
    }

    #[test]
    fn test_changefreq_parse() {
        let w: Wrapper = toml::from_str("changefreq = \"weekly\"").unwrap();
        assert_eq!(w.changefreq, ChangeFreq::Weekly);
        assert_eq!(w.changefreq.as_str(), "weekly");
    }

    #[test]
    fn test_changefreq_rejects_unknown() {
        assert!(toml::from_str::<Wrapper>("changefreq = \"sometimes\"").is_err());
    }
}
