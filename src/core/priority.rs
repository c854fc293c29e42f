//! Sitemap entry priority.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sitemap priority in the range `0.0..=1.0`.
///
/// Rendered with one decimal place (`0.5`), matching the sitemap protocol
/// examples and keeping output byte-stable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Priority(f64);

impl Priority {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Priority {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("priority {value} out of range 0.0..=1.0"))
        }
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_range() {
        assert!(Priority::try_from(0.0).is_ok());
        assert!(Priority::try_from(1.0).is_ok());
        assert!(Priority::try_from(-0.1).is_err());
        assert!(Priority::try_from(1.1).is_err());
    }

    #[test]
    fn test_priority_display() {
        let p = Priority::try_from(0.5).unwrap();
        assert_eq!(p.to_string(), "0.5");
        let p = Priority::try_from(1.0).unwrap();
        assert_eq!(p.to_string(), "1.0");
    }
}
