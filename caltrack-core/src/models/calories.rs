use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// A quantity of kilocalories.
///
/// Always finite and non-negative. Construct with [`Calories::new`] or by
/// parsing a string; both reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Calories(f64);

impl Calories {
    pub const ZERO: Calories = Calories(0.0);

    /// Daily limit used when none has been configured or persisted.
    pub const DEFAULT_LIMIT: Calories = Calories(2000.0);

    pub fn new(value: f64) -> Result<Self, TrackerError> {
        if value.is_finite() && value >= 0.0 {
            // abs() folds -0.0 into 0.0
            Ok(Self(value.abs()))
        } else {
            Err(TrackerError::InvalidCalories(value.to_string()))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Calories {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| TrackerError::InvalidCalories(s.to_string()))?;
        Calories::new(value).map_err(|_| TrackerError::InvalidCalories(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Calories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Calories::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_new_accepts_non_negative() {
        assert_eq!(Calories::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Calories::new(450.5).unwrap().value(), 450.5);
    }

    #[test]
    fn test_calories_new_rejects_invalid() {
        assert!(Calories::new(-1.0).is_err());
        assert!(Calories::new(f64::NAN).is_err());
        assert!(Calories::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_calories_negative_zero_normalized() {
        let zero = Calories::new(-0.0).unwrap();
        assert!(zero.value().is_sign_positive());
    }

    #[test]
    fn test_calories_from_str() {
        assert_eq!("400".parse::<Calories>().unwrap().value(), 400.0);
        assert_eq!(" 12.5 ".parse::<Calories>().unwrap().value(), 12.5);
    }

    #[test]
    fn test_calories_from_str_invalid() {
        let err = "abc".parse::<Calories>().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidCalories(ref s) if s == "abc"));
        assert!("-300".parse::<Calories>().is_err());
        assert!("NaN".parse::<Calories>().is_err());
        assert!("inf".parse::<Calories>().is_err());
        assert!("".parse::<Calories>().is_err());
    }

    #[test]
    fn test_calories_display_drops_trailing_zero() {
        assert_eq!(Calories::new(2000.0).unwrap().to_string(), "2000");
        assert_eq!(Calories::new(12.5).unwrap().to_string(), "12.5");
    }

    #[test]
    fn test_calories_json_is_bare_number() {
        let json = serde_json::to_string(&Calories::new(300.0).unwrap()).unwrap();
        assert_eq!(json, "300.0");

        let parsed: Calories = serde_json::from_str("250").unwrap();
        assert_eq!(parsed.value(), 250.0);
    }

    #[test]
    fn test_calories_json_rejects_negative() {
        let result: Result<Calories, _> = serde_json::from_str("-5");
        assert!(result.is_err());
    }
}
