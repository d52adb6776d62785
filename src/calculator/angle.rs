use std::fmt;

use serde::Deserialize;

/// How trigonometric operators interpret their operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    Degrees,
    #[default]
    Radians,
}

impl AngleMode {
    /// Convert an angle given in this mode to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_radians(),
            Self::Radians => value,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => f.write_str("degrees"),
            Self::Radians => f.write_str("radians"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_conversion() {
        assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
        assert!((AngleMode::Degrees.to_radians(180.0) - PI).abs() < 1e-15);
    }

    #[test]
    fn test_large_degrees_stay_finite() {
        let radians = AngleMode::Degrees.to_radians(1e308);
        assert!(radians.is_finite());
        assert_eq!(radians, 1e308 * (PI / 180.0));
        assert!(AngleMode::Degrees.to_radians(-f64::MAX).is_finite());
    }
}
