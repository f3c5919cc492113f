// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared panel sizes and their normalization into percentages.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// A declared panel size, either relative to the container or in pixels.
///
/// Sizes are written the way hosts usually spell them: `"40%"` is a
/// percentage, while `"240px"` and a bare `"240"` are pixel lengths.
///
/// ```
/// use understory_splitter::PanelSize;
///
/// let size: PanelSize = "40%".parse().unwrap();
/// assert_eq!(size, PanelSize::Percent(40.0));
/// assert_eq!(size.resolve(800.0), Some(40.0));
///
/// let size: PanelSize = "200px".parse().unwrap();
/// assert_eq!(size.resolve(800.0), Some(25.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum PanelSize {
    /// Percentage of the container's main-axis extent.
    Percent(f64),
    /// Absolute length in the container's coordinate space (logical pixels).
    Pixels(f64),
}

impl PanelSize {
    /// Converts this size into a percentage of `container`.
    ///
    /// Returns `None` when the size cannot be normalized yet: pixel lengths
    /// against a container that has not been measured (`container <= 0`), or
    /// non-finite values. Callers treat `None` as "unset".
    ///
    /// The result is clamped to `[0, 100]`.
    #[must_use]
    pub fn resolve(self, container: f64) -> Option<f64> {
        let percent = match self {
            Self::Percent(p) => p,
            Self::Pixels(px) if container > 0.0 => percent_of(px, container),
            Self::Pixels(_) => return None,
        };
        percent.is_finite().then(|| percent.clamp(0.0, 100.0))
    }
}

/// Converts a pixel length into a percentage of `container`.
///
/// Returns `0.0` when the container has no extent (before the first layout).
#[must_use]
pub fn percent_of(pixels: f64, container: f64) -> f64 {
    if container > 0.0 {
        pixels / container * 100.0
    } else {
        0.0
    }
}

/// Errors produced when parsing a [`PanelSize`] from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SizeParseError {
    /// The input was empty or contained only a unit.
    #[error("panel size is empty")]
    Empty,
    /// The numeric part could not be parsed.
    #[error("invalid panel size `{0}`")]
    Invalid(String),
    /// The value was negative.
    #[error("panel size `{0}` is negative")]
    Negative(String),
    /// The value was NaN or infinite.
    #[error("panel size `{0}` is not finite")]
    NotFinite(String),
}

impl FromStr for PanelSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, make): (&str, fn(f64) -> Self) = if let Some(n) = s.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Self::Pixels)
        } else {
            (s, Self::Pixels)
        };
        let number = number.trim_end();
        if number.is_empty() {
            return Err(SizeParseError::Empty);
        }
        let value: f64 = number
            .parse()
            .map_err(|_| SizeParseError::Invalid(s.into()))?;
        if !value.is_finite() {
            return Err(SizeParseError::NotFinite(s.into()));
        }
        if value.is_sign_negative() && value != 0.0 {
            return Err(SizeParseError::Negative(s.into()));
        }
        Ok(make(value))
    }
}

impl TryFrom<String> for PanelSize {
    type Error = SizeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PanelSize> for String {
    fn from(value: PanelSize) -> Self {
        use alloc::string::ToString;
        value.to_string()
    }
}

impl fmt::Display for PanelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parses_percent_and_pixels() {
        assert_eq!("40%".parse::<PanelSize>(), Ok(PanelSize::Percent(40.0)));
        assert_eq!(" 12.5 % ".parse::<PanelSize>(), Ok(PanelSize::Percent(12.5)));
        assert_eq!("240px".parse::<PanelSize>(), Ok(PanelSize::Pixels(240.0)));
        assert_eq!("240".parse::<PanelSize>(), Ok(PanelSize::Pixels(240.0)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<PanelSize>(), Err(SizeParseError::Empty));
        assert_eq!("%".parse::<PanelSize>(), Err(SizeParseError::Empty));
        assert_eq!(
            "abc".parse::<PanelSize>(),
            Err(SizeParseError::Invalid("abc".into()))
        );
        assert_eq!(
            "-5%".parse::<PanelSize>(),
            Err(SizeParseError::Negative("-5%".into()))
        );
        assert_eq!(
            "inf".parse::<PanelSize>(),
            Err(SizeParseError::NotFinite("inf".into()))
        );
    }

    #[test]
    fn displays_in_parseable_form() {
        assert_eq!(PanelSize::Percent(40.0).to_string(), "40%");
        assert_eq!(PanelSize::Pixels(120.5).to_string(), "120.5px");
    }

    #[test]
    fn pixels_convert_against_container() {
        assert_eq!(PanelSize::Pixels(100.0).resolve(400.0), Some(25.0));
        assert_eq!(percent_of(100.0, 400.0), 25.0);
    }

    #[test]
    fn unmeasured_container_leaves_pixels_unresolved() {
        assert_eq!(percent_of(100.0, 0.0), 0.0);
        assert_eq!(PanelSize::Pixels(100.0).resolve(0.0), None);
        // Percentages do not depend on the container.
        assert_eq!(PanelSize::Percent(30.0).resolve(0.0), Some(30.0));
    }

    #[test]
    fn resolved_values_stay_in_range() {
        assert_eq!(PanelSize::Pixels(600.0).resolve(400.0), Some(100.0));
        assert_eq!(PanelSize::Percent(f64::NAN).resolve(400.0), None);
    }
}
