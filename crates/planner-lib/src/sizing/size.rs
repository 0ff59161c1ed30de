//! Byte-size strings as reported by `_cat/indices`
//!
//! Values look like `12.5gb`, `800mb`, `3kb` or `230b`. The unit is matched
//! as a case-sensitive suffix, longest first, because `b` ends every unit.

use crate::error::{PlannerError, PlannerResult};
use std::fmt;
use std::str::FromStr;

const KIB: f64 = 1024.0;

/// Unit suffix of a size string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Gb,
    Mb,
    Kb,
    B,
}

impl SizeUnit {
    /// Suffixes in match precedence
    const PRECEDENCE: [SizeUnit; 4] = [SizeUnit::Gb, SizeUnit::Mb, SizeUnit::Kb, SizeUnit::B];

    pub fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Gb => "gb",
            SizeUnit::Mb => "mb",
            SizeUnit::Kb => "kb",
            SizeUnit::B => "b",
        }
    }

    /// Divisor that brings a value in this unit to GiB
    fn per_gib(self) -> f64 {
        match self {
            SizeUnit::Gb => 1.0,
            SizeUnit::Mb => KIB,
            SizeUnit::Kb => KIB * KIB,
            SizeUnit::B => KIB * KIB * KIB,
        }
    }
}

/// A parsed `(value, unit)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByteSize {
    pub value: f64,
    pub unit: SizeUnit,
}

impl ByteSize {
    /// Size in GiB
    pub fn as_gib(self) -> f64 {
        self.value / self.unit.per_gib()
    }
}

impl FromStr for ByteSize {
    type Err = PlannerError;

    fn from_str(raw: &str) -> PlannerResult<Self> {
        let trimmed = raw.trim();
        let (number, unit) = SizeUnit::PRECEDENCE
            .iter()
            .find_map(|unit| trimmed.strip_suffix(unit.suffix()).map(|n| (n, *unit)))
            .ok_or_else(|| PlannerError::UnparsableSize(raw.to_string()))?;

        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| PlannerError::UnparsableSize(raw.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(PlannerError::UnparsableSize(raw.to_string()));
        }

        Ok(ByteSize { value, unit })
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Parse a size string straight to GiB
pub fn normalize(raw: &str) -> PlannerResult<f64> {
    raw.parse::<ByteSize>().map(ByteSize::as_gib)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_units_are_consistent() {
        assert!(approx(normalize("1024mb").unwrap(), normalize("1gb").unwrap()));
        assert!(approx(normalize("1048576kb").unwrap(), 1.0));
        assert!(approx(normalize("1073741824b").unwrap(), 1.0));
    }

    #[test]
    fn test_gb_is_not_read_as_bytes() {
        let size: ByteSize = "12.5gb".parse().unwrap();
        assert_eq!(size.unit, SizeUnit::Gb);
        assert!(approx(size.as_gib(), 12.5));
    }

    #[test]
    fn test_fractional_values() {
        assert!(approx(normalize("512mb").unwrap(), 0.5));
        assert!(approx(normalize("0b").unwrap(), 0.0));
    }

    #[test]
    fn test_unknown_suffix_rejected() {
        for raw in ["12tb", "12", "", "12GB", "gb", "abcmb"] {
            let err = normalize(raw).unwrap_err();
            assert!(
                matches!(err, PlannerError::UnparsableSize(ref s) if s == raw),
                "expected UnparsableSize for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_display_round_trips_suffix() {
        let size: ByteSize = "800mb".parse().unwrap();
        assert_eq!(size.to_string(), "800mb");
    }
}
