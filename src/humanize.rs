//! Human-readable duration parsing utilities

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid duration format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

/// Duration wrapper with human-readable parsing ("500ms", "10s", "2m", "1h")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HumanDuration(pub Duration);

impl HumanDuration {
    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn to_human_readable(&self) -> String {
        let millis = self.0.as_millis();
        if millis == 0 {
            return "0s".to_string();
        }

        const UNITS: &[(&str, u128)] = &[("h", 3_600_000), ("m", 60_000), ("s", 1_000)];
        for &(unit, divisor) in UNITS {
            if millis % divisor == 0 {
                return format!("{}{}", millis / divisor, unit);
            }
        }

        format!("{}ms", millis)
    }
}

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human_readable())
    }
}

impl From<Duration> for HumanDuration {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl FromStr for HumanDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::InvalidFormat(s.to_string()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(s.len());
        let (digits, unit) = s.split_at(split);

        if digits.is_empty() {
            return Err(ParseError::InvalidFormat(s.to_string()));
        }

        let value: u64 = digits.parse()?;

        let duration = match unit.trim().to_ascii_lowercase().as_str() {
            "ms" => Duration::from_millis(value),
            "" | "s" | "sec" | "secs" => Duration::from_secs(value),
            "m" | "min" | "mins" => Duration::from_secs(value.saturating_mul(60)),
            "h" | "hr" | "hrs" => Duration::from_secs(value.saturating_mul(3600)),
            other => return Err(ParseError::InvalidUnit(other.to_string())),
        };

        Ok(HumanDuration(duration))
    }
}

impl Serialize for HumanDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_human_readable())
    }
}

impl<'de> Deserialize<'de> for HumanDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct HumanDurationVisitor;

        impl<'de> serde::de::Visitor<'de> for HumanDurationVisitor {
            type Value = HumanDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration as string (e.g., \"10s\", \"2m\") or integer seconds")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(HumanDuration::from_secs(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(v)
                    .map(HumanDuration::from_secs)
                    .map_err(|_| E::custom(format!("negative duration: {}", v)))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                HumanDuration::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(HumanDurationVisitor)
    }
}
