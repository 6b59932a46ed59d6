//! Seed values for the deterministic generator.
//!
//! A seed is consumed by hashing its textual form, one UTF-16 code unit at
//! a time, so the exact rendering of each value is part of the
//! reproducibility contract. [`Seed`]'s `Display` implementation produces
//! that rendering: integers in plain decimal, floats in their shortest
//! round-trip form (switching to exponent notation outside
//! `[1e-6, 1e21)`), and booleans as `true`/`false`.

use std::fmt;

use chrono::{DateTime, Utc};

/// A single seed value.
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// An integral number.
    ///
    /// Values beyond 2^53 in magnitude are rendered as the nearest double,
    /// so `9007199254740993` hashes like `9007199254740992`.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Arbitrary text.
    Text(String),
    /// A boolean flag.
    Bool(bool),
}

/// Largest integer every double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Int(v) if v.unsigned_abs() > MAX_SAFE_INTEGER => fmt_number(*v as f64, f),
            Seed::Int(v) => write!(f, "{v}"),
            Seed::Float(v) => fmt_number(*v, f),
            Seed::Text(v) => f.write_str(v),
            Seed::Bool(v) => write!(f, "{v}"),
        }
    }
}

fn fmt_number(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }

    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }

    // Covers -0.0 as well.
    if v == 0.0 {
        return f.write_str("0");
    }

    if (1e-6..1e21).contains(&v.abs()) {
        return write!(f, "{v}");
    }

    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

macro_rules! seed_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Seed {
                fn from(v: $t) -> Self {
                    Seed::Int(i64::from(v))
                }
            }
        )*
    };
}

seed_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Seed::Float(v as f64), Seed::Int)
    }
}

impl From<usize> for Seed {
    fn from(v: usize) -> Self {
        Seed::from(v as u64)
    }
}

impl From<f32> for Seed {
    fn from(v: f32) -> Self {
        Seed::Float(f64::from(v))
    }
}

impl From<f64> for Seed {
    fn from(v: f64) -> Self {
        Seed::Float(v)
    }
}

impl From<&str> for Seed {
    fn from(v: &str) -> Self {
        Seed::Text(v.to_owned())
    }
}

impl From<String> for Seed {
    fn from(v: String) -> Self {
        Seed::Text(v)
    }
}

impl From<char> for Seed {
    fn from(v: char) -> Self {
        Seed::Text(v.to_string())
    }
}

impl From<bool> for Seed {
    fn from(v: bool) -> Self {
        Seed::Bool(v)
    }
}

impl From<DateTime<Utc>> for Seed {
    fn from(v: DateTime<Utc>) -> Self {
        Seed::Int(v.timestamp_millis())
    }
}
