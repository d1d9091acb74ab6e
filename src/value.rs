use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// A typed numeric literal.
///
/// Each variant remembers the numeric type it was built from so that it can
/// be rendered back in that type's natural, full-precision text form.
///
/// # Canonical text
///
/// | Variant      | Value                     | Text            |
/// |--------------|---------------------------|-----------------|
/// | `Int`        | `42`                      | `42`            |
/// | `Long`       | `123456789012345`         | `123456789012345` |
/// | `BigInteger` | 35 digits                 | all 35 digits   |
/// | `Double`     | `1.0`                     | `1.0`           |
/// | `Decimal`    | `1.50`                    | `1.50`          |
///
/// # Examples
///
/// ```
/// use sramp_query::Number;
///
/// assert_eq!(Number::from(1.0_f64).to_string(), "1.0");
/// assert_eq!(Number::from(123456789012345_i64).to_string(), "123456789012345");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// 32-bit integer
    Int(i32),

    /// 64-bit integer
    Long(i64),

    /// Arbitrary precision integer
    BigInteger(BigInt),

    /// 32-bit floating point
    Float(f32),

    /// 64-bit floating point
    Double(f64),

    /// Exact decimal, keeps its scale (`1.50` stays `1.50`)
    Decimal(Decimal),

    /// Exact decimal too long for [`Decimal`]: the sign, the digits without
    /// the point and how many of them follow it (`-12.345` is negative,
    /// `12345`, scale 3). The sign is kept apart so `-0.000...` survives.
    BigDecimal {
        negative: bool,
        digits: BigUint,
        scale: u32,
    },
}

impl Number {
    /// Parse the text of a numeric literal as it appears in a query.
    ///
    /// Literals without a fraction become arbitrary precision integers,
    /// literals with one become exact decimals. Returns `None` when the
    /// text is not a number.
    pub fn parse_literal(text: &str) -> Option<Number> {
        let Some((whole, fraction)) = text.split_once('.') else {
            return BigInt::from_str(text).ok().map(Number::BigInteger);
        };
        if let Ok(d) = Decimal::from_str_exact(text) {
            return Some(Number::Decimal(d));
        }

        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let (negative, whole) = match whole.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, whole),
        };
        if !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = BigUint::from_str(&format!("{}{}", whole, fraction)).ok()?;
        let scale = u32::try_from(fraction.len()).ok()?;
        Some(Number::BigDecimal {
            negative,
            digits,
            scale,
        })
    }

    /// Floating point values other than finite ones have no literal form.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float(n) => n.is_finite(),
            Number::Double(n) => n.is_finite(),
            _ => true,
        }
    }
}

/// Rust prints whole floats without a fraction (`1`), the query language
/// wants `1.0`.
fn float_text(text: String) -> String {
    if text.contains(['.', 'e', 'E']) || text.contains("inf") || text.contains("NaN") {
        text
    } else {
        text + ".0"
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Long(n) => write!(f, "{}", n),
            Number::BigInteger(n) => write!(f, "{}", n),
            Number::Float(n) => f.write_str(&float_text(n.to_string())),
            Number::Double(n) => f.write_str(&float_text(n.to_string())),
            Number::Decimal(n) => write!(f, "{}", n),
            Number::BigDecimal {
                negative,
                digits,
                scale,
            } => {
                let sign = if *negative { "-" } else { "" };
                if *scale == 0 {
                    return write!(f, "{}{}", sign, digits);
                }
                let scale = *scale as usize;
                let padded = format!("{:0>width$}", digits.to_string(), width = scale + 1);
                let (whole, fraction) = padded.split_at(padded.len() - scale);
                write!(f, "{}{}.{}", sign, whole, fraction)
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Long(n)
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Self {
        Number::BigInteger(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::Float(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Double(n)
    }
}

impl From<Decimal> for Number {
    fn from(n: Decimal) -> Self {
        Number::Decimal(n)
    }
}

/// Render a string as a single-quoted literal, doubling embedded quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
