//! Replacement parameters and the query template formatter.
//!
//! A template is a query with `?` placeholders. [`format_query`] embeds the
//! parameters, in order, as literal text before the query is parsed:
//!
//! ```
//! use sramp_query::params::{format_query, ReplacementParam};
//!
//! let query = format_query(
//!     "/s-ramp/xsd/XsdDocument[@name = ? and @size = ?]",
//!     &[ReplacementParam::from("foo"), ReplacementParam::from(42)],
//! )
//! .unwrap();
//! assert_eq!(query, "/s-ramp/xsd/XsdDocument[@name = 'foo' and @size = 42]");
//! ```

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::error::UserError;
use crate::value::{quote_literal, Number};

/// A typed value substituted for one `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacementParam {
    /// Rendered single-quoted, embedded quotes doubled
    String(String),

    /// Rendered as canonical number text, unquoted
    Number(Number),

    /// Rendered as `'YYYY-MM-DD'`
    Date(NaiveDate),

    /// Rendered as `'YYYY-MM-DDTHH:MM:SSZ'`
    DateTime(DateTime<Utc>),
}

impl ReplacementParam {
    /// Render the parameter as query literal text.
    pub fn render(&self) -> Result<String, UserError> {
        match self {
            ReplacementParam::String(s) => Ok(quote_literal(s)),
            ReplacementParam::Number(n) => {
                if !n.is_finite() {
                    return Err(UserError::InvalidParam(format!(
                        "{} has no literal form",
                        n
                    )));
                }
                Ok(n.to_string())
            }
            ReplacementParam::Date(d) => Ok(quote_literal(&d.format("%Y-%m-%d").to_string())),
            ReplacementParam::DateTime(dt) => {
                Ok(quote_literal(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)))
            }
        }
    }
}

impl From<&str> for ReplacementParam {
    fn from(s: &str) -> Self {
        ReplacementParam::String(s.to_string())
    }
}

impl From<String> for ReplacementParam {
    fn from(s: String) -> Self {
        ReplacementParam::String(s)
    }
}

impl From<Number> for ReplacementParam {
    fn from(n: Number) -> Self {
        ReplacementParam::Number(n)
    }
}

impl From<i32> for ReplacementParam {
    fn from(n: i32) -> Self {
        ReplacementParam::Number(Number::Int(n))
    }
}

impl From<i64> for ReplacementParam {
    fn from(n: i64) -> Self {
        ReplacementParam::Number(Number::Long(n))
    }
}

impl From<BigInt> for ReplacementParam {
    fn from(n: BigInt) -> Self {
        ReplacementParam::Number(Number::BigInteger(n))
    }
}

impl From<f32> for ReplacementParam {
    fn from(n: f32) -> Self {
        ReplacementParam::Number(Number::Float(n))
    }
}

impl From<f64> for ReplacementParam {
    fn from(n: f64) -> Self {
        ReplacementParam::Number(Number::Double(n))
    }
}

impl From<Decimal> for ReplacementParam {
    fn from(n: Decimal) -> Self {
        ReplacementParam::Number(Number::Decimal(n))
    }
}

impl From<NaiveDate> for ReplacementParam {
    fn from(d: NaiveDate) -> Self {
        ReplacementParam::Date(d)
    }
}

impl From<DateTime<Utc>> for ReplacementParam {
    fn from(dt: DateTime<Utc>) -> Self {
        ReplacementParam::DateTime(dt)
    }
}

/// Parses the `TYPE:VALUE` form used on the command line.
///
/// Types: `s` string, `i` 32-bit, `l` 64-bit, `b` big integer, `f` float,
/// `d` double, `date` (`YYYY-MM-DD`), `datetime` (RFC 3339).
impl FromStr for ReplacementParam {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s.split_once(':').ok_or_else(|| {
            UserError::InvalidParam(format!("'{}' is not of the form TYPE:VALUE", s))
        })?;
        let invalid = |what: &str| UserError::InvalidParam(format!("'{}' is not a valid {}", value, what));

        let param: ReplacementParam = match kind {
            "s" => ReplacementParam::String(value.to_string()),
            "i" => value.parse::<i32>().map_err(|_| invalid("32-bit integer"))?.into(),
            "l" => value.parse::<i64>().map_err(|_| invalid("64-bit integer"))?.into(),
            "b" => BigInt::from_str(value).map_err(|_| invalid("integer"))?.into(),
            "f" => value.parse::<f32>().map_err(|_| invalid("float"))?.into(),
            "d" => value.parse::<f64>().map_err(|_| invalid("double"))?.into(),
            "date" => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map_err(|_| invalid("date"))?
                .into(),
            "datetime" => DateTime::parse_from_rfc3339(value)
                .map_err(|_| invalid("date-time"))?
                .with_timezone(&Utc)
                .into(),
            other => {
                return Err(UserError::InvalidParam(format!(
                    "unknown parameter type '{}'",
                    other
                )));
            }
        };
        Ok(param)
    }
}

/// Byte offsets of every `?` that sits outside quoted literals and
/// `(: ... :)` comments.
fn placeholder_offsets(template: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut quote: Option<char> = None;
    let mut comment_depth = 0usize;
    let mut chars = template.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);
        if quote.is_none() && ch == '(' && next == Some(':') {
            comment_depth += 1;
            chars.next();
            continue;
        }
        if comment_depth > 0 {
            // Comments nest; quotes inside them mean nothing
            if ch == ':' && next == Some(')') {
                comment_depth -= 1;
                chars.next();
            }
            continue;
        }

        match quote {
            Some(q) if ch == q => {
                // A doubled quote is an escaped quote, the literal continues
                if chars.peek().is_some_and(|&(_, next)| next == q) {
                    chars.next();
                } else {
                    quote = None;
                }
            }
            Some(_) => {}
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                '?' => offsets.push(i),
                _ => {}
            },
        }
    }
    offsets
}

/// Replace each `?` placeholder outside quoted literals with the matching
/// parameter's rendered text.
///
/// Fails with [`UserError::NotEnoughParams`] or [`UserError::TooManyParams`]
/// when the counts differ. A template without placeholders and an empty
/// parameter list comes back unchanged.
pub fn format_query(template: &str, params: &[ReplacementParam]) -> Result<String, UserError> {
    let offsets = placeholder_offsets(template);

    if offsets.len() > params.len() {
        return Err(UserError::NotEnoughParams {
            placeholders: offsets.len(),
            supplied: params.len(),
        });
    }
    if offsets.len() < params.len() {
        return Err(UserError::TooManyParams {
            placeholders: offsets.len(),
            supplied: params.len(),
        });
    }

    let mut result = String::with_capacity(template.len());
    let mut last = 0;
    for (offset, param) in offsets.iter().zip(params) {
        result.push_str(&template[last..*offset]);
        result.push_str(&param.render()?);
        last = offset + 1;
    }
    result.push_str(&template[last..]);

    Ok(result)
}
