//! `google.type` value types: [`Date`] and [`Money`].
//!
//! Both follow the published field layout of `google/type/date.proto` and
//! `google/type/money.proto`. Nothing here validates values during encode or
//! decode; the conversions are opt-in helpers for callers.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const NANOS_PER_UNIT: i128 = 1_000_000_000;
const MAX_FRACTION_DIGITS: usize = 9;

/// A whole or partial calendar date.
///
/// Any component may be zero to mean "unspecified": a year of zero is a
/// recurring date, a day of zero is a month-level date.
#[derive(Clone, Copy, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Date {
    /// Year, 1 to 9999, or 0 for a date without a year.
    #[prost(int32, tag = "1")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub year: i32,
    /// Month of year, 1 to 12, or 0 for a year without a month and day.
    #[prost(int32, tag = "2")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub month: i32,
    /// Day of month, 1 to 31, or 0 for a year and month without a day.
    #[prost(int32, tag = "3")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub day: i32,
}

impl prost::Name for Date {
    const NAME: &'static str = "Date";
    const PACKAGE: &'static str = "google.type";

    fn full_name() -> String {
        "google.type.Date".into()
    }

    fn type_url() -> String {
        "type.googleapis.com/google.type.Date".into()
    }
}

impl Date {
    /// Creates a date from its components without validating them.
    #[must_use]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns true if year, month and day are all set.
    #[must_use]
    pub const fn is_full_date(&self) -> bool {
        self.year != 0 && self.month != 0 && self.day != 0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        // month and day are at most 31
        Self {
            year: date.year(),
            month: i32::try_from(date.month()).unwrap_or_default(),
            day: i32::try_from(date.day()).unwrap_or_default(),
        }
    }
}

impl TryFrom<&Date> for NaiveDate {
    type Error = Error;

    fn try_from(date: &Date) -> Result<Self> {
        if !date.is_full_date() {
            return Err(Error::invalid_date(format!(
                "{date} is a partial date and has no calendar day"
            )));
        }
        let month = u32::try_from(date.month)
            .map_err(|_| Error::invalid_date(format!("month {} is negative", date.month)))?;
        let day = u32::try_from(date.day)
            .map_err(|_| Error::invalid_date(format!("day {} is negative", date.day)))?;
        Self::from_ymd_opt(date.year, month, day)
            .ok_or_else(|| Error::invalid_date(format!("{date} does not exist")))
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = Error;

    fn try_from(date: Date) -> Result<Self> {
        Self::try_from(&date)
    }
}

/// An amount of money with its currency.
#[derive(Clone, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Money {
    /// ISO 4217 currency code.
    #[prost(string, tag = "1")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub currency_code: String,
    /// Whole units of the amount.
    #[prost(int64, tag = "2")]
    #[serde(with = "crate::json::int64_string")]
    pub units: i64,
    /// Nano units of the amount, with the same sign as `units`.
    #[prost(int32, tag = "3")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub nanos: i32,
}

impl prost::Name for Money {
    const NAME: &'static str = "Money";
    const PACKAGE: &'static str = "google.type";

    fn full_name() -> String {
        "google.type.Money".into()
    }

    fn type_url() -> String {
        "type.googleapis.com/google.type.Money".into()
    }
}

impl Money {
    /// Creates an amount from its components without validating them.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Returns the amount as a count of nano units.
    #[must_use]
    pub fn total_nanos(&self) -> i128 {
        i128::from(self.units) * NANOS_PER_UNIT + i128::from(self.nanos)
    }

    fn format_amount(&self) -> String {
        let total = self.total_nanos();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.unsigned_abs();
        let units = total / NANOS_PER_UNIT.unsigned_abs();
        let fraction = format!("{:09}", total % NANOS_PER_UNIT.unsigned_abs());
        let trimmed = fraction.trim_end_matches('0');
        let fraction = if trimmed.len() < 2 {
            &fraction[..2]
        } else {
            trimmed
        };
        format!("{sign}{units}.{fraction}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.currency_code.is_empty() {
            f.write_str(&self.format_amount())
        } else {
            write!(f, "{} {}", self.format_amount(), self.currency_code)
        }
    }
}

impl FromStr for Money {
    type Err = Error;

    /// Parses `"<decimal> <CODE>"`, e.g. `"500.00 USD"` or `"-12.5 eur"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::invalid_money(format!(
                "expected '<amount> <currency>', got '{s}'"
            )));
        };

        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::invalid_money(format!(
                "currency code '{code}' is not three letters"
            )));
        }

        let (negative, digits) = match amount.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, amount.strip_prefix('+').unwrap_or(amount)),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(Error::invalid_money(format!("'{amount}' has no digits")));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::invalid_money(format!("'{amount}' is not a decimal")));
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(Error::invalid_money(format!(
                "'{amount}' has more than {MAX_FRACTION_DIGITS} fractional digits"
            )));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            let signed = if negative {
                format!("-{whole}")
            } else {
                whole.to_string()
            };
            signed
                .parse()
                .map_err(|_| Error::invalid_money(format!("'{amount}' overflows int64 units")))?
        };
        let nanos: i32 = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{fraction:0<width$}", width = MAX_FRACTION_DIGITS);
            padded
                .parse()
                .map_err(|_| Error::invalid_money(format!("'{amount}' is not a decimal")))?
        };

        let nanos = if negative { -nanos } else { nanos };
        Ok(Self::new(code.to_ascii_uppercase(), units, nanos))
    }
}
