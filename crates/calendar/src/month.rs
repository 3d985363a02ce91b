//! Calendar month enum and label parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A calendar month.
///
/// The derived ordering is the canonical calendar order, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// English name, three-letter abbreviation and Indonesian name per month,
/// indexed by `number() - 1`.
#[rustfmt::skip]
const LABELS: [(&str, &str, &str); 12] = [
    ("January", "Jan", "Januari"),
    ("February", "Feb", "Februari"),
    ("March", "Mar", "Maret"),
    ("April", "Apr", "April"),
    ("May", "May", "Mei"),
    ("June", "Jun", "Juni"),
    ("July", "Jul", "Juli"),
    ("August", "Aug", "Agustus"),
    ("September", "Sep", "September"),
    ("October", "Oct", "Oktober"),
    ("November", "Nov", "November"),
    ("December", "Dec", "Desember"),
];

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Creates a month from its number (1..=12).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn from_number(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self::ALL[(month - 1) as usize])
    }

    /// Returns the month number (1..=12).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the 0-based position in calendar order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the English month name.
    pub fn name(self) -> &'static str {
        LABELS[self.index()].0
    }

    /// Returns the three-letter English abbreviation.
    pub fn abbrev(self) -> &'static str {
        LABELS[self.index()].1
    }

    /// Returns the Indonesian month name.
    pub fn local_name(self) -> &'static str {
        LABELS[self.index()].2
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Parses a month from its English name, three-letter abbreviation,
    /// Indonesian name or number. Matching ignores case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if let Ok(n) = label.parse::<u8>() {
            return Self::from_number(n);
        }
        Self::ALL
            .into_iter()
            .find(|m| {
                let (name, abbrev, local) = LABELS[m.index()];
                [name, abbrev, local]
                    .iter()
                    .any(|l| l.eq_ignore_ascii_case(label))
            })
            .ok_or_else(|| CalendarError::UnknownMonth {
                name: s.to_string(),
            })
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_roundtrip() {
        for n in 1..=12u8 {
            assert_eq!(Month::from_number(n).unwrap().number(), n);
        }
    }

    #[test]
    fn from_number_rejects_out_of_range() {
        assert_eq!(
            Month::from_number(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Month::from_number(13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn all_is_sorted() {
        let mut sorted = Month::ALL;
        sorted.sort();
        assert_eq!(sorted, Month::ALL);
    }

    #[test]
    fn labels() {
        assert_eq!(Month::May.name(), "May");
        assert_eq!(Month::May.abbrev(), "May");
        assert_eq!(Month::May.local_name(), "Mei");
        assert_eq!(Month::August.local_name(), "Agustus");
        assert_eq!(Month::December.to_string(), "December");
    }

    #[test]
    fn parse_accepts_every_spelling() {
        assert_eq!("february".parse::<Month>().unwrap(), Month::February);
        assert_eq!("FEB".parse::<Month>().unwrap(), Month::February);
        assert_eq!("Februari".parse::<Month>().unwrap(), Month::February);
        assert_eq!(" 2 ".parse::<Month>().unwrap(), Month::February);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "Smarch".parse::<Month>().unwrap_err(),
            CalendarError::UnknownMonth {
                name: "Smarch".to_string()
            }
        );
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn parse_rejects_bad_number() {
        assert_eq!(
            "13".parse::<Month>().unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(Month::try_from(10).unwrap(), Month::October);
        assert!(Month::try_from(0).is_err());
    }
}
