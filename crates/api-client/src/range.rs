use crate::error::ApiError;
use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// How much daily history to request, in the provider's range vocabulary
/// ("5d", "1mo", "6mo", "1y", "ytd", "max", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    Days(u32),
    Months(u32),
    Years(u32),
    YearToDate,
    Max,
}

impl HistoryRange {
    /// The earliest date inside the range when it ends on `last`; `None` means unbounded.
    pub fn start_from(&self, last: NaiveDate) -> Option<NaiveDate> {
        match *self {
            HistoryRange::Days(n) => last.checked_sub_days(Days::new(u64::from(n))),
            HistoryRange::Months(n) => last.checked_sub_months(Months::new(n)),
            HistoryRange::Years(n) => last.checked_sub_months(Months::new(n.saturating_mul(12))),
            HistoryRange::YearToDate => NaiveDate::from_ymd_opt(last.year(), 1, 1),
            HistoryRange::Max => None,
        }
    }
}

impl Default for HistoryRange {
    fn default() -> Self {
        HistoryRange::Years(1)
    }
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryRange::Days(n) => write!(f, "{}d", n),
            HistoryRange::Months(n) => write!(f, "{}mo", n),
            HistoryRange::Years(n) => write!(f, "{}y", n),
            HistoryRange::YearToDate => write!(f, "ytd"),
            HistoryRange::Max => write!(f, "max"),
        }
    }
}

impl FromStr for HistoryRange {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "ytd" => return Ok(HistoryRange::YearToDate),
            "max" => return Ok(HistoryRange::Max),
            _ => {}
        }

        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (count, unit) = s.split_at(split);
        let count: u32 = count
            .parse()
            .map_err(|_| ApiError::InvalidData(format!("Invalid history range: '{}'", s)))?;
        if count == 0 {
            return Err(ApiError::InvalidData(format!("Empty history range: '{}'", s)));
        }

        match unit {
            "d" => Ok(HistoryRange::Days(count)),
            "mo" => Ok(HistoryRange::Months(count)),
            "y" => Ok(HistoryRange::Years(count)),
            _ => Err(ApiError::InvalidData(format!(
                "Unknown history range unit in '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_ranges() {
        assert_eq!("1y".parse::<HistoryRange>().unwrap(), HistoryRange::Years(1));
        assert_eq!("6mo".parse::<HistoryRange>().unwrap(), HistoryRange::Months(6));
        assert_eq!("5D".parse::<HistoryRange>().unwrap(), HistoryRange::Days(5));
        assert_eq!("ytd".parse::<HistoryRange>().unwrap(), HistoryRange::YearToDate);
        assert_eq!("max".parse::<HistoryRange>().unwrap(), HistoryRange::Max);
        assert!("0y".parse::<HistoryRange>().is_err());
        assert!("1w".parse::<HistoryRange>().is_err());
        assert!("year".parse::<HistoryRange>().is_err());
    }

    #[test]
    fn display_uses_provider_vocabulary() {
        for raw in ["1y", "6mo", "5d", "ytd", "max"] {
            assert_eq!(raw.parse::<HistoryRange>().unwrap().to_string(), raw);
        }
    }

    #[test]
    fn computes_range_start() {
        let last = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(
            HistoryRange::Years(1).start_from(last),
            NaiveDate::from_ymd_opt(2023, 6, 14)
        );
        assert_eq!(
            HistoryRange::Days(4).start_from(last),
            NaiveDate::from_ymd_opt(2024, 6, 10)
        );
        assert_eq!(
            HistoryRange::YearToDate.start_from(last),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(HistoryRange::Max.start_from(last), None);
    }
}
