// Packed-date decoders for the Berka encodings
// Three encodings: 6-digit YYMMDD, 19-prefixed numeric dates, and the
// birth_number field that hides a gender flag in the month digits.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// GENDER
// ============================================================================

/// Client gender, recovered from the birth_number month flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Result of decoding a birth_number: gender is always recoverable from the
/// month flag, the birthday only when the reconstructed digits form a real
/// calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthDecode {
    pub gender: Gender,
    pub birthday: Option<NaiveDate>,
}

// ============================================================================
// DATE DECODERS
// ============================================================================

/// Decode a 6-digit packed date (YYMMDD, 19xx century).
/// The raw value is zero-padded back to 6 digits first, so `10501` reads as
/// `010501` = 1901-05-01. Returns None when the digits do not form a valid
/// calendar date.
pub fn decode_padded_date(raw: i64) -> Option<NaiveDate> {
    if !(0..=999_999).contains(&raw) {
        return None;
    }

    let digits = format!("{:06}", raw);
    parse_yyyymmdd(&format!("19{}", digits))
}

/// Decode a numerically stored date by prefixing "19" to the raw digits
/// without padding. The source data spans 1993-1998, so loan and transaction
/// dates are six digits and reconstruct to eight; a raw value that lost a
/// leading zero reconstructs to the wrong length and decodes to None instead
/// of a mis-read date.
pub fn decode_prefixed_date(raw: i64) -> Option<NaiveDate> {
    if raw < 0 {
        return None;
    }

    let reconstructed = format!("19{}", raw);
    if reconstructed.len() != 8 {
        return None;
    }

    parse_yyyymmdd(&reconstructed)
}

/// Decode a card issue field: packed YYMMDD followed by a time part that is
/// always zero in the source. Only the leading digit run is read.
pub fn decode_issued_date(raw: &str) -> Option<NaiveDate> {
    let token = raw.split_whitespace().next()?;
    let packed: i64 = token.parse().ok()?;
    decode_padded_date(packed)
}

/// Decode a client birth_number: year(2)/month(2)/day(2), where a month
/// value above 12 means female with 50 added to the true month.
pub fn decode_birth_number(raw: i64) -> Option<BirthDecode> {
    if !(0..=999_999).contains(&raw) {
        return None;
    }

    let digits = format!("{:06}", raw);
    let year: u32 = digits[0..2].parse().ok()?;
    let month_raw: u32 = digits[2..4].parse().ok()?;
    let day: u32 = digits[4..6].parse().ok()?;

    let (gender, month) = if month_raw > 12 {
        (Gender::Female, month_raw.wrapping_sub(50))
    } else {
        (Gender::Male, month_raw)
    };

    let birthday = if (1..=12).contains(&month) {
        NaiveDate::from_ymd_opt(1900 + year as i32, month, day)
    } else {
        None
    };

    Some(BirthDecode { gender, birthday })
}

/// Re-pack a decoded date into its 6-digit YYMMDD form. Only defined for
/// 19xx dates, which is all the decoders produce.
pub fn encode_padded_date(date: NaiveDate) -> Option<i64> {
    let year = date.year();
    if !(1900..=1999).contains(&year) {
        return None;
    }

    Some(((year - 1900) as i64) * 10_000 + (date.month() as i64) * 100 + date.day() as i64)
}

fn parse_yyyymmdd(digits: &str) -> Option<NaiveDate> {
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = digits[0..4].parse().ok()?;
    let month: u32 = digits[4..6].parse().ok()?;
    let day: u32 = digits[6..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_account_date() {
        assert_eq!(
            decode_padded_date(930322),
            NaiveDate::from_ymd_opt(1993, 3, 22)
        );
    }

    #[test]
    fn test_decode_padded_date_pads_leading_zero() {
        // year 01 -> 1901
        assert_eq!(
            decode_padded_date(10501),
            NaiveDate::from_ymd_opt(1901, 5, 1)
        );
    }

    #[test]
    fn test_decode_invalid_calendar_date_is_none() {
        assert_eq!(decode_padded_date(930231), None); // Feb 31
        assert_eq!(decode_padded_date(931322), None); // month 13
        assert_eq!(decode_padded_date(-1), None);
    }

    #[test]
    fn test_decode_prefixed_date() {
        assert_eq!(
            decode_prefixed_date(930705),
            NaiveDate::from_ymd_opt(1993, 7, 5)
        );
    }

    #[test]
    fn test_decode_prefixed_date_wrong_length_is_none() {
        // Five raw digits reconstruct to seven characters, not a date
        assert_eq!(decode_prefixed_date(93030), None);
        assert_eq!(decode_prefixed_date(9_303_011), None);
    }

    #[test]
    fn test_decode_issued_date_strips_zero_time() {
        assert_eq!(
            decode_issued_date("931107 00:00:00"),
            NaiveDate::from_ymd_opt(1993, 11, 7)
        );
        assert_eq!(
            decode_issued_date("981201"),
            NaiveDate::from_ymd_opt(1998, 12, 1)
        );
        assert_eq!(decode_issued_date("not a date"), None);
    }

    #[test]
    fn test_decode_birth_number_female() {
        let decoded = decode_birth_number(705123).unwrap();
        assert_eq!(decoded.gender, Gender::Female);
        assert_eq!(decoded.birthday, NaiveDate::from_ymd_opt(1970, 1, 23));
    }

    #[test]
    fn test_decode_birth_number_male() {
        let decoded = decode_birth_number(450204).unwrap();
        assert_eq!(decoded.gender, Gender::Male);
        assert_eq!(decoded.birthday, NaiveDate::from_ymd_opt(1945, 2, 4));
    }

    #[test]
    fn test_birth_number_month_still_out_of_range() {
        // month 99 - 50 = 49, not a month: gender resolves, birthday does not
        let decoded = decode_birth_number(709923).unwrap();
        assert_eq!(decoded.gender, Gender::Female);
        assert_eq!(decoded.birthday, None);
    }

    #[test]
    fn test_birth_number_invalid_day() {
        let decoded = decode_birth_number(700230).unwrap(); // Feb 30
        assert_eq!(decoded.gender, Gender::Male);
        assert_eq!(decoded.birthday, None);
    }

    #[test]
    fn test_padded_date_roundtrip() {
        for raw in [930322i64, 981231, 10101, 990704] {
            let date = decode_padded_date(raw).unwrap();
            assert_eq!(encode_padded_date(date), Some(raw));
        }
    }

    #[test]
    fn test_prefixed_date_roundtrip() {
        for raw in [930705i64, 960101, 981228] {
            let date = decode_prefixed_date(raw).unwrap();
            assert_eq!(encode_padded_date(date), Some(raw));
        }
    }
}
