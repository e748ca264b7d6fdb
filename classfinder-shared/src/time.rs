/// Wall-clock to minute-of-day conversion
///
/// Schedule bounds and search times are both stored and compared as integer
/// minutes since midnight, so `"08:30"` becomes `510` on either side of a match.
///
/// # Example
///
/// ```
/// use classfinder_shared::time::convert_hours_to_minutes;
///
/// assert_eq!(convert_hours_to_minutes("08:30").unwrap(), 510);
/// assert!(convert_hours_to_minutes("8h30").is_err());
/// ```

/// Number of minutes in a day; valid minute-of-day values are `0..MINUTES_PER_DAY`
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Error returned for anything that is not a 24-hour `H:MM` / `HH:MM` time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeFormatError {
    /// Input is not two `:`-separated numeric parts
    #[error("expected HH:MM, got {0:?}")]
    Malformed(String),

    /// Hours outside 0-23 or minutes outside 0-59
    #[error("time out of range: {0:?}")]
    OutOfRange(String),
}

/// Converts a 24-hour `HH:MM` string to minutes since midnight
///
/// Accepts one or two hour digits and exactly two minute digits.
///
/// # Errors
///
/// Returns `TimeFormatError::Malformed` for anything that does not parse and
/// `TimeFormatError::OutOfRange` for hours above 23 or minutes above 59.
pub fn convert_hours_to_minutes(time: &str) -> Result<i32, TimeFormatError> {
    let malformed = || TimeFormatError::Malformed(time.to_string());

    let (hours, minutes) = time.trim().split_once(':').ok_or_else(malformed)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || hours.len() > 2 || !all_digits(minutes) || minutes.len() != 2 {
        return Err(malformed());
    }

    let hours: i32 = hours.parse().map_err(|_| malformed())?;
    let minutes: i32 = minutes.parse().map_err(|_| malformed())?;

    if hours > 23 || minutes > 59 {
        return Err(TimeFormatError::OutOfRange(time.to_string()));
    }

    Ok(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(convert_hours_to_minutes("00:00"), Ok(0));
        assert_eq!(convert_hours_to_minutes("08:30"), Ok(510));
        assert_eq!(convert_hours_to_minutes("23:59"), Ok(1439));
    }

    #[test]
    fn test_single_digit_hour() {
        assert_eq!(convert_hours_to_minutes("9:05"), Ok(545));
    }

    #[test]
    fn test_result_stays_within_a_day() {
        let last = convert_hours_to_minutes("23:59").unwrap();
        assert!(last < MINUTES_PER_DAY);
    }

    #[test]
    fn test_malformed_input() {
        for input in ["", "0830", "08:3", "08:300", "ab:cd", "08:30:00", "-1:30", "123:00"] {
            assert!(
                matches!(convert_hours_to_minutes(input), Err(TimeFormatError::Malformed(_))),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            convert_hours_to_minutes("24:00"),
            Err(TimeFormatError::OutOfRange("24:00".to_string()))
        );
        assert!(matches!(
            convert_hours_to_minutes("12:60"),
            Err(TimeFormatError::OutOfRange(_))
        ));
    }
}
