//! Numeric field input rules

/// Widest number a field will accept
pub const MAX_FIELD_DIGITS: usize = 5;

/// Append a typed digit to `value`.
///
/// Returns `None` for non-digits or when the result would exceed
/// [`MAX_FIELD_DIGITS`].
pub fn push_digit(value: u32, digit: char) -> Option<u32> {
    let d = digit.to_digit(10)?;
    let next = value.checked_mul(10)?.checked_add(d)?;
    if next.to_string().len() > MAX_FIELD_DIGITS {
        return None;
    }
    Some(next)
}

/// Increment by one, refusing to grow past [`MAX_FIELD_DIGITS`]
pub fn step_up(value: u32) -> Option<u32> {
    let next = value.checked_add(1)?;
    if next.to_string().len() > MAX_FIELD_DIGITS {
        return None;
    }
    Some(next)
}

/// Remove the last digit; an emptied field reads as zero
pub fn pop_digit(value: u32) -> u32 {
    value / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_digit() {
        assert_eq!(push_digit(0, '7'), Some(7));
        assert_eq!(push_digit(12, '3'), Some(123));
        assert_eq!(push_digit(1, 'a'), None);
        assert_eq!(push_digit(99_999, '1'), None);
    }

    #[test]
    fn test_pop_digit_to_zero() {
        assert_eq!(pop_digit(123), 12);
        assert_eq!(pop_digit(4), 0);
        assert_eq!(pop_digit(0), 0);
    }

    #[test]
    fn test_step_up_respects_digit_cap() {
        assert_eq!(step_up(0), Some(1));
        assert_eq!(step_up(99_998), Some(99_999));
        assert_eq!(step_up(99_999), None);
    }
}
