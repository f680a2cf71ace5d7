// SPDX-License-Identifier: MPL-2.0
//! Input validation for the lookup form.

/// Minimum accepted API key length.
pub const MIN_API_KEY_LEN: usize = 32;

/// Returns whether the (trimmed) API key looks usable.
#[must_use]
pub fn is_valid_api_key(value: &str) -> bool {
    value.trim().chars().count() >= MIN_API_KEY_LEN
}

/// Returns whether the (trimmed) value is a dotted-quad IPv4 address.
///
/// Each octet is one to three ASCII digits with a value of at most 255.
/// Leading zeros are accepted (`010.0.0.1`).
#[must_use]
pub fn is_valid_ipv4(value: &str) -> bool {
    let value = value.trim();
    let mut octets = 0;

    for part in value.split('.') {
        octets += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match part.parse::<u16>() {
            Ok(n) if n <= 255 => {}
            _ => return false,
        }
    }

    octets == 4
}

/// Visual validation state of a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// Empty input, or invalid input the user has not finished editing.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl InputState {
    /// Derives the state for `value`.
    ///
    /// Invalid input is only flagged once `show_error` is set (after the
    /// field loses focus or the form is submitted).
    #[must_use]
    pub fn evaluate(value: &str, is_valid: bool, show_error: bool) -> Self {
        if value.trim().is_empty() {
            InputState::Neutral
        } else if is_valid {
            InputState::Valid
        } else if show_error {
            InputState::Invalid
        } else {
            InputState::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_requires_32_characters() {
        assert!(!is_valid_api_key("short"));
        assert!(!is_valid_api_key(&"a".repeat(31)));
        assert!(is_valid_api_key(&"a".repeat(32)));
        assert!(is_valid_api_key(&format!("  {}  ", "k".repeat(32))));
    }

    #[test]
    fn ipv4_accepts_dotted_quads() {
        assert!(is_valid_ipv4("8.8.8.8"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4(" 10.0.0.1 "));
        assert!(is_valid_ipv4("010.0.0.1"));
    }

    #[test]
    fn ipv4_rejects_malformed_values() {
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4("1..3.4"));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(!is_valid_ipv4("1234.1.1.1"));
        assert!(!is_valid_ipv4("::1"));
    }

    #[test]
    fn input_state_hides_errors_until_requested() {
        assert_eq!(InputState::evaluate("", false, true), InputState::Neutral);
        assert_eq!(InputState::evaluate("1.2", false, false), InputState::Neutral);
        assert_eq!(InputState::evaluate("1.2", false, true), InputState::Invalid);
        assert_eq!(InputState::evaluate("1.2.3.4", true, false), InputState::Valid);
    }
}
