//! Recipient normalization.
//!
//! Turns a caller-supplied phone number into the JID string the WhatsApp
//! client addresses individual chats by.

use std::fmt;

/// Server part of a personal chat JID.
pub const USER_SERVER: &str = "s.whatsapp.net";

const FORMATTING_CHARS: [char; 3] = ['+', '-', ' '];

/// A normalized, server-qualified chat identifier (`<digits>@s.whatsapp.net`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipientId(String);

impl RecipientId {
    /// Strip every `+`, `-` and space from `raw` and append the user server.
    ///
    /// No other validation happens here: anything else in the input is kept
    /// and left for the session to accept or reject.
    pub fn from_phone(raw: &str) -> Self {
        let user: String = raw
            .chars()
            .filter(|c| !FORMATTING_CHARS.contains(c))
            .collect();
        Self(format!("{user}@{USER_SERVER}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before `@s.whatsapp.net`.
    pub fn user(&self) -> &str {
        self.0
            .strip_suffix(USER_SERVER)
            .and_then(|rest| rest.strip_suffix('@'))
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("+1 555-0100", "15550100@s.whatsapp.net")]
    #[case("15550100", "15550100@s.whatsapp.net")]
    #[case("+62 812-3456-7890", "6281234567890@s.whatsapp.net")]
    #[case("++44  20--7946 0958", "442079460958@s.whatsapp.net")]
    #[case("", "@s.whatsapp.net")]
    fn test_from_phone(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(RecipientId::from_phone(raw).as_str(), expected);
    }

    #[test]
    fn test_formatting_variants_collapse() {
        let a = RecipientId::from_phone("+1 555-0100");
        let b = RecipientId::from_phone("15550100");
        let c = RecipientId::from_phone("1-555 01-00");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_other_characters_pass_through() {
        // Parentheses and dots are not formatting characters here
        let id = RecipientId::from_phone("(555) 010.0");
        assert_eq!(id.user(), "(555)010.0");
    }

    #[test]
    fn test_user_part() {
        let id = RecipientId::from_phone("+49 151 2345");
        assert_eq!(id.user(), "491512345");
        assert_eq!(id.to_string(), "491512345@s.whatsapp.net");
    }

    proptest! {
        #[test]
        fn prop_no_formatting_chars_survive(raw in "[0-9+\\- ]{0,32}") {
            let id = RecipientId::from_phone(&raw);
            let user = id.user();
            prop_assert!(!user.contains(['+', '-', ' ']));
            prop_assert!(id.as_str().ends_with("@s.whatsapp.net"));
        }

        #[test]
        fn prop_formatting_is_irrelevant(digits in "[0-9]{1,15}", noise in proptest::collection::vec(0usize..3, 0..16)) {
            // Interleave formatting characters into the digits
            let mut formatted = String::new();
            let mut noise = noise.into_iter();
            for d in digits.chars() {
                if let Some(n) = noise.next() {
                    formatted.push(FORMATTING_CHARS[n]);
                }
                formatted.push(d);
            }
            prop_assert_eq!(RecipientId::from_phone(&formatted), RecipientId::from_phone(&digits));
        }
    }
}
