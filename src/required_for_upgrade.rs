use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};

/// Number of card copies still needed to reach the next level.
///
/// The API sends a plain integer while the card can be upgraded and the string
/// `"Maxed"` once it is at max level. Both shapes land here; the string case
/// becomes [`RequiredForUpgrade::MAXED`] (-1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequiredForUpgrade(i64);

impl RequiredForUpgrade {
    /// Sentinel for a card that is already at max level.
    pub const MAXED: Self = Self(-1);

    pub fn new(count: u32) -> Self {
        Self(i64::from(count))
    }

    /// Raw value, -1 when maxed.
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn is_maxed(self) -> bool {
        self == Self::MAXED
    }

    /// Copies left to collect. `None` when maxed, or for any other negative value.
    pub fn remaining(self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }
}

impl fmt::Display for RequiredForUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_maxed() {
            f.write_str("Maxed")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

struct RequiredForUpgradeVisitor;

impl<'de> Visitor<'de> for RequiredForUpgradeVisitor {
    type Value = RequiredForUpgrade;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("requiredForUpgrade as an integer or the string \"Maxed\"")
    }

    // Any string counts as maxed; the content is never checked.
    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(RequiredForUpgrade::MAXED)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(RequiredForUpgrade(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(RequiredForUpgrade)
            .map_err(|_| E::custom(format!("requiredForUpgrade: {value} does not fit in i64")))
    }
}

impl<'de> Deserialize<'de> for RequiredForUpgrade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RequiredForUpgradeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(json: &str) -> serde_json::Result<RequiredForUpgrade> {
        serde_json::from_str(json)
    }

    #[test]
    fn maxed_string_is_sentinel() {
        assert_eq!(parse(r#""Maxed""#).unwrap(), RequiredForUpgrade::MAXED);
        assert_eq!(parse(r#""Maxed""#).unwrap().get(), -1);
    }

    #[test]
    fn any_string_is_sentinel() {
        assert_eq!(parse(r#""X""#).unwrap(), RequiredForUpgrade::MAXED);
        assert_eq!(parse(r#""""#).unwrap(), RequiredForUpgrade::MAXED);
        assert_eq!(parse(r#""12""#).unwrap(), RequiredForUpgrade::MAXED);
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(parse("0").unwrap().get(), 0);
        assert_eq!(parse("50").unwrap().remaining(), Some(50));
        assert_eq!(parse("-1").unwrap(), RequiredForUpgrade::MAXED);
    }

    #[test]
    fn any_integer_is_taken_as_is() {
        assert_eq!(parse("-7").unwrap().get(), -7);
        assert_eq!(parse("-7").unwrap().remaining(), None);
        assert!(!parse("-7").unwrap().is_maxed());
        assert_eq!(parse("4294967296").unwrap().get(), 4_294_967_296);
        assert_eq!(parse("-9223372036854775808").unwrap().get(), i64::MIN);
    }

    #[test]
    fn rejects_other_shapes() {
        for bad in ["true", "{}", "[]", "null", "1.5"] {
            let err = parse(bad).unwrap_err();
            assert!(err.is_data(), "{bad} should be a data error, got {err}");
            assert!(err.to_string().contains("requiredForUpgrade"), "{err}");
        }
    }

    #[test]
    fn beyond_i64_is_an_error() {
        let err = parse("9223372036854775808").unwrap_err();
        assert!(err.to_string().contains("requiredForUpgrade"));
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(RequiredForUpgrade::MAXED.to_string(), "Maxed");
        assert_eq!(RequiredForUpgrade::new(250).to_string(), "250");
        assert_eq!(RequiredForUpgrade::MAXED.remaining(), None);
    }

    proptest! {
        #[test]
        fn prop_non_negative_integers_decode_exactly(n in 0i64..=i64::MAX) {
            let decoded = parse(&n.to_string()).unwrap();
            prop_assert_eq!(decoded.get(), n);
            prop_assert!(!decoded.is_maxed());
        }

        #[test]
        fn prop_every_string_is_maxed(s in ".*") {
            let json = serde_json::to_string(&s).unwrap();
            prop_assert_eq!(parse(&json).unwrap(), RequiredForUpgrade::MAXED);
        }
    }
}
