//! Station identifier type.

use std::fmt;

/// Maximum length of a station identifier.
const MAX_LEN: usize = 16;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: {reason}")]
pub struct InvalidStationId {
    input: String,
    reason: &'static str,
}

/// A validated station identifier (e.g. `S12`).
///
/// Identifiers are 1 to 16 uppercase ASCII letters or digits. Any
/// `StationId` value is valid by construction, so lookups keyed on it can
/// only fail because the station is absent, never because the key is garbage.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let id = StationId::parse("S12").unwrap();
/// assert_eq!(id.as_str(), "S12");
///
/// // Lowercase is rejected by the strict parser
/// assert!(StationId::parse("s12").is_err());
///
/// // ...but accepted when normalizing rider input
/// assert_eq!(StationId::parse_normalized(" s12 ").unwrap(), id);
/// assert_eq!(StationId::parse_normalized("12").unwrap(), id);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    ///
    /// The input must be 1 to 16 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let invalid = |reason| InvalidStationId {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if s.len() > MAX_LEN {
            return Err(invalid("must be at most 16 characters"));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(invalid("must be uppercase ASCII letters or digits"));
        }

        Ok(StationId(s.to_string()))
    }

    /// Parse rider-entered text into a station identifier.
    ///
    /// Trims surrounding whitespace and uppercases. A bare number `n` is
    /// shorthand for `S<n>`.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationId> {
        let upper = s.trim().to_ascii_uppercase();
        if !upper.is_empty() && upper.bytes().all(|b| b.is_ascii_digit()) {
            return Self::parse(&format!("S{upper}"));
        }
        Self::parse(&upper)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station in the network: identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("S1").is_ok());
        assert!(StationId::parse("S30").is_ok());
        assert!(StationId::parse("METRO").is_ok());
        assert!(StationId::parse("7").is_ok());
        assert!(StationId::parse("ABCDEFGHIJKLMNOP").is_ok());
    }

    #[test]
    fn reject_empty_and_long() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("ABCDEFGHIJKLMNOPQ").is_err());
    }

    #[test]
    fn reject_lowercase_and_punctuation() {
        assert!(StationId::parse("s1").is_err());
        assert!(StationId::parse("S-1").is_err());
        assert!(StationId::parse("S 1").is_err());
        assert!(StationId::parse("SÖ").is_err());
    }

    #[test]
    fn normalized_uppercases_and_trims() {
        let id = StationId::parse_normalized("  s4\n").unwrap();
        assert_eq!(id.as_str(), "S4");
    }

    #[test]
    fn normalized_prefixes_bare_numbers() {
        assert_eq!(StationId::parse_normalized("4").unwrap().as_str(), "S4");
        assert_eq!(StationId::parse_normalized(" 17 ").unwrap().as_str(), "S17");
    }

    #[test]
    fn normalized_still_rejects_garbage() {
        assert!(StationId::parse_normalized("").is_err());
        assert!(StationId::parse_normalized("   ").is_err());
        assert!(StationId::parse_normalized("S/4").is_err());
    }

    #[test]
    fn error_message_names_input() {
        let err = StationId::parse("s1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station id \"s1\": must be uppercase ASCII letters or digits"
        );
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("S9").unwrap();
        assert_eq!(format!("{}", id), "S9");
        assert_eq!(format!("{:?}", id), "StationId(S9)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = StationId::parse("S10").unwrap();
        let b = StationId::parse("S2").unwrap();
        assert!(a < b);
    }
}
