//! Line code type.

use std::fmt;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code {input:?}: {reason}")]
pub struct InvalidLineCode {
    input: String,
    reason: &'static str,
}

/// A validated short line code (e.g. `R` for the Red line).
///
/// Codes are 1 to 4 uppercase ASCII letters or digits. Ordering is
/// lexicographic, which is what the network uses to pick a line when
/// several serve the same pair of stations.
///
/// # Examples
///
/// ```
/// use metro_server::domain::LineCode;
///
/// let red = LineCode::parse("R").unwrap();
/// assert_eq!(red.as_str(), "R");
/// assert!(LineCode::parse("RED-LINE").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCode(String);

impl LineCode {
    /// Parse a line code; must be 1 to 4 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        let invalid = |reason| InvalidLineCode {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() || s.len() > 4 {
            return Err(invalid("must be 1 to 4 characters"));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(invalid("must be uppercase ASCII letters or digits"));
        }

        Ok(LineCode(s.to_string()))
    }

    /// Parse after trimming and uppercasing.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLineCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line in the network: code plus display name (e.g. `R`, "Red").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub code: LineCode,
    pub name: String,
}

impl Line {
    pub fn new(code: LineCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Line ({})", self.name, self.code)
    }
}
