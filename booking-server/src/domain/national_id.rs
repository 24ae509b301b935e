//! National identity numbers.

use std::fmt;

/// Error returned when parsing an invalid national ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid national id: {reason}")]
pub struct InvalidNationalId {
    reason: &'static str,
}

/// The national identity number that keys passengers and personnel.
///
/// The only hard requirement is that the value is non-blank; surrounding
/// whitespace is trimmed. The canonical layout is `DD.DD.DD-DDD.DD`
/// (digits with dots and a dash in fixed positions) and
/// [`NationalId::matches_format`] reports whether a value follows it, but
/// registration only warns on a mismatch rather than rejecting.
///
/// # Examples
///
/// ```
/// use booking_server::domain::NationalId;
///
/// let id = NationalId::parse("90.01.15-123.45").unwrap();
/// assert_eq!(id.as_str(), "90.01.15-123.45");
/// assert!(id.matches_format());
///
/// // Non-canonical values are accepted, just flagged
/// let odd = NationalId::parse("PASSPORT-XY-99").unwrap();
/// assert!(!odd.matches_format());
///
/// // Blank values are rejected
/// assert!(NationalId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// Parse a national ID from a string.
    ///
    /// Trims surrounding whitespace; the remainder must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidNationalId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidNationalId {
                reason: "national id cannot be blank",
            });
        }
        Ok(NationalId(trimmed.to_string()))
    }

    /// Returns true if the value follows the canonical `DD.DD.DD-DDD.DD`
    /// layout.
    pub fn matches_format(&self) -> bool {
        const PATTERN: &[u8] = b"00.00.00-000.00";

        let bytes = self.0.as_bytes();
        if bytes.len() != PATTERN.len() {
            return false;
        }
        bytes.iter().zip(PATTERN).all(|(&b, &p)| match p {
            b'0' => b.is_ascii_digit(),
            _ => b == p,
        })
    }

    /// Returns the national ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NationalId({})", self.0)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
