//! Location code types.

use std::fmt;

/// Longest code accepted by [`LocationCode::parse`].
pub const MAX_CODE_LEN: usize = 8;

/// Error returned when parsing an invalid location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocationCode {
    reason: &'static str,
}

/// A short identifier for a place in the timetable (e.g. `BOM`, `DEL`).
///
/// Codes are 1 to 8 uppercase ASCII letters or digits. This type
/// guarantees that any `LocationCode` value is valid by construction,
/// and it is `Copy` so the search can move codes around freely.
///
/// # Examples
///
/// ```
/// use journey_server::domain::LocationCode;
///
/// let bom = LocationCode::parse("BOM").unwrap();
/// assert_eq!(bom.as_str(), "BOM");
///
/// // Lowercase is rejected
/// assert!(LocationCode::parse("bom").is_err());
///
/// // ...unless normalized first
/// assert_eq!(LocationCode::parse_normalized(" bom ").unwrap(), bom);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationCode {
    len: u8,
    bytes: [u8; MAX_CODE_LEN],
}

impl LocationCode {
    /// Parse a location code from a string.
    ///
    /// The input must be 1 to 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationCode> {
        let raw = s.as_bytes();

        if raw.is_empty() {
            return Err(InvalidLocationCode {
                reason: "must not be empty",
            });
        }
        if raw.len() > MAX_CODE_LEN {
            return Err(InvalidLocationCode {
                reason: "must be at most 8 characters",
            });
        }

        let mut bytes = [0u8; MAX_CODE_LEN];
        for (slot, &b) in bytes.iter_mut().zip(raw) {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidLocationCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
            *slot = b;
        }

        Ok(Self {
            len: raw.len() as u8,
            bytes,
        })
    }

    /// Parse a location code, trimming whitespace and uppercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLocationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.as_str())
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
