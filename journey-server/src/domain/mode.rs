//! Transport mode tags.

use std::fmt;

/// Error returned when parsing an invalid mode tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode: {reason}")]
pub struct InvalidMode {
    reason: &'static str,
}

/// The transport category of a leg (e.g. `flight`, `train`, `bus`).
///
/// The timetable carries modes as free string tags from a small set.
/// Tags are kept as written and compared exactly: a change of tag between
/// consecutive legs is what counts as a transfer.
///
/// # Examples
///
/// ```
/// use journey_server::domain::Mode;
///
/// let flight = Mode::parse(" flight ").unwrap();
/// assert_eq!(flight.as_str(), "flight");
/// assert!(Mode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Mode(String);

impl Mode {
    /// Parse a mode tag, trimming surrounding whitespace.
    ///
    /// The tag must be non-empty and contain only visible ASCII characters.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(InvalidMode {
                reason: "must not be empty",
            });
        }
        if !tag.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(InvalidMode {
                reason: "must be visible ASCII without spaces",
            });
        }
        Ok(Self(tag.to_string()))
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mode({})", self.0)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_tag() {
        assert_eq!(Mode::parse("FLIGHT").unwrap().as_str(), "FLIGHT");
        assert_eq!(Mode::parse("bus").unwrap().as_str(), "bus");
    }

    #[test]
    fn rejects_blank_and_inner_spaces() {
        assert!(Mode::parse("   ").is_err());
        assert!(Mode::parse("night bus").is_err());
    }

    #[test]
    fn comparison_is_exact() {
        assert_ne!(Mode::parse("train").unwrap(), Mode::parse("Train").unwrap());
        assert_eq!(Mode::parse("train").unwrap(), Mode::parse("train ").unwrap());
    }
}
