//! Location name lookup.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::LocationCode;

use super::error::{LocationsError, UnknownLocation};

/// The default table: common Indian city names and aliases.
const BUILTIN: &[(&str, &str)] = &[
    ("mumbai", "BOM"),
    ("bombay", "BOM"),
    ("delhi", "DEL"),
    ("pune", "PNQ"),
    ("hyderabad", "HYD"),
    ("jaipur", "JAI"),
    ("kolkata", "CCU"),
    ("calcutta", "CCU"),
    ("chandigarh", "IXC"),
    ("ahmedabad", "AMD"),
    ("bangalore", "BLR"),
    ("guwahati", "GAU"),
    ("chennai", "MAA"),
    ("cochin", "COK"),
    ("kochi", "COK"),
];

/// Case-insensitive location name → code lookup.
///
/// Cheap to clone; the table is shared.
#[derive(Debug, Clone)]
pub struct LocationNames {
    inner: Arc<HashMap<String, LocationCode>>,
    allow_codes: bool,
}

impl LocationNames {
    /// Build a lookup from `(name, code)` pairs.
    ///
    /// Names are lowercased; codes must be valid location codes.
    pub fn from_pairs<N, C>(pairs: impl IntoIterator<Item = (N, C)>) -> Result<Self, LocationsError>
    where
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let map = pairs
            .into_iter()
            .map(|(name, code)| {
                let name = normalize(name.as_ref());
                LocationCode::parse_normalized(code.as_ref())
                    .map(|code| (name.clone(), code))
                    .map_err(|source| LocationsError::InvalidCode { name, source })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            inner: Arc::new(map),
            allow_codes: true,
        })
    }

    /// The built-in city table.
    pub fn builtin() -> Self {
        let map = BUILTIN
            .iter()
            .filter_map(|(name, code)| {
                LocationCode::parse(code)
                    .ok()
                    .map(|code| ((*name).to_string(), code))
            })
            .collect();

        Self {
            inner: Arc::new(map),
            allow_codes: true,
        }
    }

    /// Load a table from a JSON object of `{ "name": "CODE" }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LocationsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LocationsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pairs: HashMap<String, String> =
            serde_json::from_str(&contents).map_err(|source| LocationsError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_pairs(pairs)
    }

    /// Whether a bare location code (e.g. `BOM`) that is not a known name
    /// resolves to itself. On by default.
    pub fn with_codes_allowed(mut self, allow: bool) -> Self {
        self.allow_codes = allow;
        self
    }

    /// Resolve a free-text name, ignoring case and surrounding whitespace.
    pub fn resolve(&self, name: &str) -> Result<LocationCode, UnknownLocation> {
        if let Some(code) = self.inner.get(&normalize(name)) {
            return Ok(*code);
        }
        if self.allow_codes {
            if let Ok(code) = LocationCode::parse(name.trim()) {
                return Ok(code);
            }
        }
        Err(UnknownLocation(name.to_string()))
    }

    /// Number of names in the table.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for LocationNames {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    #[test]
    fn builtin_resolves_aliases() {
        let names = LocationNames::builtin();
        assert_eq!(names.len(), BUILTIN.len());
        assert_eq!(names.resolve("mumbai").unwrap(), code("BOM"));
        assert_eq!(names.resolve("Bombay").unwrap(), code("BOM"));
        assert_eq!(names.resolve("  KOCHI ").unwrap(), code("COK"));
        assert_eq!(names.resolve("calcutta").unwrap(), code("CCU"));
    }

    #[test]
    fn unknown_name_is_typed_error() {
        let names = LocationNames::builtin();
        assert_eq!(
            names.resolve("atlantis"),
            Err(UnknownLocation("atlantis".to_string()))
        );
        assert!(names.resolve("").is_err());
    }

    #[test]
    fn bare_codes_resolve_unless_disabled() {
        let names = LocationNames::builtin();
        assert_eq!(names.resolve("LHR").unwrap(), code("LHR"));
        // lowercase is treated as a name, not a code
        assert!(names.resolve("lhr").is_err());

        let strict = names.with_codes_allowed(false);
        assert!(strict.resolve("LHR").is_err());
        assert_eq!(strict.resolve("delhi").unwrap(), code("DEL"));
    }

    #[test]
    fn from_pairs_validates_codes() {
        let names = LocationNames::from_pairs([("London", "lhr"), ("Paris", "CDG")]).unwrap();
        assert_eq!(names.resolve("london").unwrap(), code("LHR"));

        let err = LocationNames::from_pairs([("Nowhere", "not a code")]).unwrap_err();
        assert!(matches!(err, LocationsError::InvalidCode { .. }));
    }

    #[test]
    fn loads_json_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.json");
        std::fs::write(&path, r#"{ "London": "LHR", "paris": "CDG" }"#).unwrap();

        let names = LocationNames::load(&path).unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names.resolve("LONDON").unwrap(), code("LHR"));
    }

    #[test]
    fn load_reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = LocationNames::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(LocationsError::Io { .. })));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            LocationNames::load(&path),
            Err(LocationsError::Json { .. })
        ));
    }
}
