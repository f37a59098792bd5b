//! Recognition locale catalog and resolution

use serde::{Deserialize, Serialize};

/// One entry of the engine's locale catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleInfo {
    /// Engine locale identifier (e.g. "en_US")
    pub id: String,
    /// Human-readable name (e.g. "English (United States)")
    pub name: String,
}

impl LocaleInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Pick the locale id to hand to the engine
///
/// Order: a user-preferred id present in the catalog wins, then the
/// engine's system-preferred locale when the catalog contains it, then the
/// engine default — represented as the empty id, never an invalid one.
pub fn resolve(
    preferred: Option<&str>,
    system: Option<&LocaleInfo>,
    catalog: &[LocaleInfo],
) -> String {
    let in_catalog = |id: &str| catalog.iter().any(|l| l.id == id);

    if let Some(preferred) = preferred {
        if in_catalog(preferred) {
            return preferred.to_string();
        }
    }
    if let Some(system) = system {
        if in_catalog(&system.id) {
            return system.id.clone();
        }
    }
    String::new()
}
