//! CSV export profiles
//!
//! Process-wide registry of export column layouts. Registration is
//! idempotent: the first registration of a name wins and later calls
//! with the same name are no-ops, so any portal entry point may call
//! [`register_defaults`] any number of times. There is no teardown.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Named column layout for a CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportProfile {
    pub name: String,
    pub columns: Vec<String>,
}

impl ExportProfile {
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}

static PROFILES: OnceLock<Mutex<HashMap<String, ExportProfile>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<String, ExportProfile>> {
    PROFILES.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Register a profile. Returns false when the name is already taken.
pub fn register(profile: ExportProfile) -> bool {
    let mut profiles = registry().lock().unwrap_or_else(|e| e.into_inner());
    if profiles.contains_key(&profile.name) {
        return false;
    }
    profiles.insert(profile.name.clone(), profile);
    true
}

/// Look up a registered profile by name
pub fn get(name: &str) -> Option<ExportProfile> {
    registry()
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .get(name)
        .cloned()
}

/// Install the built-in profiles (idempotent)
pub fn register_defaults() {
    register(ExportProfile::new(
        "credit-notes",
        &[
            "number",
            "customer_name",
            "status",
            "currency",
            "total_amount",
            "issued_on",
        ],
    ));
    register(ExportProfile::new(
        "credit-notes-accounting",
        &["number", "invoice_id", "currency", "total_amount"],
    ));
}
