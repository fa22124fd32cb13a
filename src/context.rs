//! Shared ritual state.
//!
//! Built once by the app root and handed to every screen that needs it.
//! Screens read the linked bond from here instead of threading it through
//! each constructor.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// A saved ritual result for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RitualResult {
    pub result: String,
    pub is_revealed: bool,
}

#[derive(Debug, Default)]
struct RitualContextInner {
    bond_id: Option<String>,
    night_before: Option<String>,
    ritual_results: BTreeMap<String, RitualResult>,
}

/// Cloneable handle; all clones see the same state.
#[derive(Clone, Default)]
pub struct RitualContext {
    inner: Arc<RwLock<RitualContextInner>>,
}

impl RitualContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a bond already known (e.g. from config).
    pub fn with_bond(bond_id: impl Into<String>) -> Self {
        let context = Self::new();
        context.set_bond_id(bond_id);
        context
    }

    pub fn bond_id(&self) -> Option<String> {
        self.inner.read().bond_id.clone()
    }

    pub fn set_bond_id(&self, bond_id: impl Into<String>) {
        let bond_id = bond_id.into();
        tracing::debug!(bond_id = %bond_id, "Bond set in ritual context");
        self.inner.write().bond_id = Some(bond_id);
    }

    pub fn night_before(&self) -> Option<String> {
        self.inner.read().night_before.clone()
    }

    pub fn set_night_before(&self, note: Option<String>) {
        self.inner.write().night_before = note;
    }

    /// Store a result for `category`. Results always start hidden.
    pub fn save_category(&self, category: impl Into<String>, result: impl Into<String>) {
        self.inner.write().ritual_results.insert(
            category.into(),
            RitualResult {
                result: result.into(),
                is_revealed: false,
            },
        );
    }

    /// Mark a saved result as revealed. Returns false if nothing is saved for `category`.
    pub fn reveal_category(&self, category: &str) -> bool {
        match self.inner.write().ritual_results.get_mut(category) {
            Some(entry) => {
                entry.is_revealed = true;
                true
            }
            None => false,
        }
    }

    pub fn ritual_result(&self, category: &str) -> Option<RitualResult> {
        self.inner.read().ritual_results.get(category).cloned()
    }

    pub fn ritual_results(&self) -> BTreeMap<String, RitualResult> {
        self.inner.read().ritual_results.clone()
    }
}
