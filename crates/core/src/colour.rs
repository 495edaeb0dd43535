//! Read-only snapshot of the colour reference table.

use std::collections::BTreeSet;

use crate::types::DbId;

/// Colours as seeded by the initial migration.
pub const SEED_COLOURS: &[(DbId, &str)] = &[(1, "red"), (2, "blue"), (3, "white"), (4, "black")];

/// An in-memory copy of the colour catalog taken at one point in time.
///
/// The validator only ever asks "does this id exist", so a snapshot loaded
/// once per batch keeps validation free of I/O.
#[derive(Debug, Clone, Default)]
pub struct ColourCatalog {
    ids: BTreeSet<DbId>,
}

impl ColourCatalog {
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = DbId>,
    {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: DbId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
