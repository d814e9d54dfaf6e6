//! The application's single piece of state: which star, if any, is open.

use crate::catalog::{Catalog, StarId, StarRecord};

/// Either nothing is selected or exactly one star is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(StarId),
}

impl Selection {
    /// Replaces any current selection with `id`.
    pub fn select(&mut self, id: StarId) {
        *self = Selection::Selected(id);
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn id(&self) -> Option<&StarId> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }

    /// Looks the selected record up in `catalog`.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a StarRecord> {
        self.id().and_then(|id| catalog.get(id))
    }
}
