//! Pet catalog: maps chat icon indices to pet names.

/// Lookup table from raw chat icon index to pet display name.
///
/// Icons for pets are appended to the client's mod-icon sheet as one
/// contiguous run starting at `base_index`. Until that run has been
/// registered the catalog is [`PetCatalog::Loading`] and no index resolves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PetCatalog {
    /// Icon sheet not registered yet.
    #[default]
    Loading,

    /// Icons registered at `base_index..base_index + names.len()`.
    Loaded {
        /// Icon index of the first pet.
        base_index: i32,
        /// Pet names in icon order.
        names: Vec<String>,
    },
}

impl PetCatalog {
    /// Create a loaded catalog.
    pub fn loaded(base_index: i32, names: Vec<String>) -> Self {
        Self::Loaded { base_index, names }
    }

    /// Whether the catalog is still waiting for its icons.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Resolve a raw icon index to a pet name.
    ///
    /// Returns `None` while loading or when `icon_index - base_index` falls
    /// outside `0..len`.
    pub fn lookup(&self, icon_index: i32) -> Option<&str> {
        let Self::Loaded { base_index, names } = self else {
            return None;
        };

        let offset = i64::from(icon_index) - i64::from(*base_index);
        let offset = usize::try_from(offset).ok()?;
        names.get(offset).map(String::as_str)
    }
}
