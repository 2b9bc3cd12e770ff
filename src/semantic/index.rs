use rustc_hash::FxHashMap;

/// Name → slot lookup over a node slice.
///
/// Later entries overwrite earlier ones, so a redeclared name resolves to its
/// last declaration.
#[derive(Debug, Default)]
pub(crate) struct NameIndex<'a> {
    slots: FxHashMap<&'a str, usize>,
}

impl<'a> NameIndex<'a> {
    pub fn build<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut slots = FxHashMap::default();
        for (slot, name) in names.into_iter().enumerate() {
            slots.insert(name, slot);
        }
        Self { slots }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
