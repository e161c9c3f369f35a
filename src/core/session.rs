use super::models::{
    LoadedSource,
    Source,
};

#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub source: Source,
    pub paragraphs: Vec<String>,
    pub included: bool,
}

/// Paragraphs of every loaded source plus the per-source inclusion toggles.
///
/// Entries keep the order in which sources were loaded. A source appears at
/// most once; loading it again replaces its paragraphs in place.
#[derive(Debug, Clone, Default)]
pub struct Session {
    entries: Vec<SourceEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Discards everything and installs `sources`, all included.
    pub fn replace(&mut self, sources: Vec<LoadedSource>) {
        self.entries.clear();
        for loaded in sources {
            self.insert(loaded);
        }
    }

    pub fn insert(&mut self, loaded: LoadedSource) {
        match self.entries.iter_mut().find(|entry| entry.source == loaded.source) {
            Some(entry) => entry.paragraphs = loaded.paragraphs,
            None => self.entries.push(SourceEntry {
                source: loaded.source,
                paragraphs: loaded.paragraphs,
                included: true,
            }),
        }
    }

    /// Returns false when `source` is not part of the session.
    pub fn set_included(&mut self, source: &Source, included: bool) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.source == source) {
            Some(entry) => {
                entry.included = included;
                true
            }
            None => false,
        }
    }

    pub fn is_included(&self, source: &Source) -> Option<bool> {
        self.entries.iter().find(|entry| &entry.source == source).map(|entry| entry.included)
    }

    pub fn paragraphs(&self, source: &Source) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| &entry.source == source)
            .map(|entry| entry.paragraphs.as_slice())
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    /// Included sources in load order.
    pub fn included(&self) -> impl Iterator<Item = (&Source, &[String])> {
        self.entries
            .iter()
            .filter(|entry| entry.included)
            .map(|entry| (&entry.source, entry.paragraphs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
