use std::collections::HashSet;

use crate::{error::BubbleError, properties::Bubble};

/// Labels that entered and left the set during one [`BubbleSet::sync`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

/// Ordered collection of the live bubbles, keyed by label.
///
/// Order is insertion order and decides the order of collision detection and
/// drawing. Only the simulator mutates the set, either inside a step or
/// between two steps.
#[derive(Debug, Clone, Default)]
pub struct BubbleSet {
    bubbles: Vec<Bubble>,
}

impl BubbleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn as_slice(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Bubble] {
        &mut self.bubbles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bubble> {
        self.bubbles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Bubble> {
        self.bubbles.iter_mut()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bubbles.iter().map(Bubble::label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index_of(label).is_some()
    }

    pub fn get(&self, label: &str) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.label() == label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Bubble> {
        self.bubbles.iter_mut().find(|b| b.label() == label)
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.bubbles.iter().position(|b| b.label() == label)
    }

    pub fn insert(&mut self, bubble: Bubble) -> Result<(), BubbleError> {
        if self.contains(bubble.label()) {
            return Err(BubbleError::DuplicateLabel(bubble.label().to_string()));
        }
        self.bubbles.push(bubble);
        Ok(())
    }

    pub fn remove(&mut self, label: &str) -> Option<Bubble> {
        self.index_of(label).map(|i| self.bubbles.remove(i))
    }

    /// Makes the set match `items`.
    ///
    /// Every new label gets a bubble from `spawn`, in item order, and bubbles
    /// whose label is missing from `items` are dropped. Bubbles that stay keep
    /// their state untouched. Repeated labels only count once. If `spawn`
    /// fails the set is left exactly as it was.
    pub fn sync<S, F>(&mut self, items: &[S], mut spawn: F) -> Result<SyncReport, BubbleError>
    where
        S: AsRef<str>,
        F: FnMut(&str) -> Result<Bubble, BubbleError>,
    {
        let wanted: HashSet<&str> = items.iter().map(AsRef::as_ref).collect();

        let mut seen = HashSet::new();
        let mut spawned = vec![];
        for item in items.iter().map(AsRef::as_ref) {
            if self.contains(item) || !seen.insert(item) {
                continue;
            }
            spawned.push(spawn(item)?);
        }

        let stale: Vec<String> = self
            .labels()
            .filter(|label| !wanted.contains(label))
            .map(str::to_string)
            .collect();

        let mut report = SyncReport::default();
        for label in stale {
            self.remove(&label);
            report.removed.push(label);
        }
        for bubble in spawned {
            report.added.push(bubble.label().to_string());
            self.insert(bubble)?;
        }

        Ok(report)
    }
}

impl<'a> IntoIterator for &'a BubbleSet {
    type Item = &'a Bubble;
    type IntoIter = std::slice::Iter<'a, Bubble>;

    fn into_iter(self) -> Self::IntoIter {
        self.bubbles.iter()
    }
}
