/// Number of items shown at once.
pub const PORTION_SIZE: usize = 20;

/// Walks a catalog of items one portion at a time.
///
/// Asking for more once the last portion is shown starts over at the first.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    catalog: Vec<T>,
    portion: usize,
    start: usize,
}

impl<T> Pager<T> {
    pub fn new(catalog: Vec<T>) -> Self {
        Self::with_portion(catalog, PORTION_SIZE)
    }

    pub fn with_portion(catalog: Vec<T>, portion: usize) -> Self {
        Self {
            catalog,
            portion: portion.max(1),
            start: 0,
        }
    }

    pub fn current(&self) -> &[T] {
        let start = self.start.min(self.catalog.len());
        let end = (self.start + self.portion).min(self.catalog.len());
        &self.catalog[start..end]
    }

    pub fn load_more(&mut self) -> &[T] {
        let end = self.start + self.portion;
        self.start = if end >= self.catalog.len() { 0 } else { end };
        self.current()
    }
}
