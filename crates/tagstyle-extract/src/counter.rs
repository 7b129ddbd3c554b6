//! Running counter for naming text nodes.

/// Counter shared by every node visit of one extraction run.
///
/// Starts at 1 and only grows. Create one per run and pass it by mutable
/// reference into each visit so sibling text nodes get distinct fallback names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCount {
    count: u32,
}

impl TextCount {
    pub fn new() -> Self {
        Self { count: 1 }
    }

    /// The current value.
    pub fn get(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }
}

impl Default for TextCount {
    fn default() -> Self {
        Self::new()
    }
}
