//! Repository configuration.

/// Configuration for creating a repository.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of distinct article ids supported.
    ///
    /// Fixes the size of the per-id lock table; valid ids are `[0, capacity)`.
    pub capacity: usize,

    /// Initial sizing hint for the index hash tables and the author/keyword
    /// lock tables.
    pub table_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 40_000,
            table_capacity: 1_024,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of distinct article ids supported.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the initial sizing hint for index and lock tables.
    #[must_use]
    pub const fn table_capacity(mut self, table_capacity: usize) -> Self {
        self.table_capacity = table_capacity;
        self
    }
}
