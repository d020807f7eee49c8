//! Paging configuration for the paged list controller.
//!
//! `PagingConfig` is an immutable value describing how a paged list loads
//! data: how large a page is, how far from the end prefetching starts, and
//! the ceiling after which no further loads are attempted. Build one with
//! the `with_*` methods and hand it to [`crate::pagedlist::Model::new`].
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_paging::config::PagingConfig;
//!
//! let config = PagingConfig::new()
//!     .with_page_size(20)
//!     .with_load_threshold(2);
//!
//! assert_eq!(config.page_size(), 20);
//! assert_eq!(config.load_threshold(), 2);
//! assert_eq!(config.data_limit(), usize::MAX); // unbounded by default
//! ```

/// Immutable configuration for a paged list.
///
/// Three knobs control loading behavior:
///
/// - **data limit**: total item ceiling; once the list holds at least this
///   many items no further pages are requested.
/// - **page size**: how many items one page holds; also the unit removed
///   and refetched on structural edits.
/// - **load threshold**: how many items from the end of the list the
///   viewport may get before the next page is prefetched.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paging::config::PagingConfig;
///
/// let config = PagingConfig::new()
///     .with_data_limit(500)
///     .with_page_size(25)
///     .with_load_threshold(3);
///
/// assert_eq!(config.data_limit(), 500);
/// assert_eq!(config.page_size(), 25);
/// assert_eq!(config.load_threshold(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    data_limit: usize,
    page_size: usize,
    load_threshold: usize,
}

impl Default for PagingConfig {
    /// Default configuration: unbounded data limit, ten items per page,
    /// prefetch one item from the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    ///
    /// let config = PagingConfig::default();
    /// assert_eq!(config.data_limit(), usize::MAX);
    /// assert_eq!(config.page_size(), 10);
    /// assert_eq!(config.load_threshold(), 1);
    /// ```
    fn default() -> Self {
        Self {
            data_limit: usize::MAX,
            page_size: 10,
            load_threshold: 1,
        }
    }
}

impl PagingConfig {
    /// Creates a configuration with default values.
    ///
    /// Equivalent to [`PagingConfig::default`]; exists for the conventional
    /// builder entry point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total item ceiling (builder pattern).
    ///
    /// Once the list length reaches this value the controller stops
    /// requesting pages and enters its reached-limit state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    ///
    /// let config = PagingConfig::new().with_data_limit(100);
    /// assert_eq!(config.data_limit(), 100);
    /// ```
    pub fn with_data_limit(mut self, data_limit: usize) -> Self {
        self.data_limit = data_limit;
        self
    }

    /// Sets the page size (builder pattern).
    ///
    /// The minimum value is 1; any value less than 1 is clamped to 1, so a
    /// configuration can never describe an empty page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    ///
    /// let config = PagingConfig::new().with_page_size(20);
    /// assert_eq!(config.page_size(), 20);
    ///
    /// // Values less than 1 are clamped to 1
    /// let clamped = PagingConfig::new().with_page_size(0);
    /// assert_eq!(clamped.page_size(), 1);
    /// ```
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the prefetch distance (builder pattern).
    ///
    /// When the last visible item is within this many items of the end of
    /// the list, the proximity trigger requests the next page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paging::config::PagingConfig;
    ///
    /// let config = PagingConfig::new().with_load_threshold(5);
    /// assert_eq!(config.load_threshold(), 5);
    /// ```
    pub fn with_load_threshold(mut self, load_threshold: usize) -> Self {
        self.load_threshold = load_threshold;
        self
    }

    /// Returns the total item ceiling.
    pub fn data_limit(&self) -> usize {
        self.data_limit
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the prefetch distance.
    pub fn load_threshold(&self) -> usize {
        self.load_threshold
    }
}
