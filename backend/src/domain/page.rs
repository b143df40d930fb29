//! Offset pagination window with defaults.

/// Number of records skipped when the client supplies no offset.
pub const DEFAULT_SKIP: usize = 0;
/// Page size used when the client supplies no limit.
pub const DEFAULT_LIMIT: usize = 10;
/// Largest page size a client may request.
pub const MAX_LIMIT: usize = 100;

/// Rejected page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("limit must be between 1 and {MAX_LIMIT}, got {0}")]
pub struct LimitOutOfRange(pub usize);

/// Offset window over an ordered result.
///
/// # Examples
/// ```
/// use lookup_api::domain::Page;
///
/// let page = Page::new(1, 2).expect("valid page");
/// let window: Vec<_> = page.apply(1..=5).collect();
/// assert_eq!(window, vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: usize,
    limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    /// Validate an explicit window.
    pub fn new(skip: usize, limit: usize) -> Result<Self, LimitOutOfRange> {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(LimitOutOfRange(limit));
        }
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Restrict `records` to this window, preserving order.
    pub fn apply<I: IntoIterator>(&self, records: I) -> impl Iterator<Item = I::Item> + use<I> {
        records.into_iter().skip(self.skip).take(self.limit)
    }
}
