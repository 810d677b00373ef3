//! Page size for list requests.

use std::fmt;
use std::num::NonZeroU32;

/// Page size sent as the `limit` query parameter on list requests.
///
/// List operations fetch exactly one page. A service holding more results
/// than the limit returns a truncated list; following further pages is not
/// supported.
///
/// ## Example
///
/// ```rust
/// use rbac_client::PageLimit;
///
/// let limit = PageLimit::new(250).unwrap();
/// assert_eq!(limit.get(), 250);
/// assert!(PageLimit::new(0).is_none());
/// assert_eq!(PageLimit::default().get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageLimit(NonZeroU32);

/// The page size used unless the client is configured otherwise.
pub const DEFAULT_PAGE_LIMIT: PageLimit = match NonZeroU32::new(100) {
    Some(limit) => PageLimit(limit),
    None => unreachable!(),
};

impl PageLimit {
    /// Creates a page limit, returning `None` for zero.
    pub const fn new(limit: u32) -> Option<Self> {
        match NonZeroU32::new(limit) {
            Some(limit) => Some(Self(limit)),
            None => None,
        }
    }

    /// Returns the limit as an integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        DEFAULT_PAGE_LIMIT
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for PageLimit {
    fn from(limit: NonZeroU32) -> Self {
        Self(limit)
    }
}
