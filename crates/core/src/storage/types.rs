/// Opaque continuation token returned by a scan page.
///
/// Callers must treat the contents as opaque; they only hand it back to the
/// repository that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageToken(String);

impl PageToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single scan request: where to resume and how many items to read at most.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRequest {
    pub start: Option<PageToken>,
    pub limit: Option<u32>,
}

impl ScanRequest {
    /// A request for the first page.
    pub fn first(limit: Option<u32>) -> Self {
        Self { start: None, limit }
    }

    /// A request resuming after `token`.
    pub fn after(token: PageToken, limit: Option<u32>) -> Self {
        Self {
            start: Some(token),
            limit,
        }
    }
}

/// One page of scan results.
///
/// `next` is `None` once the store reports no further pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<PageToken>,
}

/// Outcome of an update guarded by an existence condition.
///
/// `ConditionFailed` means the store rejected the write because no item with
/// the key exists. It is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalUpdate<T> {
    Applied(T),
    ConditionFailed,
}

impl<T> ConditionalUpdate<T> {
    /// Converts into `Some(updated)` or `None` when the condition failed.
    pub fn applied(self) -> Option<T> {
        match self {
            ConditionalUpdate::Applied(value) => Some(value),
            ConditionalUpdate::ConditionFailed => None,
        }
    }
}
