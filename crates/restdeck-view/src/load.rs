//! Collection load states.

/// Whether a screen's collection(s) have been fetched yet.
///
/// Distinguishes the transient just-mounted empty state from a genuinely
/// empty or failed load, so the shell can render "loading" instead of a
/// bare zero-row table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Initial state: requests are in flight (or about to be).
    #[default]
    Loading,
    /// All initial requests resolved successfully.
    Loaded,
    /// At least one initial request failed; affected collections stay empty.
    Failed,
}

impl LoadState {
    /// True once the initial requests have resolved, successfully or not.
    #[must_use]
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Loading)
    }
}
