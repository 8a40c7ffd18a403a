//! Provisional id generation for locally created records.

/// Next local id for a collection: one past the running maximum, starting
/// at 1 for an empty collection.
///
/// A concurrent session can be handed the same id by the server; no
/// reconciliation exists at this scale.
pub fn next_id<I>(ids: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    ids.into_iter().max().unwrap_or(0) + 1
}
