//! FIFO bound shared by every ledger.

/// Append `item` and drop the oldest entries until at most `capacity` remain.
///
/// Relative order of the retained entries is preserved.
pub fn push_bounded<T>(items: &mut Vec<T>, item: T, capacity: usize) {
    items.push(item);
    if items.len() > capacity {
        let excess = items.len() - capacity;
        items.drain(..excess);
    }
}
