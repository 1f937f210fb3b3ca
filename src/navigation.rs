//! Highlight navigation over a bounded item list.
//!
//! Navigation wraps at both ends: moving past the last item lands on the first
//! and moving before the first lands on the last. Jumping to an explicit index
//! is not validated here; an out-of-range index simply highlights nothing.

/// Where the highlight should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Previous,
    Next,
    Index(usize),
}

/// Compute the highlighted index after moving towards `target`.
///
/// `last_index` is `None` when the list is empty, in which case relative moves
/// leave nothing highlighted.
pub const fn navigate(current: Option<usize>, last_index: Option<usize>, target: Target) -> Option<usize> {
    match target {
        Target::Index(index) => Some(index),
        Target::Previous => match (current, last_index) {
            (_, None) => None,
            (Some(i), Some(_)) if i > 0 => Some(i - 1),
            (_, Some(last)) => Some(last),
        },
        Target::Next => match (current, last_index) {
            (_, None) => None,
            (Some(i), Some(last)) if i < last => Some(i + 1),
            (_, Some(_)) => Some(0),
        },
    }
}
