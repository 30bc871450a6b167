use crate::shift::shift;

/// Deletes the inclusive range `start..=end` and shrinks `seq` to match.
///
/// The tail after `end` is shifted left over the hole, then the now-stale
/// trailing slots are truncated. Removing a suffix only truncates. `start > end`
/// removes nothing.
pub fn remove<T: Clone>(seq: &mut Vec<T>, start: usize, end: usize) -> &mut Vec<T> {
    if start > end {
        return seq;
    }
    // Slicing rejects an `end` past the last element.
    let count = seq[start..=end].len();
    let len = seq.len();
    shift(seq, end + 1, len - 1, -(count as isize));
    seq.truncate(len - count);
    seq
}
