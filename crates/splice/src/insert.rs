use crate::replace::replace;
use crate::shift::shift;

/// Inserts `items` before index `start`, pushing the old `seq[start..]` right.
///
/// `start == seq.len()` appends. Empty `items` leaves `seq` unchanged.
pub fn insert<'a, T: Clone>(seq: &'a mut Vec<T>, start: usize, items: &[T]) -> &'a mut Vec<T> {
    let original_len = seq.len();

    // Grow first. The new slots are seeded with `items`; the shift and replace
    // below overwrite every one of them.
    seq.extend_from_slice(items);
    if let Some(original_last) = original_len.checked_sub(1) {
        shift(seq, start, original_last, items.len() as isize);
    }
    replace(seq, start, items);
    seq
}
