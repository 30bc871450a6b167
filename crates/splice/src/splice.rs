use std::cmp::Ordering;

use crate::insert::insert;
use crate::remove::remove;
use crate::replace::replace;

/// Deletes up to `delete_count` elements at `start`, then inserts `items` there.
///
/// The deletion is clamped to the elements actually available from `start`, and
/// a `start` past the end is treated as `seq.len()` (append). The net change in
/// length is `items.len()` minus the clamped delete count.
///
/// Depending on how the clamped count compares to `items.len()`, the work is
/// a plain overwrite, a remove followed by an insert, or an overwrite followed
/// by a remove of the leftover span.
pub fn splice<'a, T: Clone>(
    seq: &'a mut Vec<T>,
    start: usize,
    delete_count: usize,
    items: &[T],
) -> &'a mut Vec<T> {
    let start = start.min(seq.len());
    let deleted = delete_count.min(seq.len() - start);

    match deleted.cmp(&items.len()) {
        Ordering::Equal => {
            replace(seq, start, items);
        }
        Ordering::Less => {
            if deleted > 0 {
                remove(seq, start, start + deleted - 1);
            }
            insert(seq, start, items);
        }
        Ordering::Greater => {
            if !items.is_empty() {
                replace(seq, start, items);
            }
            remove(seq, start + items.len(), start + deleted - 1);
        }
    }
    seq
}
