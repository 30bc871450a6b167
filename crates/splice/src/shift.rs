/// Moves every element of the inclusive range `start..=end` by `distance` slots.
///
/// Vacated source slots keep whatever they held before; cleaning them up is the
/// caller's job. An empty range (`start > end`) copies nothing, and a zero
/// `distance` rewrites each element onto itself.
///
/// No bounds checking beyond the slice's own: a destination outside `seq` panics.
pub fn shift<T: Clone>(seq: &mut [T], start: usize, end: usize, distance: isize) -> &mut [T] {
    let offset = distance.unsigned_abs();
    if distance < 0 {
        // Destination trails the source, so reading front to back never sees a
        // slot that was already overwritten.
        for i in start..=end {
            seq[i - offset] = seq[i].clone();
        }
    } else {
        for i in (start..=end).rev() {
            seq[i + offset] = seq[i].clone();
        }
    }
    seq
}
