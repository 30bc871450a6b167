/// Overwrites `seq[start..start + items.len()]` with `items`, never resizing.
pub fn replace<'a, T: Clone>(seq: &'a mut [T], start: usize, items: &[T]) -> &'a mut [T] {
    for (offset, item) in items.iter().enumerate() {
        seq[start + offset] = item.clone();
    }
    seq
}
