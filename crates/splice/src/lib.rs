mod insert;
mod remove;
mod replace;
mod shift;
mod splice;

pub use insert::insert;
pub use remove::remove;
pub use replace::replace;
pub use shift::shift;
pub use splice::splice;

/// In-place splicing primitives as methods on the sequence itself.
///
/// - Ranges are inclusive: `start..=end`, empty when `start > end`.
/// - Every method mutates `self` and returns it for chaining.
/// - Out-of-range indices panic, except in `splice_items`, which clamps.
pub trait SpliceExt<T> {
    fn shift_range(&mut self, start: usize, end: usize, distance: isize) -> &mut Self;

    fn replace_at(&mut self, start: usize, items: &[T]) -> &mut Self;

    fn remove_range(&mut self, start: usize, end: usize) -> &mut Self;

    fn insert_at(&mut self, start: usize, items: &[T]) -> &mut Self;

    fn splice_items(&mut self, start: usize, delete_count: usize, items: &[T]) -> &mut Self;
}

impl<T: Clone> SpliceExt<T> for Vec<T> {
    fn shift_range(&mut self, start: usize, end: usize, distance: isize) -> &mut Self {
        shift(self, start, end, distance);
        self
    }

    fn replace_at(&mut self, start: usize, items: &[T]) -> &mut Self {
        replace(self, start, items);
        self
    }

    fn remove_range(&mut self, start: usize, end: usize) -> &mut Self {
        remove(self, start, end)
    }

    fn insert_at(&mut self, start: usize, items: &[T]) -> &mut Self {
        insert(self, start, items)
    }

    fn splice_items(&mut self, start: usize, delete_count: usize, items: &[T]) -> &mut Self {
        splice(self, start, delete_count, items)
    }
}
