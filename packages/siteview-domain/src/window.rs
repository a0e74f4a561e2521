/// The `[offset, offset + limit)` slice of `items`, clamped to its bounds.
pub fn window<T>(items: &[T], offset: usize, limit: usize) -> &[T] {
	let start = offset.min(items.len());
	let end = start.saturating_add(limit).min(items.len());

	&items[start..end]
}
