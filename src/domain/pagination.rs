//! Incremental "load more" paging over the current view.

/// Number of products revealed per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// At least one more page can be revealed
    HasMore,
    /// Every item of the view has been revealed
    Exhausted,
}

/// Counts how many pages of the current view have been revealed.
///
/// The cursor does not own the view; callers pass it in on every call and
/// must [`reset`](PaginationCursor::reset) whenever the view is recomputed.
///
/// # Examples
///
/// ```
/// use storefront::domain::PaginationCursor;
///
/// let items = [1, 2, 3, 4, 5];
/// let mut cursor = PaginationCursor::new(2).unwrap();
/// assert_eq!(cursor.next_slice(&items), [1, 2]);
/// assert_eq!(cursor.next_slice(&items), [3, 4]);
/// assert_eq!(cursor.next_slice(&items), [5]);
/// assert!(!cursor.has_more(&items));
/// assert!(cursor.next_slice(&items).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: usize,
    page: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            page: 0,
        }
    }
}

impl PaginationCursor {
    /// Creates a cursor with a custom page size. Returns `None` for zero.
    pub fn new(page_size: usize) -> Option<Self> {
        (page_size > 0).then_some(Self { page_size, page: 0 })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages revealed so far.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Returns the next page of `view` and advances the cursor.
    ///
    /// Once the view is exhausted this returns an empty slice and leaves the
    /// cursor where it is.
    pub fn next_slice<'v, T>(&mut self, view: &'v [T]) -> &'v [T] {
        let start = self.page.saturating_mul(self.page_size);
        if start >= view.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(view.len());
        self.page += 1;
        &view[start..end]
    }

    pub fn has_more<T>(&self, view: &[T]) -> bool {
        self.page.saturating_mul(self.page_size) < view.len()
    }

    /// Number of items revealed for a view of `view_len` items.
    pub fn rendered_len(&self, view_len: usize) -> usize {
        self.page.saturating_mul(self.page_size).min(view_len)
    }

    pub fn state<T>(&self, view: &[T]) -> PageState {
        if self.has_more(view) {
            PageState::HasMore
        } else {
            PageState::Exhausted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_page_size() {
        let cursor = PaginationCursor::default();
        assert_eq!(cursor.page_size(), 10);
        assert_eq!(cursor.page(), 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(PaginationCursor::new(0).is_none());
    }

    #[test]
    fn test_five_items_page_size_two() {
        let items = ["a", "b", "c", "d", "e"];
        let mut cursor = PaginationCursor::new(2).unwrap();

        assert!(cursor.has_more(&items));
        assert_eq!(cursor.next_slice(&items), ["a", "b"]);
        assert!(cursor.has_more(&items));
        assert_eq!(cursor.next_slice(&items), ["c", "d"]);
        assert!(cursor.has_more(&items));
        assert_eq!(cursor.next_slice(&items), ["e"]);
        assert!(!cursor.has_more(&items));

        assert!(cursor.next_slice(&items).is_empty());
        assert!(!cursor.has_more(&items));
        assert_eq!(cursor.page(), 3);
        assert_eq!(cursor.rendered_len(items.len()), 5);
    }

    #[test]
    fn test_single_item_exhausts_after_first_slice() {
        let items = ["Blue Mug"];
        let mut cursor = PaginationCursor::default();
        assert_eq!(cursor.state(&items), PageState::HasMore);
        assert_eq!(cursor.next_slice(&items), ["Blue Mug"]);
        assert_eq!(cursor.state(&items), PageState::Exhausted);
    }

    #[test]
    fn test_empty_view_does_not_advance() {
        let items: [u8; 0] = [];
        let mut cursor = PaginationCursor::default();
        assert!(cursor.next_slice(&items).is_empty());
        assert_eq!(cursor.page(), 0);
        assert_eq!(cursor.state(&items), PageState::Exhausted);
    }

    #[test]
    fn test_reset_returns_to_has_more() {
        let items = [1, 2, 3];
        let mut cursor = PaginationCursor::new(3).unwrap();
        cursor.next_slice(&items);
        assert_eq!(cursor.state(&items), PageState::Exhausted);

        cursor.reset();
        assert_eq!(cursor.page(), 0);
        assert_eq!(cursor.rendered_len(items.len()), 0);
        assert_eq!(cursor.state(&items), PageState::HasMore);
        assert_eq!(cursor.next_slice(&items), [1, 2, 3]);
    }

    #[test]
    fn test_rendered_len_tracks_pages() {
        let items: Vec<u32> = (0..25).collect();
        let mut cursor = PaginationCursor::default();
        cursor.next_slice(&items);
        assert_eq!(cursor.rendered_len(items.len()), 10);
        cursor.next_slice(&items);
        assert_eq!(cursor.rendered_len(items.len()), 20);
        cursor.next_slice(&items);
        assert_eq!(cursor.rendered_len(items.len()), 25);
    }

    proptest! {
        #[test]
        fn test_slices_cover_view_exactly(len in 0usize..60, page_size in 1usize..15) {
            let items: Vec<usize> = (0..len).collect();
            let mut cursor = PaginationCursor::new(page_size).unwrap();
            let mut seen = Vec::new();

            while cursor.has_more(&items) {
                let slice = cursor.next_slice(&items);
                prop_assert!(!slice.is_empty());
                prop_assert!(slice.len() <= page_size);
                seen.extend_from_slice(slice);
                prop_assert_eq!(cursor.rendered_len(items.len()), seen.len());
            }

            prop_assert_eq!(seen, items);
            prop_assert!(cursor.next_slice(&(0..len).collect::<Vec<_>>()).is_empty());
        }
    }
}
