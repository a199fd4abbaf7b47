//! Gallery pagination and lightbox state.
//!
//! Pagination is client-side over the full item list with a fixed page size.
//! The lightbox navigates the FULL list (wrapping at both ends), not just
//! the visible page, and every operation is a guarded no-op on an empty
//! gallery.

pub const PAGE_SIZE: usize = 12;

/// Number of pages needed for `len` items (0 for an empty gallery).
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Slice of `items` visible on `page` (0-based). An out-of-range page is
/// empty rather than a panic.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Overlay viewer over the full gallery list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    index: Option<usize>,
}

impl Lightbox {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// Currently displayed item, if open.
    pub fn current(&self) -> Option<usize> {
        self.index
    }

    /// Open at item `i`. No-op when the gallery is empty or `i` is out of
    /// range.
    pub fn open(&mut self, i: usize, len: usize) {
        if i < len {
            self.index = Some(i);
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    /// Advance to the next item, wrapping past the end.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(i) = self.index {
            self.index = Some((i + 1) % len);
        }
    }

    /// Step to the previous item, wrapping past the start.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(i) = self.index {
            self.index = Some((i + len - 1) % len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(24), 2);
    }

    #[test]
    fn page_slice_clamps_last_page() {
        let items: Vec<usize> = (0..15).collect();
        assert_eq!(page_slice(&items, 0).len(), 12);
        assert_eq!(page_slice(&items, 1), &[12, 13, 14]);
        assert_eq!(page_slice(&items, 2), &[] as &[usize]);
    }

    #[test]
    fn lightbox_cannot_open_on_empty_gallery() {
        let mut lb = Lightbox::closed();
        lb.open(0, 0);
        assert!(!lb.is_open());
        lb.next(0);
        lb.prev(0);
        assert!(!lb.is_open());
    }

    #[test]
    fn navigation_wraps_over_full_list() {
        let mut lb = Lightbox::closed();
        lb.open(13, 15); // beyond the first page
        assert_eq!(lb.current(), Some(13));
        lb.next(15);
        lb.next(15);
        assert_eq!(lb.current(), Some(0)); // wrapped past the end
        lb.prev(15);
        assert_eq!(lb.current(), Some(14)); // wrapped past the start
    }

    #[test]
    fn close_resets_state() {
        let mut lb = Lightbox::closed();
        lb.open(2, 5);
        lb.close();
        assert!(!lb.is_open());
        // Navigation while closed stays closed.
        lb.next(5);
        assert!(!lb.is_open());
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut lb = Lightbox::closed();
        lb.open(7, 5);
        assert!(!lb.is_open());
    }
}
