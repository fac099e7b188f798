//! Paginator for the filtered book list.

/// Fixed number of records per page.
pub const PAGE_SIZE: usize = 9;

/// Pages shown on each side of the current page by the pagination control.
const PAGE_WINDOW: usize = 2;

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on this page (empty when the page is past the end)
    pub items: &'a [T],
    /// The 1-based page this slice was taken for
    pub page: usize,
    /// `ceil(total_items / page_size)`, 0 when there are no items
    pub total_pages: usize,
    /// Length of the whole sequence
    pub total_items: usize,
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Slice out 1-based `page` of `items`.
///
/// A page past the end is not an error; it yields an empty slice. Page 0 is
/// treated as page 1 and a page size of 0 as 1.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    Page {
        items: &items[start..end],
        page,
        total_pages: total_pages(items.len(), size),
        total_items: items.len(),
    }
}

/// Clamp a 1-based page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Entry in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A selectable page number
    Page(usize),
    /// Elided pages ("...")
    Gap,
}

/// Windowed page list: first, `current ± 2`, last, with gaps where pages are elided.
///
/// Returns an empty list when there is at most one page, since the control
/// renders nothing in that case.
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= 1 {
        return Vec::new();
    }
    let current = clamp_page(current, total);
    let left = current.saturating_sub(PAGE_WINDOW).max(2);
    let right = (current + PAGE_WINDOW).min(total - 1);

    let mut markers = vec![PageMarker::Page(1)];
    if left > 2 {
        markers.push(PageMarker::Gap);
    }
    markers.extend((left..=right).map(PageMarker::Page));
    if right < total - 1 {
        markers.push(PageMarker::Gap);
    }
    markers.push(PageMarker::Page(total));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_page_of_ten() {
        let items: Vec<u32> = (0..10).collect();
        let page = paginate(&items, PAGE_SIZE, 2);
        assert_eq!(page.items, &[9]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 10);
    }

    #[test]
    fn test_empty_sequence_has_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, PAGE_SIZE, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_page_past_end_is_empty_not_rejected() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, PAGE_SIZE, 4);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 4);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_page_zero_and_size_zero() {
        let items: Vec<u32> = (0..3).collect();
        assert_eq!(paginate(&items, PAGE_SIZE, 0).items, &[0, 1, 2]);
        assert_eq!(paginate(&items, 0, 2).items, &[1]);
    }

    #[test]
    fn test_pages_partition_sequence() {
        for len in 0..40usize {
            let items: Vec<usize> = (0..len).collect();
            for size in 1..12usize {
                let first = paginate(&items, size, 1);
                let mut seen = Vec::new();
                for p in 1..=first.total_pages {
                    seen.extend_from_slice(paginate(&items, size, p).items);
                }
                assert_eq!(seen, items, "len={} size={}", len, size);
                assert_eq!(first.total_pages == 0, items.is_empty());
            }
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(5, 0), 1);
        assert_eq!(clamp_page(2, 7), 2);
    }

    #[test]
    fn test_page_markers_hidden_for_single_page() {
        assert!(page_markers(1, 0).is_empty());
        assert!(page_markers(1, 1).is_empty());
    }

    #[test]
    fn test_page_markers_small_total() {
        use PageMarker::*;
        assert_eq!(page_markers(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_markers(3, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn test_page_markers_with_gaps() {
        use PageMarker::*;
        assert_eq!(
            page_markers(6, 12),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Gap, Page(12)]
        );
        assert_eq!(
            page_markers(1, 10),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            page_markers(10, 10),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }
}
