use serde::Serialize;

/// Links shown per page in paged mode
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of a (filtered) list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub info: PageInfo,
}

/// Position of a page within the list, without the items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based page number as requested by the caller
    pub number: usize,
    pub total_pages: usize,
    pub paged: bool,
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.paged && self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.paged && self.number < self.total_pages
    }
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Slice `items` into the page numbered `current_page`.
///
/// When `paged` is false the whole list is returned as a single page.
/// An out-of-range page is not clamped and yields an empty slice; callers
/// changing the underlying list reset to page 1.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize, paged: bool) -> Page<'_, T> {
    if !paged {
        return Page {
            items,
            info: PageInfo {
                number: 1,
                total_pages: 1,
                paged: false,
            },
        };
    }

    let size = page_size.max(1);
    let start = current_page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Page {
        items: &items[start..end],
        info: PageInfo {
            number: current_page,
            total_pages: total_pages(items.len(), size),
            paged: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve() -> Vec<usize> {
        (0..12).collect()
    }

    #[test]
    fn test_twelve_items_make_three_pages() {
        let items = twelve();

        let first = paginate(&items, 5, 1, true);
        assert_eq!(first.info.total_pages, 3);
        assert_eq!(first.items, [0, 1, 2, 3, 4]);
        assert!(!first.info.has_previous());
        assert!(first.info.has_next());

        let second = paginate(&items, 5, 2, true);
        assert_eq!(second.items, [5, 6, 7, 8, 9]);

        let last = paginate(&items, 5, 3, true);
        assert_eq!(last.items, [10, 11]);
        assert!(last.info.has_previous());
        assert!(!last.info.has_next());
    }

    #[test]
    fn test_unpaged_returns_everything_as_one_page() {
        let items = twelve();
        let page = paginate(&items, 5, 3, false);
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.info.total_pages, 1);
        assert_eq!(page.info.number, 1);
        assert!(!page.info.has_next());
        assert!(!page.info.has_previous());
    }

    #[test]
    fn test_empty_list_has_zero_pages() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 5, 1, true);
        assert_eq!(page.info.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.info.has_next());
    }

    #[test]
    fn test_out_of_range_page_is_not_clamped() {
        let items = twelve();
        let page = paginate(&items, 5, 7, true);
        assert!(page.items.is_empty());
        assert_eq!(page.info.number, 7);
    }

    #[test]
    fn test_no_page_is_empty_for_non_empty_list() {
        for count in 1..=23 {
            let items: Vec<usize> = (0..count).collect();
            let pages = total_pages(count, 5);
            for number in 1..=pages {
                assert!(!paginate(&items, 5, number, true).items.is_empty());
            }
            let seen: usize = (1..=pages)
                .map(|n| paginate(&items, 5, n, true).items.len())
                .sum();
            assert_eq!(seen, count);
        }
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let items = twelve();
        let page = paginate(&items, 0, 2, true);
        assert_eq!(page.items, [1]);
        assert_eq!(page.info.total_pages, 12);
    }
}
