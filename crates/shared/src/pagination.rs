//! Offset pagination arithmetic.
//!
//! The upstream API pages with `limit`/`offset` query parameters and reports
//! a server-side `total` that spans all pages. These helpers keep the
//! page/offset conversions and the pager widget math in one place. Pages are
//! zero-based throughout.

/// Converts a zero-based page index to the request offset.
pub fn offset(page: u64, page_size: u64) -> u64 {
    page * page_size
}

/// Total number of pages needed for `total` records.
///
/// Returns 0 when `page_size` is 0 rather than dividing by zero.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// One-based display bounds of the records on `page`, as `(start, end)`.
///
/// `end` is clamped to `total`, so the last page reports the true record
/// count. An empty result set yields `(1, 0)`.
pub fn record_bounds(page: u64, page_size: u64, total: u64) -> (u64, u64) {
    let start = page * page_size + 1;
    let end = ((page + 1) * page_size).min(total);
    (start, end)
}

/// Page numbers the pager should display: at most 5 pages centred on
/// `current`, shifted to keep a full window near either boundary.
pub fn page_window(current: u64, total_pages: u64) -> Vec<u64> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut start = current.saturating_sub(2);
    let mut end = (current + 2).min(total_pages - 1);

    if current <= 2 {
        end = 4.min(total_pages - 1);
    }
    if current + 3 >= total_pages {
        start = total_pages.saturating_sub(5);
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_page() {
        assert_eq!(offset(0, 25), 0);
        assert_eq!(offset(1, 25), 25);
        assert_eq!(offset(4, 100), 400);
    }

    #[test]
    fn test_total_pages_exact_and_partial() {
        assert_eq!(total_pages(100, 25), 4);
        assert_eq!(total_pages(101, 25), 5);
        assert_eq!(total_pages(1, 25), 1);
        assert_eq!(total_pages(0, 25), 0);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(100, 0), 0);
    }

    #[test]
    fn test_record_bounds_first_page() {
        assert_eq!(record_bounds(0, 25, 80), (1, 25));
    }

    #[test]
    fn test_record_bounds_last_page_clamped() {
        assert_eq!(record_bounds(3, 25, 80), (76, 80));
    }

    #[test]
    fn test_record_bounds_empty() {
        assert_eq!(record_bounds(0, 25, 0), (1, 0));
    }

    #[test]
    fn test_page_window_centre() {
        // Far from both boundaries: two pages either side of current.
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_near_start() {
        assert_eq!(page_window(0, 10), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(2, 10), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_page_window_near_end() {
        assert_eq!(page_window(9, 10), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(7, 10), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_page_window_fewer_than_five_pages() {
        assert_eq!(page_window(0, 1), vec![0]);
        assert_eq!(page_window(1, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_page_window_no_pages() {
        assert!(page_window(0, 0).is_empty());
    }
}
