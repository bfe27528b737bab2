use serde::Serialize;

/// Slice out one 1-indexed page.
///
/// Pages past the end, page 0 and a zero page size all yield an empty slice.
/// The page is not clamped; callers clamp on navigation.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(count / page_size)`; 0 when `page_size` is 0.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// 1-indexed item range shown on a page ("Showing 9 to 16 of 20").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageRange {
    pub fn is_empty(&self) -> bool {
        self.start == 0
    }
}

/// Item range for `page`. An empty page reports `start = end = 0`.
pub fn page_range(page: usize, page_size: usize, total: usize) -> PageRange {
    let empty = PageRange {
        start: 0,
        end: 0,
        total,
    };
    if page == 0 || page_size == 0 {
        return empty;
    }
    let Some(offset) = (page - 1).checked_mul(page_size) else {
        return empty;
    };
    if offset >= total {
        return empty;
    }
    PageRange {
        start: offset + 1,
        end: offset.saturating_add(page_size).min(total),
        total,
    }
}
