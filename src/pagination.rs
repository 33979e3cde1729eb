use serde::Serialize;

/// Number of pages needed for `total` items at `size` per page.
///
/// Zero items (or a zero page size) means zero pages.
pub fn pages_count(total: usize, size: usize) -> usize {
    if total == 0 || size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

/// One page of results plus the metadata needed to navigate the rest.
#[derive(Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Matching items across all pages.
    pub total_count: usize,
    pub page: usize,
    pub size: usize,
    pub pages_count: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total_count: usize, page: usize, size: usize) -> Self {
        Self {
            items,
            total_count,
            page,
            size,
            pages_count: pages_count(total_count, size),
        }
    }
}
