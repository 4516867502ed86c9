use serde::Serialize;

/// One slot in the page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons to show for `current` out of `total` pages.
///
/// The first and last page are always shown, with the neighbours of the
/// current page in between and an ellipsis wherever pages are skipped.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = vec![PageItem::Page(1)];

    let range_start = current.saturating_sub(1).max(2);
    let range_end = (current + 1).min(total.saturating_sub(1));

    if range_start > 2 {
        items.push(PageItem::Ellipsis);
    }

    items.extend((range_start..=range_end).map(PageItem::Page));

    if range_end + 1 < total {
        items.push(PageItem::Ellipsis);
    }

    if total > 1 {
        items.push(PageItem::Page(total));
    }

    items
}

/// Cursor over a list split into fixed-size pages, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Always at least one page, even for an empty list
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page).max(1)
    }

    pub fn set_page(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.total_pages(len));
    }

    pub fn next(&mut self, len: usize) {
        self.set_page(self.page + 1, len);
    }

    pub fn previous(&mut self, len: usize) {
        self.set_page(self.page.saturating_sub(1), len);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.per_page;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_page_numbers() {
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(page_numbers(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_numbers(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(page_numbers(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn test_paginator_clamps() {
        let items: Vec<u32> = (1..=25).collect();
        let mut pages = Paginator::new(10);
        assert_eq!(pages.total_pages(items.len()), 3);
        assert_eq!(pages.slice(&items), &items[0..10]);

        pages.previous(items.len());
        assert_eq!(pages.page(), 1);

        pages.set_page(9, items.len());
        assert_eq!(pages.page(), 3);
        assert_eq!(pages.slice(&items), &[21, 22, 23, 24, 25]);

        pages.next(items.len());
        assert_eq!(pages.page(), 3);
        assert_eq!(pages.total_pages(0), 1);
    }
}
