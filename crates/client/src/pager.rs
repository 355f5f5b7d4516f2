//! Fixed-size paging over the person list.
//!
//! "Previous" is available on every page but the first; "Next" is available while
//! `(page + 1) * page_size < total`.

pub const PAGE_SIZE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    /// A pager on the first page. A zero `page_size` is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` items; an empty list still has one (empty) page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        (self.page + 1) * self.page_size < total
    }

    /// The items on the current page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Advance one page; returns false (and stays put) when there is no next page.
    pub fn next(&mut self, total: usize) -> bool {
        if !self.has_next(total) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page; returns false on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Jump to `page`, clamped to the last page for `total` items.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Pull the page back onto the last page if the list shrank beneath it.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }
}
