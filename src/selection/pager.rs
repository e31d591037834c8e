use std::ops::Range;

/// One-based page cursor over a list of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    per_page: usize,
    total_items: usize,
}

impl Pager {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total_items: 0,
        }
    }

    /// Updates the item count, pulling the page back inside the new range
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Zero when there is nothing to show
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Item indices on the current page
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}
