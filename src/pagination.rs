//! Pagination Helper
//!
//! The UI counts pages from 1, the server from 0. `PageCursor` keeps the
//! 1-based page and the page size; every navigation yields the 0-based
//! [`PageChange`] to refetch with.

use leptos::prelude::*;

use crate::models::Page;

/// Page request in server terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// 0-based page index
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    page_size: u32,
}

impl PageCursor {
    pub fn new(initial_page: u32, page_size: u32) -> Self {
        Self {
            current: initial_page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// 1-based current page
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 0-based index for the server
    pub fn server_page(&self) -> u32 {
        self.current - 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_next(&self, total_pages: u32) -> bool {
        self.current < total_pages
    }

    pub fn next(&mut self, total_pages: u32) -> PageChange {
        self.go_to(self.current.saturating_add(1), total_pages)
    }

    pub fn previous(&mut self, total_pages: u32) -> PageChange {
        self.go_to(self.current.saturating_sub(1), total_pages)
    }

    pub fn first(&mut self) -> PageChange {
        self.current = 1;
        self.change()
    }

    pub fn last(&mut self, total_pages: u32) -> PageChange {
        self.go_to(total_pages, total_pages)
    }

    /// Jump to `page`, clamped to `[1, max(total_pages, 1)]`
    pub fn go_to(&mut self, page: u32, total_pages: u32) -> PageChange {
        self.current = page.clamp(1, total_pages.max(1));
        self.change()
    }

    /// New page size restarts at page 1
    pub fn set_page_size(&mut self, size: u32) -> PageChange {
        self.page_size = size.max(1);
        self.current = 1;
        self.change()
    }

    /// Align with a server response without requesting anything
    pub fn sync(&mut self, server_page: u32, size: u32) {
        self.current = server_page.saturating_add(1);
        if size > 0 {
            self.page_size = size;
        }
    }

    /// Follow a server response. When the page index is past the last page
    /// (e.g. its only row was deleted) returns the request for the last one.
    pub fn align(&mut self, server_page: u32, size: u32, total_pages: u32) -> Option<PageChange> {
        self.sync(server_page, size);
        if server_page >= total_pages.max(1) {
            Some(self.last(total_pages))
        } else {
            None
        }
    }

    pub fn change(&self) -> PageChange {
        PageChange {
            page: self.server_page(),
            size: self.page_size,
        }
    }
}

/// Reactive wrapper invoking `on_change` after every navigation
#[derive(Clone, Copy)]
pub struct Pagination {
    pub cursor: RwSignal<PageCursor>,
    on_change: Callback<PageChange>,
}

impl Pagination {
    pub fn current(&self) -> u32 {
        self.cursor.get().current()
    }

    pub fn page_size(&self) -> u32 {
        self.cursor.get().page_size()
    }

    pub fn can_go_previous(&self) -> bool {
        self.cursor.get().can_go_previous()
    }

    pub fn can_go_next(&self, total_pages: u32) -> bool {
        self.cursor.get().can_go_next(total_pages)
    }

    pub fn next(&self, total_pages: u32) {
        self.navigate(|c| c.next(total_pages));
    }

    pub fn previous(&self, total_pages: u32) {
        self.navigate(|c| c.previous(total_pages));
    }

    pub fn first(&self) {
        self.navigate(PageCursor::first);
    }

    pub fn last(&self, total_pages: u32) {
        self.navigate(|c| c.last(total_pages));
    }

    pub fn set_page_size(&self, size: u32) {
        self.navigate(|c| c.set_page_size(size));
    }

    /// Back to page 1 without notifying (the caller fetches itself)
    pub fn reset(&self) {
        self.cursor.update(|c| c.sync(0, c.page_size()));
    }

    /// Realign with a fetched page, refetching the last page when the
    /// response ran past the end
    pub fn align<T>(&self, page: &Page<T>) {
        if !page.is_consistent() {
            tracing::warn!(
                "Page {} reports {} page(s) for {} record(s), expected {}",
                page.number,
                page.total_pages,
                page.total_elements,
                page.expected_total_pages()
            );
        }
        let mut change = None;
        self.cursor
            .update(|c| change = c.align(page.number, page.size, page.total_pages));
        if let Some(change) = change {
            tracing::debug!("Page {} is past the end, loading page {}", page.number, change.page);
            self.on_change.run(change);
        }
    }

    fn navigate(&self, op: impl FnOnce(&mut PageCursor) -> PageChange) {
        let mut change = None;
        self.cursor.update(|c| change = Some(op(c)));
        if let Some(change) = change {
            self.on_change.run(change);
        }
    }
}

pub fn use_pagination(page_size: u32, on_change: impl Fn(PageChange) + Send + Sync + 'static) -> Pagination {
    Pagination {
        cursor: RwSignal::new(PageCursor::new(1, page_size)),
        on_change: Callback::new(on_change),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_go_next() {
        for current in 1..6u32 {
            for total in 0..8u32 {
                let cursor = PageCursor::new(current, 10);
                assert_eq!(cursor.can_go_next(total), current < total, "current={} total={}", current, total);
            }
        }
        assert!(!PageCursor::new(1, 10).can_go_next(0));
    }

    #[test]
    fn test_can_go_previous() {
        assert!(!PageCursor::new(1, 10).can_go_previous());
        assert!(PageCursor::new(2, 10).can_go_previous());
        assert!(!PageCursor::new(0, 10).can_go_previous());
    }

    #[test]
    fn test_navigation_reports_zero_based_page() {
        let mut cursor = PageCursor::new(1, 20);
        assert_eq!(cursor.next(5), PageChange { page: 1, size: 20 });
        assert_eq!(cursor.current(), 2);
        assert_eq!(cursor.last(5), PageChange { page: 4, size: 20 });
        assert_eq!(cursor.previous(5), PageChange { page: 3, size: 20 });
        assert_eq!(cursor.first(), PageChange { page: 0, size: 20 });
    }

    #[test]
    fn test_navigation_clamps() {
        let mut cursor = PageCursor::new(3, 10);
        assert_eq!(cursor.next(3).page, 2);
        assert_eq!(cursor.current(), 3);

        let mut cursor = PageCursor::new(1, 10);
        assert_eq!(cursor.previous(3).page, 0);
        assert_eq!(cursor.last(0).page, 0);
        assert_eq!(cursor.go_to(99, 4).page, 3);
    }

    #[test]
    fn test_page_size_resets_page() {
        let mut cursor = PageCursor::new(4, 10);
        assert_eq!(cursor.set_page_size(50), PageChange { page: 0, size: 50 });
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn test_align_follows_server_page() {
        let mut cursor = PageCursor::new(1, 10);
        assert_eq!(cursor.align(1, 20, 4), None);
        assert_eq!(cursor.current(), 2);
        assert_eq!(cursor.page_size(), 20);
    }

    #[test]
    fn test_align_past_last_page() {
        // the only row of page 3 of 3 was deleted; the refetch reports 2 pages
        let mut cursor = PageCursor::new(3, 10);
        assert_eq!(cursor.align(2, 10, 2), Some(PageChange { page: 1, size: 10 }));
        assert_eq!(cursor.current(), 2);
        assert!(!cursor.can_go_next(2));
        assert!(cursor.can_go_previous());

        let mut cursor = PageCursor::new(2, 10);
        assert_eq!(cursor.align(1, 10, 0), Some(PageChange { page: 0, size: 10 }));
        assert_eq!(cursor.current(), 1);
        assert_eq!(cursor.align(0, 10, 0), None);
    }

    #[test]
    fn test_sync_from_server() {
        let mut cursor = PageCursor::new(1, 10);
        cursor.sync(2, 30);
        assert_eq!(cursor.current(), 3);
        assert_eq!(cursor.page_size(), 30);
        cursor.sync(0, 0);
        assert_eq!(cursor.page_size(), 30);
    }
}
