//! Data Sources
//!
//! A table is fed either by server pages or by a one-shot snapshot. The
//! source decides which pagination controls exist.

use super::column::FeeColumn;
use crate::models::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Page-size selector and first/prev/next/last controls
    ServerPaged {
        /// 0-based
        page: u32,
        size: u32,
        total_pages: u32,
        total_elements: u64,
    },
    /// Everything is loaded; only a record count is shown
    Snapshot { count: usize },
}

impl PaginationMode {
    pub fn from_page<T>(page: &Page<T>) -> Self {
        PaginationMode::ServerPaged {
            page: page.number,
            size: page.size,
            total_pages: page.total_pages,
            total_elements: page.total_elements,
        }
    }

    pub fn snapshot(count: usize) -> Self {
        PaginationMode::Snapshot { count }
    }

    pub fn shows_page_controls(&self) -> bool {
        matches!(self, PaginationMode::ServerPaged { .. })
    }

    pub fn total_pages(&self) -> u32 {
        match self {
            PaginationMode::ServerPaged { total_pages, .. } => *total_pages,
            PaginationMode::Snapshot { .. } => 1,
        }
    }

    pub fn total_records(&self) -> u64 {
        match self {
            PaginationMode::ServerPaged { total_elements, .. } => *total_elements,
            PaginationMode::Snapshot { count } => *count as u64,
        }
    }
}

/// Tabs of the fee screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeTab {
    All,
    CurrentMonth,
}

impl FeeTab {
    pub const ALL: [FeeTab; 2] = [FeeTab::All, FeeTab::CurrentMonth];

    pub fn label(&self) -> &'static str {
        match self {
            FeeTab::All => "All Fees",
            FeeTab::CurrentMonth => "Current Month",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FeeTab::All => "all-fees",
            FeeTab::CurrentMonth => "monthly-fees",
        }
    }

    /// Columns shown on this tab; the month column is redundant on the
    /// single-month tab
    pub fn columns(&self) -> &'static [FeeColumn] {
        const MONTHLY: [FeeColumn; 4] = [
            FeeColumn::Type,
            FeeColumn::Amount,
            FeeColumn::Description,
            FeeColumn::Compulsory,
        ];
        match self {
            FeeTab::All => &FeeColumn::ALL,
            FeeTab::CurrentMonth => &MONTHLY,
        }
    }

    /// Whether typed search goes to the server
    pub fn searches_server(&self) -> bool {
        matches!(self, FeeTab::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fee;

    #[test]
    fn test_mode_per_source() {
        let page = Page::<Fee> {
            content: vec![],
            number: 1,
            size: 10,
            total_pages: 3,
            total_elements: 27,
        };
        let paged = PaginationMode::from_page(&page);
        assert!(paged.shows_page_controls());
        assert_eq!(paged.total_pages(), 3);
        assert_eq!(paged.total_records(), 27);

        let snapshot = PaginationMode::snapshot(6);
        assert!(!snapshot.shows_page_controls());
        assert_eq!(snapshot.total_records(), 6);
    }

    #[test]
    fn test_tab_columns() {
        assert!(FeeTab::All.columns().contains(&FeeColumn::Month));
        assert!(!FeeTab::CurrentMonth.columns().contains(&FeeColumn::Month));
        assert!(FeeTab::All.searches_server());
        assert!(!FeeTab::CurrentMonth.searches_server());
    }
}
