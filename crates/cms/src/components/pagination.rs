//! Pagination footer arithmetic for the admin list views.
//!
//! Mirrors the backend's server-side pagination: numbered buttons for the
//! first five pages, an ellipsis and a trailing last-page button beyond
//! that, plus the "Showing X to Y of Z results" line.

/// How many numbered page buttons render before the ellipsis.
const PAGE_BUTTON_WINDOW: u64 = 5;

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub current: bool,
}

/// Everything the pagination footer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub showing_from: u64,
    pub showing_to: u64,
    pub pages: Vec<PageLink>,
    /// Render "..." between the button window and the last page.
    pub show_gap: bool,
    /// Render a trailing button for the last page.
    pub show_last: bool,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: u32,
    pub next_page: u32,
}

impl PaginationView {
    /// Whether the footer renders at all.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.total_pages > 1
    }
}

/// Build the pagination view for one fetched page.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn build(current_page: u32, total_pages: u64, total_items: u64, page_size: u64) -> PaginationView {
    let current_page = current_page.max(1);
    let current = u64::from(current_page);

    let (showing_from, showing_to) = if total_items == 0 {
        (0, 0)
    } else {
        (
            (current - 1) * page_size + 1,
            (current * page_size).min(total_items),
        )
    };

    let pages = (1..=total_pages.min(PAGE_BUTTON_WINDOW))
        .map(|n| PageLink {
            number: n as u32,
            current: n == current,
        })
        .collect();

    PaginationView {
        current_page,
        total_pages,
        total_items,
        showing_from,
        showing_to,
        pages,
        show_gap: total_pages > PAGE_BUTTON_WINDOW + 1,
        show_last: total_pages > PAGE_BUTTON_WINDOW,
        has_prev: current > 1,
        has_next: current < total_pages,
        prev_page: current_page.saturating_sub(1).max(1),
        next_page: (current_page + 1).min(total_pages.max(1) as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_is_hidden() {
        let view = build(1, 1, 7, 10);
        assert!(!view.visible());
        assert_eq!(view.showing_from, 1);
        assert_eq!(view.showing_to, 7);
    }

    #[test]
    fn test_first_page_of_many() {
        let view = build(1, 4, 37, 10);
        assert!(view.visible());
        assert_eq!(view.showing_from, 1);
        assert_eq!(view.showing_to, 10);
        assert_eq!(view.pages.len(), 4);
        assert!(!view.has_prev);
        assert!(view.has_next);
        assert!(!view.show_last);
    }

    #[test]
    fn test_last_partial_page() {
        let view = build(4, 4, 37, 10);
        assert_eq!(view.showing_from, 31);
        assert_eq!(view.showing_to, 37);
        assert!(view.has_prev);
        assert!(!view.has_next);
        assert_eq!(view.prev_page, 3);
        assert_eq!(view.next_page, 4);
    }

    #[test]
    fn test_many_pages_window_and_ellipsis() {
        let view = build(2, 12, 115, 10);
        assert_eq!(view.pages.len(), 5);
        assert!(view.show_gap);
        assert!(view.show_last);
        let current: Vec<u32> = view
            .pages
            .iter()
            .filter(|p| p.current)
            .map(|p| p.number)
            .collect();
        assert_eq!(current, vec![2]);
    }

    #[test]
    fn test_six_pages_has_last_button_without_gap() {
        let view = build(1, 6, 51, 10);
        assert!(view.show_last);
        assert!(!view.show_gap);
    }

    #[test]
    fn test_empty_result() {
        let view = build(1, 0, 0, 10);
        assert!(!view.visible());
        assert_eq!(view.showing_from, 0);
        assert_eq!(view.showing_to, 0);
        assert!(view.pages.is_empty());
    }
}
