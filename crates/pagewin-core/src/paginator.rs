//! Page state holder.
//!
//! Owns the current [`PaginationState`] and applies page-change requests as a
//! single synchronous step: validate the target, rebuild the snapshot, notify
//! the listener. Out-of-range requests are dropped without touching state or
//! notifying anyone.

use std::ops::Range;

use pagewin_types::{ConfigError, PageError, PageMarker, PaginationConfig};

use crate::state::{page_item_range, PaginationState};
use crate::view::{PageClick, PagerView};

/// Receives the page number of every accepted page change.
/// Frontends wire this to their own "page changed" callback.
pub trait PageChangeListener {
    fn page_changed(&mut self, page: usize);
}

impl<F: FnMut(usize)> PageChangeListener for F {
    fn page_changed(&mut self, page: usize) {
        self(page);
    }
}

/// A no-op listener for callers that only read state
pub struct NoopListener;

impl PageChangeListener for NoopListener {
    fn page_changed(&mut self, _page: usize) {
        // No-op
    }
}

/// State holder for one rendered pagination control.
pub struct Paginator<L> {
    config: PaginationConfig,
    state: PaginationState,
    listener: L,
}

impl<L: PageChangeListener> Paginator<L> {
    /// Build the control's initial state.
    ///
    /// `config.current` is clamped into `1..=total_pages`. The listener is not
    /// called for the initial page.
    pub fn new(config: PaginationConfig, listener: L) -> Self {
        let total_pages = config.total_pages();
        let current = config.current.clamp(1, total_pages);
        tracing::debug!(
            "Paginator created: {} item(s), {} page(s), starting on page {}",
            config.total,
            total_pages,
            current
        );

        Self { state: PaginationState::for_config(&config, current), config, listener }
    }

    /// Validate `config` first, then build as [`Paginator::new`].
    pub fn try_new(config: PaginationConfig, listener: L) -> Result<Self, ConfigError> {
        Ok(Self::new(config.validated()?, listener))
    }

    /// Move to `target`, silently ignoring out-of-range pages.
    pub fn request_page_change(&mut self, target: usize) {
        // Rejections are expected (disabled prev/next) and stay silent.
        let _ = self.try_request_page_change(target);
    }

    /// Move to `target`, reporting out-of-range pages to the caller.
    ///
    /// On `Err` nothing changed and the listener was not called.
    pub fn try_request_page_change(&mut self, target: usize) -> Result<(), PageError> {
        let total_pages = self.total_pages();
        if !(1..=total_pages).contains(&target) {
            return Err(PageError::OutOfRange { requested: target, total_pages });
        }

        let previous = self.state.current_page();
        self.state = PaginationState::for_config(&self.config, target);
        tracing::debug!("Page changed: {} -> {} (of {})", previous, target, total_pages);

        self.listener.page_changed(target);
        Ok(())
    }

    /// Translate a display-layer click into a page-change request.
    pub fn click(&mut self, click: PageClick) {
        self.request_page_change(click.target(self.current_page()));
    }

    /// Render model for the current frame, `None` when the control is hidden.
    pub fn view(&self) -> Option<PagerView> {
        if self.is_hidden() {
            return None;
        }
        Some(PagerView::build(&self.state, self.config.only_edges))
    }
}

impl<L> Paginator<L> {
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn markers(&self) -> &[PageMarker] {
        self.state.markers()
    }

    /// True when a lone page should not be rendered at all.
    pub fn is_hidden(&self) -> bool {
        self.config.hide_on_single_page && self.total_pages() == 1
    }

    pub fn can_prev(&self) -> bool {
        self.current_page() > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// Item indices on the current page.
    pub fn item_range(&self) -> Range<usize> {
        page_item_range(self.current_page(), self.config.page_size, self.config.total)
    }
}

impl Paginator<NoopListener> {
    /// Paginator whose page changes nobody observes.
    pub fn detached(config: PaginationConfig) -> Self {
        Self::new(config, NoopListener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewin_types::PageMarker::{Ellipsis as E, Page as P};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Seen = Rc<RefCell<Vec<usize>>>;

    fn recording(config: PaginationConfig) -> (Paginator<impl FnMut(usize)>, Seen) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (Paginator::new(config, move |page: usize| sink.borrow_mut().push(page)), seen)
    }

    #[test]
    fn test_initial_state_clamps_current() {
        let paginator = Paginator::detached(PaginationConfig::new(200).with_current(99));
        assert_eq!(paginator.current_page(), 20);
        assert_eq!(paginator.markers(), &[P(1), E, P(16), P(17), P(18), P(19), P(20)]);

        let paginator = Paginator::detached(PaginationConfig::new(200).with_current(0));
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_initial_markers_follow_configured_current() {
        let paginator = Paginator::detached(PaginationConfig::new(200).with_current(10));
        assert_eq!(paginator.markers(), &[P(1), E, P(8), P(9), P(10), P(11), P(12), E, P(20)]);
    }

    #[test]
    fn test_initial_page_not_notified() {
        let (_paginator, seen) = recording(PaginationConfig::new(200).with_current(4));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_valid_request_notifies_once() {
        let (mut paginator, seen) = recording(PaginationConfig::new(200));

        paginator.request_page_change(10);

        assert_eq!(*seen.borrow(), vec![10]);
        assert_eq!(paginator.current_page(), 10);
        assert_eq!(paginator.markers(), &[P(1), E, P(8), P(9), P(10), P(11), P(12), E, P(20)]);
    }

    #[test]
    fn test_out_of_range_is_silent_noop() {
        let (mut paginator, seen) = recording(PaginationConfig::new(200).with_current(3));
        let before = paginator.state().clone();

        paginator.request_page_change(0);
        paginator.request_page_change(21);

        assert_eq!(paginator.state(), &before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_try_request_reports_out_of_range() {
        let mut paginator = Paginator::detached(PaginationConfig::new(200));
        let err = paginator.try_request_page_change(21).unwrap_err();
        assert_eq!(err, PageError::OutOfRange { requested: 21, total_pages: 20 });
        assert_eq!(err.requested(), 21);
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_same_page_request_still_notifies() {
        let (mut paginator, seen) = recording(PaginationConfig::new(200).with_current(5));
        paginator.request_page_change(5);
        assert_eq!(*seen.borrow(), vec![5]);
    }

    #[test]
    fn test_clicks_translate_to_requests() {
        let (mut paginator, seen) = recording(PaginationConfig::new(50));

        paginator.click(PageClick::Prev);
        paginator.click(PageClick::Next);
        paginator.click(PageClick::Page(5));
        paginator.click(PageClick::Next);
        paginator.click(PageClick::Prev);

        assert_eq!(*seen.borrow(), vec![2, 5, 4]);
        assert_eq!(paginator.current_page(), 4);
        assert!(paginator.can_prev());
        assert!(paginator.can_next());
    }

    #[test]
    fn test_single_page_hidden() {
        let paginator = Paginator::detached(PaginationConfig::new(5));
        assert_eq!(paginator.total_pages(), 1);
        assert!(paginator.is_hidden());
        assert!(paginator.view().is_none());
        // state is still computed
        assert_eq!(paginator.markers(), &[P(1)]);
    }

    #[test]
    fn test_single_page_shown_when_not_hiding() {
        let paginator =
            Paginator::detached(PaginationConfig::new(5).with_hide_on_single_page(false));
        let view = paginator.view().unwrap();
        assert!(view.prev.disabled);
        assert!(view.next.disabled);
        assert_eq!(view.active_page(), Some(1));
    }

    #[test]
    fn test_try_new_rejects_zero_page_size() {
        let result = Paginator::try_new(PaginationConfig::new(10).with_page_size(0), NoopListener);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_item_range_tracks_current_page() {
        let mut paginator = Paginator::detached(PaginationConfig::new(95));
        assert_eq!(paginator.item_range(), 0..10);
        paginator.request_page_change(10);
        assert_eq!(paginator.item_range(), 90..95);
    }
}
