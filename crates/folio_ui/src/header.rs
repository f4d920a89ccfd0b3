//! Header, mobile menu and scroll-to-top button.

/// Whether the page has scrolled past a fixed offset.
///
/// Shared by the header (solid background once scrolled) and the
/// scroll-to-top button.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OffsetLatch {
    offset: f64,
    past: bool,
}

impl OffsetLatch {
    const fn new(offset: f64) -> Self {
        Self {
            offset,
            past: false,
        }
    }

    /// Returns `true` if the state flipped.
    fn update(&mut self, scroll_y: f64) -> bool {
        let past = scroll_y > self.offset;
        let changed = past != self.past;
        self.past = past;
        changed
    }
}

/// Header appearance driven by the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    latch: OffsetLatch,
}

impl HeaderState {
    /// Offset (px) used by the site header.
    pub const DEFAULT_OFFSET: f64 = 10.0;

    /// Header that turns solid past `offset` pixels.
    #[must_use]
    pub const fn new(offset: f64) -> Self {
        Self {
            latch: OffsetLatch::new(offset),
        }
    }

    /// Feeds the window's `scrollY`. Returns whether `is_scrolled` changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.latch.update(scroll_y)
    }

    /// `true` once the page is scrolled strictly past the offset.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.latch.past
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET)
    }
}

/// Collapsible navigation on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Flips the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu (a link was chosen).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the menu is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

/// The floating "back to top" button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToTop {
    latch: OffsetLatch,
}

impl ScrollToTop {
    /// Offset (px) used by the site.
    pub const DEFAULT_OFFSET: f64 = 300.0;

    /// Button that appears past `offset` pixels.
    #[must_use]
    pub const fn new(offset: f64) -> Self {
        Self {
            latch: OffsetLatch::new(offset),
        }
    }

    /// Feeds the page offset. Returns whether visibility changed.
    pub fn on_scroll(&mut self, page_y_offset: f64) -> bool {
        self.latch.update(page_y_offset)
    }

    /// Whether the button should be shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.latch.past
    }
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_flips_past_offset() {
        let mut header = HeaderState::default();
        assert!(!header.on_scroll(10.0));
        assert!(!header.is_scrolled());

        assert!(header.on_scroll(10.5));
        assert!(header.is_scrolled());
        assert!(!header.on_scroll(400.0));

        assert!(header.on_scroll(0.0));
        assert!(!header.is_scrolled());
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_to_top_threshold() {
        let mut button = ScrollToTop::default();
        button.on_scroll(300.0);
        assert!(!button.is_visible());
        button.on_scroll(301.0);
        assert!(button.is_visible());
    }
}
