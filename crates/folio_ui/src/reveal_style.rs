//! CSS class pairs for revealed sections and their stagger delays.

/// How a section animates in when it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealStyle {
    /// Fade in while rising into place.
    #[default]
    SlideUp,
    /// Fade in while growing to full size.
    Scale,
}

impl RevealStyle {
    /// Utility classes for the hidden or shown state.
    #[must_use]
    pub const fn classes(self, revealed: bool) -> &'static str {
        match (self, revealed) {
            (Self::SlideUp, false) => "opacity-0 translate-y-10",
            (Self::SlideUp, true) => "opacity-100 translate-y-0",
            (Self::Scale, false) => "opacity-0 scale-90",
            (Self::Scale, true) => "opacity-100 scale-100",
        }
    }

    /// Classes to drop when the state flips to `revealed`.
    #[must_use]
    pub const fn stale_classes(self, revealed: bool) -> &'static str {
        self.classes(!revealed)
    }

    /// Parses a `data-reveal-style` value. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "" | "slide-up" | "slide_up" | "slideup" => Some(Self::SlideUp),
            "scale" => Some(Self::Scale),
            _ => None,
        }
    }
}

/// Transition delay for the `index`-th item of a staggered group.
///
/// Zero until the group is revealed so items hide together.
#[must_use]
pub const fn stagger_delay_ms(index: u32, step_ms: u32, revealed: bool) -> u32 {
    if revealed {
        index.saturating_mul(step_ms)
    } else {
        0
    }
}
