//! Hero title rotation.

/// Cycles through a list of titles on a fixed period.
///
/// Time is fed in as elapsed milliseconds, so the same type serves an
/// interval timer (`advance(period)`) and a frame loop (`advance(dt)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRotator {
    titles: Vec<String>,
    period_ms: u64,
    index: usize,
    carry_ms: u64,
}

impl TitleRotator {
    /// Rotator over `titles`, switching every `period_ms`.
    ///
    /// A zero period is treated as 1 ms.
    #[must_use]
    pub fn new(titles: Vec<String>, period_ms: u64) -> Self {
        Self {
            titles,
            period_ms: period_ms.max(1),
            index: 0,
            carry_ms: 0,
        }
    }

    /// Adds `elapsed_ms` and moves on by one title per full period.
    ///
    /// Returns whether the visible title changed. An empty or single-title
    /// list never changes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        if self.titles.len() < 2 {
            return false;
        }
        let total = self.carry_ms.saturating_add(elapsed_ms);
        let steps = total / self.period_ms;
        self.carry_ms = total % self.period_ms;
        if steps == 0 {
            return false;
        }

        let len = self.titles.len();
        let before = self.index;
        // steps % len < len, so the cast is lossless.
        self.index = (self.index + (steps % len as u64) as usize) % len;
        if self.index != before {
            tracing::trace!(title = %self.titles[self.index], "hero title rotated");
        }
        self.index != before
    }

    /// The title to show, `None` for an empty list.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.titles.get(self.index).map(String::as_str)
    }

    /// Position of the current title.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The rotation period.
    #[must_use]
    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }
}
