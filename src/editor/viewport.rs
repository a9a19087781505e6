//! Viewport scroll tracking.
//!
//! The viewport maps a window of visible rows onto the buffer. It owns only
//! the index of the first visible row (`scroll_top`); the visible height is
//! supplied by the host on every render call, since the host panel may
//! resize between frames.
//!
//! After every adjustment the containment invariant holds:
//! `scroll_top <= cursor_row <= scroll_top + visible_height - 1`.

/// The sliding window of buffer rows currently rendered.
///
/// # Examples
///
/// ```
/// use linequill::editor::viewport::Viewport;
///
/// let mut viewport = Viewport::new();
/// viewport.adjust(25, 100, 10);
/// assert_eq!(viewport.scroll_top(), 16);
/// assert!(viewport.scroll_top() <= 25);
/// assert!(25 < viewport.scroll_top() + 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    scroll_top: usize,
}

impl Viewport {
    /// Creates a viewport scrolled to the top.
    pub fn new() -> Self {
        Self { scroll_top: 0 }
    }

    /// Returns the first visible row index.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Recomputes `scroll_top` so the cursor row is visible.
    ///
    /// Scrolls the minimum distance: up to the cursor when it is above the
    /// window, down so the cursor is on the last visible row when it is
    /// below. Also clamps against the end of the buffer so the window never
    /// hangs past the last line. A zero height leaves the viewport untouched
    /// (nothing is visible, nothing to contain).
    pub fn adjust(&mut self, cursor_row: usize, line_count: usize, visible_height: usize) {
        if visible_height == 0 {
            return;
        }

        // Never scroll past the end of the buffer.
        let max_top = line_count.saturating_sub(visible_height);
        if self.scroll_top > max_top {
            self.scroll_top = max_top;
        }

        if cursor_row < self.scroll_top {
            self.scroll_top = cursor_row;
        } else if cursor_row >= self.scroll_top + visible_height {
            self.scroll_top = cursor_row - visible_height + 1;
        }
    }
}
