//! Screen layout for the host screen.
//!
//! Divides the terminal into a content region and a fixed-height tab
//! strip bar along the bottom edge, mirroring the bottom-tab placement
//! of mobile tab bars.

use ratatui::prelude::*;

/// Height of the tab strip bar in rows.
pub const STRIP_HEIGHT: u16 = 2;

/// Main screen layout areas.
///
/// # Layout structure
///
/// ```text
/// +---------------------------------+
/// |                                 |
/// | Content Area                    |
/// | (remaining space)               |
/// |                                 |
/// +---------------------------------+
/// | Tab Strip (2 lines)             |
/// +---------------------------------+
/// ```
///
/// # Example
///
/// ```
/// use tabslide_ui::ScreenLayout;
/// use ratatui::prelude::Rect;
///
/// let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
/// assert_eq!(layout.content.height, 22);
/// assert_eq!(layout.strip, Rect::new(0, 22, 80, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Area for the host content (top).
    pub content: Rect,
    /// Area for the tab strip (bottom).
    pub strip: Rect,
}

impl ScreenLayout {
    /// Calculates layout areas from the total terminal area.
    ///
    /// Terminals shorter than three rows degrade to a one-row strip so
    /// the tabs stay reachable.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let strip_height = if area.height >= STRIP_HEIGHT + 1 {
            STRIP_HEIGHT
        } else {
            area.height.min(1)
        };

        let strip = Rect::new(
            area.x,
            area.y + area.height - strip_height,
            area.width,
            strip_height,
        );
        let content = Rect::new(
            area.x,
            area.y,
            area.width,
            area.height - strip_height,
        );

        ScreenLayout { content, strip }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_terminal() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.content, Rect::new(0, 0, 80, 22));
        assert_eq!(layout.strip, Rect::new(0, 22, 80, 2));
    }

    #[test]
    fn test_offset_area() {
        let layout = ScreenLayout::new(Rect::new(5, 3, 40, 10));
        assert_eq!(layout.content, Rect::new(5, 3, 40, 8));
        assert_eq!(layout.strip, Rect::new(5, 11, 40, 2));
    }

    #[test]
    fn test_tiny_terminal_keeps_one_strip_row() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 20, 2));
        assert_eq!(layout.strip.height, 1);
        assert_eq!(layout.content.height, 1);
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 20, 0));
        assert_eq!(layout.strip.height, 0);
        assert_eq!(layout.content.height, 0);
    }
}
