//! Tab strip widget with the sliding highlight.
//!
//! [`StripView`] renders a [`TabStrip`]: first the filled highlight
//! rectangle at the strip's live offset, then every tab view on top of
//! it, back to front. Nothing is painted for an empty strip, and the
//! highlight is withheld until the first selection is made.
//!
//! The widget draws from the strip's own geometry, so the host must
//! keep the strip resized to the render area's width (the shell does
//! this on every frame).

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use tabslide_core::TabStrip;

/// Widget rendering a tab strip and its highlight.
///
/// # Example
///
/// ```ignore
/// use tabslide_ui::StripView;
///
/// strip.resize(area.width);
/// frame.render_widget(StripView::new(&strip), area);
/// ```
pub struct StripView<'a> {
    strip: &'a TabStrip,
}

impl<'a> StripView<'a> {
    /// Creates a view over a strip.
    #[must_use]
    pub fn new(strip: &'a TabStrip) -> Self {
        StripView { strip }
    }
}

impl Widget for StripView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tab_width = self.strip.tab_width();
        if self.strip.is_empty() || tab_width == 0 || area.height == 0 {
            return;
        }

        // Highlight first so the tab content composes over it.
        if self.strip.current().is_some() {
            let max_x = i32::from(area.width.saturating_sub(tab_width));
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let offset = self.strip.offset_x().clamp(0, max_x) as u16;
            let highlight = Rect::new(area.x + offset, area.y, tab_width, area.height);
            buf.set_style(highlight, Style::default().bg(self.strip.highlight()));
        }

        for (index, view) in self.strip.views().iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let left = area.x + index as u16 * tab_width;
            let cell = Rect::new(left, area.y, tab_width, area.height).intersection(area);
            if cell.width > 0 {
                view.render(cell, buf);
            }
        }
    }
}
