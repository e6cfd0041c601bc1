//! Tab view and adapter traits.
//!
//! A [`TabView`] is one selectable unit in the strip, identified only by
//! its ordinal position. Views carry their own selected flag and style
//! themselves from it when rendering; the strip never reaches into a
//! view beyond flipping that flag.
//!
//! A [`TabAdapter`] is the host-side factory the strip is rebuilt from:
//! a count plus a per-index view constructor.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// One selectable child unit in the strip.
///
/// # Example
///
/// ```ignore
/// use tabslide_core::TabView;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// struct Label {
///     title: String,
///     selected: bool,
/// }
///
/// impl TabView for Label {
///     fn title(&self) -> &str { &self.title }
///     fn set_selected(&mut self, selected: bool) { self.selected = selected; }
///     fn is_selected(&self) -> bool { self.selected }
///     fn render(&self, area: Rect, buf: &mut Buffer) {
///         // draw the label, styled from self.selected
///     }
/// }
/// ```
pub trait TabView {
    /// Display title for this tab.
    fn title(&self) -> &str;

    /// Optional icon shown next to the title.
    ///
    /// `None` by default; override to provide one.
    fn icon(&self) -> Option<&str> {
        None
    }

    /// Updates the presentation flag for this tab.
    ///
    /// The strip marks exactly one view selected per selection commit
    /// and clears the flag on all others. Views restyle themselves from
    /// this flag the next time they render.
    fn set_selected(&mut self, selected: bool);

    /// Whether this tab currently carries the selected flag.
    fn is_selected(&self) -> bool;

    /// Draws the tab cell content into `area`.
    ///
    /// Called after the highlight rectangle has been painted, so views
    /// should leave the cell background alone and only set foreground
    /// content.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Host-provided factory the strip rebuilds its children from.
///
/// Swapping the adapter tears down all existing tab views and rebuilds
/// them from `count` and `view_at`. An adapter that cannot produce a
/// view for an index it advertised is a programmer error; the strip
/// surfaces it as [`StripError::AdapterContract`] before adding any
/// further tabs.
///
/// [`StripError::AdapterContract`]: crate::StripError::AdapterContract
pub trait TabAdapter {
    /// Number of tabs this adapter provides.
    fn count(&self) -> usize;

    /// Builds the view for `index`, or `None` if the adapter cannot.
    fn view_at(&self, index: usize) -> Option<Box<dyn TabView>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainTab {
        title: String,
        selected: bool,
    }

    impl TabView for PlainTab {
        fn title(&self) -> &str {
            &self.title
        }

        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }

        fn is_selected(&self) -> bool {
            self.selected
        }

        fn render(&self, _area: Rect, _buf: &mut Buffer) {}
    }

    struct PlainAdapter {
        titles: Vec<String>,
    }

    impl TabAdapter for PlainAdapter {
        fn count(&self) -> usize {
            self.titles.len()
        }

        fn view_at(&self, index: usize) -> Option<Box<dyn TabView>> {
            let title = self.titles.get(index)?.clone();
            Some(Box::new(PlainTab {
                title,
                selected: false,
            }))
        }
    }

    #[test]
    fn test_default_icon_is_none() {
        let tab = PlainTab {
            title: "Home".to_string(),
            selected: false,
        };
        assert!(tab.icon().is_none());
    }

    #[test]
    fn test_selected_flag_roundtrip() {
        let mut tab = PlainTab {
            title: "Home".to_string(),
            selected: false,
        };
        assert!(!tab.is_selected());
        tab.set_selected(true);
        assert!(tab.is_selected());
        tab.set_selected(false);
        assert!(!tab.is_selected());
    }

    #[test]
    fn test_adapter_yields_views_in_range() {
        let adapter = PlainAdapter {
            titles: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(adapter.count(), 2);
        assert!(adapter.view_at(0).is_some());
        assert!(adapter.view_at(1).is_some());
        assert!(adapter.view_at(2).is_none());
    }

    #[test]
    fn test_tab_view_is_object_safe() {
        fn accept(_tab: &dyn TabView) {}
        let tab = PlainTab {
            title: "t".to_string(),
            selected: false,
        };
        accept(&tab);
    }
}
