//! Widgets for the tabslide TUI.
//!
//! - [`StripView`] - the tab strip with its sliding highlight

pub mod strip_view;

pub use strip_view::StripView;
