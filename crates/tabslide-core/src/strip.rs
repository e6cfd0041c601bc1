//! Tab strip container: selection state and animation orchestration.
//!
//! [`TabStrip`] owns the child tab collection, the selection state, and
//! the in-flight [`AnimationRun`] driving the highlight. It is bound to
//! a single UI thread: the host calls [`TabStrip::set_current`] when
//! the selection changes and [`TabStrip::tick`] from its redraw loop
//! while a run is in flight. Between ticks the state may be freely
//! overwritten by an incoming selection change; the newest request
//! always wins and no switches are queued.
//!
//! Selection commits immediately: the selected flags and the
//! select/reselect notification fire when [`TabStrip::set_current`] is
//! called, not when the slide settles.

use std::time::Instant;

use ratatui::style::Color;

use crate::animation::{AnimationDriver, AnimationRun};
use crate::config::StripConfig;
use crate::error::{StripError, StripResult};
use crate::tab::{TabAdapter, TabView};

/// Single-slot notification handler; re-registration overwrites.
pub type SelectionHandler = Box<dyn FnMut(usize)>;

/// Horizontal tab strip with a sliding highlight.
///
/// # State machine
///
/// The strip is either `Idle` (no run) or `Animating` (one run in
/// flight). A selection change to a different tab starts or re-bases a
/// run; [`tick`] samples it and drops it once it settles. At most one
/// run exists at a time.
///
/// # Example
///
/// ```ignore
/// use tabslide_core::{StripConfig, TabStrip};
///
/// let mut strip = TabStrip::with_config(StripConfig::default());
/// strip.set_adapter(&my_adapter)?;
/// strip.resize(100);
/// strip.on_tab_selected(|index| println!("selected {index}"));
/// strip.set_current(0);
/// ```
///
/// [`tick`]: TabStrip::tick
pub struct TabStrip {
    views: Vec<Box<dyn TabView>>,
    selected: Option<usize>,
    driver: AnimationDriver,
    run: Option<AnimationRun>,
    /// Live highlight offset in cells; either the last sampled run
    /// value or the resting offset of the selected tab.
    current_x: i32,
    width: u16,
    highlight: Color,
    select_handler: Option<SelectionHandler>,
    reselect_handler: Option<SelectionHandler>,
}

impl TabStrip {
    /// Creates an empty strip with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StripConfig::default())
    }

    /// Creates an empty strip from a configuration.
    #[must_use]
    pub fn with_config(config: StripConfig) -> Self {
        TabStrip {
            views: Vec::new(),
            selected: None,
            driver: AnimationDriver::new(config.duration()),
            run: None,
            current_x: 0,
            width: 0,
            highlight: config.highlight,
            select_handler: None,
            reselect_handler: None,
        }
    }

    /// Rebuilds the strip's children from an adapter.
    ///
    /// All existing tab views are torn down and rebuilt from the
    /// adapter's count and view factory. If a selection was previously
    /// set it is re-applied (clamped into the new count), restarting
    /// the usual animation and notification flow; swapping to an empty
    /// adapter clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::AdapterContract`] if the adapter yields no
    /// view for an index it advertised. The error is raised before any
    /// of the new tabs are installed and leaves the strip unchanged.
    pub fn set_adapter(&mut self, adapter: &dyn TabAdapter) -> StripResult<()> {
        let count = adapter.count();
        let mut views = Vec::with_capacity(count);
        for index in 0..count {
            let view = adapter
                .view_at(index)
                .ok_or(StripError::AdapterContract(index))?;
            views.push(view);
        }

        self.views = views;
        self.run = None;

        match self.selected {
            Some(_) if count == 0 => self.selected = None,
            Some(previous) => self.set_current(previous),
            None => {}
        }
        Ok(())
    }

    /// Commits a new selection, clamped into `[0, count - 1]`.
    ///
    /// Marks exactly one child selected, fires exactly one of the
    /// select/reselect notifications, and starts (or re-bases) the
    /// highlight slide. The notification fires at commit time; callers
    /// must not assume the highlight has finished moving when notified.
    /// With zero tabs this is a no-op.
    ///
    /// Uses the current wall clock; see [`set_current_at`] for
    /// deterministic timing.
    ///
    /// [`set_current_at`]: TabStrip::set_current_at
    pub fn set_current(&mut self, index: usize) {
        self.set_current_at(index, Instant::now());
    }

    /// Commits a new selection with an explicit timestamp for the run.
    pub fn set_current_at(&mut self, index: usize, now: Instant) {
        let count = self.views.len();
        if count == 0 {
            return;
        }

        let old = self.selected;
        let new = index.min(count - 1);
        self.selected = Some(new);
        for (i, view) in self.views.iter_mut().enumerate() {
            view.set_selected(i == new);
        }

        match old {
            Some(previous) if previous == new => {
                // Reselect: any in-flight run is already heading here.
                if let Some(handler) = self.reselect_handler.as_mut() {
                    handler(new);
                }
            }
            Some(previous) => {
                self.animate_to(previous, new, now);
                if let Some(handler) = self.select_handler.as_mut() {
                    handler(new);
                }
            }
            None => {
                // First selection ever: instant placement, no run.
                self.current_x = self.tab_left(new);
                if let Some(handler) = self.select_handler.as_mut() {
                    handler(new);
                }
            }
        }
    }

    fn animate_to(&mut self, old: usize, new: usize, now: Instant) {
        // Interrupting a run re-bases from the live offset, not the
        // stale start.
        let start_x = if self.run.is_some() {
            self.current_x
        } else {
            self.tab_left(old)
        };
        let end_x = self.tab_left(new);
        if start_x == end_x {
            self.run = None;
            self.current_x = end_x;
            return;
        }
        self.run = Some(self.driver.start(start_x, end_x, now));
    }

    /// Samples the in-flight run, if any.
    ///
    /// Returns `true` when the highlight moved or the run just settled,
    /// i.e. when the host should redraw. `Idle` strips return `false`
    /// without touching any state.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(run) = self.run else {
            return false;
        };
        let (offset, finished) = self.driver.sample(&run, now);
        let moved = offset != self.current_x;
        self.current_x = offset;
        if finished {
            self.run = None;
        }
        moved || finished
    }

    /// Terminates any in-flight run at the last sampled offset.
    ///
    /// Teardown hook for hosts that detach the strip mid-slide.
    pub fn abort_animation(&mut self) {
        self.run = None;
    }

    /// Updates the strip width the tab geometry is derived from.
    ///
    /// When idle, the highlight snaps to the selected tab's new resting
    /// offset so a relayout does not leave it stranded.
    pub fn resize(&mut self, width: u16) {
        self.width = width;
        if self.run.is_none() {
            if let Some(selected) = self.selected {
                self.current_x = self.tab_left(selected);
            }
        }
    }

    /// Registers the select notification handler.
    ///
    /// At most one handler is registered at a time; the last
    /// registration wins.
    pub fn on_tab_selected(&mut self, handler: impl FnMut(usize) + 'static) {
        self.select_handler = Some(Box::new(handler));
    }

    /// Registers the reselect notification handler.
    ///
    /// At most one handler is registered at a time; the last
    /// registration wins.
    pub fn on_tab_reselected(&mut self, handler: impl FnMut(usize) + 'static) {
        self.reselect_handler = Some(Box::new(handler));
    }

    /// Currently selected tab index, `None` before any selection.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.selected
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// The in-flight run descriptor, if any.
    #[must_use]
    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Live highlight offset in cells.
    #[must_use]
    pub fn offset_x(&self) -> i32 {
        self.current_x
    }

    /// Width of one tab slot; tabs share the strip width equally.
    #[must_use]
    pub fn tab_width(&self) -> u16 {
        let count = self.views.len();
        if count == 0 {
            0
        } else {
            self.width / count as u16
        }
    }

    /// Resting offset of the tab at `index`.
    #[must_use]
    pub fn tab_left(&self, index: usize) -> i32 {
        index as i32 * i32::from(self.tab_width())
    }

    /// The child tab views, in display order.
    #[must_use]
    pub fn views(&self) -> &[Box<dyn TabView>] {
        &self.views
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether the strip has no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Strip width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Highlight color.
    #[must_use]
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    /// Changes the highlight color.
    pub fn set_highlight(&mut self, color: Color) {
        self.highlight = color;
    }

    /// Changes the slide duration for subsequent runs.
    pub fn set_duration(&mut self, duration: std::time::Duration) {
        self.driver.set_duration(duration);
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    struct RecordingTab {
        title: String,
        selected: bool,
    }

    impl TabView for RecordingTab {
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

    struct FixedAdapter {
        count: usize,
    }

    impl TabAdapter for FixedAdapter {
        fn count(&self) -> usize {
            self.count
        }

        fn view_at(&self, index: usize) -> Option<Box<dyn TabView>> {
            Some(Box::new(RecordingTab {
                title: format!("Tab {index}"),
                selected: false,
            }))
        }
    }

    /// Adapter that breaks its contract at one index.
    struct NullViewAdapter {
        count: usize,
        null_at: usize,
    }

    impl TabAdapter for NullViewAdapter {
        fn count(&self) -> usize {
            self.count
        }

        fn view_at(&self, index: usize) -> Option<Box<dyn TabView>> {
            if index == self.null_at {
                None
            } else {
                Some(Box::new(RecordingTab {
                    title: format!("Tab {index}"),
                    selected: false,
                }))
            }
        }
    }

    fn strip_with(count: usize, width: u16) -> TabStrip {
        let mut strip = TabStrip::new();
        strip
            .set_adapter(&FixedAdapter { count })
            .expect("adapter should build");
        strip.resize(width);
        strip
    }

    type Recorder = Rc<RefCell<Vec<usize>>>;

    fn record_notifications(strip: &mut TabStrip) -> (Recorder, Recorder) {
        let selects: Recorder = Rc::new(RefCell::new(Vec::new()));
        let reselects: Recorder = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&selects);
        strip.on_tab_selected(move |index| s.borrow_mut().push(index));
        let r = Rc::clone(&reselects);
        strip.on_tab_reselected(move |index| r.borrow_mut().push(index));
        (selects, reselects)
    }

    // ==================== Construction ====================

    #[test]
    fn test_new_strip_is_idle_and_unselected() {
        let mut strip = TabStrip::new();
        assert!(strip.is_empty());
        assert_eq!(strip.current(), None);
        assert!(!strip.is_animating());
        assert!(!strip.tick(Instant::now()));
    }

    #[test]
    fn test_with_config_applies_color_and_duration() {
        let config = StripConfig {
            highlight: Color::Cyan,
            duration_ms: 0,
        };
        let mut strip = TabStrip::with_config(config);
        strip
            .set_adapter(&FixedAdapter { count: 2 })
            .expect("adapter should build");
        strip.resize(40);
        assert_eq!(strip.highlight(), Color::Cyan);

        let t0 = Instant::now();
        strip.set_current_at(0, t0);
        strip.set_current_at(1, t0);
        // Zero duration degrades to instant placement.
        assert!(strip.tick(t0));
        assert_eq!(strip.offset_x(), strip.tab_left(1));
        assert!(!strip.is_animating());
    }

    // ==================== Selection and clamping ====================

    #[test]
    fn test_set_current_on_empty_strip_is_no_op() {
        let mut strip = TabStrip::new();
        let (selects, reselects) = record_notifications(&mut strip);
        strip.set_current(3);
        assert_eq!(strip.current(), None);
        assert!(selects.borrow().is_empty());
        assert!(reselects.borrow().is_empty());
    }

    #[test]
    fn test_set_current_clamps_out_of_range() {
        let mut strip = strip_with(5, 100);
        strip.set_current(99);
        assert_eq!(strip.current(), Some(4));
    }

    #[test]
    fn test_exactly_one_child_marked_selected() {
        let mut strip = strip_with(5, 100);
        strip.set_current(2);
        let flags: Vec<bool> = strip.views().iter().map(|v| v.is_selected()).collect();
        assert_eq!(flags, vec![false, false, true, false, false]);

        strip.set_current(4);
        let flags: Vec<bool> = strip.views().iter().map(|v| v.is_selected()).collect();
        assert_eq!(flags, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_first_selection_places_highlight_instantly() {
        let mut strip = strip_with(5, 100);
        let (selects, _) = record_notifications(&mut strip);

        strip.set_current(3);
        assert!(!strip.is_animating());
        assert_eq!(strip.offset_x(), 60);
        assert_eq!(*selects.borrow(), vec![3]);
    }

    #[test]
    fn test_reselect_fires_once_and_selects_zero_times() {
        let mut strip = strip_with(5, 100);
        let (selects, reselects) = record_notifications(&mut strip);

        strip.set_current(1);
        strip.set_current(1);

        assert_eq!(*selects.borrow(), vec![1]);
        assert_eq!(*reselects.borrow(), vec![1]);
    }

    #[test]
    fn test_handler_overwrite_last_registration_wins() {
        let mut strip = strip_with(3, 60);
        let first: Recorder = Rc::new(RefCell::new(Vec::new()));
        let second: Recorder = Rc::new(RefCell::new(Vec::new()));

        let f = Rc::clone(&first);
        strip.on_tab_selected(move |index| f.borrow_mut().push(index));
        let s = Rc::clone(&second);
        strip.on_tab_selected(move |index| s.borrow_mut().push(index));

        strip.set_current(2);
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![2]);
    }

    // ==================== Animation flow ====================

    #[test]
    fn test_five_tab_timeline() {
        let mut strip = strip_with(5, 100);
        let t0 = Instant::now();

        strip.set_current_at(0, t0);
        assert!(!strip.is_animating());

        strip.set_current_at(3, t0);
        let run = strip.run().expect("run should be in flight");
        assert_eq!(run.start_x(), 0);
        assert_eq!(run.end_x(), 60);
        assert_eq!(strip.current(), Some(3));

        assert!(strip.tick(t0 + Duration::from_millis(400)));
        assert_eq!(strip.offset_x(), 30);
        assert!(strip.is_animating());

        assert!(strip.tick(t0 + Duration::from_millis(900)));
        assert_eq!(strip.offset_x(), 60);
        assert!(!strip.is_animating());

        // Idle strips report nothing to redraw.
        assert!(!strip.tick(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn test_notification_fires_before_slide_settles() {
        let mut strip = strip_with(5, 100);
        let (selects, _) = record_notifications(&mut strip);
        let t0 = Instant::now();

        strip.set_current_at(0, t0);
        strip.set_current_at(4, t0);

        // Commit-then-animate: selection and notification are already
        // visible while the highlight is still moving.
        assert_eq!(*selects.borrow(), vec![0, 4]);
        assert_eq!(strip.current(), Some(4));
        assert!(strip.is_animating());
        assert!(strip.views()[4].is_selected());
    }

    #[test]
    fn test_interrupt_rebases_from_live_offset() {
        let mut strip = strip_with(5, 100);
        let t0 = Instant::now();

        strip.set_current_at(0, t0);
        strip.set_current_at(3, t0);
        strip.tick(t0 + Duration::from_millis(400));
        assert_eq!(strip.offset_x(), 30);

        // Newest request wins; the replacement run starts where the
        // highlight actually is.
        strip.set_current_at(1, t0 + Duration::from_millis(400));
        let run = strip.run().expect("superseding run");
        assert_eq!(run.start_x(), 30);
        assert_eq!(run.end_x(), 20);

        strip.tick(t0 + Duration::from_millis(1300));
        assert_eq!(strip.offset_x(), 20);
        assert!(!strip.is_animating());
    }

    #[test]
    fn test_reselect_mid_flight_keeps_run() {
        let mut strip = strip_with(5, 100);
        let t0 = Instant::now();

        strip.set_current_at(0, t0);
        strip.set_current_at(3, t0);
        strip.tick(t0 + Duration::from_millis(200));
        let before = *strip.run().expect("run in flight");

        strip.set_current_at(3, t0 + Duration::from_millis(200));
        assert_eq!(strip.run(), Some(&before));
    }

    #[test]
    fn test_abort_freezes_at_last_sampled_offset() {
        let mut strip = strip_with(5, 100);
        let t0 = Instant::now();

        strip.set_current_at(0, t0);
        strip.set_current_at(3, t0);
        strip.tick(t0 + Duration::from_millis(400));

        strip.abort_animation();
        assert!(!strip.is_animating());
        assert_eq!(strip.offset_x(), 30);
        assert!(!strip.tick(t0 + Duration::from_millis(800)));
        assert_eq!(strip.offset_x(), 30);
    }

    #[test]
    fn test_resize_snaps_idle_highlight() {
        let mut strip = strip_with(5, 100);
        strip.set_current(2);
        assert_eq!(strip.offset_x(), 40);

        strip.resize(50);
        assert_eq!(strip.tab_width(), 10);
        assert_eq!(strip.offset_x(), 20);
    }

    // ==================== Adapter rebuilds ====================

    #[test]
    fn test_adapter_swap_clamps_and_fires_select_once() {
        let mut strip = strip_with(5, 100);
        strip.set_current(2);

        let (selects, reselects) = record_notifications(&mut strip);
        strip
            .set_adapter(&FixedAdapter { count: 2 })
            .expect("adapter should build");

        assert_eq!(strip.current(), Some(1));
        assert_eq!(*selects.borrow(), vec![1]);
        assert!(reselects.borrow().is_empty());
    }

    #[test]
    fn test_adapter_swap_with_surviving_index_reselects() {
        let mut strip = strip_with(5, 100);
        strip.set_current(1);

        let (selects, reselects) = record_notifications(&mut strip);
        strip
            .set_adapter(&FixedAdapter { count: 3 })
            .expect("adapter should build");

        assert_eq!(strip.current(), Some(1));
        assert!(selects.borrow().is_empty());
        assert_eq!(*reselects.borrow(), vec![1]);
    }

    #[test]
    fn test_adapter_swap_to_empty_clears_selection() {
        let mut strip = strip_with(5, 100);
        strip.set_current(2);

        strip
            .set_adapter(&FixedAdapter { count: 0 })
            .expect("adapter should build");
        assert_eq!(strip.current(), None);
        assert!(strip.is_empty());
    }

    #[test]
    fn test_null_view_raises_contract_violation() {
        let mut strip = strip_with(5, 100);
        strip.set_current(1);

        let result = strip.set_adapter(&NullViewAdapter {
            count: 5,
            null_at: 2,
        });
        assert!(matches!(result, Err(StripError::AdapterContract(2))));

        // The failed rebuild left the previous tabs in place.
        assert_eq!(strip.len(), 5);
        assert_eq!(strip.current(), Some(1));
    }

    // ==================== Geometry ====================

    #[test]
    fn test_tab_geometry_divides_width_equally() {
        let strip = strip_with(5, 100);
        assert_eq!(strip.tab_width(), 20);
        for i in 0..5 {
            assert_eq!(strip.tab_left(i), i as i32 * 20);
        }
    }

    #[test]
    fn test_tab_width_zero_when_empty() {
        let mut strip = TabStrip::new();
        strip.resize(100);
        assert_eq!(strip.tab_width(), 0);
    }

    proptest::proptest! {
        #[test]
        fn prop_current_is_clamped(count in 1usize..8, index in 0usize..32) {
            let mut strip = strip_with(count, 80);
            strip.set_current(index);
            proptest::prop_assert_eq!(strip.current(), Some(index.min(count - 1)));
        }

        #[test]
        fn prop_empty_strip_never_selects(index in 0usize..32) {
            let mut strip = TabStrip::new();
            strip.set_current(index);
            proptest::prop_assert_eq!(strip.current(), None);
        }
    }
}
