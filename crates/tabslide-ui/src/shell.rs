//! Host screen shell.
//!
//! [`Shell`] is the screen that embeds the tab strip: it owns the
//! [`TabStrip`], translates keyboard input into selection changes,
//! drives the redraw tick while a slide is in flight, and surfaces the
//! select/reselect notifications as a transient toast line, the way the
//! sample host screen does.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tabslide_core::{InputEvent, StripConfig, StripResult, TabAdapter, TabStrip};

use crate::layout::ScreenLayout;
use crate::widgets::StripView;

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy)]
enum Notice {
    Selected(usize),
    Reselected(usize),
}

/// Host screen wiring a [`TabStrip`] to the terminal.
///
/// The shell registers itself on the strip's single-slot notification
/// handlers to produce toasts; a host that installs its own handlers
/// via [`Shell::strip_mut`] replaces that wiring (last registration
/// wins).
pub struct Shell {
    strip: TabStrip,
    notices: Rc<RefCell<Vec<Notice>>>,
    toast: Option<(String, Instant)>,
    should_quit: bool,
}

impl Shell {
    /// Creates a shell with the given strip configuration.
    #[must_use]
    pub fn new(config: StripConfig) -> Self {
        let mut strip = TabStrip::with_config(config);
        let notices: Rc<RefCell<Vec<Notice>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&notices);
        strip.on_tab_selected(move |index| sink.borrow_mut().push(Notice::Selected(index)));
        let sink = Rc::clone(&notices);
        strip.on_tab_reselected(move |index| sink.borrow_mut().push(Notice::Reselected(index)));

        Shell {
            strip,
            notices,
            toast: None,
            should_quit: false,
        }
    }

    /// Rebuilds the strip from an adapter and selects the first tab.
    ///
    /// # Errors
    ///
    /// Propagates the adapter contract violation from
    /// [`TabStrip::set_adapter`].
    pub fn set_adapter(&mut self, adapter: &dyn TabAdapter) -> StripResult<()> {
        self.strip.set_adapter(adapter)?;
        if self.strip.current().is_none() && !self.strip.is_empty() {
            self.strip.set_current(0);
        }
        Ok(())
    }

    /// The embedded tab strip.
    #[must_use]
    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    /// The embedded tab strip, mutably.
    pub fn strip_mut(&mut self) -> &mut TabStrip {
        &mut self.strip
    }

    /// Whether the host loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a slide is in flight and the loop should tick fast.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.strip.is_animating()
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Resize(width, _) => self.strip.resize(width),
            InputEvent::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (_, KeyCode::Char('q'))
            | (_, KeyCode::Esc) => {
                self.should_quit = true;
            }
            (_, KeyCode::Left) => {
                let target = self.strip.current().map_or(0, |i| i.saturating_sub(1));
                self.strip.set_current(target);
            }
            (_, KeyCode::Right) => {
                let target = self.strip.current().map_or(0, |i| i + 1);
                // The strip clamps past the last tab.
                self.strip.set_current(target);
            }
            (_, KeyCode::Char(c)) if c.is_ascii_digit() && c != '0' => {
                let index = c.to_digit(10).unwrap_or(1) as usize - 1;
                self.strip.set_current(index);
            }
            _ => {}
        }
    }

    /// Advances animation and toast state.
    ///
    /// Returns `true` when anything changed and the host should redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let was_animating = self.strip.is_animating();
        let mut redraw = self.strip.tick(now);
        if was_animating && !self.strip.is_animating() {
            tracing::debug!(offset = self.strip.offset_x(), "slide settled");
        }

        for notice in self.notices.borrow_mut().drain(..) {
            let text = match notice {
                Notice::Selected(index) => {
                    tracing::debug!(index, "tab selected");
                    format!("Tab selected: {index}")
                }
                Notice::Reselected(index) => {
                    tracing::debug!(index, "tab reselected");
                    format!("Tab reselected: {index}")
                }
            };
            self.toast = Some((text, now));
            redraw = true;
        }

        if let Some((_, shown_at)) = self.toast {
            if now.saturating_duration_since(shown_at) >= TOAST_TTL {
                self.toast = None;
                redraw = true;
            }
        }

        redraw
    }

    /// The current toast text, if one is showing.
    #[must_use]
    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|(text, _)| text.as_str())
    }

    /// Renders the whole screen.
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = ScreenLayout::new(frame.area());
        self.strip.resize(layout.strip.width);

        self.render_content(frame, layout.content);
        frame.render_widget(StripView::new(&self.strip), layout.strip);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let page = self
            .strip
            .current()
            .and_then(|index| self.strip.views().get(index))
            .map(|view| match view.icon() {
                Some(icon) => format!("{icon}  {}", view.title()),
                None => view.title().to_string(),
            });

        if let Some(text) = page {
            let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            let body = Paragraph::new(text)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(body, line);
        }

        if let Some((text, _)) = &self.toast {
            let line = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
            let toast = Paragraph::new(text.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center);
            frame.render_widget(toast, line);
        }
    }
}
