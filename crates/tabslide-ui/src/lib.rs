//! # tabslide-ui
//!
//! Ratatui widgets and the host shell for the tabslide tab strip.
//!
//! Built on top of [`tabslide_core`], this crate provides:
//!
//! - [`StripView`] - widget painting the strip and its sliding
//!   highlight
//! - [`ScreenLayout`] - content-above-strip screen layout
//! - [`Shell`] - host screen coordinating input, the redraw tick, and
//!   selection toasts
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Instant;
//! use tabslide_core::{InputEvent, StripConfig};
//! use tabslide_ui::Shell;
//!
//! let mut shell = Shell::new(StripConfig::default());
//! shell.set_adapter(&my_adapter)?;
//!
//! loop {
//!     terminal.draw(|frame| shell.render(frame))?;
//!     if event::poll(timeout)? {
//!         shell.handle(InputEvent::from(event::read()?));
//!     }
//!     if shell.should_quit() {
//!         break;
//!     }
//!     shell.tick(Instant::now());
//! }
//! ```

pub mod layout;
pub mod shell;
pub mod widgets;

pub use layout::{ScreenLayout, STRIP_HEIGHT};
pub use shell::Shell;
pub use widgets::StripView;
