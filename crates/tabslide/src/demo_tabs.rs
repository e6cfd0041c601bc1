//! The five example tabs wired into the demo screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use tabslide_core::{TabAdapter, TabView};

const TABS: [(&str, &str); 5] = [
    ("Home", "⌂"),
    ("Games", "♟"),
    ("Apps", "▦"),
    ("Search", "⌕"),
    ("Chest", "◈"),
];

/// A label tab with an icon stacked above its title.
pub struct DemoTab {
    title: &'static str,
    icon: &'static str,
    selected: bool,
}

impl DemoTab {
    fn style(&self) -> Style {
        if self.selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl TabView for DemoTab {
    fn title(&self) -> &str {
        self.title
    }

    fn icon(&self) -> Option<&str> {
        Some(self.icon)
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let centered = |text: &str| {
            let len = text.chars().count() as u16;
            area.x + (area.width.saturating_sub(len)) / 2
        };

        if area.height >= 2 {
            buf.set_string(centered(self.icon), area.y, self.icon, style);
            buf.set_string(centered(self.title), area.y + 1, self.title, style);
        } else {
            let label = format!("{} {}", self.icon, self.title);
            buf.set_string(centered(&label), area.y, &label, style);
        }
    }
}

/// Adapter providing the five demo tabs.
pub struct DemoAdapter;

impl TabAdapter for DemoAdapter {
    fn count(&self) -> usize {
        TABS.len()
    }

    fn view_at(&self, index: usize) -> Option<Box<dyn TabView>> {
        let (title, icon) = TABS.get(index)?;
        Some(Box::new(DemoTab {
            title,
            icon,
            selected: false,
        }))
    }
}
