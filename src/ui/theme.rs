//! Light/dark palettes resolved from the view-state flags

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::domain::ViewStateStore;

const ZINC_100: Color = Color::Rgb(0xf4, 0xf4, 0xf5);
const ZINC_200: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
const ZINC_300: Color = Color::Rgb(0xd4, 0xd4, 0xd8);
const ZINC_400: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
const ZINC_500: Color = Color::Rgb(0x71, 0x71, 0x7a);
const ZINC_700: Color = Color::Rgb(0x3f, 0x3f, 0x46);
const ZINC_800: Color = Color::Rgb(0x27, 0x27, 0x2a);
const ZINC_900: Color = Color::Rgb(0x18, 0x18, 0x1b);
const BLUE_100: Color = Color::Rgb(0xdb, 0xea, 0xfe);
const BLUE_500: Color = Color::Rgb(0x3b, 0x82, 0xf6);
const YELLOW_500: Color = Color::Rgb(0xea, 0xb3, 0x08);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: bool,
    /// Set while the store's transition window is open.
    pub fading: bool,
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
    pub accent: Color,
    pub card: Color,
    pub card_alt: Color,
    /// Text on `card_alt`, which stays light in both themes.
    pub card_alt_fg: Color,
    pub highlight: Color,
    pub star: Color,
    pub grid: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            dark: false,
            fading: false,
            bg: Color::White,
            fg: ZINC_900,
            muted: ZINC_500,
            border: ZINC_300,
            focus: BLUE_500,
            accent: BLUE_500,
            card: ZINC_100,
            card_alt: BLUE_100,
            card_alt_fg: ZINC_900,
            highlight: ZINC_200,
            star: YELLOW_500,
            grid: ZINC_300,
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            fading: false,
            bg: ZINC_900,
            fg: Color::White,
            muted: ZINC_400,
            border: ZINC_700,
            focus: BLUE_500,
            accent: BLUE_500,
            card: ZINC_800,
            card_alt: BLUE_100,
            card_alt_fg: ZINC_900,
            highlight: ZINC_700,
            star: YELLOW_500,
            grid: ZINC_500,
        }
    }

    pub fn resolve(store: &ViewStateStore) -> Self {
        let mut palette = if store.dark_theme() {
            Self::dark()
        } else {
            Self::light()
        };
        palette.fading = store.in_transition();
        palette
    }

    /// Base style for a region: background plus foreground, dimmed while
    /// fading.
    pub fn base(&self) -> Style {
        self.fade(Style::default().fg(self.fg).bg(self.bg))
    }

    pub fn text(&self) -> Style {
        self.fade(Style::default().fg(self.fg))
    }

    pub fn muted(&self) -> Style {
        self.fade(Style::default().fg(self.muted))
    }

    pub fn heading(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        self.fade(
            Style::default()
                .fg(self.fg)
                .bg(self.highlight)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn active_page(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn fade(&self, style: Style) -> Style {
        if self.fading {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Bordered block, highlighted when focused.
    pub fn block<'a>(&self, title: &'a str, focused: bool) -> Block<'a> {
        let border = if focused { self.focus } else { self.border };
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(self.base())
            .border_style(self.fade(Style::default().fg(border)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViewStateChange;
    use std::time::Instant;

    #[test]
    fn test_resolve_follows_theme_flag() {
        let mut store = ViewStateStore::default();
        assert!(!Palette::resolve(&store).dark);

        store.apply(ViewStateChange::ToggleTheme, Instant::now());
        let palette = Palette::resolve(&store);
        assert!(palette.dark);
        assert!(palette.fading);
        assert!(palette.text().add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_no_dim_when_settled() {
        let palette = Palette::dark();
        assert!(!palette.text().add_modifier.contains(Modifier::DIM));
    }
}
