use ratatui::style::{Color, Modifier, Style};

use crate::config::{IconConfig, ThemeConfig};

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct Theme {
    pub(in crate::tui_shell) active_border: Style,
    pub(in crate::tui_shell) inactive_border: Style,
    pub(in crate::tui_shell) options_text: Style,
    pub(in crate::tui_shell) selected_line: Style,
}

impl Theme {
    pub(in crate::tui_shell) fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            active_border: parse_style(&cfg.active_border_color, false),
            inactive_border: parse_style(&cfg.inactive_border_color, false),
            options_text: parse_style(&cfg.options_text_color, false),
            selected_line: parse_style(&cfg.selected_line_bg_color, true),
        }
    }
}

/// Colors go to the foreground, or the background when `bg` is set.
/// Unknown entries are ignored.
pub(in crate::tui_shell) fn parse_style(specs: &[String], bg: bool) -> Style {
    let mut style = Style::default();
    for spec in specs {
        let spec = spec.trim().to_ascii_lowercase();
        let modifier = match spec.as_str() {
            "bold" => Some(Modifier::BOLD),
            "underline" => Some(Modifier::UNDERLINED),
            "reverse" => Some(Modifier::REVERSED),
            "dim" => Some(Modifier::DIM),
            "italic" => Some(Modifier::ITALIC),
            _ => None,
        };
        if let Some(m) = modifier {
            style = style.add_modifier(m);
            continue;
        }
        if let Some(color) = parse_color(&spec) {
            style = if bg { style.bg(color) } else { style.fg(color) };
        }
    }
    style
}

fn parse_color(spec: &str) -> Option<Color> {
    let named = match spec {
        "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        _ => {
            if let Some(hex) = spec.strip_prefix('#') {
                if hex.len() != 6 {
                    return None;
                }
                let n = u32::from_str_radix(hex, 16).ok()?;
                return Some(Color::Rgb((n >> 16) as u8, (n >> 8) as u8, n as u8));
            }
            return spec.parse::<u8>().ok().map(Color::Indexed);
        }
    };
    Some(named)
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct Icons {
    pub(in crate::tui_shell) project: &'static str,
    pub(in crate::tui_shell) collection: &'static str,
    pub(in crate::tui_shell) document: &'static str,
    pub(in crate::tui_shell) expanded: &'static str,
    pub(in crate::tui_shell) collapsed: &'static str,
}

impl Icons {
    pub(in crate::tui_shell) fn from_config(cfg: &IconConfig) -> Self {
        match cfg.nerd_fonts_version.trim() {
            "3" => Self {
                project: "\u{f0c2} ",
                collection: "\u{f07b} ",
                document: "\u{f15b} ",
                expanded: "\u{f0d7} ",
                collapsed: "\u{f0da} ",
            },
            "2" => Self {
                project: "\u{f0c2} ",
                collection: "\u{f07b} ",
                document: "\u{f016} ",
                expanded: "\u{f0d7} ",
                collapsed: "\u{f0da} ",
            },
            _ => Self {
                project: "",
                collection: "",
                document: "",
                expanded: "v ",
                collapsed: "> ",
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/theme_tests.rs"]
mod tests;
