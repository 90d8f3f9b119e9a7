use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub ui: UiColors,
    pub search: SearchColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiColors {
    pub background: ThemeColor,
    pub foreground: ThemeColor,
    pub border: ThemeColor,
    pub border_focused: ThemeColor,
    pub title: ThemeColor,
    pub title_focused: ThemeColor,
    pub line_numbers: ThemeColor,
    pub cursor_line: ThemeColor,

    // Status bar
    pub status_bar_bg: ThemeColor,
    pub status_bar_fg: ThemeColor,
    pub mode_normal_bg: ThemeColor,
    pub mode_normal_fg: ThemeColor,
    pub mode_insert_bg: ThemeColor,
    pub mode_insert_fg: ThemeColor,
    pub mode_search_bg: ThemeColor,
    pub mode_search_fg: ThemeColor,

    // Results panel
    pub result_value: ThemeColor,
    pub result_path: ThemeColor,
    pub result_selected: ThemeColor,
    pub message_error: ThemeColor,
    pub message_info: ThemeColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchColors {
    pub match_bg: ThemeColor,
    pub match_fg: ThemeColor,
    pub current_bg: ThemeColor,
    pub current_fg: ThemeColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Rgb { r: u8, g: u8, b: u8 },
    Named(String),
}

impl ThemeColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        match self {
            ThemeColor::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" => Color::Magenta,
                "cyan" => Color::Cyan,
                "white" => Color::White,
                "gray" | "grey" => Color::Gray,
                "darkgray" | "darkgrey" => Color::DarkGray,
                _ => {
                    // Try parsing hex color #RRGGBB
                    if name.starts_with('#') && name.len() == 7 {
                        if let (Ok(r), Ok(g), Ok(b)) = (
                            u8::from_str_radix(&name[1..3], 16),
                            u8::from_str_radix(&name[3..5], 16),
                            u8::from_str_radix(&name[5..7], 16),
                        ) {
                            return Color::Rgb(r, g, b);
                        }
                    }
                    Color::White
                }
            },
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: String::from("dark"),
            ui: UiColors {
                background: ThemeColor::rgb(24, 26, 32),
                foreground: ThemeColor::rgb(212, 212, 212),
                border: ThemeColor::rgb(60, 64, 72),
                border_focused: ThemeColor::rgb(97, 175, 239),
                title: ThemeColor::rgb(110, 115, 125),
                title_focused: ThemeColor::rgb(97, 175, 239),
                line_numbers: ThemeColor::rgb(88, 92, 100),
                cursor_line: ThemeColor::rgb(36, 39, 46),

                status_bar_bg: ThemeColor::rgb(20, 22, 27),
                status_bar_fg: ThemeColor::rgb(150, 155, 165),
                mode_normal_bg: ThemeColor::rgb(97, 175, 239),
                mode_normal_fg: ThemeColor::rgb(24, 26, 32),
                mode_insert_bg: ThemeColor::rgb(152, 195, 121),
                mode_insert_fg: ThemeColor::rgb(24, 26, 32),
                mode_search_bg: ThemeColor::rgb(229, 192, 123),
                mode_search_fg: ThemeColor::rgb(24, 26, 32),

                result_value: ThemeColor::rgb(212, 212, 212),
                result_path: ThemeColor::rgb(130, 170, 255),
                result_selected: ThemeColor::rgb(48, 54, 66),
                message_error: ThemeColor::rgb(224, 108, 117),
                message_info: ThemeColor::rgb(110, 115, 125),
            },
            search: SearchColors {
                match_bg: ThemeColor::rgb(94, 80, 18),
                match_fg: ThemeColor::rgb(230, 225, 200),
                current_bg: ThemeColor::rgb(229, 192, 60),
                current_fg: ThemeColor::rgb(24, 26, 32),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: String::from("light"),
            ui: UiColors {
                background: ThemeColor::rgb(250, 250, 248),
                foreground: ThemeColor::rgb(45, 45, 45),
                border: ThemeColor::rgb(200, 200, 195),
                border_focused: ThemeColor::rgb(24, 100, 171),
                title: ThemeColor::rgb(140, 140, 135),
                title_focused: ThemeColor::rgb(24, 100, 171),
                line_numbers: ThemeColor::rgb(170, 170, 165),
                cursor_line: ThemeColor::rgb(240, 240, 236),

                status_bar_bg: ThemeColor::rgb(232, 232, 228),
                status_bar_fg: ThemeColor::rgb(90, 90, 90),
                mode_normal_bg: ThemeColor::rgb(24, 100, 171),
                mode_normal_fg: ThemeColor::rgb(250, 250, 248),
                mode_insert_bg: ThemeColor::rgb(64, 120, 40),
                mode_insert_fg: ThemeColor::rgb(250, 250, 248),
                mode_search_bg: ThemeColor::rgb(176, 120, 16),
                mode_search_fg: ThemeColor::rgb(250, 250, 248),

                result_value: ThemeColor::rgb(45, 45, 45),
                result_path: ThemeColor::rgb(24, 100, 171),
                result_selected: ThemeColor::rgb(222, 230, 240),
                message_error: ThemeColor::rgb(175, 50, 50),
                message_info: ThemeColor::rgb(140, 140, 135),
            },
            search: SearchColors {
                match_bg: ThemeColor::rgb(250, 235, 160),
                match_fg: ThemeColor::rgb(60, 50, 10),
                current_bg: ThemeColor::rgb(255, 255, 0),
                current_fg: ThemeColor::rgb(40, 40, 40),
            },
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
