use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 17, 22);
pub const SURFACE: Color = Color::Rgb(22, 27, 34);
pub const BORDER: Color = Color::Rgb(48, 54, 61);
pub const TEXT: Color = Color::Rgb(201, 209, 217);
pub const TEXT_DIM: Color = Color::Rgb(110, 118, 129);
pub const ACCENT: Color = Color::Rgb(88, 166, 255);
pub const VISITED: Color = Color::Rgb(57, 211, 83);
pub const MISSED: Color = Color::Rgb(33, 38, 45);
pub const UPCOMING: Color = Color::Rgb(60, 66, 74);
pub const AMBER: Color = Color::Rgb(210, 153, 34);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn visited() -> Style {
    Style::default().fg(VISITED)
}

pub fn missed() -> Style {
    Style::default().fg(MISSED)
}

pub fn upcoming() -> Style {
    Style::default().fg(UPCOMING)
}
