use owo_colors::{OwoColorize, Rgb};

pub const ICON_SUCCESS: &str = "✓";
pub const ICON_WARNING: &str = "⚠";

pub fn primary() -> Rgb {
    Rgb(114, 227, 173)
}

pub fn warning() -> Rgb {
    Rgb(245, 158, 11)
}

pub fn success_icon() -> String {
    format!("{}", ICON_SUCCESS.color(primary()).bold())
}

pub fn warning_icon() -> String {
    format!("{}", ICON_WARNING.color(warning()).bold())
}

pub fn success_message(msg: &str) -> String {
    format!("{} {}", success_icon(), msg)
}

pub fn warning_message(msg: &str) -> String {
    format!("{} {}", warning_icon(), msg)
}

pub fn highlight(text: &str) -> String {
    format!("{}", text.color(primary()).bold())
}
