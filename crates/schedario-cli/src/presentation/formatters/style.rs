//! Terminal styling, applied only when stdout is a terminal and `NO_COLOR` is unset.

use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;
use owo_colors::OwoColorize;

static COLORS: OnceCell<bool> = OnceCell::new();

pub fn colors_enabled() -> bool {
    *COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    })
}

pub fn heading(text: &str) -> String {
    if colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn section(text: &str) -> String {
    if colors_enabled() {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if colors_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn accent(text: &str) -> String {
    if colors_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}
