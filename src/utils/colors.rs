/// ANSI color helper utilities for terminal output.
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "--:--" || v == "--:--:--" || v == "N/A"
}

/// Grey for placeholders, green for entries, red for exits.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_placeholder(value) {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

pub fn colorize_optional(value: &str) -> String {
    if is_placeholder(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Status line colour: green when in service.
pub fn color_for_status(in_service: bool) -> &'static str {
    if in_service { GREEN } else { RED }
}
