//! CLI command messaging system
//!
//! Coloured one-line status output for the non-interactive commands
//! (`list`, `show`, `set-catalog`, `reset`). Errors go to stderr so
//! `list` output stays clean when piped.

/// ANSI style of each message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Info,
    Warn,
    Error,
    Success,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "INFO",
            Tag::Warn => "WARN",
            Tag::Error => "ERROR",
            Tag::Success => "SUCCESS",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Tag::Info => "1;33",
            Tag::Warn => "1;91",
            Tag::Error => "1;31",
            Tag::Success => "1;32",
        }
    }
}

/// `[TAG] title details`, or just `[TAG] title` when there are no details.
fn compose(tag: Tag, title: &str, details: &str) -> String {
    let mut line = format!("\x1b[{}m[{}]\x1b[0m {}", tag.ansi(), tag.label(), title);
    if !details.is_empty() {
        line.push(' ');
        line.push_str(details);
    }
    line
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", compose(Tag::Info, title, details));
}

/// Warnings are non-fatal, so they share stdout with normal output.
pub fn print_warn(title: &str, details: &str) {
    println!("{}", compose(Tag::Warn, title, details));
}

pub fn print_error(title: &str, details: &str) {
    eprintln!("{}", compose(Tag::Error, title, details));
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", compose(Tag::Success, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr) => {
        $crate::cli_messages::print_info($title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr) => {
        $crate::cli_messages::print_warn($title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors, printed to stderr
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_error($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr) => {
        $crate::cli_messages::print_success($title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_only_has_no_trailing_separator() {
        let line = compose(Tag::Info, "Clearing configuration file...", "");
        assert_eq!(line, "\x1b[1;33m[INFO]\x1b[0m Clearing configuration file...");
        assert!(!line.contains('\t'));
    }

    #[test]
    fn test_details_follow_title_after_a_space() {
        let line = compose(Tag::Error, "Unknown star id.", "vega-b");
        assert_eq!(line, "\x1b[1;31m[ERROR]\x1b[0m Unknown star id. vega-b");
    }

    #[test]
    fn test_each_tag_has_its_own_colour() {
        let tags = [Tag::Info, Tag::Warn, Tag::Error, Tag::Success];
        for (i, a) in tags.iter().enumerate() {
            assert!(compose(*a, "t", "").contains(&format!("[{}]", a.label())));
            for b in &tags[i + 1..] {
                assert_ne!(a.ansi(), b.ansi());
            }
        }
    }
}
