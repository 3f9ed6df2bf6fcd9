//! Shell configuration read from the environment

pub const STRICT_PRIORITY_VAR: &str = "TASK_TRACKER_STRICT_PRIORITY";
pub const BANNER_VAR: &str = "TASK_TRACKER_BANNER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Reject priority codes outside 1..=3 instead of treating them as Low
    pub strict_priority: bool,
    pub show_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            strict_priority: false,
            show_banner: true,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            strict_priority: parse_flag(
                lookup(STRICT_PRIORITY_VAR).as_deref(),
                defaults.strict_priority,
            ),
            show_banner: parse_flag(lookup(BANNER_VAR).as_deref(), defaults.show_banner),
        }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
