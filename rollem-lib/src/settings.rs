use std::str::FromStr;

pub const DEFAULT_DIE: &str = "2d10";
pub const DEFAULT_TRIGGER: &str = "!roll";

/// When to answer a trigger word seen in chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AutoRespond {
    #[default]
    Off,
    /// Only while the host is not marked away
    WhenPresent,
    Always,
}

impl FromStr for AutoRespond {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(AutoRespond::Off),
            "on" | "present" => Ok(AutoRespond::WhenPresent),
            "always" => Ok(AutoRespond::Always),
            other => Err(format!(
                "unknown auto respond mode `{other}`, expected `off`, `present` or `always`"
            )),
        }
    }
}

impl std::fmt::Display for AutoRespond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutoRespond::Off => write!(f, "off"),
            AutoRespond::WhenPresent => write!(f, "present"),
            AutoRespond::Always => write!(f, "always"),
        }
    }
}

/// Options handed over by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub enabled: bool,
    /// Dice set rolled when none is given
    pub die: String,
    pub auto_respond: AutoRespond,
    pub trigger: String,
    pub ignore_nicks: Vec<String>,
    pub ignore_channels: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            enabled: true,
            die: DEFAULT_DIE.to_owned(),
            auto_respond: AutoRespond::default(),
            trigger: DEFAULT_TRIGGER.to_owned(),
            ignore_nicks: Vec::new(),
            ignore_channels: Vec::new(),
        }
    }
}

/// Split a comma separated list, dropping blank entries
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
