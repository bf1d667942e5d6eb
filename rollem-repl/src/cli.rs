use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use rollem_lib::settings;
use rollem_lib::settings::AutoRespond;
use rollem_lib::settings::Settings;

const ROLLEM_AUTHOR: &str = crate_authors!();
const ROLLEM_VERSION: &str = crate_version!();
const ROLLEM_ABOUT: &str = crate_description!();
const ROLLEM_FLAG_D_SHORT: char = 'd';
const ROLLEM_FLAG_D_HELP: &str = "Enable Debug logging";

#[derive(Parser, Debug)]
#[command(author = ROLLEM_AUTHOR, version = ROLLEM_VERSION, about = ROLLEM_ABOUT)]
pub struct Args {
    #[arg(short = ROLLEM_FLAG_D_SHORT, long, help = ROLLEM_FLAG_D_HELP, action)]
    pub debug: bool,

    /// Dice set rolled when a line holds none
    #[arg(long, env = "ROLLEM_DIE", default_value = settings::DEFAULT_DIE)]
    pub die: String,

    /// Word that marks a line as a chat trigger
    #[arg(long, env = "ROLLEM_TRIGGER", default_value = settings::DEFAULT_TRIGGER)]
    pub trigger: String,

    /// Answer trigger lines: off, present or always
    #[arg(long, env = "ROLLEM_AUTO_RESPOND", default_value = "off")]
    pub auto_respond: AutoRespond,

    /// Comma separated nicks never answered
    #[arg(long, env = "ROLLEM_IGNORE_NICKS", default_value = "")]
    pub ignore_nicks: String,

    /// Comma separated channels never answered
    #[arg(long, env = "ROLLEM_IGNORE_CHANNELS", default_value = "")]
    pub ignore_channels: String,

    /// Do not roll anything
    #[arg(long, env = "ROLLEM_DISABLED", action)]
    pub disabled: bool,

    /// Nick that trigger lines are sent as
    #[arg(long, env = "ROLLEM_NICK", default_value = "me")]
    pub nick: String,

    /// Channel that trigger lines are sent to
    #[arg(long, env = "ROLLEM_CHANNEL", default_value = "#local")]
    pub channel: String,

    /// Pretend to be marked away
    #[arg(long, action)]
    pub away: bool,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            enabled: !self.disabled,
            die: self.die.clone(),
            auto_respond: self.auto_respond,
            trigger: self.trigger.clone(),
            ignore_nicks: settings::split_list(&self.ignore_nicks),
            ignore_channels: settings::split_list(&self.ignore_channels),
        }
    }
}
