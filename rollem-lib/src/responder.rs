use crate::error::Result;
use crate::roll;
use crate::settings::AutoRespond;
use crate::settings::Settings;
use crate::solver::RandomSource;
use crate::solver::Solver;
use tracing::debug;
use tracing::info;

/// A line of chat text as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incoming<'a> {
    pub nick: &'a str,
    pub channel: &'a str,
    pub text: &'a str,
    /// Host is marked away
    pub away: bool,
}

/// The dice set that was rolled and what came out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub dice: String,
    pub result: Result<roll::Outcome>,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(outcome) => write!(f, "{outcome}"),
            Err(error) => write!(f, "{error}"),
        }
    }
}

/// Reason a chat line was left unanswered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Silence {
    Disabled,
    AutoRespondOff,
    /// Marked away while answering only when present
    Away,
    /// The line does not start with the trigger word
    NoTrigger,
    IgnoredNick(String),
    IgnoredChannel(String),
}

impl std::fmt::Display for Silence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Silence::Disabled => write!(f, "rolling is disabled"),
            Silence::AutoRespondOff => write!(f, "auto respond is off"),
            Silence::Away => write!(f, "not answering while away"),
            Silence::NoTrigger => write!(f, "no trigger word found"),
            Silence::IgnoredNick(filter) => {
                write!(f, "ignoring autoroll request (nick matches {filter})")
            }
            Silence::IgnoredChannel(filter) => {
                write!(f, "ignoring autoroll request (channel matches {filter})")
            }
        }
    }
}

/// Decide what to roll for the manual command and for chat triggers
#[derive(Debug, Clone)]
pub struct Responder {
    settings: Settings,
}

impl Responder {
    pub fn new(settings: Settings) -> Self {
        Responder { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Roll `args` as typed after the command, the default die when empty
    pub fn command(&self, args: &str) -> Option<Reply> {
        self.command_with_source(args, &mut RandomSource {
            generator: &mut rand::thread_rng(),
        })
    }

    pub fn command_with_source<S: roll::Source>(&self, args: &str, source: &mut S) -> Option<Reply> {
        if !self.settings.enabled {
            debug!("disabled, not rolling `{}`", args);
            return None;
        }
        Some(self.roll(args, source))
    }

    /// Answer a trigger word found at the start of `msg`
    pub fn respond(&self, msg: &Incoming) -> Option<Reply> {
        self.respond_with_source(msg, &mut RandomSource {
            generator: &mut rand::thread_rng(),
        })
    }

    pub fn respond_with_source<S: roll::Source>(
        &self,
        msg: &Incoming,
        source: &mut S,
    ) -> Option<Reply> {
        if let Some(silence) = self.silence(msg) {
            match silence {
                Silence::IgnoredNick(_) | Silence::IgnoredChannel(_) => {
                    info!("{} from {} in {}", silence, msg.nick, msg.channel)
                }
                _ => debug!("{} in `{}`", silence, msg.text),
            }
            return None;
        }
        let args = msg.text.split_whitespace().nth(1).unwrap_or_default();
        let reply = self.roll(args, source);
        info!("auto-rolling {} for {}", reply.dice, msg.nick);
        Some(reply)
    }

    /// Why `msg` gets no answer, `None` when it does
    pub fn silence(&self, msg: &Incoming) -> Option<Silence> {
        if !self.settings.enabled {
            return Some(Silence::Disabled);
        }
        match self.settings.auto_respond {
            AutoRespond::Off => return Some(Silence::AutoRespondOff),
            AutoRespond::WhenPresent if msg.away => return Some(Silence::Away),
            AutoRespond::WhenPresent | AutoRespond::Always => (),
        }
        if !self.is_triggered(msg.text) {
            return Some(Silence::NoTrigger);
        }
        if let Some(filter) = find_filter(&self.settings.ignore_nicks, msg.nick) {
            return Some(Silence::IgnoredNick(filter.to_owned()));
        }
        if let Some(filter) = find_filter(&self.settings.ignore_channels, msg.channel) {
            return Some(Silence::IgnoredChannel(filter.to_owned()));
        }
        None
    }

    /// Word boundary right after the trigger: the trigger's last character and
    /// the one following it (end of text counts as non-word) differ in kind
    fn is_triggered(&self, text: &str) -> bool {
        let trigger = self.settings.trigger.as_str();
        let Some(last) = trigger.chars().next_back() else {
            return false;
        };
        match text.strip_prefix(trigger) {
            Some(rest) => is_word(last) != rest.chars().next().map_or(false, is_word),
            None => false,
        }
    }

    fn roll<S: roll::Source>(&self, args: &str, source: &mut S) -> Reply {
        let solver = Solver::new(args).or_default(&self.settings.die);
        Reply {
            dice: solver.as_str().to_owned(),
            result: solver.solve_with_source(source),
        }
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Blank filters never match
fn find_filter<'a>(filters: &'a [String], value: &str) -> Option<&'a str> {
    let value = value.to_lowercase();
    filters
        .iter()
        .filter(|filter| !filter.trim().is_empty())
        .find(|filter| value.contains(&filter.to_lowercase()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tests::MockIter;

    fn responder(auto_respond: AutoRespond) -> Responder {
        Responder::new(Settings {
            auto_respond,
            ignore_nicks: vec!["Bot".to_owned()],
            ignore_channels: vec!["#quiet".to_owned()],
            ..Settings::default()
        })
    }

    fn msg(text: &str) -> Incoming {
        Incoming {
            nick: "alice",
            channel: "#dice",
            text,
            away: false,
        }
    }

    #[test]
    fn command_default_die_test() {
        let r = Responder::new(Settings::default());
        let mock = vec![4, 9];
        let reply = r
            .command_with_source("", &mut MockIter {
                iter: &mut mock.into_iter(),
            })
            .unwrap();
        assert_eq!("2d10", reply.dice);
        assert_eq!("4+9= 13", reply.to_string());
    }

    #[test]
    fn command_disabled_test() {
        let r = Responder::new(Settings {
            enabled: false,
            ..Settings::default()
        });
        assert_eq!(None, r.command("3d6"));
    }

    #[test]
    fn command_error_test() {
        let r = Responder::new(Settings::default());
        let reply = r.command("banana").unwrap();
        assert_eq!(Err(Error::Malformed("banana".to_owned())), reply.result);
        assert_eq!("Invalid dice set received: banana", reply.to_string());
    }

    #[test]
    fn respond_trigger_test() {
        let r = responder(AutoRespond::Always);
        let mock = vec![2, 5, 6];
        let reply = r
            .respond_with_source(&msg("!roll 3d6+1 for damage"), &mut MockIter {
                iter: &mut mock.into_iter(),
            })
            .unwrap();
        assert_eq!("3d6+1", reply.dice);
        assert_eq!("(2+5+6)+1= 14", reply.to_string());
    }

    #[test]
    fn respond_without_dice_uses_default_test() {
        let r = responder(AutoRespond::Always);
        let reply = r.respond(&msg("!roll")).unwrap();
        assert_eq!("2d10", reply.dice);
        assert_eq!(2, reply.result.unwrap().get_rolls().len());
    }

    #[test]
    fn respond_word_boundary_test() {
        let r = responder(AutoRespond::Always);
        assert_eq!(None, r.respond(&msg("!rolling 3d6")));
        assert_eq!(None, r.respond(&msg("please !roll 3d6")));
        assert!(r.respond(&msg("!roll, 3d6")).is_some());
    }

    #[test]
    fn respond_off_test() {
        let r = responder(AutoRespond::Off);
        assert_eq!(None, r.respond(&msg("!roll 3d6")));
    }

    #[test]
    fn respond_away_test() {
        let away = Incoming {
            away: true,
            ..msg("!roll 3d6")
        };
        assert_eq!(None, responder(AutoRespond::WhenPresent).respond(&away));
        assert!(responder(AutoRespond::Always).respond(&away).is_some());
    }

    #[test]
    fn respond_ignored_test() {
        let r = responder(AutoRespond::Always);
        let from_bot = Incoming {
            nick: "DiceBot",
            ..msg("!roll 3d6")
        };
        assert_eq!(None, r.respond(&from_bot));
        let in_quiet = Incoming {
            channel: "#Quiet",
            ..msg("!roll 3d6")
        };
        assert_eq!(None, r.respond(&in_quiet));
    }

    #[test]
    fn blank_filter_matches_nothing_test() {
        let r = Responder::new(Settings {
            auto_respond: AutoRespond::Always,
            ignore_nicks: vec![String::new()],
            ignore_channels: vec!["  ".to_owned()],
            ..Settings::default()
        });
        assert_eq!(None, r.silence(&msg("!roll 3d6")));
        assert!(r.respond(&msg("!roll 3d6")).is_some());
    }

    #[test]
    fn silence_reason_test() {
        let away = Incoming {
            away: true,
            ..msg("!roll 3d6")
        };
        assert_eq!(
            Some(Silence::AutoRespondOff),
            responder(AutoRespond::Off).silence(&msg("!roll 3d6"))
        );
        assert_eq!(
            Some(Silence::Away),
            responder(AutoRespond::WhenPresent).silence(&away)
        );
        assert_eq!(
            Some(Silence::NoTrigger),
            responder(AutoRespond::Always).silence(&msg("!rolling 3d6"))
        );
        let from_bot = Incoming {
            nick: "DiceBot",
            ..msg("!roll 3d6")
        };
        assert_eq!(
            Some(Silence::IgnoredNick("Bot".to_owned())),
            responder(AutoRespond::Always).silence(&from_bot)
        );
        let disabled = Responder::new(Settings {
            enabled: false,
            auto_respond: AutoRespond::Always,
            ..Settings::default()
        });
        assert_eq!(Some(Silence::Disabled), disabled.silence(&msg("!roll 3d6")));
        assert_eq!("auto respond is off", Silence::AutoRespondOff.to_string());
    }

    #[test]
    fn trigger_ending_in_symbol_test() {
        let r = Responder::new(Settings {
            auto_respond: AutoRespond::Always,
            trigger: "roll!".to_owned(),
            ..Settings::default()
        });
        // a non-word trigger needs a word character right after it
        assert_eq!(Some(Silence::NoTrigger), r.silence(&msg("roll! 3d6")));
        assert_eq!(Some(Silence::NoTrigger), r.silence(&msg("roll!")));
        assert_eq!(None, r.silence(&msg("roll!3d6")));
        let reply = r.respond(&msg("roll!now 1d4")).unwrap();
        assert_eq!("1d4", reply.dice);
    }

    #[test]
    fn empty_trigger_never_matches_test() {
        let r = Responder::new(Settings {
            auto_respond: AutoRespond::Always,
            trigger: String::new(),
            ..Settings::default()
        });
        assert_eq!(Some(Silence::NoTrigger), r.silence(&msg("3d6")));
    }
}
