mod cli;
mod helper;
use cli::Parser;
use helper::ReplHelper;

use colored::Colorize;
use rollem_lib::responder::Incoming;
use rollem_lib::responder::Reply;
use rollem_lib::responder::Responder;
use rollem_lib::responder::Silence;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::info;
use tracing::Level;
use tracing_unwrap::OptionExt;

const HISTORY_FILE: &str = "history";

fn print_reply(skin: &MadSkin, reply: &Reply) {
    match &reply.result {
        Ok(outcome) => println!(
            "{}",
            skin.inline(&format!("*rolling* `{}` **{}**", reply.dice, outcome))
        ),
        Err(error) => eprintln!("{}", error.to_string().bold().red()),
    }
}

/// Tell the user why a line was not rolled
fn note(silence: &Silence) -> String {
    format!("repl: note: nothing rolled, {}", silence)
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let responder = Responder::new(args.settings());
    let trigger = responder.settings().trigger.clone();
    info!("The die is cast, we're ready to roll!");

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        trigger: trigger.clone(),
        colored: "".to_owned(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(HISTORY_FILE).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("roll: {}> ", count);
        rline.helper_mut().expect_or_log("repl: no helper").colored =
            prompt.bold().green().to_string();
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                let line = line.trim();
                // lines starting with the trigger act as chat messages
                let answer = if !trigger.is_empty() && line.starts_with(trigger.as_str()) {
                    let incoming = Incoming {
                        nick: &args.nick,
                        channel: &args.channel,
                        text: line,
                        away: args.away,
                    };
                    match responder.silence(&incoming) {
                        Some(silence) => Err(silence),
                        None => responder.respond(&incoming).ok_or(Silence::Disabled),
                    }
                } else {
                    responder.command(line).ok_or(Silence::Disabled)
                };
                match answer {
                    Ok(reply) => print_reply(&skin, &reply),
                    Err(silence) => eprintln!("{}", note(&silence).bold().yellow()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(HISTORY_FILE)
}
