use client_common::strength::{self, Classification};
use rustyline::{hint::Hinter, Completer, Context, Helper, Highlighter, Validator};

const GAUGE_WIDTH: usize = 10;

/// `[#######---]  70% Armor: Diamond Armor (Strong)`
pub fn gauge(c: &Classification) -> String {
    let filled = (c.percent as usize * GAUGE_WIDTH + 50) / 100;
    format!(
        "[{}{}] {:>3}% {}",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled),
        c.percent,
        c.text()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Strength(&'a str),
    Hash(&'a str),
    Compare(&'a str),
    Rainbow(&'a str),
    Help,
    Empty,
    Unknown(&'a str),
}

/// Splits at the first space only: the argument is kept verbatim, so a
/// password may start or end with spaces.
pub fn parse_command(line: &str) -> Command<'_> {
    let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
    match cmd {
        "strength" => Command::Strength(arg),
        "hash" => Command::Hash(arg),
        "compare" => Command::Compare(arg),
        "rainbow" => Command::Rainbow(arg),
        "help" => Command::Help,
        "" if arg.trim().is_empty() => Command::Empty,
        _ => Command::Unknown(cmd),
    }
}

/// Commands whose argument is a password.
pub fn password_argument(line: &str) -> Option<&str> {
    match parse_command(line) {
        // a bare command has no argument yet
        _ if !line.contains(' ') => None,
        Command::Strength(arg) | Command::Hash(arg) | Command::Compare(arg) => Some(arg),
        _ => None,
    }
}

// rustyline asks for a hint on every keystroke, so the gauge is always fresh
#[derive(Completer, Helper, Highlighter, Validator)]
pub struct StrengthHelper;

impl Hinter for StrengthHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        password_argument(line).map(|pw| format!("   {}", gauge(&strength::evaluate(pw))))
    }
}
