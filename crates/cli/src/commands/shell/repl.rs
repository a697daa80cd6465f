use std::ffi::OsString;

use clap::{CommandFactory, Parser, Subcommand};
use passgen_password::CharacterClass;

use super::ShellState;
use crate::Result;

/// Interactive password generator.
#[derive(Parser, Debug)]
#[clap(name = "shell", author, version, about, long_about = None)]
struct Shell {
    #[clap(subcommand)]
    cmd: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Set the password length.
    #[clap(alias = "len")]
    Length {
        /// New length.
        length: usize,
    },
    /// Enable or disable a character class.
    #[clap(alias = "t")]
    Toggle {
        /// Class name: upper, lower, digit or symbol.
        class: CharacterClass,
    },
    /// Enable a character class.
    Enable {
        /// Class name: upper, lower, digit or symbol.
        class: CharacterClass,
    },
    /// Disable a character class.
    Disable {
        /// Class name: upper, lower, digit or symbol.
        class: CharacterClass,
    },
    /// Generate a new password.
    #[clap(alias = "r", alias = "generate")]
    Refresh,
    /// Copy the password to the clipboard.
    #[clap(alias = "cp")]
    Copy,
    /// Print the current password and strength.
    Show,
    /// Exit the shell.
    #[clap(alias = "q", alias = "exit")]
    Quit,
}

/// Execute a parsed shell command, returns false to exit.
async fn exec_program(program: Shell, state: &mut ShellState) -> Result<bool> {
    let outcome = match program.cmd {
        ShellCommand::Length { length } => {
            state.session_mut().set_length(length)
        }
        ShellCommand::Toggle { class } => {
            state.session_mut().toggle_class(class)
        }
        ShellCommand::Enable { class } => {
            state.session_mut().set_class(class, true)
        }
        ShellCommand::Disable { class } => {
            state.session_mut().set_class(class, false)
        }
        ShellCommand::Refresh => state.session_mut().refresh(),
        ShellCommand::Copy => {
            state.copy().await.print();
            return Ok(true);
        }
        ShellCommand::Show => state.session().outcome(),
        ShellCommand::Quit => return Ok(false),
    };
    state.print(&outcome);
    Ok(true)
}

/// Intermediary to pretty print clap parse errors.
async fn exec_args<I, T>(it: I, state: &mut ShellState) -> Result<bool>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Shell::try_parse_from(it) {
        Ok(program) => exec_program(program, state).await,
        Err(e) => {
            e.print()?;
            Ok(true)
        }
    }
}

/// Execute a line of input in the context of the shell program.
///
/// Returns false when the shell should exit.
pub async fn exec(line: &str, state: &mut ShellState) -> Result<bool> {
    if line.trim().is_empty() {
        return Ok(true);
    }

    let mut sanitized = shell_words::split(line.trim_end_matches(' '))?;
    sanitized.insert(0, String::from("passgen-shell"));
    let it = sanitized.into_iter();
    let mut cmd = Shell::command();
    if line == "-V" {
        let version = cmd.render_version();
        print!("{}", version);
    } else if line == "version" || line == "--version" {
        let version = cmd.render_long_version();
        print!("{}", version);
    } else if line == "-h" {
        cmd.print_help()?;
    } else if line == "help" || line == "--help" {
        cmd.print_long_help()?;
    } else {
        return exec_args(it, state).await;
    }
    Ok(true)
}
