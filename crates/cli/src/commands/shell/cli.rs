use std::borrow::Cow;

use passgen_password::PasswordSession;
use rustyline::error::ReadlineError;
use terminal_banner::{Banner, Padding};

use super::{exec, ShellState};
use crate::{config::Settings, helpers::readline, Result, TARGET};

const PROMPT: &str = "passgen> ";

/// Print the welcome information.
fn welcome(settings: &Settings) {
    let help_info = r#"Type "help", "--help" or "-h" for command usage
Type "quit" or "q" to exit"#;
    let mut banner = Banner::new()
        .padding(Padding::one())
        .text(Cow::from("Password generator"))
        .text(Cow::from(help_info));
    if let Some(file) = settings.file() {
        banner =
            banner.text(Cow::Owned(format!("Settings: {}", file.display())));
    }
    println!("{}", banner.render());
}

/// Run the interactive shell.
pub async fn run(settings: &Settings) -> Result<()> {
    let session = PasswordSession::new(settings.request(), settings.range()?);
    let mut state = ShellState::new(session, settings.clipboard_timeout);

    welcome(settings);
    let outcome = state.session_mut().refresh();
    state.print(&outcome);

    let mut rl = readline::basic_editor()?;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match exec(&line, &mut state).await {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => tracing::error!(target: TARGET, "{}", e),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                state.close().await;
                return Err(e.into());
            }
        }
    }

    state.close().await;
    Ok(())
}
