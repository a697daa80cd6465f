use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    commands::{generate, shell, strength, GenerateArgs, StrengthArgs},
    config::Settings,
    CommandTree, Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Passgen {
    /// Settings file.
    #[clap(long, env = "PASSGEN_CONFIG", hide_env_values = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random passwords.
    #[clap(alias = "gen")]
    Generate(GenerateArgs),
    /// Rate the strength of a length and set of classes.
    Strength(StrengthArgs),
    /// Interactive generator shell.
    Shell,
}

pub async fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("PASSGEN_CLI_JSON").ok().is_some() {
        let cmd = Passgen::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        std::process::exit(0);
    }

    let args = Passgen::parse();
    let settings = Settings::load_or_default(args.config.as_deref())?;

    match args.cmd {
        Command::Generate(cmd) => generate::run(cmd, &settings).await?,
        Command::Strength(cmd) => strength::run(cmd, &settings)?,
        Command::Shell => shell::run(&settings).await?,
    }
    Ok(())
}
