use clap::Args;
use passgen_password::score;

use super::ClassArgs;
use crate::{
    config::Settings,
    helpers::display::{length_line, strength_line},
    Result,
};

/// Arguments for rating a length and set of classes.
#[derive(Args, Debug)]
pub struct StrengthArgs {
    /// Password length.
    #[clap(short, long)]
    pub length: Option<usize>,

    #[clap(flatten)]
    pub classes: ClassArgs,

    /// Print JSON output.
    #[clap(long)]
    pub json: bool,
}

/// Print the strength rating without generating a password.
pub fn run(args: StrengthArgs, settings: &Settings) -> Result<()> {
    let length =
        settings.check_length(args.length.unwrap_or(settings.length))?;
    let classes = args.classes.resolve(&settings.classes);
    let strength = score(length, &classes);

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout(), &strength)?;
        println!();
    } else {
        println!("{}", length_line(length, &settings.range()?));
        println!("{}", strength_line(&strength));
    }
    Ok(())
}
