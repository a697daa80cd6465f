use clap::Args;
use passgen_password::{
    secrecy::ExposeSecret, ClassSet, Error as PasswordError,
    GenerationRequest, PasswordResult, StrengthResult, PLACEHOLDER,
};
use serde::Serialize;

use super::ClassArgs;
use crate::{
    config::Settings,
    helpers::{
        copy_password,
        display::{display_password, strength_line},
        messages::{fail, info, warn},
        open_clipboard, CopyStatus,
    },
    Error, Result,
};

/// Arguments for password generation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Password length.
    #[clap(short, long)]
    pub length: Option<usize>,

    #[clap(flatten)]
    pub classes: ClassArgs,

    /// Number of passwords to generate.
    #[clap(short = 'n', long)]
    pub count: Option<usize>,

    /// Copy the first password to the clipboard.
    #[clap(short, long)]
    pub copy: bool,

    /// Seconds before the copied password is cleared,
    /// zero keeps it on the clipboard.
    #[clap(long)]
    pub timeout: Option<u16>,

    /// Print JSON output.
    #[clap(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    length: usize,
    classes: &'a ClassSet,
    strength: StrengthResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    passwords: Vec<PasswordReport<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordReport<'a> {
    password: &'a str,
    entropy_score: u8,
    guesses_log10: f64,
}

impl<'a> From<&'a PasswordResult> for PasswordReport<'a> {
    fn from(value: &'a PasswordResult) -> Self {
        Self {
            password: value.password.expose_secret(),
            entropy_score: u8::from(value.entropy.score()),
            guesses_log10: value.entropy.guesses_log10(),
        }
    }
}

/// Generate passwords.
pub async fn run(args: GenerateArgs, settings: &Settings) -> Result<()> {
    let length =
        settings.check_length(args.length.unwrap_or(settings.length))?;
    let count = args.count.unwrap_or(settings.count);
    if count == 0 {
        return Err(Error::InvalidCount);
    }

    let request =
        GenerationRequest::new(length, args.classes.resolve(&settings.classes));
    let strength = request.strength();
    let results = match request.many(count) {
        Ok(results) => results,
        Err(PasswordError::NoClassSelected) => {
            if args.json {
                print_report(&Report {
                    length,
                    classes: &request.classes,
                    strength,
                    message: Some(PLACEHOLDER),
                    passwords: vec![],
                })?;
            } else {
                fail(PLACEHOLDER);
                println!("{}", strength_line(&strength));
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let effective_length = request.effective_length();
    if args.json {
        print_report(&Report {
            length: effective_length,
            classes: &request.classes,
            strength,
            message: None,
            passwords: results.iter().map(PasswordReport::from).collect(),
        })?;
    } else {
        if effective_length != length {
            warn(format!(
                "length raised to {} to fit {} classes",
                effective_length,
                request.classes.len()
            ));
        }
        let total = results.len();
        for (index, result) in results.iter().enumerate() {
            let heading = if total > 1 {
                format!("Password {} of {}", index + 1, total)
            } else {
                "Password".to_string()
            };
            display_password(&heading, result.password.expose_secret());
            info(format!(
                "Entropy  score {}/4, about 10^{:.1} guesses",
                u8::from(result.entropy.score()),
                result.entropy.guesses_log10(),
            ));
        }
        println!("{}", strength_line(&strength));
    }

    if args.copy {
        let timeout = args.timeout.unwrap_or(settings.clipboard_timeout);
        let clipboard = open_clipboard(timeout);
        let password = results.first().map(|r| &r.password);
        let status = copy_password(clipboard.as_ref(), password).await;
        status.print();

        if let (CopyStatus::Copied, Some(clipboard), Some(password)) =
            (status, clipboard.as_ref(), password)
        {
            if timeout > 0 {
                info(format!("Clipboard clears in {} seconds", timeout));
                clipboard.clear_timeout(password.expose_secret()).await?;
            }
        }
    }

    Ok(())
}

fn print_report(report: &Report<'_>) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), report)?;
    println!();
    Ok(())
}
