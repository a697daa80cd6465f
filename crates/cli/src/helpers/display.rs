//! Terminal rendering of passwords and indicators.
use colored::{ColoredString, Colorize};
use passgen_password::{LengthRange, StrengthResult, Tone};
use terminal_banner::{Banner, Padding};

/// Width of the strength and length bars in cells.
const BAR_WIDTH: usize = 20;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Render a bar filled to the given fraction.
pub(crate) fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round()
        as usize)
        .min(width);
    format!("{}{}", FILLED.repeat(filled), EMPTY.repeat(width - filled))
}

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Success => text.green(),
        Tone::Warning => text.yellow(),
        Tone::Danger => text.red(),
    }
}

/// Strength indicator line.
pub(crate) fn strength_line(strength: &StrengthResult) -> String {
    let tone = strength.level.tone();
    format!(
        "Strength {} {} ({}/6)",
        paint(&bar(strength.display_fraction, BAR_WIDTH), tone),
        paint(&strength.level.to_string(), tone).bold(),
        strength.score,
    )
}

/// Length slider line.
pub(crate) fn length_line(length: usize, range: &LengthRange) -> String {
    format!(
        "Length   {} {} ({}..={})",
        bar(range.fill_fraction(length), BAR_WIDTH).yellow(),
        length.to_string().bold(),
        range.min(),
        range.max(),
    )
}

/// Print a password in a banner.
pub(crate) fn display_password(heading: &str, password: &str) {
    let banner = Banner::new()
        .padding(Padding::one())
        .text(heading.into())
        .text(password.into())
        .render();
    println!("{}", banner);
}
