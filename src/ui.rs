use crate::entropy::Strength;
use anyhow::{Context, Result};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use zeroize::Zeroizing;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

impl DisplayOptions {
    pub fn detect(quiet: bool) -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
            quiet,
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support { ("✓", "!") } else { ("+", "!") }
}

/// Reads the test password with terminal echo disabled so it never lands
/// in shell history or scrollback.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    print!("Password to analyze: ");
    io::stdout().flush()?;

    let password = rpassword::read_password().context("Failed to read password")?;

    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    Ok(Zeroizing::new(password))
}

pub fn show_progress<F, T>(unicode_support: bool, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let pb = ProgressBar::new_spinner();

    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    if unicode_support {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    } else {
        pb.set_style(style.tick_chars("-\\|/-"));
    }

    pb.set_message("Generating wordlist...");
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();

    result.map(|r| (r, elapsed))
}

fn strength_style(strength: Strength, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }
    match strength {
        Strength::Strong | Strength::VeryStrong => Style::new().green(),
        Strength::Moderate => Style::new().yellow(),
        Strength::VeryWeak | Strength::Weak => Style::new().red(),
    }
}

pub fn display_analysis(bits: f64, strength: Strength, options: &DisplayOptions) {
    if options.quiet {
        return;
    }

    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let status = if strength.is_acceptable() {
        check_ok
    } else {
        check_warn
    };
    let style = strength_style(strength, options.color_support);

    println!("Password Analysis:");
    println!(
        "  ├─ Entropy   {} {} bits",
        style.apply_to(format!("[{}]", status)),
        style.apply_to(format!("{:.2}", bits))
    );
    println!(
        "  └─ Strength  {} {}",
        style.apply_to(format!("[{}]", status)),
        style.apply_to(strength)
    );
    println!();
}

pub fn format_years(years: &BTreeSet<String>) -> String {
    if years.is_empty() {
        "none".to_string()
    } else {
        years.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

pub fn display_summary(
    token_count: usize,
    years: &BTreeSet<String>,
    written: usize,
    destination: &str,
    elapsed: Duration,
    options: &DisplayOptions,
) {
    if options.quiet {
        return;
    }

    let destination = if destination == "-" {
        "stdout"
    } else {
        destination
    };

    println!("Wordlist:");
    println!(
        "  ├─ Bases     {} {}",
        token_count,
        if token_count == 1 { "token" } else { "tokens" }
    );
    println!("  ├─ Years     {}", format_years(years));
    println!(
        "  ├─ Words     {} {}",
        written,
        if written == 1 { "word" } else { "words" }
    );
    println!("  ├─ Output    {}", destination);
    println!("  └─ Time      {:.1}s", elapsed.as_secs_f64());
}
