use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;
use zeroize::Zeroizing;

use wordforge::{entropy, generator, input, output, ui};

#[derive(Parser)]
#[command(
    name = "wordforge",
    version,
    author,
    about = "Password strength analyzer and targeted wordlist generator"
)]
struct Cli {
    /// Comma-separated names
    #[arg(long, default_value = "")]
    names: String,

    /// Comma-separated pet names
    #[arg(long, default_value = "")]
    pets: String,

    /// Comma-separated dates or years
    #[arg(long, default_value = "")]
    dates: String,

    /// Comma-separated phrases
    #[arg(long, default_value = "")]
    phrases: String,

    /// Password to test strength
    #[arg(long, conflicts_with = "check")]
    testpass: Option<String>,

    /// Prompt for a password to test with echo disabled
    #[arg(long)]
    check: bool,

    /// Output file, or "-" for stdout
    #[arg(short, long, default_value = "wordlist.txt")]
    output: String,

    /// Maximum number of words
    #[arg(short, long, default_value_t = 5000)]
    limit: usize,

    /// Suppress analysis and summary reports
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = ui::DisplayOptions::detect(cli.quiet);

    let test_password = if cli.check {
        Some(ui::prompt_password()?)
    } else {
        cli.testpass.map(Zeroizing::new)
    };

    if let Some(password) = &test_password {
        let bits = entropy::entropy(password);
        let strength = entropy::Strength::classify(bits);
        ui::display_analysis(bits, strength, &options);
    }

    let tokens =
        input::extract_tokens(&[cli.names.as_str(), cli.pets.as_str(), cli.phrases.as_str()]);
    let years = input::parse_years(&cli.dates);
    let words = generator::generate(&tokens, &years);

    let write = || -> Result<usize> {
        if cli.output == "-" {
            let stdout = io::stdout();
            output::write_words(&mut stdout.lock(), words, cli.limit)
        } else {
            let file = File::create(&cli.output)
                .with_context(|| format!("Failed to create {}", cli.output))?;
            output::write_words(&mut BufWriter::new(file), words, cli.limit)
        }
    };

    // The spinner draws to stderr; skip it when reports are suppressed or
    // the wordlist itself streams to the terminal.
    let (written, elapsed) = if options.quiet || cli.output == "-" {
        let start = Instant::now();
        let written = write()?;
        (written, start.elapsed())
    } else {
        ui::show_progress(options.unicode_support, write)?
    };

    ui::display_summary(tokens.len(), &years, written, &cli.output, elapsed, &options);

    Ok(())
}
