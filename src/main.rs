// ============================================================================
// normalize-decimal CLI
// String-in/string-out front end over the normalization library
// ============================================================================

use std::sync::Arc;

use clap::Parser;
use decimal_normalizer::prelude::*;

/// Normalize a decimal value to a DECIMAL(precision, scale) format.
///
/// Prints the normalized decimal string on stdout. Exits non-zero on a
/// malformed numeral, an invalid precision/scale pair, or a value whose
/// integer digits exceed the format's capacity.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Decimal value to normalize, e.g. "3.66666666"
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Total significant digits the format allows (1-38)
    precision: u32,

    /// Fractional digits in the output (0..=PRECISION)
    scale: u32,

    /// Round half away from zero instead of truncating excess digits
    #[arg(long)]
    round: bool,

    /// Log normalization events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let spec = ScaleSpec::new(cli.precision, cli.scale)?;
    let mut normalizer = DecimalNormalizer::new(spec);
    if cli.round {
        normalizer = normalizer.with_rounding(RoundingMode::HalfUp);
    }
    if cli.verbose {
        normalizer = normalizer.with_observer(Arc::new(LoggingObserver));
    }

    println!("{}", normalizer.normalize_str(&cli.input)?);
    Ok(())
}
