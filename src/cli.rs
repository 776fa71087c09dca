use {
    crate::common::{debug_println, DEBUG},
    backend::printer::{Options, PatternPrinter},
    clap::Parser,
    std::sync::atomic::Ordering,
};

/// Print a left-aligned triangle of asterisks
#[derive(Debug, Parser)]
pub struct Cli {
    #[command(flatten)]
    print_options: PrintOptions,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Parser)]
struct PrintOptions {
    /// Print at most this many rows [leave unspecified for no limit]
    #[arg(long)]
    max_rows: Option<usize>,

    /// Exit with an error on an invalid row count or a failed write
    #[arg(long)]
    strict: bool,
}

impl From<PrintOptions> for Options {
    fn from(print_options: PrintOptions) -> Self {
        Options {
            max_rows: print_options.max_rows,
            strict: print_options.strict,
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_println!("{cli:#?}");
    let printer = PatternPrinter::new(cli.print_options.into());
    let outcome = printer.run(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())?;

    match &outcome.invalid_row_count {
        Some(e) => debug_println!("invalid row count, printing no rows: {e}"),
        None => debug_println!("read row count {}", outcome.row_count.value()),
    }
    match outcome.pattern.output_len() {
        Some(len) => debug_println!("pattern has {} rows ({len} bytes)", outcome.pattern.height()),
        None => debug_println!("pattern has {} rows", outcome.pattern.height()),
    }
    if let Some(e) = &outcome.write_error {
        debug_println!("failed to write output: {e}");
    }
    Ok(())
}
