use anyhow::Context;
use nanchang_cli::{help_text, parse_cli_options, Session};
use nanchang_data::builtin_table;
use std::io;
use tracing::warn;

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if options.help {
        println!("{}", help_text(options.locale));
        return Ok(());
    }
    init_tracing(options.verbose);
    for arg in &options.unknown {
        warn!(arg = %arg, "ignoring unknown argument");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(
        stdin.lock(),
        stdout.lock(),
        builtin_table(),
        options.session(),
    );
    session.run().context("settlement session")?;
    Ok(())
}
