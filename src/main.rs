//! `anglecalc` 可执行入口。

use anglecalc::interface::cli::Cli;
use clap::Parser;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    if let Err(err) = anglecalc::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
