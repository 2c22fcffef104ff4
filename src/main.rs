//! CLI entry point for the outfit canvas

use clap::Parser;
use outfit_canvas::io::cli::Cli;

fn main() -> outfit_canvas::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    let stdout = std::io::stdout();
    cli.run(&mut stdout.lock())
}
