use anyhow::Result;
use clap::Parser;
use meowing_cat::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries nothing but command output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()
}
