use clap::Parser;
use glerbl::cli::{Cli, EXIT_CONFIG_ERROR, Output};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    let code = match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            Output::new(false, quiet).error(&format!("{e:#}"));
            EXIT_CONFIG_ERROR
        }
    };

    // Exit directly: checks abandoned after a timeout may still occupy
    // blocking threads the runtime would otherwise wait for.
    std::process::exit(i32::from(code));
}
