// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, set up logging, load the
//   configuration once and hand everything to `commands::run`.
// - Any error is printed once by the `anyhow` runtime and the process exits
//   with a non-zero status.

use clap::Parser;
use pinata::{cli::Cli, commands, config::Config, telemetry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.debug);

    let config = Config::from_env();
    commands::run(config, cli.command)
}
