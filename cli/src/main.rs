mod commands;
mod terminal;

use commands::{CommandLine, Commands, plugins, targets};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Targets(args) => targets::run(args),
        Commands::Plugins(args) => plugins::run(args).await,
    }
}
