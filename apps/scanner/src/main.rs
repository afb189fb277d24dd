use abet::domain::config::AppConfig;
use abet::kernel::config::load_config;
use abet_logger::Logger;
use abet_scanner::args::Cli;
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(path) = &cli.registry {
        config.registry.path.clone_from(path);
    }
    if let Some(level) = cli.verbosity() {
        level.clone_into(&mut config.logging.level);
    }

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .stderr(true)
        .from_config(&config.logging)?;

    let ctx = abet::bootstrap(config)?;
    abet_scanner::run(&ctx, cli.command, &mut std::io::stdout().lock())
}
