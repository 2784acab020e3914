use clap::Parser;

mod commands;
mod logger;

#[derive(Debug, Parser)]
#[command(name = "tastyforms", about, author, version)]
struct Options {
    #[arg(long, global = true, env = "TASTYFORMS_LOG_FORMAT", value_enum, default_value_t)]
    log_format: logger::LogFormat,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    logger::init(options.log_format, None);

    options.command.run().await
}
