use anyhow::bail;
use clap::Parser;
use desk_cli::console::format_preview;
use desk_cli::providers::{build_index, build_llms};
use desk_cli::{Cli, Command, DeskApp, DeskConfig, run_console};
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    desk_telemetry::init_telemetry(cli.log_format)?;

    let config = DeskConfig::from_cli(&cli);
    debug!(?config, "configuration resolved");

    let index = build_index(&config)?;
    let llms = build_llms(&config);
    let mut app = DeskApp::new(config, index, llms);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_console(app).await?,
        Command::Ask { query } => {
            let resolution = app.ask(&query.join(" ")).await;
            debug!(source = ?resolution.source, "resolved");
            println!("{}", resolution.answer);
        }
        Command::Rebuild => {
            if !app.rebuild().await {
                bail!("semantic index was not rebuilt (see log for the reason)");
            }
            println!("Semantic index rebuilt at {}", app.config().index_path.display());
        }
        Command::Faqs { limit } => println!("{}", format_preview(app.preview(limit))),
        Command::Upload { file } => {
            let count = app.upload(&file)?;
            println!(
                "Uploaded {count} FAQ records. Run `desk rebuild` to refresh the semantic index."
            );
        }
    }

    Ok(())
}
