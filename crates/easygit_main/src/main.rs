use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use easygit_display::{ColorConfig, TitleFormat, init_color_config};
use easygit_env::{EnvironmentService, VERSION};
use easygit_infra::ProcessExecutor;
use easygit_main::{Cli, UI, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = cli.apply(EnvironmentService::new().get());

    init_color_config(ColorConfig::new());
    let _guard = init_logging(&env);
    tracing::info!(version = VERSION, cwd = %env.cwd.display(), "Starting easygit");

    let executor = Arc::new(ProcessExecutor::new());
    let mut ui = UI::init(env, executor, cli.repo.clone());

    if let Err(error) = ui.run().await {
        tracing::error!("Exiting: {error:#}");
        eprintln!("{}", TitleFormat::error(format!("{error:#}")));
        std::process::exit(1);
    }
    Ok(())
}
