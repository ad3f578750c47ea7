use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;

use dropdown_control::cli::CliArgs;
use dropdown_control::config::DropdownConfig;
use dropdown_control::debug_dump::StateDump;
use dropdown_control::model::{AppModel, PageFixture, PointerCapabilities};
use dropdown_control::runtime::{Script, Session};

fn main() -> Result<()> {
    dropdown_control::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => DropdownConfig::load_from(path)?,
        None => DropdownConfig::load(),
    };
    let pointer = if args.hover {
        PointerCapabilities::desktop()
    } else {
        PointerCapabilities::touch()
    };

    let page = PageFixture::load(&args.page)?.build();
    let mut session = Session::new(AppModel::init(page, config, pointer));

    if let Some(path) = &args.script {
        let script = Script::load(path)?;
        tracing::info!("Replaying {} steps from {}", script.steps.len(), path.display());
        session.replay(&script, Instant::now(), Duration::from_millis(args.settle_ms))?;
    }

    println!("{}", StateDump::from_session(&session).to_json()?);
    Ok(())
}
