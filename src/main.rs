use std::io;

use verify_frontend::{runner, VerifyConfig, VerifyPlan};

#[tokio::main]
async fn main() -> Result<(), verify_frontend::Error> {
    env_logger::init();

    let config = VerifyConfig::default();
    let plan = VerifyPlan::default();

    let mut stdout = io::stdout();
    let summary = runner::run(&config, &plan, &mut stdout).await?;
    log::info!(
        "{}/{} checks found their text, screenshot at {}",
        summary.found,
        summary.total(),
        config.screenshot_path.display()
    );
    Ok(())
}
