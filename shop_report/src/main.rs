use dotenvy::dotenv;
use log::*;
use shop_report::{
    cli::handle_command_line_args,
    config::ReportConfig,
    report::NotificationOutcome,
    runner::run_daily_report,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    if handle_command_line_args() {
        return;
    }
    let config = match ReportConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("🪛️ {e}");
            eprintln!("{e}");
            std::process::exit(1);
        },
    };
    match run_daily_report(config).await {
        Ok(summary) => {
            info!("✅️ Report '{}' complete. {} cells updated.", summary.sheet_title, summary.cells_updated);
            if let NotificationOutcome::Failed(reason) = summary.notification {
                warn!("The report was written, but the Slack notification failed. {reason}");
            }
        },
        Err(e) => {
            error!("💥️ {e}");
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
