use clap::Parser;

use surveydesk::cli::Cli;
use surveydesk::commands::{self, Context};
use surveydesk::config::Settings;
use surveydesk::{logging, output};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("configuration error: {e:#}");
            std::process::exit(2);
        }
    };

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::debug!(
        env = ?settings.env,
        api_base_url = %settings.api_base_url,
        "starting surveydesk"
    );

    let ctx = Context::new(settings);

    if let Err(e) = commands::dispatch(cli, &ctx).await {
        output::error_banner(&e);
        std::process::exit(1);
    }
}
