pub mod api;
pub mod app;
pub mod config;
pub mod form;
pub mod ui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use app::App;
use config::load_config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prediction service base URL (overrides the config file)
    #[arg(long, env = "CREDITDESK_API_URL")]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    let terminal = ratatui::init();
    let app = App::new(config);
    let app_result = app.run(terminal);
    ratatui::restore();

    app_result
}
