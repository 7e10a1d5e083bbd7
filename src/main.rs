use std::error::Error;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use e_connect::MessageSequence;
use e_connect::config::{self, AppConfig};
use e_connect::feed::{self, ChatFeed, FeedHandle};
use e_connect::ui::ChatApp;
use eframe::egui;

const WINDOW_HEIGHT: f32 = 720.0;

#[derive(Parser)]
#[command(name = "e_connect", version, about = "Minimal chat room client")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Answer every message locally (no server needed)
    #[arg(long)]
    echo: bool,
    /// JSON array of messages to start the room with
    #[arg(long, value_name = "FILE")]
    seed: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Write the default config to the config path and exit
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    if cli.command == Some(Command::InitConfig) {
        config::save_config(&cli.config, &AppConfig::default())?;
        log::info!("Wrote default config to {}", cli.config);
        return Ok(());
    }

    let mut app_config = config::load_config(&cli.config);
    if cli.echo {
        app_config.echo.enabled = true;
    }

    let initial = match &cli.seed {
        Some(path) => feed::load_seed(path)?,
        None => MessageSequence::default(),
    };

    let (chat_feed, handle) = ChatFeed::new(initial, app_config.echo.clone());
    tokio::spawn(chat_feed.run());

    run_window(handle, app_config)?;
    Ok(())
}

fn run_window(feed: FeedHandle, app_config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.title.clone())
            .with_inner_size([app_config.window_width, WINDOW_HEIGHT])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    let title = app_config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            log::info!("Chat window opened ({} messages)", feed.messages().len());
            Ok(Box::new(ChatApp::new(cc, feed, &app_config)))
        }),
    )
}
