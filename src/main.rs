//! Infinity - Simulated Download Widget
//!
//! A desktop widget that renders an endless fake download: a cosmetic
//! progress bar, canned CLI chatter, and a real streamed fetch feeding the
//! data and transfer-rate counters.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use infinity::backend::WidgetEvent;
use infinity::gui::{InfinityApp, WidgetBridge};
use infinity::store::{initialize_store, SnapshotStore};
use infinity::utils::{get_store_path, AppSettings};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
struct Args {
    /// Drive the session from the terminal instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Seconds to keep the headless session running
    #[arg(long, default_value_t = 5)]
    seconds: u64,

    /// Override the streamed resource URL
    #[arg(long)]
    url: Option<String>,

    /// Path to a JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = match &args.config {
        Some(path) => AppSettings::load(path)?,
        None => AppSettings::default(),
    };
    if let Some(url) = args.url {
        settings.resource_url = url;
    }

    if args.headless {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(run_headless(settings, args.seconds))?;
        return Ok(());
    }

    // Start the GUI application (synchronous entrypoint)
    InfinityApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(520.0, 480.0),
            min_size: Some(iced::Size::new(420.0, 360.0)),
            ..Default::default()
        },
        flags: settings,
        antialiasing: true,
        ..Default::default()
    })?;

    Ok(())
}

/// Run the session without a window, printing each state change
async fn run_headless(settings: AppSettings, seconds: u64) -> Result<()> {
    println!("Simulating download for {} seconds...", seconds);

    let store_path = get_store_path();
    let pool = initialize_store(&store_path.to_string_lossy()).await?;
    let store = SnapshotStore::new(pool);

    let mut bridge = WidgetBridge::new(settings, store).await?;
    bridge.start();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(seconds);
    loop {
        let event = tokio::select! {
            _ = tokio::time::sleep_until(deadline) => break,
            event = bridge.receive() => event,
        };
        match event {
            Some(WidgetEvent::SessionChanged(view)) => {
                println!(
                    "Progress: {:.1}% | {:.2} MB | {:.2} MB/s | log lines: {}",
                    view.progress,
                    view.data_downloaded,
                    view.transfer_rate,
                    view.log.len()
                );
            }
            None => break,
        }
    }

    bridge.cancel();
    let drained = tokio::time::timeout(Duration::from_secs(1), async {
        while let Some(WidgetEvent::SessionChanged(view)) = bridge.receive().await {
            if !view.downloading && view.progress == 0.0 {
                println!("Cancelled; counters reset");
                break;
            }
        }
    })
    .await;
    if drained.is_err() {
        eprintln!("Timed out waiting for cancellation to settle");
    }
    bridge.shutdown();

    Ok(())
}
