//! Drive a [`ClipboardBridge`] from the command line.
//!
//! Prints one JSON object per observation so the output can be piped into
//! other tools.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use cb_core::{BridgeConfig, ClipText, ClipboardBackend, TypeCode};
use clap::{Parser, Subcommand, ValueEnum};
use clipbridge::bootstrap::{build_bridge, config::load_config, tracing::init_tracing_subscriber};
use clipbridge::ClipboardBridge;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(name = "clipboard-probe", version, about = "Inspect and drive the clipboard through ClipBridge")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured clipboard backend
    #[arg(long, global = true, value_enum)]
    backend: Option<BackendArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    System,
    Memory,
}

impl From<BackendArg> for ClipboardBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::System => ClipboardBackend::System,
            BackendArg::Memory => ClipboardBackend::Memory,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the current clip type, length and text
    Get,
    /// Replace the clipboard content
    Set {
        /// Type code: 1 plain text, 2 intent, 3 uri list (0 is ignored)
        #[arg(long = "type", default_value_t = 1)]
        type_code: i32,
        text: String,
    },
    /// Poll the bridge like a frame loop and print every new clip
    Watch {
        #[arg(long, default_value_t = 16)]
        interval_ms: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BridgeConfig::default(),
    };
    if let Some(backend) = cli.backend {
        config.clipboard.backend = backend.into();
    }

    init_tracing_subscriber(&config.logging)?;

    let bridge = build_bridge(&config);

    match cli.command {
        Command::Get => print_observation(&bridge, &bridge.read()),
        Command::Set { type_code, text } => {
            let type_code = TypeCode::try_from(type_code)?;
            bridge.set_content(type_code, &text);
            print_observation(&bridge, &bridge.read());
        }
        Command::Watch { interval_ms } => watch(&bridge, interval_ms).await?,
    }

    Ok(())
}

fn print_observation(bridge: &ClipboardBridge, clip: &ClipText) {
    println!(
        "{}",
        json!({
            "updated": bridge.has_updated(),
            "type": bridge.clip_type().as_i32(),
            "length": clip.length,
            "text": clip.text,
        })
    );
}

async fn watch(bridge: &ClipboardBridge, interval_ms: u64) -> Result<()> {
    bridge.initialize();
    info!(interval_ms, "watching clipboard, press Ctrl-C to stop");

    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last: Option<ClipText> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !bridge.has_updated() {
                    continue;
                }
                let current = bridge.read();
                if last.as_ref() != Some(&current) {
                    print_observation(bridge, &current);
                    last = Some(current);
                }
            }
            result = &mut ctrl_c => {
                result?;
                break;
            }
        }
    }

    bridge.shutdown();
    Ok(())
}
