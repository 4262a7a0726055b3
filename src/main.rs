// SPDX-License-Identifier: MPL-2.0
//! `toastkit` demo: queues the given messages as toasts and logs the active
//! set until every toast has been dismissed.

use std::path::PathBuf;
use std::process::ExitCode;
use toastkit::config::{self, Config};
use toastkit::diagnostics::DiagnosticsCollector;
use toastkit::notifications::{Manager, Snapshot, ToastOptions, ToastService};
use toastkit::style::{style_toast, StyleBackend};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
toastkit - toast scheduler demo

USAGE:
  toastkit [OPTIONS] MESSAGE...

OPTIONS:
  --config PATH       Load settings from PATH instead of the default location
  --allow-multiple    Show more than one toast at a time
  --max N             Maximum number of visible toasts
  --duration MS       Auto-dismiss delay in milliseconds (0 = persistent)
  --style NAME        Styling backend: utility or stylesheet
  --diagnostics       Print collected lifecycle events as JSON on exit
  -h, --help          Print this help
";

/// Environment variable holding the log filter.
const ENV_LOG: &str = "TOASTKIT_LOG";

struct Args {
    config: Option<PathBuf>,
    allow_multiple: bool,
    max: Option<usize>,
    duration_ms: Option<u64>,
    style: Option<StyleBackend>,
    diagnostics: bool,
    messages: Vec<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        allow_multiple: args.contains("--allow-multiple"),
        max: args.opt_value_from_str("--max")?,
        duration_ms: args.opt_value_from_str("--duration")?,
        style: args.opt_value_from_str("--style")?,
        diagnostics: args.contains("--diagnostics"),
        messages: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    Ok(Some(parsed))
}

fn log_snapshot(snapshot: &Snapshot, backend: StyleBackend) {
    tracing::info!(active = snapshot.active.len(), pending = snapshot.pending, "toasts");
    for toast in &snapshot.active {
        let style = style_toast(backend, toast, "");
        tracing::info!(id = %toast.id(), message = toast.message(), ?style, "visible");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(args: &Args) -> toastkit::error::Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load().0,
    };
    if args.allow_multiple {
        config.toast.allow_multiple = true;
    }
    if let Some(max) = args.max {
        config.toast.max_concurrent = max;
    }
    if let Some(ms) = args.duration_ms {
        config.toast.duration_ms = ms;
    }
    if let Some(backend) = args.style {
        config.style.backend = backend;
    }
    if args.diagnostics {
        config.diagnostics.enabled = true;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let backend = config.style.backend;
    tracing::debug!(?backend, "style backend resolved");

    let mut manager = Manager::new(config.toast.clone());
    let mut collector = config
        .diagnostics
        .enabled
        .then(|| DiagnosticsCollector::new(config.diagnostics.capacity()));
    if let Some(collector) = &collector {
        manager.set_diagnostics(collector.handle());
    }

    let service = match ToastService::new(manager) {
        Ok(service) => service,
        Err(err) => {
            tracing::error!(error = %err, "failed to start toast service");
            return ExitCode::FAILURE;
        }
    };

    let mut snapshots = service.subscribe();
    for message in &args.messages {
        match service.submit(message.as_str(), ToastOptions::new()) {
            Some(id) => tracing::info!(%id, message = %message, "submitted"),
            None => tracing::warn!(message = %message, "rejected"),
        }
    }

    while !snapshots.borrow_and_update().is_idle() {
        log_snapshot(&snapshots.borrow(), backend);
        if snapshots.changed().await.is_err() {
            break;
        }
    }
    tracing::info!("all toasts dismissed");

    if let Some(collector) = collector.as_mut() {
        collector.process_pending();
        match collector.export_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(error = %err, "failed to export diagnostics");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
