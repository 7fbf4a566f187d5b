//! Colorful console output for route optimization.
//!
//! Provides a custom `tracing` layer that formats Eco-Routify events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Run lifecycle, fetched conditions, per-destination scores
//! - **WARN/ERROR**: Scoring failures and missing conditions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "ecoroutify=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Eco-Routify banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();
        install_subscriber();
    });
}

/// Initializes tracing without printing the banner.
pub fn init_without_banner() {
    INIT.get_or_init(install_subscriber);
}

fn install_subscriber() {
    EPOCH.get_or_init(Instant::now);

    let spec = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = build_filter(&spec);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(RouteConsoleLayer)
        .try_init();
}

// Parses `spec` as `RUST_LOG` would be parsed; an empty spec falls back to
// DEFAULT_DIRECTIVE.
fn build_filter(spec: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(
            DEFAULT_DIRECTIVE
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .parse_lossy(spec)
}

// Returns elapsed time since the subscriber was installed.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 _____                ____             _   _  __
| ____|___ ___       |  _ \ ___  _   _| |_(_)/ _|_   _
|  _| / __/ _ \ _____| |_) / _ \| | | | __| | |_| | | |
| |__| (_| (_) |_____|  _ < (_) | |_| | |_| |  _| |_| |
|_____\___\___/      |_| \_\___/ \__,_|\__|_|_|  \__, |
                                                 |___/
"#;

    let version_line = format!(
        "                 v{} - Emission-Aware Route Selection\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_green());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats route optimization events with colors.
pub struct RouteConsoleLayer;

impl<S: Subscriber> Layer<S> for RouteConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from our crates only
        if !target.starts_with("ecoroutify") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if output.is_empty() {
            return;
        }
        if level <= Level::WARN {
            let _ = writeln!(io::stderr(), "{}", output);
        } else {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    event: Option<String>,
    destination: Option<String>,
    scorer: Option<String>,
    traffic: Option<String>,
    score: Option<String>,
    error: Option<String>,
    emission_rate: Option<f64>,
    destination_count: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "message" => self.message = Some(s),
            "event" => self.event = Some(s),
            "destination" => self.destination = Some(s),
            "scorer" => self.scorer = Some(s),
            "traffic" => self.traffic = Some(s),
            "score" => self.score = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "emission_rate" => self.emission_rate = Some(value),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "destination_count" => self.destination_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = value.to_string();
        match field.name() {
            "message" => self.message = Some(value),
            "event" => self.event = Some(value),
            "destination" => self.destination = Some(value),
            "scorer" => self.scorer = Some(value),
            "traffic" => self.traffic = Some(value),
            "score" => self.score = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("optimize_start") => format_optimize_start(v),
        Some("optimize_end") => format_optimize_end(v),
        _ => format_message(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_optimize_start(v: &EventVisitor) -> String {
    let count = v.destination_count.unwrap_or(0);
    let scorer = v.scorer.as_deref().unwrap_or("position");

    format!(
        "{} {} Optimizing │ {} destinations │ {} scorer",
        format_elapsed(),
        "▶".bright_green().bold(),
        count.to_formatted_string(&Locale::en).bright_yellow(),
        scorer.bright_magenta()
    )
}

fn format_optimize_end(v: &EventVisitor) -> String {
    let destination = v.destination.as_deref().unwrap_or("N/A");
    let score = v.score.as_deref().unwrap_or("N/A");
    let traffic = v.traffic.as_deref().unwrap_or("N/A");
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} Optimization complete │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        format_score(score)
    );

    output.push_str("\n\n");
    output.push_str(&BOX_TOP.bright_cyan().to_string());
    output.push('\n');
    output.push_str(&box_row("Destination:", destination));
    output.push('\n');
    output.push_str(&box_row("Score:", score));
    output.push('\n');
    output.push_str(&box_row("Traffic:", traffic));
    if let Some(rate) = v.emission_rate {
        output.push('\n');
        output.push_str(&box_row("Emission rate:", &format!("{:.3} kg/km", rate)));
    }
    output.push('\n');
    output.push_str(&BOX_BOTTOM.bright_cyan().to_string());
    output.push('\n');

    output
}

const BOX_TOP: &str = "╔══════════════════════════════════════════════════════════╗";
const BOX_BOTTOM: &str = "╚══════════════════════════════════════════════════════════╝";

fn box_row(label: &str, value: &str) -> String {
    format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        label,
        value,
        "║".bright_cyan()
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };

    let tag = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => "WARN".yellow().bold().to_string(),
        Level::INFO => "INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    };

    let mut output = format!("{} {:>5} {}", format_elapsed(), tag, message);
    if let Some(ref err) = v.error {
        output.push_str(&format!(" │ {}", err.bright_red()));
    }
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_score(score: &str) -> String {
    match score.parse::<f64>() {
        Ok(n) if !n.is_finite() => score.bright_red().to_string(),
        Ok(n) if n == 0.0 => score.bright_green().to_string(),
        Ok(_) => score.yellow().to_string(),
        Err(_) => score.white().to_string(),
    }
}
