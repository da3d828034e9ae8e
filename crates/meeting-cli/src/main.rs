//! `meetfind` CLI — find meeting slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Find every slot (stdin → stdout)
//! cat day.json | meetfind query
//!
//! # Read from a file, write JSON to a file
//! meetfind query -i day.json -o slots.json --format json
//!
//! # Only the earliest slot
//! meetfind query -i day.json --first
//!
//! # Show one attendee's free time
//! meetfind free -i day.json --attendee alice
//!
//! # Log pipeline stages to stderr
//! meetfind --verbose query -i day.json
//! ```
//!
//! The input document is described in `meeting_engine::input`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_engine::input::{parse_query, plan_to_json, windows_to_json};
use meeting_engine::{plan_meeting, Coverage, MeetingPlan, Schedule, TimeRange};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetfind",
    version,
    about = "Find meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log pipeline stages to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the windows where the requested meeting can be held
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Only report the earliest window
        #[arg(long)]
        first: bool,
    },
    /// Show an attendee's free time for the day
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Attendee to inspect
        #[arg(short, long)]
        attendee: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            first,
        } => {
            let json = read_input(input.as_deref())?;
            let (events, request) = parse_query(&json).context("Failed to parse query input")?;
            debug!(
                events = events.len(),
                attendees = request.attendees().len(),
                optional = request.optional_attendees().len(),
                "parsed query"
            );

            let mut plan = plan_meeting(&events, &request);
            if first {
                plan.windows.truncate(1);
            }

            let rendered = match format {
                Format::Json if first => windows_to_json(&plan.windows)
                    .context("Failed to render windows as JSON")?,
                Format::Json => plan_to_json(&plan).context("Failed to render plan as JSON")?,
                Format::Text => render_plan(&plan),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Free { input, attendee } => {
            let json = read_input(input.as_deref())?;
            let (events, _) = parse_query(&json).context("Failed to parse query input")?;
            let tracked = [attendee.clone()];
            let schedule = Schedule::build(&tracked, &events);
            let mut text = format!("Free time for {}:\n", attendee);
            text.push_str(&render_windows(schedule.free_time(&attendee)));
            print!("{}", text);
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `--verbose` forces `debug`; otherwise
/// `RUST_LOG` applies, defaulting to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render_plan(plan: &MeetingPlan) -> String {
    if plan.windows.is_empty() {
        return "No meeting time available.\n".to_string();
    }

    let summary = match &plan.coverage {
        Coverage::MandatoryOnly => "Mandatory attendees only".to_string(),
        Coverage::SingleOptional { attendee } => format!("Includes optional attendee {}", attendee),
        Coverage::Optional { attendees } => format!("Includes {} optional attendees", attendees),
    };
    format!("{}:\n{}", summary, render_windows(&plan.windows))
}

fn render_windows(windows: &[TimeRange]) -> String {
    if windows.is_empty() {
        return "  (none)\n".to_string();
    }
    windows
        .iter()
        .map(|w| format!("  {} ({} min)\n", w, w.duration()))
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
