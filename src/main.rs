use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use sheetchart::csv_reader::read_csv_from_stdin;
use sheetchart::parser::parse_chart_request;
use sheetchart::registry::REGISTRY;
use sheetchart::runtime::session_from_request;
use sheetchart::{build_chart, telemetry, AnalysisSession, Dataset};

#[derive(Parser, Debug)]
#[command(name = "sheetchart")]
#[command(about = "Shape spreadsheet data into chart-ready series", long_about = None)]
struct Args {
    /// Chart request (e.g., 'bar(x: month, y: sales) | theme(blue)')
    expr: Option<String>,

    /// JSON session file with family, theme and axis selection
    #[arg(long, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Read stdin as a JSON array of records instead of CSV
    #[arg(long)]
    json: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// List the chart families and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let _ = telemetry::init_tracing("warn");
    let args = Args::parse();

    if args.list {
        return list_families();
    }

    // Read the dataset from stdin
    let data = if args.json {
        let value: serde_json::Value = serde_json::from_reader(io::stdin().lock())
            .context("Failed to parse JSON from stdin")?;
        Dataset::from_json(&value).context("Failed to load JSON records")?
    } else {
        Dataset::from_csv(read_csv_from_stdin().context("Failed to read CSV from stdin")?)
    };
    info!(columns = data.headers.len(), records = data.len(), "loaded dataset");

    let mut session = match &args.session {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read session file {}", path.display()))?;
            serde_json::from_str::<AnalysisSession>(&text)
                .with_context(|| format!("Failed to parse session file {}", path.display()))?
                .normalized()
        }
        None => AnalysisSession::for_headers(&data.headers),
    };

    // Apply the chart request on top of the session
    if let Some(expr) = &args.expr {
        let request = match parse_chart_request(expr) {
            Ok((remaining, request)) => {
                if !remaining.trim().is_empty() {
                    warn!("unparsed input: '{}'", remaining.trim());
                }
                request
            }
            Err(e) => {
                eprintln!("Parse error: {:?}", e);
                std::process::exit(1);
            }
        };
        session = session_from_request(&request, session).context("Invalid chart request")?;
    }

    let chart = build_chart(&session, &data).context("Failed to build chart")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&chart)
    } else {
        serde_json::to_string(&chart)
    }
    .context("Failed to serialize chart")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write chart to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn list_families() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for descriptor in REGISTRY.iter() {
        let roles: Vec<&str> = descriptor.required_roles.iter().map(|r| r.tag()).collect();
        writeln!(
            handle,
            "{:<14} {:<3} {:<20} {}",
            descriptor.family.id(),
            descriptor.dimension,
            descriptor.display_name,
            roles.join(", ")
        )
        .context("Failed to write family list")?;
    }
    Ok(())
}
