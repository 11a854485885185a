use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use splitnest::core::config::{self, CliOverrides};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitnest", about = "Nested split view layout demo")]
struct Args {
    /// Number of panes to lay out
    #[arg(short = 'n', long)]
    panes: Option<usize>,

    /// Stack the root split top/bottom instead of side by side
    #[arg(long)]
    horizontal: bool,

    /// Draw a border around every pane
    #[arg(short, long)]
    border: bool,

    /// Title panes "View 1", "View 2", ...
    #[arg(short, long)]
    titles: bool,

    /// Fill panes with single-line labels instead of text areas
    #[arg(short, long)]
    labels: bool,

    /// Color scheme JSON file
    #[arg(long, value_name = "FILE")]
    color_scheme: Option<PathBuf>,

    /// Print the resolved color scheme as JSON and exit
    #[arg(long)]
    dump_color_scheme: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to splitnest.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("splitnest.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        Default::default()
    });
    let cli = CliOverrides {
        panes: args.panes,
        horizontal: args.horizontal,
        border: args.border,
        titles: args.titles,
        labels: args.labels,
        color_scheme: args.color_scheme,
    };
    let resolved = config::resolve(&file_config, &cli);

    if args.dump_color_scheme {
        let json = resolved
            .color_scheme
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        println!("{json}");
        return Ok(());
    }

    log::info!(
        "Splitnest starting up with {} panes ({:?})",
        resolved.layout.pane_count,
        resolved.layout.orientation
    );

    splitnest::tui::run(resolved)
}
