//! taskcal CLI - Monthly Calendar Task-Stacking Engine
//!
//! Command-line driver that ties CSV/YAML ingestion, the layout engine, and
//! LaTeX fragment emission together (§11.3). This binary is the stand-in
//! "external typesetting layer" referenced by §6.2: it concatenates the
//! per-cell fragments in row-major order and writes them to disk, but it
//! never interprets or alters fragment content.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskcal_core::{Config, Warning};
use taskcal_ingest::{read_config_from_path, read_tasks_from_path};
use taskcal_render::render_month;
use taskcal_solver::build_layout;

#[derive(Parser)]
#[command(name = "taskcal")]
#[command(author, version, about = "Monthly calendar task-stacking engine", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a task list (no scheduling output)
    Check {
        /// CSV task list
        #[arg(long, value_name = "FILE")]
        tasks: PathBuf,
    },

    /// Lay out one or more months and emit LaTeX fragments
    Render {
        /// CSV task list
        #[arg(long, value_name = "FILE")]
        tasks: PathBuf,

        /// YAML layout configuration (defaults applied when absent)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Calendar year to render
        #[arg(long)]
        year: i32,

        /// Calendar month(s) to render (1-12); repeat the flag for several months
        #[arg(long = "month", value_name = "MONTH", required = true)]
        months: Vec<u32>,

        /// Directory to write the per-month `.tex` and `.palette.tex` files into
        #[arg(long, value_name = "DIR")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { tasks } => cmd_check(&tasks),
        Commands::Render {
            tasks,
            config,
            year,
            months,
            out,
        } => cmd_render(&tasks, config.as_deref(), year, &months, &out),
    }
}

/// Parse and normalize a task list, reporting per-task warnings. Produces
/// no month-bound output: it exists only to let callers validate a CSV
/// before committing to a render (§11.3 "parse and validate, no scheduling
/// output").
fn cmd_check(tasks_path: &Path) -> Result<()> {
    let raw_tasks = read_tasks_from_path(tasks_path)
        .with_context(|| format!("failed to read '{}'", tasks_path.display()))?;
    let task_count = raw_tasks.len();

    let (normalized, warnings) = taskcal_solver::normalize::normalize_tasks(raw_tasks);

    for warning in &warnings {
        tracing::warn!("{warning}");
        eprintln!("warning: {warning}");
    }

    eprintln!(
        "Checked '{}': {} task(s) read, {} valid, {} warning(s)",
        tasks_path.display(),
        task_count,
        normalized.len(),
        warnings.len(),
    );

    Ok(())
}

/// Ingest tasks and config, lay out every requested month, and write one
/// `.tex` fragment file plus one `.palette.tex` legend file per month.
fn cmd_render(
    tasks_path: &Path,
    config_path: Option<&Path>,
    year: i32,
    months: &[u32],
    out_dir: &Path,
) -> Result<()> {
    let raw_tasks = read_tasks_from_path(tasks_path)
        .with_context(|| format!("failed to read '{}'", tasks_path.display()))?;

    let config: Config = match config_path {
        Some(path) => {
            read_config_from_path(path).with_context(|| format!("failed to read '{}'", path.display()))?
        }
        None => Config::default(),
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;

    let mut total_warnings = 0usize;

    for &month in months {
        let (grid, assignment, warnings) = build_layout(raw_tasks.clone(), year, month, &config);
        total_warnings += warnings.len();
        report_warnings(year, month, &warnings);

        let fragments = render_month(&grid, &assignment, &config);

        let tex_path = out_dir.join(format!("{year}-{month:02}.tex"));
        let mut document = fragments.header;
        document.push('\n');
        for (i, cell) in fragments.cells.iter().enumerate() {
            document.push_str(cell);
            if i % 7 == 6 {
                document.push_str("\\\\\n");
            } else {
                document.push('\n');
            }
        }
        fs::write(&tex_path, document)
            .with_context(|| format!("failed to write '{}'", tex_path.display()))?;

        let palette_path = out_dir.join(format!("{year}-{month:02}.palette.tex"));
        let mut palette_doc = String::new();
        for (rgb, category) in &fragments.palette {
            palette_doc.push_str(&format!("\\calPaletteEntry{{{rgb}}}{{{category}}}\n"));
        }
        fs::write(&palette_path, palette_doc)
            .with_context(|| format!("failed to write '{}'", palette_path.display()))?;

        tracing::info!(year, month, cells = fragments.cells.len(), "month rendered");
    }

    eprintln!(
        "Rendered {} month(s) to '{}' ({} warning(s) total)",
        months.len(),
        out_dir.display(),
        total_warnings,
    );

    Ok(())
}

fn report_warnings(year: i32, month: u32, warnings: &[Warning]) {
    for warning in warnings {
        tracing::warn!("{warning}");
        eprintln!("warning ({year}-{month:02}): {warning}");
    }
}
