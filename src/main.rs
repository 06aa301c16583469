use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;

mod logfile;
mod model;
mod pipeline;
mod render;

use model::Operation;
use model::table::{BUCKET_COUNT, ELEMENT_COUNT, ELEMENT_INDEX, LIBRARY_NAME, TIME_US};
use render::ChartConfig;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "hashbench-viz")]
#[command(about = "Charts for hash_table vs unordered_map benchmark logs", long_about = None)]
struct Cli {
    /// Trace every accepted record.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart insertion time and bucket growth from a rehash profile.
    Rehash {
        #[arg(long, default_value = "rehash_profile.txt")]
        log: String,

        #[arg(short = 'o', long, default_value = "rehash_profile.html")]
        out: String,
    },
    /// Chart per-operation timings from a test results log.
    Results {
        #[arg(long, default_value = "test_results.txt")]
        log: String,

        #[arg(short = 'o', long, default_value = "test_results.html")]
        out: String,

        /// Operation to chart.
        #[arg(long, value_enum, default_value_t = OpChoice::Remove)]
        op: OpChoice,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OpChoice {
    Insert,
    At,
    Remove,
    All,
}

impl OpChoice {
    fn operations(self) -> Vec<Operation> {
        match self {
            OpChoice::Insert => vec![Operation::Insert],
            OpChoice::At => vec![Operation::At],
            OpChoice::Remove => vec![Operation::Remove],
            OpChoice::All => Operation::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let (title, figures, out) = match cli.cmd {
        Commands::Rehash { log: path, out } => {
            // 1) Parse + classify.
            let lines = logfile::open_log(&path)?;
            let dataset =
                pipeline::collect::<model::RehashProfile, _, _>(lines, io::stdout().lock())?;

            // 2) Assemble.
            let table = model::rehash_table(&dataset);
            if table.is_empty() {
                log::warn!("no rehash records in {}", path);
            }

            // 3) Figures.
            let figures = vec![
                render::build_figure(
                    &table,
                    &ChartConfig::line(
                        "Insert Profile - Time",
                        ELEMENT_INDEX,
                        TIME_US,
                        LIBRARY_NAME,
                    ),
                )?,
                render::build_figure(
                    &table,
                    &ChartConfig::line(
                        "Insert Profile - Bucket Count",
                        ELEMENT_INDEX,
                        BUCKET_COUNT,
                        LIBRARY_NAME,
                    ),
                )?,
            ];
            ("Rehash profile", figures, out)
        }
        Commands::Results { log: path, out, op } => {
            let lines = logfile::open_log(&path)?;
            let dataset =
                pipeline::collect::<model::ResultsProfile, _, _>(lines, io::stdout().lock())?;

            let mut figures = Vec::new();
            for operation in op.operations() {
                let table = model::results_table(&dataset, operation);
                log::info!("{} table: {} rows", operation, table.len());
                let title = match operation {
                    Operation::Insert => "Insert element time performance",
                    Operation::At => "At element time performance",
                    Operation::Remove => "Remove element time performance",
                };
                figures.push(render::build_figure(
                    &table,
                    &ChartConfig::line(title, ELEMENT_COUNT, TIME_US, LIBRARY_NAME),
                )?);
            }
            ("Test results", figures, out)
        }
    };

    // 4) Render HTML.
    let html = render::render_html_report(title, &figures)?;
    std::fs::write(&out, html).with_context(|| format!("write report {}", out))?;
    println!("Wrote {}", out);

    // 5) Show it.
    if let Err(err) = opener::open(&out) {
        log::warn!("could not open {} in a browser: {}", out, err);
    }

    Ok(())
}
