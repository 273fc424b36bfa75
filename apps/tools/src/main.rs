use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use windrose_core::{build_charts, load_dataset, WindroseDataset};

mod svg;

#[derive(Parser, Debug)]
#[command(name = "windrose-tools", about = "Headless windrose file utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Checks a windrose file and prints its records.
    Validate {
        file: PathBuf,
        /// Print the parsed records as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Writes one SVG chart per record.
    Render {
        file: PathBuf,
        #[arg(long, default_value = "windrose_charts")]
        out_dir: PathBuf,
        #[arg(long, default_value_t = 800)]
        size: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file, json } => {
            let dataset = load_dataset(&file)
                .with_context(|| format!("{} is not a valid windrose file", file.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dataset)?);
            } else {
                print!("{}", summarize(&dataset));
            }
        }
        Command::Render {
            file,
            out_dir,
            size,
        } => {
            let dataset = load_dataset(&file)
                .with_context(|| format!("{} is not a valid windrose file", file.display()))?;
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            for (n, chart) in build_charts(&dataset).iter().enumerate() {
                let path = out_dir.join(chart_file_name(n));
                svg::write_chart_svg(chart, &path, size)?;
                tracing::info!(path = %path.display(), title = %chart.title, "wrote chart");
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn chart_file_name(index: usize) -> String {
    format!("windrose_{:03}.svg", index + 1)
}

fn summarize(dataset: &WindroseDataset) -> String {
    let mut out = format!("{} windrose record(s)\n", dataset.len());
    for record in &dataset.records {
        let bands: Vec<String> = windrose_core::ALTITUDE_BANDS
            .iter()
            .zip(&record.data)
            .map(|(band, m)| format!("{} {} kph {}", band.label(), m.speed_kph, m.direction))
            .collect();
        out.push_str(&format!(
            "{} {}: {}\n",
            record.date,
            record.time,
            bands.join(", ")
        ));
    }
    out
}
