use anyhow::{Context, Result};
use chaside::cli::{Cli, Commands};
use chaside::config::{load_config, InventoryDefinition};
use chaside::io::{create_writer, Dataset, Report};
use chaside::pipeline::{summarize, Engine};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            file,
            format,
            output,
            config,
            weight_interest,
            reliability_threshold,
            summary,
            jobs,
        } => {
            if let Some(jobs) = jobs {
                let jobs = jobs.max(1).min(num_cpus::get());
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build_global()
                    .context("failed to configure worker pool")?;
            }

            let mut app_config = load_config(config.as_deref());
            if let Some(w) = weight_interest {
                app_config.scoring.weight_interest = w;
            }
            if let Some(t) = reliability_threshold {
                app_config.scoring.reliability_threshold = t;
            }
            app_config
                .scoring
                .validate()
                .map_err(anyhow::Error::msg)
                .context("invalid scoring options")?;

            let inventory = InventoryDefinition::chaside();
            let careers = app_config.career_table();

            let dataset = Dataset::from_path(&file)
                .with_context(|| format!("failed to load dataset {}", file.display()))?;
            let respondents = dataset.respondents(inventory.item_count())?;
            log::debug!("scoring {} respondents", respondents.len());

            let start = Instant::now();
            let engine = Engine::new(inventory, &careers, &app_config.scoring);
            let evaluations = engine.evaluate_all(&respondents);
            log::debug!("scored cohort in {:?}", start.elapsed());

            let report = Report {
                summary: summarize(&evaluations),
                evaluations,
            };

            let mut writer = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    create_writer(BufWriter::new(file), format, summary)
                }
                None => create_writer(io::stdout().lock(), format, summary),
            };
            writer.write_report(&report)?;
        }
    }

    Ok(())
}
