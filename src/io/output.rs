//! Report writers for evaluated cohorts.

use crate::core::{Area, Category, Evaluation};
use crate::pipeline::CohortSummary;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON report
    Json,
    /// Human-readable tables
    Table,
}

/// Everything a reporting collaborator needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub evaluations: Vec<Evaluation>,
    pub summary: CohortSummary,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(
    writer: W,
    format: OutputFormat,
    with_summary: bool,
) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter { writer }),
        OutputFormat::Table => Box::new(TableWriter {
            writer,
            with_summary,
        }),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TableWriter<W: Write> {
    writer: W,
    with_summary: bool,
}

impl<W: Write> ReportWriter for TableWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        let mut header = vec![
            "Nombre".to_string(),
            "Carrera".to_string(),
            "Área fuerte".to_string(),
        ];
        header.extend(Area::ALL.iter().map(|a| a.code().to_string()));
        header.extend([
            "Confiabilidad".to_string(),
            "Diagnóstico".to_string(),
            "Categoría".to_string(),
        ]);
        table.set_header(header);

        for eval in &report.evaluations {
            let mut row = vec![
                Cell::new(&eval.name),
                Cell::new(eval.declared_career.trim()),
                Cell::new(eval.scored.dominant.code()),
            ];
            for area in Area::ALL {
                row.push(Cell::new(format!("{:.1}", eval.scored.area(area).weighted)));
            }
            row.push(Cell::new(format!("{:.2}", eval.scored.reliability_ratio)));
            row.push(Cell::new(eval.diagnosis.label()));
            row.push(Cell::new(colorize_category(eval.category)));
            table.add_row(row);
        }
        writeln!(self.writer, "{table}")?;

        if self.with_summary {
            writeln!(self.writer)?;
            self.write_summary(&report.summary)?;
        }
        Ok(())
    }
}

impl<W: Write> TableWriter<W> {
    fn write_summary(&mut self, summary: &CohortSummary) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Categoría", "N", "%"]);
        for (&category, &count) in &summary.by_category {
            let pct = if summary.respondents == 0 {
                0.0
            } else {
                count as f64 / summary.respondents as f64 * 100.0
            };
            table.add_row(vec![
                Cell::new(colorize_category(category)),
                Cell::new(count),
                Cell::new(format!("{pct:.1}")),
            ]);
        }
        writeln!(self.writer, "Resumen ({} estudiantes)", summary.respondents)?;
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

fn colorize_category(category: Category) -> String {
    let label = category.label();
    match category {
        Category::Green => label.green().to_string(),
        Category::Yellow => label.yellow().to_string(),
        Category::Red => label.red().to_string(),
        Category::Gray | Category::LightGray => label.dimmed().to_string(),
    }
}
