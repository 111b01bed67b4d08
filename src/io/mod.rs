pub mod dataset;
pub mod output;

pub use dataset::{Dataset, CAREER_COLUMN, METADATA_COLUMNS, NAME_COLUMN};
pub use output::{create_writer, OutputFormat, Report, ReportWriter};
