// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod diagnosis;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod scoring;

// Re-export commonly used types
pub use crate::config::{
    CareerProfile, CareerProfileTable, ChasideConfig, InventoryDefinition, ScoringConfig,
};
pub use crate::core::{
    Area, AreaScores, Category, Diagnosis, Evaluation, ProfileMatch, Respondent,
    ScoredRespondent,
};
pub use crate::errors::ChasideError;
pub use crate::io::{Dataset, OutputFormat, Report};
pub use crate::pipeline::{summarize, CohortSummary, Engine};
