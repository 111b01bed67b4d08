pub mod types;

pub use types::{
    Area, AreaScores, Category, Diagnosis, Evaluation, ProfileMatch, Respondent,
    ScoredRespondent,
};
