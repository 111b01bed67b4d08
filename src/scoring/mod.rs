//! Numeric stages of the pipeline: token normalization, per-area
//! aggregation, reliability detection, and weighted scoring.

pub mod aggregate;
pub mod normalizer;
pub mod reliability;
pub mod weighted;

pub use aggregate::{area_sums, AreaSums};
pub use normalizer::{normalize_answers, normalize_token};
pub use reliability::{is_unreliable, reliability_ratio};
pub use weighted::{combine, dominant_area};
