//! Decision stages: profile matching, the diagnosis state machine, and the
//! semaphore category mapping.

pub mod category;
pub mod matcher;
pub mod resolver;

pub use category::map_category;
pub use matcher::match_profile;
pub use resolver::{resolve_diagnosis, resolve_with_table};
