//! Data model and serialization.

pub mod commit;
pub mod report;
pub mod yaml;

pub use commit::*;
pub use report::*;
pub use yaml::*;
