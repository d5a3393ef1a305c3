#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate thiserror;
#[cfg(test)] extern crate rand;
#[cfg(test)] extern crate pathfinding;

mod disjoint_set;
mod analysis;
mod error;

pub use disjoint_set::DisjointSet;
pub use analysis::{analyze_disjoint_set, alpha_approximation, AnalysisReport};
pub use error::DsuError;
