//! Atomic Mass Evaluation table loading and nuclide mass arithmetic.

pub mod common;
pub mod domain;
pub mod expr;
pub mod mass;
pub mod table;
