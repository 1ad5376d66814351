//! Ranking module - blockchain display priorities.

mod priority_table;

pub use priority_table::PriorityTable;
