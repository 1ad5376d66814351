//! Pipeline module - ranks, filters, orders and projects balances into rows.

mod balance_pipeline;
mod pipeline_model;


pub use balance_pipeline::BalancePipeline;
pub use pipeline_model::{
    DisplayRow, FilteredBalance, MalformedRecord, RankedBalance, RenderDiagnostics, RenderOutput,
    TieBreak, UsdValue,
};
