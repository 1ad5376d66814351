//! Walletview Core - the wallet balance display pipeline.
//!
//! Takes the balances held by a wallet (each tagged with its blockchain) and a
//! table of fiat prices, and produces ordered, filtered, formatted rows ready
//! for rendering. Balance and price sources are reached through supplier
//! traits; this crate performs no network I/O of its own.

pub mod balances;
pub mod constants;
pub mod errors;
pub mod formatting;
pub mod pipeline;
pub mod prices;
pub mod ranking;
pub mod settings;
pub mod utils;
pub mod wallet;

// Re-export the types most hosts need
pub use balances::{Balance, BalanceKey, RawBalance};
pub use pipeline::{BalancePipeline, DisplayRow, RenderDiagnostics, RenderOutput, UsdValue};
pub use prices::PriceTable;
pub use ranking::PriorityTable;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
