use crate::errors::Result;
use crate::pipeline::RenderOutput;

/// Host-facing entry point for the wallet balance view.
pub trait WalletViewServiceTrait: Send + Sync {
    /// Renders the latest balances against the latest prices.
    ///
    /// Fails only when a supplier fails; record-level problems end up in the
    /// output diagnostics.
    fn render_current(&self) -> Result<RenderOutput>;
}
