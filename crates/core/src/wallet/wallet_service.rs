use log::debug;
use std::sync::Arc;

use super::wallet_traits::WalletViewServiceTrait;
use crate::balances::BalanceSupplierTrait;
use crate::errors::Result;
use crate::pipeline::{BalancePipeline, RenderOutput};
use crate::prices::PriceSupplierTrait;

/// Pulls the current balances and prices and renders them.
///
/// Nothing is cached: each call reads fresh snapshots from both suppliers.
#[derive(Clone)]
pub struct WalletViewService {
    balance_supplier: Arc<dyn BalanceSupplierTrait>,
    price_supplier: Arc<dyn PriceSupplierTrait>,
    pipeline: BalancePipeline,
}

impl WalletViewService {
    pub fn new(
        balance_supplier: Arc<dyn BalanceSupplierTrait>,
        price_supplier: Arc<dyn PriceSupplierTrait>,
        pipeline: BalancePipeline,
    ) -> Self {
        Self {
            balance_supplier,
            price_supplier,
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &BalancePipeline {
        &self.pipeline
    }
}

impl WalletViewServiceTrait for WalletViewService {
    fn render_current(&self) -> Result<RenderOutput> {
        let records = self.balance_supplier.get_balances()?;
        let prices = self.price_supplier.get_prices()?;
        debug!(
            "Pulled {} balance records and {} prices",
            records.len(),
            prices.len()
        );

        Ok(self.pipeline.render_raw(&records, &prices))
    }
}
