use log::{debug, warn};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::pipeline_model::{
    DisplayRow, FilteredBalance, MalformedRecord, RankedBalance, RenderDiagnostics, RenderOutput,
    TieBreak, UsdValue,
};
use crate::balances::{Balance, RawBalance};
use crate::formatting::{format_amount, AmountFormat};
use crate::prices::PriceTable;
use crate::ranking::PriorityTable;

/// Turns a balance snapshot and a price table into ordered display rows.
///
/// Stages: filter (ranked chain and positive amount), sort (priority
/// descending, then the tie break), project (format, value, key). The
/// pipeline holds no state between runs and never fails; anything it drops
/// or degrades is reported in `RenderDiagnostics`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalancePipeline {
    priority_table: PriorityTable,
    amount_format: AmountFormat,
    tie_break: TieBreak,
}

impl BalancePipeline {
    pub fn new(
        priority_table: PriorityTable,
        amount_format: AmountFormat,
        tie_break: TieBreak,
    ) -> Self {
        Self {
            priority_table,
            amount_format,
            tie_break,
        }
    }

    pub fn with_priority_table(priority_table: PriorityTable) -> Self {
        Self {
            priority_table,
            ..Self::default()
        }
    }

    pub fn priority_table(&self) -> &PriorityTable {
        &self.priority_table
    }

    pub fn amount_format(&self) -> &AmountFormat {
        &self.amount_format
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn priority(&self, blockchain: &str) -> i32 {
        self.priority_table.priority(blockchain)
    }

    /// Renders validated balances.
    pub fn render(&self, balances: &[Balance], prices: &PriceTable) -> RenderOutput {
        self.render_with_diagnostics(balances, prices, RenderDiagnostics::default())
    }

    /// Validates supplier records, then renders the valid ones. Malformed
    /// records are listed in the diagnostics and never become rows.
    pub fn render_raw(&self, records: &[RawBalance], prices: &PriceTable) -> RenderOutput {
        let mut diagnostics = RenderDiagnostics::default();
        let mut balances = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            match Balance::try_from(record) {
                Ok(balance) => balances.push(balance),
                Err(error) => {
                    warn!("Skipping malformed balance record #{}: {}", index, error);
                    diagnostics
                        .malformed_records
                        .push(MalformedRecord { index, error });
                }
            }
        }

        self.render_with_diagnostics(&balances, prices, diagnostics)
    }

    /// Convenience wrapper returning only the rows.
    pub fn render_rows(&self, balances: &[Balance], prices: &PriceTable) -> Vec<DisplayRow> {
        self.render(balances, prices).rows
    }

    fn render_with_diagnostics(
        &self,
        balances: &[Balance],
        prices: &PriceTable,
        mut diagnostics: RenderDiagnostics,
    ) -> RenderOutput {
        debug!(
            "Rendering {} balances against {} prices",
            balances.len(),
            prices.len()
        );

        let filtered = self.filter(balances, &mut diagnostics);
        let ranked = self.sort(&filtered);
        let rows = self.project(&ranked, prices, &mut diagnostics);

        debug!(
            "Rendered {} rows ({} unranked, {} non-positive, {} malformed)",
            rows.len(),
            diagnostics.excluded_unranked,
            diagnostics.excluded_non_positive,
            diagnostics.malformed_records.len()
        );

        RenderOutput { rows, diagnostics }
    }

    /// Keeps balances on a ranked blockchain with a strictly positive amount.
    pub fn filter<'a>(
        &self,
        balances: &'a [Balance],
        diagnostics: &mut RenderDiagnostics,
    ) -> Vec<FilteredBalance<'a>> {
        balances
            .iter()
            .filter_map(|balance| {
                let priority = self.priority_table.priority(&balance.blockchain);
                if !self.priority_table.is_ranked(priority) {
                    diagnostics.excluded_unranked += 1;
                    return None;
                }
                if balance.amount <= Decimal::ZERO {
                    diagnostics.excluded_non_positive += 1;
                    return None;
                }
                Some(FilteredBalance { balance, priority })
            })
            .collect()
    }

    /// Orders filtered balances by priority, highest first. The sort is
    /// stable, so balances the comparator treats as equal keep input order.
    pub fn sort<'a>(&self, filtered: &[FilteredBalance<'a>]) -> Vec<RankedBalance<'a>> {
        let mut ordered = filtered.to_vec();
        ordered.sort_by(|a, b| self.compare(a, b));

        ordered
            .into_iter()
            .enumerate()
            .map(|(position, item)| RankedBalance {
                balance: item.balance,
                priority: item.priority,
                position,
            })
            .collect()
    }

    /// Display order of two filtered balances.
    pub fn compare(&self, a: &FilteredBalance<'_>, b: &FilteredBalance<'_>) -> Ordering {
        let by_priority = b.priority.cmp(&a.priority);
        match self.tie_break {
            TieBreak::InputOrder => by_priority,
            TieBreak::Currency => {
                by_priority.then_with(|| a.balance.currency.cmp(&b.balance.currency))
            }
        }
    }

    /// Builds display rows in ranked order.
    pub fn project(
        &self,
        ranked: &[RankedBalance<'_>],
        prices: &PriceTable,
        diagnostics: &mut RenderDiagnostics,
    ) -> Vec<DisplayRow> {
        let mut seen_keys: HashSet<String> = HashSet::with_capacity(ranked.len());

        ranked
            .iter()
            .map(|item| {
                let balance = item.balance;
                let key = balance.key().to_string();

                if !seen_keys.insert(key.clone()) && !diagnostics.duplicate_keys.contains(&key) {
                    warn!(
                        "Duplicate balance key {}; the renderer keeps the last row",
                        key
                    );
                    diagnostics.duplicate_keys.push(key.clone());
                }

                let usd_value = match prices.get(&balance.currency) {
                    Some(price) => match balance.amount.checked_mul(price) {
                        Some(value) => UsdValue::Known(value),
                        None => {
                            warn!(
                                "USD value for {} overflows ({} * {})",
                                key, balance.amount, price
                            );
                            diagnostics.valuation_overflows.push(key.clone());
                            UsdValue::Unavailable
                        }
                    },
                    None => {
                        warn!("No price for {}; USD value unavailable", balance.currency);
                        diagnostics.missing_prices.push(key.clone());
                        UsdValue::Unavailable
                    }
                };

                DisplayRow {
                    currency: balance.currency.clone(),
                    blockchain: balance.blockchain.clone(),
                    amount: balance.amount,
                    formatted_amount: format_amount(balance.amount, &self.amount_format),
                    usd_value,
                    key,
                }
            })
            .collect()
    }
}
