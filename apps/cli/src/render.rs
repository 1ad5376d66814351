//! Terminal renderers for pipeline output.

use rust_decimal::Decimal;
use serde::Serialize;
use walletview_core::formatting::{format_amount, format_usd_value, AmountFormat};
use walletview_core::utils::decimal_serde::decimal_serde;
use walletview_core::{DisplayRow, RenderOutput};

const HEADERS: [&str; 4] = ["BLOCKCHAIN", "CURRENCY", "AMOUNT", "USD VALUE"];

/// Renders rows as an aligned text table followed by the known total.
///
/// Rows sharing a key are collapsed to the last one, matching how a keyed
/// view resolves duplicate identities. The total covers the shown rows only.
pub fn render_table(output: &RenderOutput) -> String {
    let rows = visible_rows(output);
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.blockchain.clone(),
                row.currency.clone(),
                row.formatted_amount.clone(),
                format_usd_value(&row.usd_value),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_line(&mut table, &HEADERS.map(String::from), &widths);
    for line in &cells {
        push_line(&mut table, line, &widths);
    }

    table.push_str(&format!(
        "\nTotal: {}",
        format_amount(output.keyed_total_usd_value(), &AmountFormat::fiat())
    ));
    if output.has_unavailable_keyed_values() {
        table.push_str(" (some prices unavailable)");
    }
    table.push('\n');
    table
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView<'a> {
    rows: &'a [DisplayRow],
    #[serde(with = "decimal_serde")]
    total_usd_value: Decimal,
    missing_prices: &'a [String],
    duplicate_keys: &'a [String],
    malformed_records: usize,
}

pub fn render_json(output: &RenderOutput) -> anyhow::Result<String> {
    let view = JsonView {
        rows: &output.rows,
        total_usd_value: output.total_usd_value(),
        missing_prices: &output.diagnostics.missing_prices,
        duplicate_keys: &output.diagnostics.duplicate_keys,
        malformed_records: output.diagnostics.malformed_records.len(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

fn visible_rows(output: &RenderOutput) -> Vec<&DisplayRow> {
    let by_key = output.rows_by_key();
    let mut emitted = std::collections::HashSet::with_capacity(by_key.len());
    output
        .rows
        .iter()
        .filter_map(|row| {
            let winner = by_key.get(row.key.as_str()).copied()?;
            emitted.insert(row.key.as_str()).then_some(winner)
        })
        .collect()
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = format!(
        "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use walletview_core::{Balance, BalancePipeline, PriceTable};

    fn sample_output() -> RenderOutput {
        let balances = vec![
            Balance::new("ZIL", dec!(10), "Zilliqa"),
            Balance::new("ETH", dec!(1234.5), "Ethereum"),
            Balance::new("ATOM", dec!(3), "Osmosis"),
        ];
        let prices = PriceTable::new()
            .with_price("ETH", dec!(3000))
            .with_price("ZIL", dec!(0.02));
        BalancePipeline::default().render(&balances, &prices)
    }

    #[test]
    fn test_table_lists_rows_in_order_with_total() {
        let table = render_table(&sample_output());
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("BLOCKCHAIN"));
        assert!(lines[1].starts_with("Osmosis"));
        assert!(lines[1].ends_with("N/A"));
        assert!(lines[2].starts_with("Ethereum"));
        assert!(lines[2].contains("1,234.5"));
        assert!(lines[2].ends_with("3,703,500.00"));
        assert!(lines[3].starts_with("Zilliqa"));
        assert!(table.contains("Total: 3,703,500.20 (some prices unavailable)"));
    }

    #[test]
    fn test_table_collapses_duplicate_keys_to_last_row() {
        let balances = vec![
            Balance::new("ETH", dec!(1), "Ethereum"),
            Balance::new("ETH", dec!(2), "Ethereum"),
        ];
        let prices = PriceTable::new().with_price("ETH", dec!(10));
        let output = BalancePipeline::default().render(&balances, &prices);

        let table = render_table(&output);
        let body: Vec<&str> = table
            .lines()
            .filter(|line| line.starts_with("Ethereum"))
            .collect();

        assert_eq!(body.len(), 1);
        assert!(body[0].contains("  2  "));
        assert!(body[0].ends_with("20.00"));
        assert!(table.contains("Total: 20.00\n"));
        assert!(!table.contains("unavailable"));
    }

    #[test]
    fn test_json_view_includes_rows_and_total() {
        let json = render_json(&sample_output()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["rows"][0]["key"], "Osmosis-ATOM");
        assert_eq!(value["missingPrices"][0], "Osmosis-ATOM");
        assert_eq!(value["malformedRecords"], 0);
        assert_eq!(value["totalUsdValue"], "3703500.2");
        assert_eq!(value["rows"][1]["amount"], "1234.5");
    }
}
