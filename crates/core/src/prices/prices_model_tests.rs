//! Tests for the price table and price suppliers.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::prices::{
        InMemoryPriceSupplier, JsonFilePriceSupplier, PriceEntry, PriceSupplierTrait, PriceTable,
    };
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_from_entries_keeps_last_seen_price_per_currency() {
        let table = PriceTable::from_entries(vec![
            PriceEntry::new("ETH", dec!(1645.93)),
            PriceEntry::new("USDC", dec!(1)),
            PriceEntry::new("ETH", dec!(1700.5)),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ETH"), Some(dec!(1700.5)));
        assert_eq!(table.get("USDC"), Some(dec!(1)));
    }

    #[test]
    fn test_from_entries_ignores_dates_when_deduplicating() {
        let newer = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap();
        let older = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 30).unwrap();
        let table = PriceTable::from_entries(vec![
            PriceEntry {
                currency: "BLUR".to_string(),
                price: dec!(0.2081),
                date: Some(newer),
            },
            PriceEntry {
                currency: "BLUR".to_string(),
                price: dec!(0.2),
                date: Some(older),
            },
        ]);

        assert_eq!(table.get("BLUR"), Some(dec!(0.2)));
        assert_eq!(table.as_of(), Some(older));
    }

    #[test]
    fn test_as_of_is_latest_kept_date() {
        let first = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap();
        let second = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 50).unwrap();
        let table = PriceTable::from_entries(vec![
            PriceEntry {
                currency: "ATOM".to_string(),
                price: dec!(7.18),
                date: Some(second),
            },
            PriceEntry {
                currency: "OSMO".to_string(),
                price: dec!(0.37),
                date: Some(first),
            },
            PriceEntry::new("ZIL", dec!(0.0165)),
        ]);

        assert_eq!(table.as_of(), Some(second));
    }

    #[test]
    fn test_missing_currency_has_no_price() {
        let table = PriceTable::new().with_price("ETH", dec!(3000));
        assert!(table.contains("ETH"));
        assert!(!table.contains("ATOM"));
        assert_eq!(table.get("ATOM"), None);
    }

    #[test]
    fn test_currencies_are_sorted() {
        let table: PriceTable = vec![
            ("ZIL".to_string(), dec!(0.02)),
            ("ATOM".to_string(), dec!(7)),
            ("ETH".to_string(), dec!(3000)),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.currencies(), vec!["ATOM", "ETH", "ZIL"]);
    }

    #[test]
    fn test_in_memory_supplier_replaces_entries_with_dedup() {
        let supplier = InMemoryPriceSupplier::default();
        assert!(supplier.get_prices().unwrap().is_empty());

        supplier
            .replace_entries(vec![
                PriceEntry::new("ETH", dec!(1)),
                PriceEntry::new("ETH", dec!(2)),
            ])
            .unwrap();

        let table = supplier.get_prices().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ETH"), Some(dec!(2)));
    }

    #[test]
    fn test_json_file_supplier_reads_price_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.20811525423728813}},
                {{"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.9337373737374}},
                {{"currency": "ETH", "date": "2023-08-29T07:10:40.000Z", "price": 1600}},
                {{"currency": "BAD", "price": -1}}
            ]"#
        )
        .unwrap();

        let table = JsonFilePriceSupplier::new(file.path()).get_prices().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ETH"), Some(dec!(1600)));
        assert!(table.contains("BLUR"));
        assert_eq!(table.get("BAD"), None);
        assert_eq!(
            table.as_of(),
            Some(Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap())
        );
    }

    #[test]
    fn test_json_file_supplier_drops_unreadable_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"currency": "ETH", "price": 3000}},
                null,
                {{"currency": "ZIL"}},
                {{"currency": "NEO", "price": "cheap"}},
                {{"currency": "ATOM", "price": 9}}
            ]"#
        )
        .unwrap();

        let table = JsonFilePriceSupplier::new(file.path()).get_prices().unwrap();
        assert_eq!(table.currencies(), vec!["ATOM", "ETH"]);
        assert_eq!(table.get("ETH"), Some(dec!(3000)));
        assert_eq!(table.get("ATOM"), Some(dec!(9)));
        assert_eq!(table.get("ZIL"), None);
    }

    #[test]
    fn test_json_file_supplier_reports_missing_file() {
        let supplier = JsonFilePriceSupplier::new("/definitely/not/here/prices.json");
        assert!(matches!(supplier.get_prices(), Err(Error::Supplier(_))));
    }
}
