use std::collections::{BTreeMap, HashMap};

use crate::model::{Product, PurchaseRecord, Seller, SellerStats};
use crate::strategy::RevenueCalculator;

/// One pass over the purchase records, accumulating per-seller totals.
///
/// Output order is the seller list order, which later tie-breaking relies
/// on. Records naming an unknown seller are skipped whole; items naming an
/// unknown product are skipped alone, their siblings still process.
pub(crate) fn aggregate_sales<R: RevenueCalculator>(
    sellers: &[Seller],
    products: &[Product],
    purchase_records: &[PurchaseRecord],
    revenue: &R,
) -> Vec<SellerStats> {
    let mut stats: Vec<SellerStats> = sellers
        .iter()
        .map(|s| SellerStats {
            id: s.id.clone(),
            name: format!("{} {}", s.first_name, s.last_name),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: BTreeMap::new(),
        })
        .collect();

    let index_by_id: HashMap<&str, usize> = sellers
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();
    let product_by_sku: HashMap<&str, &Product> =
        products.iter().map(|p| (p.sku.as_str(), p)).collect();

    for record in purchase_records {
        let Some(&i) = index_by_id.get(record.seller_id.as_str()) else {
            continue;
        };
        let seller = &mut stats[i];
        // One sale per record, not per item
        seller.sales_count += 1;

        for item in &record.items {
            let Some(&product) = product_by_sku.get(item.sku.as_str()) else {
                continue;
            };
            let item_revenue = revenue.item_revenue(item, product);
            let cost = product.purchase_price * item.quantity as f64;
            seller.revenue += item_revenue;
            seller.profit += item_revenue - cost;
            *seller.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PurchaseItem;
    use crate::strategy::SimpleRevenue;

    fn seller(id: &str, first: &str, last: &str) -> Seller {
        Seller {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
        }
    }

    fn product(sku: &str, purchase_price: f64) -> Product {
        Product {
            sku: sku.into(),
            purchase_price,
        }
    }

    fn item(sku: &str, quantity: u32, sale_price: f64) -> PurchaseItem {
        PurchaseItem {
            sku: sku.into(),
            quantity,
            sale_price,
            discount: 0.0,
        }
    }

    fn record(seller_id: &str, items: Vec<PurchaseItem>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.into(),
            items,
        }
    }

    #[test]
    fn seeds_every_seller_zeroed_in_input_order() {
        let sellers = vec![seller("s2", "Bob", "Stone"), seller("s1", "Alice", "Reed")];
        let stats = aggregate_sales(&sellers, &[], &[], &SimpleRevenue);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].id, "s2");
        assert_eq!(stats[0].name, "Bob Stone");
        assert_eq!(stats[1].name, "Alice Reed");
        assert_eq!(stats[0].revenue, 0.0);
        assert_eq!(stats[0].profit, 0.0);
        assert_eq!(stats[0].sales_count, 0);
        assert!(stats[0].products_sold.is_empty());
    }

    #[test]
    fn accumulates_revenue_profit_and_quantities() {
        let sellers = vec![seller("s1", "Alice", "Reed")];
        let products = vec![product("A", 500.0), product("B", 100.0)];
        let records = vec![
            record("s1", vec![item("A", 1, 1500.0)]),
            record("s1", vec![item("B", 2, 400.0), item("A", 1, 500.0)]),
        ];

        let stats = aggregate_sales(&sellers, &products, &records, &SimpleRevenue);
        let s = &stats[0];

        // revenue: 1500 + 800 + 500, cost: 500 + 200 + 500
        assert_eq!(s.revenue, 2800.0);
        assert_eq!(s.profit, 1600.0);
        assert_eq!(s.sales_count, 2);
        assert_eq!(s.products_sold.get("A"), Some(&2));
        assert_eq!(s.products_sold.get("B"), Some(&2));
    }

    #[test]
    fn sales_count_increments_once_per_record() {
        let sellers = vec![seller("s1", "Alice", "Reed")];
        let products = vec![product("A", 1.0), product("B", 1.0), product("C", 1.0)];
        let records = vec![record(
            "s1",
            vec![item("A", 1, 2.0), item("B", 1, 2.0), item("C", 1, 2.0)],
        )];

        let stats = aggregate_sales(&sellers, &products, &records, &SimpleRevenue);
        assert_eq!(stats[0].sales_count, 1);
    }

    #[test]
    fn unknown_seller_skips_whole_record() {
        let sellers = vec![seller("s1", "Alice", "Reed")];
        let products = vec![product("A", 100.0)];
        let records = vec![
            record("ghost", vec![item("A", 5, 1000.0)]),
            record("s1", vec![item("A", 1, 300.0)]),
        ];

        let stats = aggregate_sales(&sellers, &products, &records, &SimpleRevenue);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].sales_count, 1);
        assert_eq!(stats[0].revenue, 300.0);
        assert_eq!(stats[0].products_sold.get("A"), Some(&1));
    }

    #[test]
    fn unknown_product_skips_item_but_counts_record() {
        let sellers = vec![seller("s1", "Alice", "Reed")];
        let products = vec![product("A", 100.0)];
        let records = vec![record(
            "s1",
            vec![item("MISSING", 9, 9999.0), item("A", 2, 300.0)],
        )];

        let stats = aggregate_sales(&sellers, &products, &records, &SimpleRevenue);
        let s = &stats[0];
        assert_eq!(s.sales_count, 1);
        assert_eq!(s.revenue, 600.0);
        assert_eq!(s.profit, 400.0);
        assert_eq!(s.products_sold.get("MISSING"), None);
        assert_eq!(s.products_sold.get("A"), Some(&2));
    }

    #[test]
    fn revenue_strategy_drives_revenue_and_profit() {
        let sellers = vec![seller("s1", "Alice", "Reed")];
        let products = vec![product("A", 10.0)];
        let records = vec![record("s1", vec![item("A", 3, 100.0)])];

        // Flat 50 per item line regardless of price
        let flat = |_: &PurchaseItem, _: &Product| 50.0;
        let stats = aggregate_sales(&sellers, &products, &records, &flat);

        assert_eq!(stats[0].revenue, 50.0);
        // cost = 10 * 3
        assert_eq!(stats[0].profit, 20.0);
    }

    #[test]
    fn quantities_accumulate_across_records() {
        let sellers = vec![seller("s1", "Alice", "Reed")];
        let products = vec![product("A", 1.0)];
        let records = vec![
            record("s1", vec![item("A", 3, 2.0)]),
            record("s1", vec![item("A", 4, 2.0)]),
        ];

        let stats = aggregate_sales(&sellers, &products, &records, &SimpleRevenue);
        assert_eq!(stats[0].products_sold.get("A"), Some(&7));
    }
}
