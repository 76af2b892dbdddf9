use crate::model::{RankedSeller, SellerReport};

/// Round to 2 decimal places, halves away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Map ranked sellers to final reports. Monetary fields are rounded here,
/// exactly once; counts and product lists pass through.
pub(crate) fn build_reports(ranked: Vec<RankedSeller>) -> Vec<SellerReport> {
    ranked
        .into_iter()
        .map(|r| SellerReport {
            seller_id: r.stats.id,
            name: r.stats.name,
            revenue: round2(r.stats.revenue),
            profit: round2(r.stats.profit),
            sales_count: r.stats.sales_count,
            top_products: r.top_products,
            bonus: round2(r.bonus),
        })
        .collect()
}
