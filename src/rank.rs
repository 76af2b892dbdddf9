use crate::model::{ProductQuantity, RankedSeller, SellerStats};
use crate::strategy::BonusCalculator;

/// Reports list at most this many products per seller.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sort sellers by profit descending and attach rank-derived fields.
///
/// The sort is stable, so equal profits keep the seller list order.
pub(crate) fn rank_sellers<B: BonusCalculator>(
    mut stats: Vec<SellerStats>,
    bonus: &B,
) -> Vec<RankedSeller> {
    stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    let total = stats.len();

    stats
        .into_iter()
        .enumerate()
        .map(|(rank, s)| {
            let bonus_amount = bonus.bonus(rank, total, s.profit);
            let top_products = top_products(&s);
            RankedSeller {
                stats: s,
                bonus: bonus_amount,
                top_products,
            }
        })
        .collect()
}

/// Highest-quantity products first, ties by SKU ascending, capped at
/// [`TOP_PRODUCTS_LIMIT`].
fn top_products(stats: &SellerStats) -> Vec<ProductQuantity> {
    // The map iterates SKU-ascending; the stable sort keeps that order
    // within equal quantities.
    let mut list: Vec<ProductQuantity> = stats
        .products_sold
        .iter()
        .map(|(sku, &quantity)| ProductQuantity {
            sku: sku.clone(),
            quantity,
        })
        .collect();
    list.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    list.truncate(TOP_PRODUCTS_LIMIT);
    list
}
