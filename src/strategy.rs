use crate::config::TierRates;
use crate::model::{Product, PurchaseItem};

// ---------------------------------------------------------------------------
// Revenue
// ---------------------------------------------------------------------------

/// Computes net revenue for a single purchased line item.
///
/// Implementations must be pure. The catalog `purchase_price` feeds cost,
/// never revenue.
pub trait RevenueCalculator {
    fn item_revenue(&self, item: &PurchaseItem, product: &Product) -> f64;
}

/// Any matching closure is usable as a revenue strategy.
impl<F> RevenueCalculator for F
where
    F: Fn(&PurchaseItem, &Product) -> f64,
{
    fn item_revenue(&self, item: &PurchaseItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Reference revenue: `sale_price * quantity`, scaled down by the item's
/// discount percentage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn item_revenue(&self, item: &PurchaseItem, _product: &Product) -> f64 {
        let discount_factor = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity as f64 * discount_factor
    }
}

// ---------------------------------------------------------------------------
// Bonus
// ---------------------------------------------------------------------------

/// Computes a seller's bonus amount from its rank position.
///
/// `rank` is the zero-based position after sorting by profit descending;
/// `total` is the number of ranked sellers; `profit` is the seller's
/// full-precision profit.
pub trait BonusCalculator {
    fn bonus(&self, rank: usize, total: usize, profit: f64) -> f64;
}

/// Any matching closure is usable as a bonus strategy.
impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, f64) -> f64,
{
    fn bonus(&self, rank: usize, total: usize, profit: f64) -> f64 {
        self(rank, total, profit)
    }
}

/// Reference tiering: rank 0 gets the leader rate, ranks 1-2 the runner-up
/// rate, the last rank gets nothing, everyone else the standard rate.
///
/// The tiers cascade in that order, so with two or three sellers the last
/// rank still falls in the runner-up tier. A lone seller is rank 0 and gets
/// the leader rate, never the zero tier.
#[derive(Debug, Clone, Default)]
pub struct ProfitTieredBonus {
    pub rates: TierRates,
}

impl ProfitTieredBonus {
    pub fn new(rates: TierRates) -> Self {
        Self { rates }
    }
}

impl BonusCalculator for ProfitTieredBonus {
    fn bonus(&self, rank: usize, total: usize, profit: f64) -> f64 {
        if rank == 0 {
            self.rates.leader * profit
        } else if rank == 1 || rank == 2 {
            self.rates.runner_up * profit
        } else if rank + 1 == total {
            0.0
        } else {
            self.rates.standard * profit
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
