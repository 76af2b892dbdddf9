use crate::model::{AnalysisSummary, SellerReport};
use crate::report::round2;

/// Compute whole-run totals from the finished reports.
pub fn compute_summary(reports: &[SellerReport]) -> AnalysisSummary {
    let mut total_revenue = 0.0;
    let mut total_profit = 0.0;
    let mut total_bonus = 0.0;
    let mut total_sales = 0;

    for r in reports {
        total_revenue += r.revenue;
        total_profit += r.profit;
        total_bonus += r.bonus;
        total_sales += r.sales_count;
    }

    AnalysisSummary {
        total_sellers: reports.len(),
        total_revenue: round2(total_revenue),
        total_profit: round2(total_profit),
        total_bonus: round2(total_bonus),
        total_sales,
    }
}
