use crate::aggregate::aggregate_sales;
use crate::error::AnalysisError;
use crate::model::{AnalysisMeta, AnalysisResult, SalesData, SellerReport};
use crate::rank::rank_sellers;
use crate::report::build_reports;
use crate::strategy::{BonusCalculator, ProfitTieredBonus, RevenueCalculator, SimpleRevenue};
use crate::summary::compute_summary;

/// Strategy pair injected into an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions<R, B> {
    pub revenue: R,
    pub bonus: B,
}

impl Default for AnalysisOptions<SimpleRevenue, ProfitTieredBonus> {
    /// Reference strategies: [`SimpleRevenue`] and [`ProfitTieredBonus`].
    fn default() -> Self {
        Self {
            revenue: SimpleRevenue,
            bonus: ProfitTieredBonus::default(),
        }
    }
}

/// Analyze the dataset: validate, aggregate, rank, report.
///
/// Returns one report per input seller, ordered by profit descending.
/// Validation failure aborts before aggregation; after that the pipeline
/// cannot fail, unknown seller or product references are skipped silently.
pub fn analyze_sales_data<R, B>(
    data: &SalesData,
    options: &AnalysisOptions<R, B>,
) -> Result<Vec<SellerReport>, AnalysisError>
where
    R: RevenueCalculator,
    B: BonusCalculator,
{
    data.validate()?;

    let stats = aggregate_sales(
        &data.sellers,
        &data.products,
        &data.purchase_records,
        &options.revenue,
    );
    let ranked = rank_sellers(stats, &options.bonus);
    Ok(build_reports(ranked))
}

/// Run an analysis and wrap the reports with run metadata and totals.
pub fn run<R, B>(
    data: &SalesData,
    options: &AnalysisOptions<R, B>,
) -> Result<AnalysisResult, AnalysisError>
where
    R: RevenueCalculator,
    B: BonusCalculator,
{
    let sellers = analyze_sales_data(data, options)?;
    let summary = compute_summary(&sellers);

    Ok(AnalysisResult {
        meta: AnalysisMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            records_scanned: data.purchase_records.len(),
        },
        summary,
        sellers,
    })
}
