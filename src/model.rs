use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A seller as listed in the input dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A catalog entry, keyed by unique `sku`.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: f64,
}

/// One line item inside a purchase record.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseItem {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: f64,
    /// Percentage 0-100. Absent in source data means no discount.
    #[serde(default)]
    pub discount: f64,
}

/// One purchase (receipt): the selling seller and the items sold.
///
/// Source documents often carry extra fields (receipt ids, record totals,
/// dates); those are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub items: Vec<PurchaseItem>,
}

/// The full input dataset for one analysis run.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    pub fn from_json(input: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(input).map_err(|e| AnalysisError::DatasetParse(e.to_string()))
    }

    /// Reject datasets with nothing to analyze. Runs before any aggregation.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sellers.is_empty() {
            return Err(AnalysisError::EmptyInput { collection: "sellers" });
        }
        if self.products.is_empty() {
            return Err(AnalysisError::EmptyInput { collection: "products" });
        }
        if self.purchase_records.is_empty() {
            return Err(AnalysisError::EmptyInput {
                collection: "purchase_records",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Running totals for one seller. Accumulates at full precision; rounding
/// happens once, when reports are built. Confined to the analysis passes,
/// never part of the output.
#[derive(Debug, Clone)]
pub(crate) struct SellerStats {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub products_sold: BTreeMap<String, u32>,
}

/// A seller with its rank-derived fields, ready for report building.
#[derive(Debug, Clone)]
pub(crate) struct RankedSeller {
    pub stats: SellerStats,
    pub bonus: f64,
    pub top_products: Vec<ProductQuantity>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Per-SKU quantity entry in a seller's top-products list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductQuantity {
    pub sku: String,
    pub quantity: u32,
}

/// Final per-seller report, ordered by profit descending.
/// Monetary fields are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<ProductQuantity>,
    pub bonus: f64,
}

// ---------------------------------------------------------------------------
// Summary + Output envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_sellers: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_bonus: f64,
    pub total_sales: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub meta: AnalysisMeta,
    pub summary: AnalysisSummary,
    pub sellers: Vec<SellerReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMeta {
    pub engine_version: String,
    pub run_at: String,
    pub records_scanned: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
