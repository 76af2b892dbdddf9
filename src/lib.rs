//! `salescore` — Per-seller sales performance engine.
//!
//! Pure engine crate: receives pre-loaded sales records, returns ranked
//! seller reports. No CLI or IO dependencies.

mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod load;
pub mod model;
mod rank;
mod report;
pub mod strategy;
pub mod summary;

pub use config::TierRates;
pub use engine::{analyze_sales_data, run, AnalysisOptions};
pub use error::AnalysisError;
pub use model::{AnalysisResult, ProductQuantity, SalesData, SellerReport};
pub use rank::TOP_PRODUCTS_LIMIT;
pub use strategy::{BonusCalculator, ProfitTieredBonus, RevenueCalculator, SimpleRevenue};
