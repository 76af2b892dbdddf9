//! CSV text adapters. Callers hand in the file contents; the crate never
//! touches the filesystem itself.

use std::collections::HashMap;

use crate::error::AnalysisError;
use crate::model::{Product, PurchaseItem, PurchaseRecord, Seller};

fn read_headers(
    reader: &mut csv::Reader<&[u8]>,
    input: &'static str,
) -> Result<Vec<String>, AnalysisError> {
    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::CsvParse(format!("{input}: {e}")))?;
    Ok(headers.iter().map(|h| h.to_string()).collect())
}

fn column_index(
    headers: &[String],
    input: &'static str,
    name: &str,
) -> Result<usize, AnalysisError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| AnalysisError::MissingColumn {
            input,
            column: name.into(),
        })
}

/// Load sellers from CSV with columns `id,first_name,last_name`.
pub fn load_sellers_csv(csv_data: &str) -> Result<Vec<Seller>, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());
    let headers = read_headers(&mut reader, "sellers")?;

    let id_idx = column_index(&headers, "sellers", "id")?;
    let first_idx = column_index(&headers, "sellers", "first_name")?;
    let last_idx = column_index(&headers, "sellers", "last_name")?;

    let mut sellers = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AnalysisError::CsvParse(format!("sellers: {e}")))?;
        sellers.push(Seller {
            id: record.get(id_idx).unwrap_or("").to_string(),
            first_name: record.get(first_idx).unwrap_or("").to_string(),
            last_name: record.get(last_idx).unwrap_or("").to_string(),
        });
    }
    Ok(sellers)
}

/// Load the product catalog from CSV with columns `sku,purchase_price`.
pub fn load_products_csv(csv_data: &str) -> Result<Vec<Product>, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());
    let headers = read_headers(&mut reader, "products")?;

    let sku_idx = column_index(&headers, "products", "sku")?;
    let price_idx = column_index(&headers, "products", "purchase_price")?;

    let mut products = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AnalysisError::CsvParse(format!("products: {e}")))?;
        let sku = record.get(sku_idx).unwrap_or("").to_string();

        let price_str = record.get(price_idx).unwrap_or("");
        let purchase_price: f64 = price_str.parse().map_err(|_| AnalysisError::NumberParse {
            input: "products",
            record_id: sku.clone(),
            value: price_str.into(),
        })?;

        products.push(Product { sku, purchase_price });
    }
    Ok(products)
}

/// Load purchase records from CSV with one row per item, columns
/// `receipt_id,seller_id,sku,quantity,sale_price[,discount]`.
///
/// Rows sharing a `receipt_id` become one record, receipts in first-seen
/// order and items in row order. An absent `discount` column, or an empty
/// discount cell, means no discount. Rows of one receipt disagreeing on
/// `seller_id` are a structural error.
pub fn load_purchases_csv(csv_data: &str) -> Result<Vec<PurchaseRecord>, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());
    let headers = read_headers(&mut reader, "purchases")?;

    let receipt_idx = column_index(&headers, "purchases", "receipt_id")?;
    let seller_idx = column_index(&headers, "purchases", "seller_id")?;
    let sku_idx = column_index(&headers, "purchases", "sku")?;
    let quantity_idx = column_index(&headers, "purchases", "quantity")?;
    let sale_price_idx = column_index(&headers, "purchases", "sale_price")?;
    let discount_idx = headers.iter().position(|h| h == "discount");

    let mut records: Vec<PurchaseRecord> = Vec::new();
    let mut index_by_receipt: HashMap<String, usize> = HashMap::new();

    for record in reader.records() {
        let record = record.map_err(|e| AnalysisError::CsvParse(format!("purchases: {e}")))?;

        let receipt_id = record.get(receipt_idx).unwrap_or("").to_string();
        let seller_id = record.get(seller_idx).unwrap_or("").to_string();
        let sku = record.get(sku_idx).unwrap_or("").to_string();

        let quantity_str = record.get(quantity_idx).unwrap_or("");
        let quantity: u32 = quantity_str.parse().map_err(|_| AnalysisError::NumberParse {
            input: "purchases",
            record_id: receipt_id.clone(),
            value: quantity_str.into(),
        })?;

        let price_str = record.get(sale_price_idx).unwrap_or("");
        let sale_price: f64 = price_str.parse().map_err(|_| AnalysisError::NumberParse {
            input: "purchases",
            record_id: receipt_id.clone(),
            value: price_str.into(),
        })?;

        let discount = match discount_idx {
            Some(di) => {
                let discount_str = record.get(di).unwrap_or("");
                if discount_str.is_empty() {
                    0.0
                } else {
                    discount_str.parse().map_err(|_| AnalysisError::NumberParse {
                        input: "purchases",
                        record_id: receipt_id.clone(),
                        value: discount_str.into(),
                    })?
                }
            }
            None => 0.0,
        };

        let item = PurchaseItem {
            sku,
            quantity,
            sale_price,
            discount,
        };

        match index_by_receipt.get(&receipt_id) {
            Some(&i) => {
                if records[i].seller_id != seller_id {
                    return Err(AnalysisError::CsvParse(format!(
                        "purchases: receipt '{receipt_id}' names seller '{seller_id}' but \
                         earlier rows name '{}'",
                        records[i].seller_id
                    )));
                }
                records[i].items.push(item);
            }
            None => {
                index_by_receipt.insert(receipt_id, records.len());
                records.push(PurchaseRecord {
                    seller_id,
                    items: vec![item],
                });
            }
        }
    }

    Ok(records)
}
