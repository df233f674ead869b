#![allow(dead_code)]

use receipt_processor::domain::receipt::{Item, ReceiptData};

pub fn receipt(retailer: &str, date: &str, time: &str, items: &[(&str, &str)], total: &str) -> ReceiptData {
    ReceiptData {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        items: items.iter().map(|(desc, price)| Item::new(*desc, *price)).collect(),
        total: total.to_string(),
    }
}

/// The five-item Target receipt, worth 28 points.
pub fn target_receipt() -> ReceiptData {
    receipt(
        "Target",
        "2022-01-01",
        "13:01",
        &[
            ("Mountain Dew 12PK", "6.49"),
            ("Emils Cheese Pizza", "12.25"),
            ("Knorr Creamy Chicken", "1.26"),
            ("Doritos Nacho Cheese", "3.35"),
            ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        "35.35",
    )
}

/// The four-Gatorade corner market receipt, worth 109 points.
pub fn corner_market_receipt() -> ReceiptData {
    receipt(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        &[
            ("Gatorade", "2.25"),
            ("Gatorade", "2.25"),
            ("Gatorade", "2.25"),
            ("Gatorade", "2.25"),
        ],
        "9.00",
    )
}

pub const TARGET_RECEIPT_JSON: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
  ],
  "total": "35.35"
}"#;
