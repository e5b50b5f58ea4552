use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::{CellValue, TableRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    #[serde(rename = "Product A")]
    A,
    #[serde(rename = "Product B")]
    B,
    #[serde(rename = "Product C")]
    C,
    #[serde(rename = "Product D")]
    D,
    #[serde(rename = "Product E")]
    E,
}

impl Product {
    pub const ALL: [Product; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "Product A",
            Self::B => "Product B",
            Self::C => "Product C",
            Self::D => "Product D",
            Self::E => "Product E",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Pending,
    Failed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Completed, Self::Pending, Self::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the order table.
///
/// Rows are independent samples; nothing ties one order to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub date: NaiveDate,
    pub product: Product,
    pub revenue: u64,
    pub units: u64,
    pub status: OrderStatus,
}

impl OrderRecord {
    pub fn new(
        index: usize,
        date: NaiveDate,
        product: Product,
        revenue: u64,
        units: u64,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: order_id(index),
            date,
            product,
            revenue,
            units,
            status,
        }
    }
}

/// `ORDER-<1000 + index>`
pub fn order_id(index: usize) -> String {
    format!("ORDER-{}", 1000 + index)
}

impl TableRecord for OrderRecord {
    fn fields(&self) -> Vec<(&'static str, CellValue<'_>)> {
        vec![
            ("id", CellValue::Text(&self.id)),
            ("date", CellValue::Date(self.date)),
            ("product", CellValue::Text(self.product.label())),
            ("revenue", CellValue::Integer(self.revenue as i64)),
            ("units", CellValue::Integer(self.units as i64)),
            ("status", CellValue::Text(self.status.as_str())),
        ]
    }

    fn field(&self, key: &str) -> Option<CellValue<'_>> {
        match key {
            "id" => Some(CellValue::Text(&self.id)),
            "date" => Some(CellValue::Date(self.date)),
            "product" => Some(CellValue::Text(self.product.label())),
            "revenue" => Some(CellValue::Integer(self.revenue as i64)),
            "units" => Some(CellValue::Integer(self.units as i64)),
            "status" => Some(CellValue::Text(self.status.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderRecord {
        OrderRecord::new(
            7,
            NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            Product::C,
            4_250,
            42,
            OrderStatus::Pending,
        )
    }

    #[test]
    fn test_order_id_format() {
        assert_eq!(order_id(0), "ORDER-1000");
        assert_eq!(sample().id, "ORDER-1007");
    }

    #[test]
    fn test_serializes_labels_and_iso_date() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2024-05-17");
        assert_eq!(json["product"], "Product C");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["revenue"], 4_250);
    }

    #[test]
    fn test_field_lookup_matches_field_list() {
        let order = sample();
        for (key, value) in order.fields() {
            assert_eq!(order.field(key), Some(value));
        }
        assert_eq!(order.field("customer"), None);
    }
}
