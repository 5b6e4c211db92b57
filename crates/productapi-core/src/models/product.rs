use serde::{Deserialize, Serialize};

/// A purchasable item in the product catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Product {
    pub id: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub name: String,
    /// Whole-number stock level; the service may report negative values.
    /// A fractional quantity fails to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        product_type: impl Into<String>,
        name: impl Into<String>,
        quantity: Option<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            product_type: product_type.into(),
            name: name.into(),
            quantity,
        }
    }
}
