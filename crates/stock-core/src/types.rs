//! # Domain Types
//!
//! The product record and the shapes used to create and change it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │   │    Product      │   │  FieldUpdate    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  id (assigned)  │◄──│  Name(String)   │       │
//! │  │  quantity       │   │  name (unique)  │   │  Quantity(i64)  │       │
//! │  │  price          │   │  quantity       │   │  Price(f64)     │       │
//! │  └─────────────────┘   │  price          │   └─────────────────┘       │
//! │        add()           └─────────────────┘     update_field()          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier. Never changes once assigned.
    pub id: i64,

    /// Display name, unique across all products.
    pub name: String,

    /// Units on hand. Negative values are accepted as entered.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,
}

/// A product that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Attaches the id assigned by the store.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// Field Updates
// =============================================================================

/// A column that can be changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Name,
    Quantity,
    Price,
}

impl ProductField {
    /// Column name in the `produtos` table.
    pub const fn column(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Quantity => "quantity",
            ProductField::Price => "price",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A new, already type-checked value for exactly one field.
///
/// Coercion from raw text happens before this value exists
/// (see [`FieldUpdate::parse`](crate::validation)), so the store
/// never sees malformed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum FieldUpdate {
    Name(String),
    Quantity(i64),
    Price(f64),
}

impl FieldUpdate {
    /// The field this update targets.
    pub const fn field(&self) -> ProductField {
        match self {
            FieldUpdate::Name(_) => ProductField::Name,
            FieldUpdate::Quantity(_) => ProductField::Quantity,
            FieldUpdate::Price(_) => ProductField::Price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
