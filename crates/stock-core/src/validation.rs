//! # Validation Module
//!
//! Turns raw menu input into typed domain values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu (stock-cli)                                             │
//! │  └── Reads one line per prompt                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Integer / decimal coercion                                        │
//! │  └── Name presence and length                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE (name)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failure here means the store is never called.
//!
//! ## Usage
//! ```rust
//! use stock_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity("15").unwrap(), 15);
//! assert_eq!(parse_price("120.50").unwrap(), 120.5);
//! assert!(parse_quantity("ten").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{FieldUpdate, ProductField};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name, in characters.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use stock_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Teclado ").unwrap(), "Teclado");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Parses a product id.
pub fn parse_id(raw: &str) -> ValidationResult<i64> {
    parse_integer("id", raw)
}

/// Parses a quantity.
///
/// Any integer is accepted, including zero and negative values.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    parse_integer("quantity", raw)
}

/// Parses a price.
///
/// ## Rules
/// - Decimal number, `.` or `,` as the decimal separator
/// - Must be finite (`inf` and `NaN` are rejected)
///
/// ## Example
/// ```rust
/// use stock_core::validation::parse_price;
///
/// assert_eq!(parse_price("99,90").unwrap(), 99.9);
/// assert!(parse_price("NaN").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let normalized = if raw.contains(',') && !raw.contains('.') {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    };

    let price: f64 = normalized
        .parse()
        .map_err(|_| ValidationError::invalid_format("price", "expected a decimal number"))?;

    if !price.is_finite() {
        return Err(ValidationError::invalid_format(
            "price",
            "expected a finite number",
        ));
    }

    Ok(price)
}

fn parse_integer(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    raw.parse()
        .map_err(|_| ValidationError::invalid_format(field, "expected a whole number"))
}

// =============================================================================
// Composite Parsers
// =============================================================================

impl FieldUpdate {
    /// Coerces a raw answer into an update for `field`.
    ///
    /// ## Example
    /// ```rust
    /// use stock_core::{FieldUpdate, ProductField};
    ///
    /// let update = FieldUpdate::parse(ProductField::Quantity, "15").unwrap();
    /// assert_eq!(update, FieldUpdate::Quantity(15));
    /// assert!(FieldUpdate::parse(ProductField::Price, "abc").is_err());
    /// ```
    pub fn parse(field: ProductField, raw: &str) -> ValidationResult<Self> {
        match field {
            ProductField::Name => validate_product_name(raw).map(FieldUpdate::Name),
            ProductField::Quantity => parse_quantity(raw).map(FieldUpdate::Quantity),
            ProductField::Price => parse_price(raw).map(FieldUpdate::Price),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Teclado").unwrap(), "Teclado");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
        assert!(validate_product_name(&"é".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);
        // Negative stock is accepted as typed
        assert_eq!(parse_quantity("-4").unwrap(), -4);

        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_quantity("dez").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("120.50").unwrap(), 120.50);
        assert_eq!(parse_price("100").unwrap(), 100.0);
        assert_eq!(parse_price("0,99").unwrap(), 0.99);

        assert!(parse_price("").is_err());
        assert!(parse_price("R$10").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("1.000,50").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("999").unwrap(), 999);
        assert!(matches!(
            parse_id("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(parse_id(" "), Err(ValidationError::Required { .. })));
    }

    #[test]
    fn test_field_update_parse() {
        assert_eq!(
            FieldUpdate::parse(ProductField::Name, " Mouse ").unwrap(),
            FieldUpdate::Name("Mouse".to_string())
        );
        assert_eq!(
            FieldUpdate::parse(ProductField::Price, "15.75").unwrap(),
            FieldUpdate::Price(15.75)
        );
        assert!(FieldUpdate::parse(ProductField::Quantity, "many").is_err());
    }
}
