//! Text output for menus and listings.

use std::io::{self, Write};

use stock_core::Product;

use crate::menu::{MenuCommand, UpdateCommand};

const RULE_WIDTH: usize = 50;

pub fn main_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📦 Stock Management 📦")?;
    for command in MenuCommand::OPTIONS {
        if let Some(key) = command.key() {
            writeln!(out, "{} - {}", key, command.label())?;
        }
    }
    Ok(())
}

pub fn update_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Update options:")?;
    for command in UpdateCommand::OPTIONS {
        if let Some(key) = command.key() {
            writeln!(out, "{} - {}", key, command.label())?;
        }
    }
    Ok(())
}

/// Prints products as a fixed-width table, or a notice when there are none.
pub fn product_table(
    out: &mut impl Write,
    products: &[Product],
    currency_symbol: &str,
) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "⚠️ No products found.");
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:<5} {:<20} {:<12} {:<10}",
        "ID", "Name", "Quantity", "Price"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for product in products {
        writeln!(
            out,
            "{:<5} {:<20} {:<12} {}{:.2}",
            product.id, product.name, product.quantity, currency_symbol, product.price
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_core::NewProduct;

    fn render(products: &[Product]) -> String {
        let mut out = Vec::new();
        product_table(&mut out, products, "R$").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render(&[]), "⚠️ No products found.\n");
    }

    #[test]
    fn test_table_rows() {
        let products = vec![NewProduct::new("Teclado", 10, 120.5).with_id(1)];
        let text = render(&products);

        assert!(text.contains("ID    Name                 Quantity     Price"));
        assert!(text.contains(&"-".repeat(RULE_WIDTH)));
        assert!(text.contains("1     Teclado              10           R$120.50"));
    }

    #[test]
    fn test_menus_list_every_option() {
        let mut out = Vec::new();
        main_menu(&mut out).unwrap();
        update_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1 - Add product"));
        assert!(text.contains("5 - Exit"));
        assert!(text.contains("3 - Update price"));
        assert!(text.contains("4 - Back"));
    }
}
