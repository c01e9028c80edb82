//! # Menu Controller
//!
//! The interactive loop: read a choice, collect the fields it needs, call
//! one store operation, print the outcome.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 ┌──────────► AddFlow ─────────┐                        │
//! │                 ├──────────► ListFlow ────────┤                        │
//! │   ┌──────┐      ├──────────► UpdateFlow ──┐   │                        │
//! │   │ Idle │ ─────┤            ▲  sub-menu  │   │                        │
//! │   └──────┘      │            └────────────┘   │                        │
//! │      ▲          ├──────────► DeleteFlow ──────┤                        │
//! │      │          │                             │                        │
//! │      └──────────┴─────────────────────────────┘                        │
//! │                 │                                                       │
//! │                 └── 5 / end of input ──► Exited                        │
//! │                                                                         │
//! │  Invalid selection: report, redisplay the same menu.                   │
//! │  Flow error: report (AppError::user_message), back to Idle.            │
//! │  Terminal I/O error: session ends.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller is generic over its input and output so tests can drive
//! it with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::error::{AppError, AppResult};
use crate::menu::{MenuCommand, UpdateCommand};
use crate::render;
use stock_core::validation::{parse_id, parse_price, parse_quantity, validate_product_name};
use stock_core::{FieldUpdate, NewProduct, ProductField, ValidationError};
use stock_db::ProductStore;

/// What the loop does after a flow finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Back to the main menu.
    Idle,
    /// Leave the loop.
    Exit,
}

/// Reads an answer or leaves the flow with `Step::Exit` on end of input.
macro_rules! answer {
    ($self:ident, $prompt:expr) => {
        match $self.prompt($prompt)? {
            Some(line) => line,
            None => return Ok(Step::Exit),
        }
    };
}

/// Drives a [`ProductStore`] from line-based text input.
pub struct MenuController<R, W> {
    store: ProductStore,
    input: R,
    output: W,
    currency_symbol: String,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(store: ProductStore, input: R, output: W) -> Self {
        MenuController {
            store,
            input,
            output,
            currency_symbol: crate::config::DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Sets the prefix printed before prices.
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Consumes the controller and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// ## Returns
    /// * `Ok(())` - Normal exit (option 5 or end of input)
    /// * `Err(AppError::Io)` - The terminal could not be read or written
    pub async fn run(&mut self) -> AppResult<()> {
        info!("Menu session started");

        loop {
            render::main_menu(&mut self.output)?;
            let line = match self.prompt("Choose an option: ") {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    self.report(err)?;
                    continue;
                }
            };

            let command = MenuCommand::parse(&line);
            debug!(?command, "Menu selection");

            let outcome = match command {
                MenuCommand::Add => self.add_flow().await,
                MenuCommand::List => self.list_flow().await,
                MenuCommand::Update => self.update_flow().await,
                MenuCommand::Delete => self.delete_flow().await,
                MenuCommand::Exit => Ok(Step::Exit),
                MenuCommand::InvalidSelection(choice) => {
                    self.invalid_selection(&choice)?;
                    Ok(Step::Idle)
                }
            };

            match outcome {
                Ok(Step::Idle) => {}
                Ok(Step::Exit) => break,
                Err(err) => self.report(err)?,
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        info!("Menu session ended");
        Ok(())
    }

    // =========================================================================
    // Flows
    // =========================================================================

    /// Collects name, quantity and price, then adds the product.
    ///
    /// Each answer is checked as soon as it is typed; the first bad one
    /// ends the flow before the store is called.
    async fn add_flow(&mut self) -> AppResult<Step> {
        let name = validate_product_name(&answer!(self, "Product name: "))?;
        let quantity = parse_quantity(&answer!(self, "Quantity: "))?;
        let price = parse_price(&answer!(self, "Price: "))?;

        let stored = self.store.add(&NewProduct::new(name, quantity, price)).await?;

        info!(id = stored.id, name = %stored.name, "Product added");
        writeln!(
            self.output,
            "Product added successfully! (ID {})",
            stored.id
        )?;
        Ok(Step::Idle)
    }

    async fn list_flow(&mut self) -> AppResult<Step> {
        let products = self.store.list().await?;
        render::product_table(&mut self.output, &products, &self.currency_symbol)?;
        Ok(Step::Idle)
    }

    /// Checks the id, then loops the update sub-menu until "Back".
    async fn update_flow(&mut self) -> AppResult<Step> {
        let raw_id = answer!(self, "ID of the product to update: ");
        let id = parse_id(&raw_id)?;

        if !self.store.exists(id).await? {
            return Err(AppError::not_found(id));
        }

        loop {
            render::update_menu(&mut self.output)?;
            let line = answer!(self, "Choose an option: ");

            let field = match UpdateCommand::parse(&line) {
                UpdateCommand::Name => ProductField::Name,
                UpdateCommand::Quantity => ProductField::Quantity,
                UpdateCommand::Price => ProductField::Price,
                UpdateCommand::Back => return Ok(Step::Idle),
                UpdateCommand::InvalidSelection(choice) => {
                    self.invalid_selection(&choice)?;
                    continue;
                }
            };

            let raw_value = answer!(self, &format!("New {}: ", field));

            // Errors here stay inside the sub-menu
            match self.update_field(id, field, &raw_value).await {
                Ok(_) => writeln!(self.output, "Product updated successfully!")?,
                Err(err) => self.report(err)?,
            }
        }
    }

    async fn update_field(&mut self, id: i64, field: ProductField, raw: &str) -> AppResult<u64> {
        let update = FieldUpdate::parse(field, raw)?;
        let affected = self.store.update_field(id, update).await?;

        info!(id, %field, affected, "Product updated");
        Ok(affected)
    }

    async fn delete_flow(&mut self) -> AppResult<Step> {
        let raw_id = answer!(self, "ID of the product to delete: ");
        let id = parse_id(&raw_id)?;

        if !self.store.exists(id).await? {
            return Err(AppError::not_found(id));
        }

        self.store.delete(id).await?;

        info!(id, "Product deleted");
        writeln!(self.output, "Product deleted successfully!")?;
        Ok(Step::Idle)
    }

    // =========================================================================
    // Terminal helpers
    // =========================================================================

    /// Prints `text` and reads one line.
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    /// A line that is not valid UTF-8 is consumed and reported as a
    /// validation error.
    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            return Ok(None);
        }

        let line = String::from_utf8(buf)
            .map_err(|_| ValidationError::invalid_format("input", "not valid UTF-8 text"))?;
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }

    fn invalid_selection(&mut self, choice: &str) -> AppResult<()> {
        debug!(choice, "Invalid menu selection");
        writeln!(self.output, "⚠️ Invalid option! Try again.")?;
        Ok(())
    }

    /// Prints a recoverable error; hands terminal failures back to the caller.
    fn report(&mut self, err: AppError) -> AppResult<()> {
        if !err.is_recoverable() {
            return Err(err);
        }

        match &err {
            AppError::Storage(cause) => error!(error = %cause, "Storage operation failed"),
            other => debug!(error = %other, "Flow ended with user error"),
        }

        writeln!(self.output, "{}", err.user_message())?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stock_db::{Database, DbConfig};

    async fn database() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Runs one session over `input` and returns everything printed.
    async fn session(db: &Database, input: &str) -> String {
        let mut controller =
            MenuController::new(db.products(), Cursor::new(input.to_string()), Vec::new());
        controller.run().await.unwrap();
        String::from_utf8(controller.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_exit_option() {
        let db = database().await;
        let out = session(&db, "5\n").await;

        assert!(out.contains("1 - Add product"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let db = database().await;
        let out = session(&db, "").await;
        assert!(out.ends_with("Exiting...\n"));

        // EOF halfway through a flow also ends the session without writing
        let out = session(&db, "1\nTeclado\n").await;
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_undecodable_input_is_recovered() {
        let db = database().await;

        // Bad bytes as a product name, then as a menu choice
        let input = b"1\n\xff\xfe\n10\n1.0\n\xff\n2\n5\n".to_vec();
        let mut controller = MenuController::new(db.products(), Cursor::new(input), Vec::new());
        controller.run().await.unwrap();
        let out = String::from_utf8(controller.into_output()).unwrap();

        assert_eq!(
            out.matches("Error: input has invalid format: not valid UTF-8 text.")
                .count(),
            2
        );
        assert!(out.contains("No products found."));
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_selection_redisplays_menu() {
        let db = database().await;
        let out = session(&db, "9\n5\n").await;

        assert!(out.contains("Invalid option! Try again."));
        assert_eq!(out.matches("1 - Add product").count(), 2);
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let db = database().await;
        let out = session(&db, "1\nTeclado\n10\n120.50\n2\n5\n").await;

        assert!(out.contains("Product added successfully! (ID 1)"));
        assert!(out.contains("Teclado"));
        assert!(out.contains("R$120.50"));
    }

    #[tokio::test]
    async fn test_add_with_bad_number_skips_store() {
        let db = database().await;
        let out = session(&db, "1\nTeclado\nten\n5\n").await;

        assert!(out.contains("Error: quantity has invalid format"));
        assert!(!out.contains("Price: "));
        assert_eq!(db.products().count().await.unwrap(), 0);

        let out = session(&db, "1\nTeclado\n10\nabc\n5\n").await;
        assert!(out.contains("Error: price has invalid format"));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_duplicate_name() {
        let db = database().await;
        let out = session(&db, "1\nTeclado\n10\n120.50\n1\nTeclado\n5\n100.00\n5\n").await;

        assert!(out.contains("Error: a product named 'Teclado' already exists!"));
        let products = db.products().list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 10);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let db = database().await;
        let out = session(&db, "2\n5\n").await;
        assert!(out.contains("No products found."));
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_to_main_menu() {
        let db = database().await;
        let out = session(&db, "3\n999\n5\n").await;

        assert!(out.contains("Error: no product with ID 999 exists."));
        assert!(!out.contains("Update options:"));
    }

    #[tokio::test]
    async fn test_update_bad_id() {
        let db = database().await;
        let out = session(&db, "3\nabc\n5\n").await;
        assert!(out.contains("Error: id has invalid format"));
    }

    #[tokio::test]
    async fn test_update_sub_menu_loops_until_back() {
        let db = database().await;
        db.products()
            .add(&NewProduct::new("Teclado", 10, 120.50))
            .await
            .unwrap();

        // quantity, bad price (stays in sub-menu), invalid option, name, back
        let input = "3\n1\n2\n15\n3\nabc\n7\n1\nTeclado USB\n4\n5\n";
        let out = session(&db, input).await;

        assert_eq!(out.matches("Product updated successfully!").count(), 2);
        assert!(out.contains("Error: price has invalid format"));
        assert!(out.contains("Invalid option! Try again."));
        assert_eq!(out.matches("Update options:").count(), 5);

        let product = db.products().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(product.name, "Teclado USB");
        assert_eq!(product.quantity, 15);
        assert_eq!(product.price, 120.50);
    }

    #[tokio::test]
    async fn test_update_rename_to_duplicate_stays_in_sub_menu() {
        let db = database().await;
        let store = db.products();
        store.add(&NewProduct::new("Teclado", 10, 120.50)).await.unwrap();
        store.add(&NewProduct::new("Mouse", 3, 49.90)).await.unwrap();

        let out = session(&db, "3\n2\n1\nTeclado\n4\n5\n").await;

        assert!(out.contains("Error: a product named 'Teclado' already exists!"));
        assert_eq!(store.get_by_id(2).await.unwrap().unwrap().name, "Mouse");
    }

    #[tokio::test]
    async fn test_delete() {
        let db = database().await;
        let store = db.products();
        store.add(&NewProduct::new("Teclado", 10, 120.50)).await.unwrap();
        store.add(&NewProduct::new("Mouse", 3, 49.90)).await.unwrap();

        let out = session(&db, "4\n1\n4\n999\n5\n").await;

        assert!(out.contains("Product deleted successfully!"));
        assert!(out.contains("Error: no product with ID 999 exists."));
        assert!(!store.exists(1).await.unwrap());
        assert!(store.exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_fault_is_reported_and_loop_continues() {
        let db = database().await;
        db.close().await;

        let out = session(&db, "2\n5\n").await;

        assert!(out.contains("the operation could not be completed"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[tokio::test]
    async fn test_currency_symbol() {
        let db = database().await;
        db.products()
            .add(&NewProduct::new("Mouse", 3, 49.9))
            .await
            .unwrap();

        let mut controller =
            MenuController::new(db.products(), Cursor::new("2\n5\n"), Vec::new())
                .currency_symbol("$");
        controller.run().await.unwrap();
        let out = String::from_utf8(controller.into_output()).unwrap();

        assert!(out.contains("$49.90"));
        assert!(!out.contains("R$"));
    }
}
