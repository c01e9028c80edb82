//! # Menu Commands
//!
//! The two numbered menus as enums. Raw input is parsed once into a
//! command; everything downstream matches on the enum.
//!
//! ```text
//! Main menu                 Update sub-menu
//! ─────────                 ───────────────
//! 1 - Add product           1 - Update name
//! 2 - List products         2 - Update quantity
//! 3 - Update product        3 - Update price
//! 4 - Delete product        4 - Back
//! 5 - Exit
//! ```

/// A selection from the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    List,
    Update,
    Delete,
    Exit,
    /// Anything that is not one of the numbered options, kept as typed.
    InvalidSelection(String),
}

impl MenuCommand {
    /// Options in display order.
    pub const OPTIONS: [MenuCommand; 5] = [
        MenuCommand::Add,
        MenuCommand::List,
        MenuCommand::Update,
        MenuCommand::Delete,
        MenuCommand::Exit,
    ];

    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuCommand::Add,
            "2" => MenuCommand::List,
            "3" => MenuCommand::Update,
            "4" => MenuCommand::Delete,
            "5" => MenuCommand::Exit,
            other => MenuCommand::InvalidSelection(other.to_string()),
        }
    }

    /// The number the user types, `None` for an invalid selection.
    pub fn key(&self) -> Option<u8> {
        match self {
            MenuCommand::Add => Some(1),
            MenuCommand::List => Some(2),
            MenuCommand::Update => Some(3),
            MenuCommand::Delete => Some(4),
            MenuCommand::Exit => Some(5),
            MenuCommand::InvalidSelection(_) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::Add => "Add product",
            MenuCommand::List => "List products",
            MenuCommand::Update => "Update product",
            MenuCommand::Delete => "Delete product",
            MenuCommand::Exit => "Exit",
            MenuCommand::InvalidSelection(_) => "Invalid option",
        }
    }
}

/// A selection from the update sub-menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCommand {
    Name,
    Quantity,
    Price,
    Back,
    InvalidSelection(String),
}

impl UpdateCommand {
    pub const OPTIONS: [UpdateCommand; 4] = [
        UpdateCommand::Name,
        UpdateCommand::Quantity,
        UpdateCommand::Price,
        UpdateCommand::Back,
    ];

    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => UpdateCommand::Name,
            "2" => UpdateCommand::Quantity,
            "3" => UpdateCommand::Price,
            "4" => UpdateCommand::Back,
            other => UpdateCommand::InvalidSelection(other.to_string()),
        }
    }

    pub fn key(&self) -> Option<u8> {
        match self {
            UpdateCommand::Name => Some(1),
            UpdateCommand::Quantity => Some(2),
            UpdateCommand::Price => Some(3),
            UpdateCommand::Back => Some(4),
            UpdateCommand::InvalidSelection(_) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UpdateCommand::Name => "Update name",
            UpdateCommand::Quantity => "Update quantity",
            UpdateCommand::Price => "Update price",
            UpdateCommand::Back => "Back",
            UpdateCommand::InvalidSelection(_) => "Invalid option",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_main_menu() {
        assert_eq!(MenuCommand::parse("1"), MenuCommand::Add);
        assert_eq!(MenuCommand::parse(" 2\n"), MenuCommand::List);
        assert_eq!(MenuCommand::parse("5"), MenuCommand::Exit);
        assert_eq!(
            MenuCommand::parse("6"),
            MenuCommand::InvalidSelection("6".to_string())
        );
        assert_eq!(
            MenuCommand::parse("add"),
            MenuCommand::InvalidSelection("add".to_string())
        );
    }

    #[test]
    fn test_keys_round_trip_through_parse() {
        for command in MenuCommand::OPTIONS {
            let key = command.key().unwrap();
            assert_eq!(MenuCommand::parse(&key.to_string()), command);
        }
        for command in UpdateCommand::OPTIONS {
            let key = command.key().unwrap();
            assert_eq!(UpdateCommand::parse(&key.to_string()), command);
        }
    }
}
