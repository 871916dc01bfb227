//! The eight main-menu operations.

use core::str::FromStr;

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    AddItem,
    UpdateQuantity,
    RemoveItem,
    ViewInventory,
    LowStockAlert,
    SearchItem,
    ExportInventory,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown menu option: {0:?}")]
pub struct UnknownChoice(pub String);

impl MenuChoice {
    /// Menu order; position + 1 is the key the user types.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddItem,
        MenuChoice::UpdateQuantity,
        MenuChoice::RemoveItem,
        MenuChoice::ViewInventory,
        MenuChoice::LowStockAlert,
        MenuChoice::SearchItem,
        MenuChoice::ExportInventory,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> u8 {
        match self {
            MenuChoice::AddItem => 1,
            MenuChoice::UpdateQuantity => 2,
            MenuChoice::RemoveItem => 3,
            MenuChoice::ViewInventory => 4,
            MenuChoice::LowStockAlert => 5,
            MenuChoice::SearchItem => 6,
            MenuChoice::ExportInventory => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddItem => "Add Item",
            MenuChoice::UpdateQuantity => "Update Quantity",
            MenuChoice::RemoveItem => "Remove Item",
            MenuChoice::ViewInventory => "View Inventory",
            MenuChoice::LowStockAlert => "Low Stock Alert",
            MenuChoice::SearchItem => "Search for an item",
            MenuChoice::ExportInventory => "Export Inventory",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Full menu text shown before every selection.
    pub fn menu_text() -> String {
        let mut text = String::from("   INVENTORY TRACKER\n-----------------------\n");
        for choice in Self::ALL {
            text.push_str(&format!("{}. {}\n", choice.key(), choice.label()));
        }
        text.push_str("Choose an option:");
        text
    }
}

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| key == choice.key().to_string())
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}
