//! Text shown to the user after each operation.

use invtrack_core::{ItemName, Quantity};
use invtrack_inventory::{LowStock, StockEntry, export};

pub const ITEM_ADDED: &str = "Item added!";
pub const ITEM_EXISTS: &str = "Item already exists.";
pub const QUANTITY_UPDATED: &str = "Quantity updated!";
pub const ITEM_REMOVED: &str = "Item removed!";
pub const ITEM_NOT_FOUND: &str = "Item not found.";
pub const SEARCH_MISS: &str = "Item not found in inventory.";
pub const INVENTORY_EMPTY: &str = "Inventory empty.";
pub const NOTHING_TO_EXPORT: &str = "Inventory empty. Nothing to export.";
pub const INVALID_OPTION: &str = "Invalid option.";
pub const INVALID_NAME: &str = "Invalid item name.";
pub const ALL_STOCKED: &str = "All items are sufficiently stocked!";

/// Full listing; same layout as the export file.
pub fn listing(entries: &[StockEntry]) -> String {
    export::render_entries(entries)
}

pub fn low_stock(threshold: Quantity, report: &LowStock) -> String {
    let mut out = format!("LOW STOCK ITEMS (< {threshold}):\n\n");
    match report {
        LowStock::Items(entries) => export::push_lines(&mut out, entries),
        LowStock::AllSufficientlyStocked => out.push_str(ALL_STOCKED),
    }
    out
}

pub fn search_hit(name: &ItemName, quantity: Quantity) -> String {
    format!("Item found!\n{name}: {quantity}")
}

pub fn invalid_quantity(input: &str) -> String {
    format!("Invalid quantity: {input}")
}

pub fn exported(destination: &str) -> String {
    format!("Inventory exported to {destination}!")
}

pub fn export_failed(message: &str) -> String {
    format!("Error exporting inventory: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: &str, q: i64) -> StockEntry {
        StockEntry::new(ItemName::new(n).unwrap(), Quantity::new(q))
    }

    #[test]
    fn listing_matches_export_layout() {
        assert_eq!(
            listing(&[entry("bolt", 3), entry("nut", 10)]),
            " CURRENT INVENTORY:\n\nbolt: 3\nnut: 10\n"
        );
    }

    #[test]
    fn listing_is_the_export_text() {
        let mut inv = invtrack_inventory::Inventory::new();
        inv.add(ItemName::new("gear").unwrap(), Quantity::new(2)).unwrap();
        assert_eq!(listing(&inv.list().unwrap()), export::render(&inv).unwrap());
    }

    #[test]
    fn low_stock_names_the_threshold() {
        let report = LowStock::Items(vec![entry("bolt", 3)]);
        assert_eq!(low_stock(Quantity::new(5), &report), "LOW STOCK ITEMS (< 5):\n\nbolt: 3\n");
        assert_eq!(
            low_stock(Quantity::new(2), &LowStock::AllSufficientlyStocked),
            "LOW STOCK ITEMS (< 2):\n\nAll items are sufficiently stocked!"
        );
    }

    #[test]
    fn search_hit_shows_name_and_quantity() {
        let name = ItemName::new("nut").unwrap();
        assert_eq!(search_hit(&name, Quantity::new(10)), "Item found!\nnut: 10");
    }
}
