//! Plain-text export format.
//!
//! ```text
//!  CURRENT INVENTORY:
//!
//! <name>: <quantity>
//! ```
//!
//! One entry per line, `": "` between name and quantity, nothing after the last
//! entry. Where the text ends up (a file, a pipe) is decided by the caller.

use invtrack_core::{DomainError, DomainResult, ItemName, Quantity};

use crate::inventory::{Inventory, StockEntry};

/// Header line, including its leading space.
pub const HEADER: &str = " CURRENT INVENTORY:";

/// Separator between an item name and its quantity.
pub const SEPARATOR: &str = ": ";

/// Render the full inventory, or [`DomainError::EmptyInventory`] if there is nothing to export.
pub fn render(inventory: &Inventory) -> DomainResult<String> {
    Ok(render_entries(&inventory.list()?))
}

/// Header, blank line, then one `name: quantity` line per entry.
///
/// Also used for on-screen listings, so both always share one layout.
pub fn render_entries(entries: &[StockEntry]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 2 + entries.len() * 16);
    out.push_str(HEADER);
    out.push_str("\n\n");
    push_lines(&mut out, entries);
    out
}

/// Append `name: quantity` lines, each newline-terminated.
pub fn push_lines(out: &mut String, entries: &[StockEntry]) {
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
}

/// Parse text produced by [`render`] back into entries.
///
/// The header and blank lines are skipped. The quantity is split off at the
/// last separator, so names containing `": "` are recovered intact.
pub fn parse(text: &str) -> DomainResult<Vec<StockEntry>> {
    let mut lines = text.lines();
    match lines.next() {
        Some(HEADER) => {}
        other => {
            return Err(DomainError::parse("export header", other.unwrap_or_default()));
        }
    }

    lines
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> DomainResult<StockEntry> {
    let (name, quantity) = line
        .rsplit_once(SEPARATOR)
        .ok_or_else(|| DomainError::parse("export line", line))?;
    Ok(StockEntry::new(ItemName::new(name)?, Quantity::parse(quantity)?))
}
