//! The interaction loop.
//!
//! One [`Session`] owns the inventory for the lifetime of the program. Each
//! cycle asks for a [`MenuChoice`], collects the raw text that operation
//! needs, converts it into typed values and runs the matching inventory
//! operation. Every failure is reported once and the loop carries on; a
//! cancelled prompt abandons the current operation silently.

use std::io::{self, Write};

use invtrack_core::{Aggregate, DomainError, DomainResult, ItemName, Quantity};
use invtrack_inventory::{AddItem, Inventory, InventoryCommand, RemoveItem, UpdateQuantity};

use crate::menu::MenuChoice;
use crate::prompt::{Input, Prompt};
use crate::sink::{self, ExportError, ExportSink};
use crate::view;

pub struct Session<P, W, S> {
    inventory: Inventory,
    prompt: P,
    out: W,
    sink: S,
}

impl<P: Prompt, W: Write, S: ExportSink> Session<P, W, S> {
    pub fn new(inventory: Inventory, prompt: P, out: W, sink: S) -> Self {
        Self {
            inventory,
            prompt,
            out,
            sink,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run until the user picks `Exit` or cancels at the main menu.
    ///
    /// Only failures writing to the output end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        let menu = MenuChoice::menu_text();
        loop {
            let Input::Provided(raw) = self.prompt.ask(&menu) else {
                tracing::debug!("main menu cancelled");
                break;
            };

            match raw.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected menu input");
                    self.say(view::INVALID_OPTION)?;
                }
            }
        }
        Ok(())
    }

    /// Run one operation. `Exit` is a no-op here; the loop owns termination.
    pub fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::UpdateQuantity => self.update_quantity(),
            MenuChoice::RemoveItem => self.remove_item(),
            MenuChoice::ViewInventory => self.view_inventory(),
            MenuChoice::LowStockAlert => self.low_stock_alert(),
            MenuChoice::SearchItem => self.search_item(),
            MenuChoice::ExportInventory => self.export_inventory(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_item(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_name("Item name:", view::INVALID_NAME)? else {
            return Ok(());
        };
        let Some(quantity) = self.ask_quantity("Quantity:")? else {
            return Ok(());
        };

        match self.execute(InventoryCommand::AddItem(AddItem { name, quantity })) {
            Ok(()) => self.say(view::ITEM_ADDED),
            Err(e) => self.report(&e),
        }
    }

    fn update_quantity(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_name("Item to update:", view::ITEM_NOT_FOUND)? else {
            return Ok(());
        };
        if !self.inventory.contains(&name) {
            return self.say(view::ITEM_NOT_FOUND);
        }
        let Some(quantity) = self.ask_quantity("New quantity:")? else {
            return Ok(());
        };

        match self.execute(InventoryCommand::UpdateQuantity(UpdateQuantity { name, quantity })) {
            Ok(()) => self.say(view::QUANTITY_UPDATED),
            Err(e) => self.report(&e),
        }
    }

    fn remove_item(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_name("Item to remove:", view::ITEM_NOT_FOUND)? else {
            return Ok(());
        };

        match self.execute(InventoryCommand::RemoveItem(RemoveItem { name })) {
            Ok(()) => self.say(view::ITEM_REMOVED),
            Err(e) => self.report(&e),
        }
    }

    fn view_inventory(&mut self) -> io::Result<()> {
        match self.inventory.list() {
            Ok(entries) => self.say(&view::listing(&entries)),
            Err(e) => self.report(&e),
        }
    }

    fn low_stock_alert(&mut self) -> io::Result<()> {
        let threshold = self.inventory.policy().low_stock_threshold;
        let report = self.inventory.low_stock(threshold);
        self.say(&view::low_stock(threshold, &report))
    }

    fn search_item(&mut self) -> io::Result<()> {
        let Some(name) = self.ask_name("Enter item name to search:", view::SEARCH_MISS)? else {
            return Ok(());
        };

        match self.inventory.search(&name) {
            Ok(quantity) => self.say(&view::search_hit(&name, quantity)),
            Err(DomainError::NotFound) => self.say(view::SEARCH_MISS),
            Err(e) => self.report(&e),
        }
    }

    fn export_inventory(&mut self) -> io::Result<()> {
        match sink::export_inventory(&self.inventory, &mut self.sink) {
            Ok(()) => {
                let destination = self.sink.destination();
                self.say(&view::exported(&destination))
            }
            Err(ExportError::EmptyInventory) => self.say(view::NOTHING_TO_EXPORT),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.say(&view::export_failed(&e.to_string()))
            }
        }
    }

    /// Run a mutation through the aggregate and log what it emitted.
    fn execute(&mut self, command: InventoryCommand) -> DomainResult<()> {
        for event in self.inventory.execute(&command)? {
            tracing::info!(
                event_type = event.event_type(),
                item = %event.item_name(),
                version = self.inventory.version(),
                "inventory changed"
            );
        }
        Ok(())
    }

    /// `Ok(None)` when the user cancelled, or typed a name no item can have.
    ///
    /// The latter prints `rejected`: lookups report a plain miss, since nothing
    /// by that name can be stocked; adds report the name as invalid.
    fn ask_name(&mut self, question: &str, rejected: &str) -> io::Result<Option<ItemName>> {
        let Some(raw) = self.prompt.ask(question).into_option() else {
            return Ok(None);
        };
        match ItemName::new(raw) {
            Ok(name) => Ok(Some(name)),
            Err(e) => {
                tracing::warn!(error = %e, "unusable item name");
                self.say(rejected)?;
                Ok(None)
            }
        }
    }

    /// `Ok(None)` when the user cancelled or typed a non-integer (already reported).
    fn ask_quantity(&mut self, question: &str) -> io::Result<Option<Quantity>> {
        let Some(raw) = self.prompt.ask(question).into_option() else {
            return Ok(None);
        };
        match Quantity::parse(&raw) {
            Ok(quantity) => Ok(Some(quantity)),
            Err(e) => {
                tracing::warn!(error = %e, "rejected quantity");
                self.say(&view::invalid_quantity(&raw))?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, error: &DomainError) -> io::Result<()> {
        tracing::warn!(%error, "operation failed");
        let message = match error {
            DomainError::NotFound => view::ITEM_NOT_FOUND,
            DomainError::EmptyInventory => view::INVENTORY_EMPTY,
            DomainError::Conflict(_) => view::ITEM_EXISTS,
            DomainError::Validation(_) => view::INVALID_NAME,
            DomainError::Parse { input, .. } => return self.say(&view::invalid_quantity(input)),
        };
        self.say(message)
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}
