use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use invtrack_core::{Aggregate, DomainError, DomainResult, ItemName, Quantity};

use crate::policy::{AddMode, InventoryPolicy};

/// One stocked item as seen by listings, low-stock reports and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: ItemName,
    pub quantity: Quantity,
}

impl StockEntry {
    pub fn new(name: ItemName, quantity: Quantity) -> Self {
        Self { name, quantity }
    }
}

impl core::fmt::Display for StockEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.quantity)
    }
}

/// Outcome of a low-stock scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowStock {
    /// Entries strictly below the threshold, in name order.
    Items(Vec<StockEntry>),
    /// Nothing is below the threshold (including an empty inventory).
    AllSufficientlyStocked,
}

/// Aggregate root: the whole inventory of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<ItemName, Quantity>,
    policy: InventoryPolicy,
    version: u64,
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub name: ItemName,
    pub quantity: Quantity,
}

/// Command: UpdateQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantity {
    pub name: ItemName,
    pub quantity: Quantity,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub name: ItemName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
    UpdateQuantity(UpdateQuantity),
    RemoveItem(RemoveItem),
}

/// Event: ItemStocked. `previous` is set when an existing quantity was overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStocked {
    pub name: ItemName,
    pub quantity: Quantity,
    pub previous: Option<Quantity>,
}

/// Event: QuantityUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdated {
    pub name: ItemName,
    pub quantity: Quantity,
    pub previous: Quantity,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub name: ItemName,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemStocked(ItemStocked),
    QuantityUpdated(QuantityUpdated),
    ItemRemoved(ItemRemoved),
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemStocked(_) => "inventory.item.stocked",
            InventoryEvent::QuantityUpdated(_) => "inventory.item.quantity_updated",
            InventoryEvent::ItemRemoved(_) => "inventory.item.removed",
        }
    }

    pub fn item_name(&self) -> &ItemName {
        match self {
            InventoryEvent::ItemStocked(e) => &e.name,
            InventoryEvent::QuantityUpdated(e) => &e.name,
            InventoryEvent::ItemRemoved(e) => &e.name,
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemStocked(e) => {
                self.items.insert(e.name.clone(), e.quantity);
            }
            InventoryEvent::QuantityUpdated(e) => {
                self.items.insert(e.name.clone(), e.quantity);
            }
            InventoryEvent::ItemRemoved(e) => {
                self.items.remove(&e.name);
            }
        }

        // +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match command {
            InventoryCommand::AddItem(cmd) => InventoryEvent::ItemStocked(self.handle_add(cmd)?),
            InventoryCommand::UpdateQuantity(cmd) => {
                InventoryEvent::QuantityUpdated(self.handle_update(cmd)?)
            }
            InventoryCommand::RemoveItem(cmd) => InventoryEvent::ItemRemoved(self.handle_remove(cmd)?),
        };
        Ok(vec![event])
    }
}

impl Inventory {
    /// Create an empty inventory with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: InventoryPolicy) -> Self {
        Self {
            items: BTreeMap::new(),
            policy,
            version: 0,
        }
    }

    pub fn policy(&self) -> &InventoryPolicy {
        &self.policy
    }

    /// Number of events applied since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &ItemName) -> bool {
        self.items.contains_key(name)
    }

    /// Every entry in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.items.iter().map(|(name, quantity)| (name, *quantity))
    }

    /// Insert `name`, or overwrite its quantity when already stocked.
    ///
    /// Returns the overwritten quantity, if any. Under [`AddMode::CreateOnly`]
    /// an existing name is a conflict instead.
    pub fn add(&mut self, name: ItemName, quantity: Quantity) -> DomainResult<Option<Quantity>> {
        let event = self.handle_add(&AddItem { name, quantity })?;
        let previous = event.previous;
        self.apply(&InventoryEvent::ItemStocked(event));
        Ok(previous)
    }

    /// Overwrite the quantity of an existing item, returning the old quantity.
    pub fn update(&mut self, name: ItemName, quantity: Quantity) -> DomainResult<Quantity> {
        let event = self.handle_update(&UpdateQuantity { name, quantity })?;
        let previous = event.previous;
        self.apply(&InventoryEvent::QuantityUpdated(event));
        Ok(previous)
    }

    /// Remove an item, returning the quantity it held.
    pub fn remove(&mut self, name: ItemName) -> DomainResult<Quantity> {
        let event = self.handle_remove(&RemoveItem { name })?;
        let removed = event.quantity;
        self.apply(&InventoryEvent::ItemRemoved(event));
        Ok(removed)
    }

    /// All entries, or [`DomainError::EmptyInventory`] when nothing is stocked.
    pub fn list(&self) -> DomainResult<Vec<StockEntry>> {
        if self.items.is_empty() {
            return Err(DomainError::EmptyInventory);
        }
        Ok(self.entries().collect())
    }

    /// Entries whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: Quantity) -> LowStock {
        let low: Vec<_> = self.entries().filter(|e| e.quantity < threshold).collect();
        if low.is_empty() {
            LowStock::AllSufficientlyStocked
        } else {
            LowStock::Items(low)
        }
    }

    /// Low-stock scan using the policy threshold.
    pub fn low_stock_default(&self) -> LowStock {
        self.low_stock(self.policy.low_stock_threshold)
    }

    /// Exact, case-sensitive lookup.
    pub fn search(&self, name: &ItemName) -> DomainResult<Quantity> {
        self.items.get(name).copied().ok_or_else(DomainError::not_found)
    }

    /// Owned entries in name order; unlike [`Inventory::list`], empty is just empty.
    pub fn entries(&self) -> impl Iterator<Item = StockEntry> + '_ {
        self.items
            .iter()
            .map(|(name, quantity)| StockEntry::new(name.clone(), *quantity))
    }

    fn handle_add(&self, cmd: &AddItem) -> DomainResult<ItemStocked> {
        let previous = self.items.get(&cmd.name).copied();
        if previous.is_some() && self.policy.add_mode == AddMode::CreateOnly {
            return Err(DomainError::conflict(format!(
                "item already exists: {}",
                cmd.name
            )));
        }
        Ok(ItemStocked {
            name: cmd.name.clone(),
            quantity: cmd.quantity,
            previous,
        })
    }

    fn handle_update(&self, cmd: &UpdateQuantity) -> DomainResult<QuantityUpdated> {
        let previous = self.search(&cmd.name)?;
        Ok(QuantityUpdated {
            name: cmd.name.clone(),
            quantity: cmd.quantity,
            previous,
        })
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> DomainResult<ItemRemoved> {
        let quantity = self.search(&cmd.name)?;
        Ok(ItemRemoved {
            name: cmd.name.clone(),
            quantity,
        })
    }
}
