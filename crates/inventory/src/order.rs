use serde::{Deserialize, Serialize};

use larder_core::{Aggregate, DomainError};
use larder_events::{Event, ObservableList};

use crate::inventory::StockLine;
use crate::item::ItemKey;

/// Order line: an item identity and the quantity requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: ItemKey,
    pub count: u32,
}

impl core::fmt::Display for OrderLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} x{}", self.item, self.count)
    }
}

/// Aggregate root: the current, uncommitted Order.
///
/// One line per item identity, in the order items were first requested.
/// Building an order never touches inventory stock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order {
    lines: ObservableList<OrderLine>,
    version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    AddItem { item: ItemKey, count: u32 },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    LineAdded(OrderLine),
    LineIncreased { item: ItemKey, added: u32 },
    Cleared,
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::LineAdded(_) => "order.line_added",
            OrderEvent::LineIncreased { .. } => "order.line_increased",
            OrderEvent::Cleared => "order.cleared",
        }
    }
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OrderLine] {
        self.lines.items()
    }

    /// The observable source backing this order, for live views.
    pub fn line_list(&self) -> &ObservableList<OrderLine> {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, item: &ItemKey) -> u32 {
        self.lines
            .iter()
            .find(|line| &line.item == item)
            .map_or(0, |line| line.count)
    }

    /// The stock deductions committing this order would need.
    pub fn stock_lines(&self) -> Vec<StockLine> {
        self.lines
            .iter()
            .map(|line| StockLine {
                item: line.item.clone(),
                count: line.count,
            })
            .collect()
    }

    fn handle_add(&self, item: &ItemKey, count: u32) -> Result<Vec<OrderEvent>, DomainError> {
        if count == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let existing = self.quantity_of(item);
        if existing == 0 {
            return Ok(vec![OrderEvent::LineAdded(OrderLine {
                item: item.clone(),
                count,
            })]);
        }

        existing.checked_add(count).ok_or(DomainError::CountOverflow)?;
        Ok(vec![OrderEvent::LineIncreased {
            item: item.clone(),
            added: count,
        }])
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::LineAdded(line) => self.lines.push(line.clone()),
            OrderEvent::LineIncreased { item, added } => {
                if let Some(index) = self.lines.position(|line| &line.item == item) {
                    let mut line = self.lines.items()[index].clone();
                    line.count = line.count.saturating_add(*added);
                    self.lines.set(index, line);
                }
            }
            OrderEvent::Cleared => self.lines.clear(),
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::AddItem { item, count } => self.handle_add(item, *count),
            OrderCommand::Clear if self.is_empty() => Ok(Vec::new()),
            OrderCommand::Clear => Ok(vec![OrderEvent::Cleared]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, Name};
    use larder_core::ValueObject;
    use larder_events::execute;

    fn key(name: &str, id: u32) -> ItemKey {
        ItemKey::new(Name::parse(name).unwrap(), ItemId::new(id).unwrap())
    }

    fn add(item: ItemKey, count: u32) -> OrderCommand {
        OrderCommand::AddItem { item, count }
    }

    #[test]
    fn add_item_emits_line_added_for_new_identity() {
        let order = Order::new();
        let events = order.handle(&add(key("Bagel", 100), 2)).unwrap();
        assert_eq!(
            events,
            vec![OrderEvent::LineAdded(OrderLine {
                item: key("Bagel", 100),
                count: 2
            })]
        );
    }

    #[test]
    fn repeated_identity_sums_into_one_line() {
        let mut order = Order::new();
        execute(&mut order, &add(key("Bagel", 100), 2)).unwrap();
        execute(&mut order, &add(key("Donut", 200), 1)).unwrap();
        execute(&mut order, &add(key("Bagel", 100), 3)).unwrap();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.quantity_of(&key("Bagel", 100)), 5);
        assert_eq!(order.lines()[0].item, key("Bagel", 100));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let order = Order::new();
        let err = order.handle(&add(key("Bagel", 100), 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn clear_empties_the_order() {
        let mut order = Order::new();
        execute(&mut order, &add(key("Bagel", 100), 2)).unwrap();
        execute(&mut order, &OrderCommand::Clear).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn clearing_an_empty_order_emits_nothing() {
        let order = Order::new();
        assert!(order.handle(&OrderCommand::Clear).unwrap().is_empty());
    }

    #[test]
    fn stock_lines_mirror_order_lines() {
        let mut order = Order::new();
        execute(&mut order, &add(key("Bagel", 100), 2)).unwrap();
        let lines = order.stock_lines();
        assert_eq!(lines, vec![StockLine { item: key("Bagel", 100), count: 2 }]);
    }
}
