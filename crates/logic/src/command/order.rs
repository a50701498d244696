//! Building, committing and discarding the current order.

use larder_inventory::{ItemDescriptor, Scope};
use larder_model::{DisplayMode, Model, show_everything};

use super::{CommandError, CommandResult, Execute, resolve_item};

pub const ADD_TO_ORDER_WORD: &str = "order";

pub const ADD_TO_ORDER_USAGE: &str = "order: Adds an item to the current order, identified by name and/or id. \
Stock is only taken at checkout. \
Parameters: [NAME] [n/NAME] [i/ID] [c/COUNT] [t/TAG]...\n\
Example: order Bagel c/3";

pub const LIST_ORDER_WORD: &str = "list-order";

pub const LIST_ORDER_USAGE: &str = "list-order: Shows the current order.";

pub const CHECKOUT_WORD: &str = "checkout";

pub const CHECKOUT_USAGE: &str = "checkout: Commits the current order, taking its items out of stock.";

pub const CANCEL_ORDER_WORD: &str = "cancel-order";

pub const CANCEL_ORDER_USAGE: &str = "cancel-order: Discards the current order.";

/// Requests a quantity of one inventory item on the current order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToOrderCommand {
    descriptor: ItemDescriptor,
}

impl AddToOrderCommand {
    pub fn new(descriptor: ItemDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &ItemDescriptor {
        &self.descriptor
    }
}

impl Execute for AddToOrderCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let item = resolve_item(model, &self.descriptor, Scope::InStock)?;
        let count = self.descriptor.count_or_default();
        model.add_to_order(&item, count)?;
        Ok(CommandResult::new(format!("Ordered {count} {}", item.name())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOrderCommand;

impl Execute for ListOrderCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_display_list(DisplayMode::Order, show_everything());
        let lines = model.order().lines().len();
        Ok(CommandResult::new(format!("Listed the current order ({lines} lines)")))
    }
}

/// Commits the current order in one step: either every line is taken out of
/// stock and recorded, or nothing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckoutCommand;

impl Execute for CheckoutCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.order().is_empty() {
            return Err(CommandError::EmptyOrder);
        }
        let record = model.checkout()?;
        Ok(CommandResult::new(format!(
            "Checked out {} units, transaction {}",
            record.total_units(),
            record.id
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CancelOrderCommand;

impl Execute for CancelOrderCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.order().is_empty() {
            return Err(CommandError::EmptyOrder);
        }
        model.clear_order();
        Ok(CommandResult::new("Order cancelled"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::{bagel, bakery, donut, item, model_with, named, tagged};
    use larder_core::ValueObject;
    use larder_inventory::Tag;
    use larder_model::DisplayItem;

    fn order(name: &str, count: u32) -> AddToOrderCommand {
        AddToOrderCommand::new(named(name).with_count(count))
    }

    #[test]
    fn ordering_sums_per_item_and_leaves_stock() {
        let mut model = bakery();
        let result = order("Bagel", 2).execute(&mut model).unwrap();
        order("Bagel", 3).execute(&mut model).unwrap();

        assert_eq!(result.feedback(), "Ordered 2 Bagel");
        assert_eq!(model.order().quantity_of(&larder_core::Entity::identity(&bagel())), 5);
        assert_eq!(model.inventory().items(), &[bagel(), donut()]);
    }

    #[test]
    fn ordering_more_than_stock_is_allowed_until_checkout() {
        let mut model = bakery();
        order("Donut", 10).execute(&mut model).unwrap();

        let err = CheckoutCommand.execute(&mut model).unwrap_err();

        assert_eq!(
            err,
            CommandError::InsufficientStock {
                name: "Donut".to_string(),
                available: 3,
                requested: 10
            }
        );
        assert_eq!(model.inventory().items(), &[bagel(), donut()]);
        assert!(!model.order().is_empty());
    }

    #[test]
    fn tags_narrow_the_item_to_order() {
        let mut model = model_with(vec![tagged("Bagel", 100, 5, &["baked"]), donut()]);
        let baked = AddToOrderCommand::new(named("Bagel").with_tags([Tag::parse("baked").unwrap()]));
        let frozen = AddToOrderCommand::new(named("Bagel").with_tags([Tag::parse("frozen").unwrap()]));

        assert_eq!(baked.execute(&mut model).unwrap().feedback(), "Ordered 1 Bagel");
        assert_eq!(frozen.execute(&mut model).unwrap_err(), CommandError::ItemNotFound);
    }

    #[test]
    fn ordering_unknown_item_fails() {
        let mut model = bakery();
        assert_eq!(order("Scone", 1).execute(&mut model).unwrap_err(), CommandError::ItemNotFound);
    }

    #[test]
    fn empty_records_cannot_be_ordered() {
        let mut model = model_with(vec![item("Bagel", 100, 0)]);
        assert_eq!(order("Bagel", 1).execute(&mut model).unwrap_err(), CommandError::ItemNotFound);
    }

    #[test]
    fn checkout_records_a_transaction() {
        let mut model = bakery();
        order("Bagel", 2).execute(&mut model).unwrap();
        order("Donut", 3).execute(&mut model).unwrap();

        CheckoutCommand.execute(&mut model).unwrap();

        assert_eq!(model.inventory().items(), &[item("Bagel", 100, 3), item("Donut", 200, 0)]);
        assert_eq!(model.transactions().len(), 1);
        assert_eq!(model.transactions().records()[0].total_units(), 5);
        assert!(model.order().is_empty());
    }

    #[test]
    fn empty_order_cannot_be_checked_out_or_cancelled() {
        let mut model = bakery();
        assert_eq!(CheckoutCommand.execute(&mut model).unwrap_err(), CommandError::EmptyOrder);
        assert_eq!(CancelOrderCommand.execute(&mut model).unwrap_err(), CommandError::EmptyOrder);
    }

    #[test]
    fn cancel_discards_the_order() {
        let mut model = bakery();
        order("Bagel", 2).execute(&mut model).unwrap();

        CancelOrderCommand.execute(&mut model).unwrap();

        assert!(model.order().is_empty());
        assert!(model.transactions().is_empty());
    }

    #[test]
    fn list_order_switches_the_display() {
        let mut model = bakery();
        order("Bagel", 2).execute(&mut model).unwrap();

        ListOrderCommand.execute(&mut model).unwrap();

        assert_eq!(model.display_mode(), DisplayMode::Order);
        let shown = model.filtered_display_view();
        assert!(matches!(shown.as_slice(), [DisplayItem::OrderLine(line)] if line.count == 2));

        order("Donut", 1).execute(&mut model).unwrap();
        assert_eq!(model.filtered_display_view().len(), 2);
    }
}
