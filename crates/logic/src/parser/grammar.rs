//! Per-command grammars: which preamble and prefixes each verb accepts.
//!
//! Fields are validated in a fixed order (name, id, count, tags) and the
//! first failure is the one reported.

use larder_inventory::{Item, ItemDescriptor};

use super::error::{ParseError, ParseErrorKind};
use super::field::{parse_count, parse_id, parse_index, parse_name, parse_tags};
use super::tokenizer::{ArgumentMap, Prefix};
use crate::command::{
    AddCommand, AddToOrderCommand, Command, DeleteCommand, EditCommand, FindCommand, ListTransactionsCommand,
    RemoveCommand, add, delete, edit, find, order, remove,
};

/// Which optional fields an item-identifying command takes besides name and id.
#[derive(Debug, Clone, Copy)]
struct IdentityGrammar {
    usage: &'static str,
    count: bool,
    tags: bool,
}

impl IdentityGrammar {
    fn prefixes(self) -> Vec<Prefix> {
        let mut prefixes = vec![Prefix::Name, Prefix::Id];
        if self.count {
            prefixes.push(Prefix::Count);
        }
        if self.tags {
            prefixes.push(Prefix::Tag);
        }
        prefixes
    }

    /// Name as bare preamble or with `n/` (not both), optional id, and at
    /// least one of the two.
    fn parse(self, args: &str) -> Result<ItemDescriptor, ParseError> {
        let args = ArgumentMap::tokenize(args, &self.prefixes());
        let field = |kind| ParseError::new(kind, self.usage);

        let raw_name = match (args.preamble(), args.value(Prefix::Name)) {
            ("", named) => named,
            (_, Some(_)) => return Err(field(ParseErrorKind::NameSpecifiedTwice)),
            (preamble, None) => Some(preamble),
        };
        let raw_id = args.value(Prefix::Id);
        if raw_name.is_none() && raw_id.is_none() {
            return Err(ParseError::invalid_format(self.usage));
        }

        let mut descriptor = ItemDescriptor::new();
        if let Some(raw) = raw_name {
            descriptor = descriptor.with_name(parse_name(raw).map_err(field)?);
        }
        if let Some(raw) = raw_id {
            descriptor = descriptor.with_id(parse_id(raw).map_err(field)?);
        }
        if self.count {
            let count = match args.value(Prefix::Count) {
                Some(raw) => parse_count(raw).map_err(field)?,
                None => ItemDescriptor::DEFAULT_COUNT,
            };
            descriptor = descriptor.with_count(count);
        }
        if self.tags && args.contains(Prefix::Tag) {
            descriptor = descriptor.with_tags(parse_tags(args.all_values(Prefix::Tag)).map_err(field)?);
        }
        Ok(descriptor)
    }
}

pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentMap::tokenize(args, &Prefix::ALL);
    let field = |kind| ParseError::new(kind, add::USAGE);

    let (Some(raw_name), Some(raw_id), Some(raw_count)) = (
        args.value(Prefix::Name),
        args.value(Prefix::Id),
        args.value(Prefix::Count),
    ) else {
        return Err(ParseError::invalid_format(add::USAGE));
    };
    if !args.preamble().is_empty() {
        return Err(ParseError::invalid_format(add::USAGE));
    }

    let name = parse_name(raw_name).map_err(field)?;
    let id = parse_id(raw_id).map_err(field)?;
    let count = parse_count(raw_count).map_err(field)?;
    let tags = parse_tags(args.all_values(Prefix::Tag)).map_err(field)?;
    Ok(Command::Add(AddCommand::new(Item::new(name, id, count, tags))))
}

pub fn parse_remove(args: &str) -> Result<Command, ParseError> {
    let grammar = IdentityGrammar {
        usage: remove::USAGE,
        count: true,
        tags: true,
    };
    Ok(Command::Remove(RemoveCommand::new(grammar.parse(args)?)))
}

pub fn parse_add_to_order(args: &str) -> Result<Command, ParseError> {
    let grammar = IdentityGrammar {
        usage: order::ADD_TO_ORDER_USAGE,
        count: true,
        tags: true,
    };
    Ok(Command::AddToOrder(AddToOrderCommand::new(grammar.parse(args)?)))
}

pub fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let grammar = IdentityGrammar {
        usage: delete::USAGE,
        count: false,
        tags: false,
    };
    Ok(Command::Delete(DeleteCommand::new(grammar.parse(args)?)))
}

/// `INDEX` then at least one field. A lone empty `t/` clears the tags.
pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentMap::tokenize(args, &Prefix::ALL);
    let field = |kind| ParseError::new(kind, edit::USAGE);

    if args.preamble().is_empty() {
        return Err(ParseError::invalid_format(edit::USAGE));
    }
    let index = parse_index(args.preamble()).map_err(field)?;

    let mut edits = ItemDescriptor::new();
    if let Some(raw) = args.value(Prefix::Name) {
        edits = edits.with_name(parse_name(raw).map_err(field)?);
    }
    if let Some(raw) = args.value(Prefix::Id) {
        edits = edits.with_id(parse_id(raw).map_err(field)?);
    }
    if let Some(raw) = args.value(Prefix::Count) {
        edits = edits.with_count(parse_count(raw).map_err(field)?);
    }
    match args.all_values(Prefix::Tag).as_slice() {
        [] => {}
        [""] => edits = edits.with_tags([]),
        raw => edits = edits.with_tags(parse_tags(raw.iter().copied()).map_err(field)?),
    }

    if edits == ItemDescriptor::new() {
        return Err(field(ParseErrorKind::NothingToEdit));
    }
    Ok(Command::Edit(EditCommand::new(index, edits)))
}

pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(find::USAGE));
    }
    Ok(Command::Find(FindCommand::new(keywords)))
}

pub fn parse_list_transactions(args: &str) -> Result<Command, ParseError> {
    Ok(Command::ListTransactions(ListTransactionsCommand::containing(args)))
}
