//! Semantic actions, keyed by rule identity.
//!
//! An action runs once per successful, committed match of its symbol; the
//! matcher journals `(symbol, span)` events and the parser replays them here
//! after the top rule commits. Symbols without an entry are no-ops and are
//! never journaled.

use crate::stylesheet::{Property, SheetBuilder};
use crate::symbol::Symbol;

/// True for the symbols that carry an action. Only these get journaled.
pub(crate) fn wants(symbol: Symbol) -> bool {
    matches!(
        symbol,
        Symbol::EncodingCharset
            | Symbol::Selector
            | Symbol::Property
            | Symbol::PropertyValue
            | Symbol::Important
            | Symbol::Declaration
            | Symbol::Ruleset
            | Symbol::Page
    )
}

/// Applies the action bound to `symbol`. `text` is the matched source text.
pub(crate) fn dispatch(builder: &mut SheetBuilder, symbol: Symbol, text: &str) {
    match symbol {
        Symbol::EncodingCharset => {
            // the matched text is the quoted string, quotes included
            builder.sheet.encoding = text[1..text.len() - 1].to_string();
        }

        // A comma-separated selector list fires this once per selector, so
        // the last one wins; the ruleset's declarations land under it.
        Symbol::Selector => {
            builder.accumulate.selector = text.trim_end().to_string();
        }

        Symbol::Property => {
            builder.accumulate.property.name = text.to_string();
        }

        Symbol::PropertyValue => {
            builder.accumulate.property.value = text.trim_end().to_string();
        }

        Symbol::Important => {
            builder.accumulate.property.important = true;
        }

        Symbol::Declaration => {
            let property = std::mem::take(&mut builder.accumulate.property);
            if !property.name.is_empty() {
                builder.accumulate.set.insert(property);
            }
        }

        Symbol::Ruleset => {
            let set = std::mem::take(&mut builder.accumulate.set);
            builder
                .sheet
                .properties
                .entry(builder.accumulate.selector.clone())
                .or_default()
                .merge(set);
        }

        // Page bodies parse but are not retained; the set must not leak
        // into the next ruleset.
        Symbol::Page => {
            builder.accumulate.set.clear();
            builder.accumulate.property = Property::default();
        }

        _ => {}
    }
}
