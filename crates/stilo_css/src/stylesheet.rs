use std::collections::HashMap;

/// Defines where a property came from. Everything starts as a user-agent
/// property at parse time; the cascade reassigns sources later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertySource {
    /// Browser/user agent defined stylesheets
    #[default]
    UserAgent,
    /// User defined stylesheets that override author and user agent styles
    User,
    /// Author defined stylesheets that are linked or embedded in the HTML
    Author,
    /// Values produced by a running animation
    Animation,
    /// Values produced by a running transition
    Transition,
}

/// A single declaration: a property name, its raw textual value (possibly a
/// multi-term expression or function call) and the `!important` flag.
#[derive(Clone, Debug, Default)]
pub struct Property {
    pub name: String,
    pub value: String,
    pub important: bool,
    pub source: PropertySource,
}

/// Two properties are equal when their names are equal; a ruleset keeps only
/// the last occurrence of each name.
impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Property {}

/// A mapping from property name to property; inserting overwrites. Iteration
/// order is not observable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertySet {
    map: HashMap<String, Property>,
}

impl PropertySet {
    pub fn insert(&mut self, property: Property) {
        self.map.insert(property.name.clone(), property);
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.map.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Folds another set into this one; same-named properties are replaced
    /// by the incoming ones.
    pub fn merge(&mut self, other: PropertySet) {
        self.map.extend(other.map);
    }
}

/// The parse result: created empty, mutated by actions while the grammar
/// matches, and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Stylesheet {
    /// Encoding named by a leading `@charset`, if any
    pub encoding: String,
    pub valid: bool,
    /// Selector text, verbatim from the source, to the declarations of every
    /// ruleset that completed under it
    pub properties: HashMap<String, PropertySet>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            valid: true,
            properties: HashMap::new(),
        }
    }
}

/// Transient per-parse state: the latched selector, the property being
/// built, and the set being assembled for the current ruleset.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    pub selector: String,
    pub property: Property,
    pub set: PropertySet,
}

/// Owns the stylesheet under construction plus the accumulator the action
/// dispatcher writes through. Scoped to one parse invocation.
#[derive(Debug, Default)]
pub(crate) struct SheetBuilder {
    pub sheet: Stylesheet,
    pub accumulate: Accumulator,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Stylesheet {
        debug_assert!(self.accumulate.property.name.is_empty());
        debug_assert!(self.accumulate.set.is_empty());
        let mut sheet = self.sheet;
        sheet.valid = true;
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_equality_is_by_name() {
        let red = Property {
            name: "color".to_string(),
            value: "red".to_string(),
            ..Default::default()
        };
        let blue = Property {
            name: "color".to_string(),
            value: "blue".to_string(),
            important: true,
            ..Default::default()
        };
        assert_eq!(red, blue);
    }

    #[test]
    fn insert_overwrites() {
        let mut set = PropertySet::default();
        set.insert(Property {
            name: "color".to_string(),
            value: "red".to_string(),
            ..Default::default()
        });
        set.insert(Property {
            name: "color".to_string(),
            value: "blue".to_string(),
            ..Default::default()
        });
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("color").map(|p| p.value.as_str()), Some("blue"));
    }

    #[test]
    fn merge_overwrites_on_collision() {
        let mut first = PropertySet::default();
        first.insert(Property {
            name: "margin".to_string(),
            value: "0".to_string(),
            ..Default::default()
        });
        first.insert(Property {
            name: "color".to_string(),
            value: "red".to_string(),
            ..Default::default()
        });

        let mut second = PropertySet::default();
        second.insert(Property {
            name: "color".to_string(),
            value: "blue".to_string(),
            ..Default::default()
        });

        first.merge(second);
        assert_eq!(first.len(), 2);
        assert_eq!(first.get("color").map(|p| p.value.as_str()), Some("blue"));
        assert_eq!(first.get("margin").map(|p| p.value.as_str()), Some("0"));
    }

    #[test]
    fn default_sheet() {
        let sheet = Stylesheet::default();
        assert_eq!(sheet.encoding, "utf-8");
        assert!(sheet.valid);
        assert!(sheet.properties.is_empty());
    }
}
