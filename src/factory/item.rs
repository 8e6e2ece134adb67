// src/factory/item.rs
//! Items moving through the line

use std::fmt;

/// The three kinds of toy the floor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    Car,
    Doll,
    Ball,
}

impl ItemKind {
    /// All kinds, in tally display order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Car, ItemKind::Doll, ItemKind::Ball];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Car => "car",
            ItemKind::Doll => "doll",
            ItemKind::Ball => "ball",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One toy. Immutable once crafted; the id is globally unique, minted from
/// the factory's atomic sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub id: String,
}

impl Item {
    pub fn new(kind: ItemKind, id: String) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let item = Item::new(ItemKind::Ball, "ball-7".to_string());
        assert_eq!(item.to_string(), "ball ball-7");
        assert_eq!(ItemKind::Doll.to_string(), "doll");
    }
}
