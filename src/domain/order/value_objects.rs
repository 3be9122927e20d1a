use uuid::Uuid;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Identifier of a stored order record.
///
/// Every route works against [`OrderKey::CURRENT`]; the key only exists so the
/// store never has to guess which record is "the" order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderKey(Uuid);

impl OrderKey {
    /// The single order this application tracks.
    pub const CURRENT: OrderKey = OrderKey(Uuid::nil());

    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// An entry of the menu offered by the order form.
///
/// `id` doubles as the DOM id of the form control, `label` is the value that
/// gets submitted and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CAKE_TYPES: &[MenuOption] = &[
    MenuOption { id: "whole-wheat", label: "Whole wheat" },
    MenuOption { id: "white", label: "White" },
    MenuOption { id: "chocolate", label: "Chocolate" },
];

pub const FILLINGS: &[MenuOption] = &[
    MenuOption { id: "strawberries", label: "Strawberries" },
    MenuOption { id: "banana", label: "Banana" },
    MenuOption { id: "chocolate-chips", label: "Chocolate chips" },
    MenuOption { id: "sprinkles", label: "Sprinkles" },
];

// ============================================================================
// Unit Tests
// ============================================================================
