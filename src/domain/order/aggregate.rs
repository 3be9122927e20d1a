use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::commands::OrderCommand;
use super::errors::OrderError;

// ============================================================================
// Order - the record behind the order form
// ============================================================================

/// Current state of the cake order.
///
/// An order that was never written is `Order::default()`: every field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub name: Option<String>,
    pub cake_type: Option<String>,
    #[serde(default)]
    pub fillings: Vec<String>,

    // Audit Trail
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Apply a command to the field group it targets.
    ///
    /// Fields outside that group are left exactly as they were. A command
    /// that fails validation leaves the order untouched.
    pub fn apply(&mut self, command: OrderCommand) -> Result<(), OrderError> {
        command.validate()?;

        match command {
            OrderCommand::SetName { name } => self.name = Some(name),
            OrderCommand::SetCakeType { cake_type } => self.cake_type = Some(cake_type),
            OrderCommand::SetFillings { fillings } => self.fillings = fillings,
        }

        Ok(())
    }

    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn cake_type_text(&self) -> &str {
        self.cake_type.as_deref().unwrap_or_default()
    }

    pub fn fillings_text(&self) -> String {
        self.fillings.join(", ")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
