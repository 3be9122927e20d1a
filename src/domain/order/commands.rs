use super::errors::OrderError;

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

/// A change to one field group of the order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    SetName { name: String },
    SetCakeType { cake_type: String },
    SetFillings { fillings: Vec<String> },
}

impl OrderCommand {
    /// Business rules checked before anything is read or written.
    pub fn validate(&self) -> Result<(), OrderError> {
        match self {
            OrderCommand::SetName { name } if name.trim().is_empty() => {
                Err(OrderError::NameRequired)
            }
            OrderCommand::SetCakeType { cake_type } if cake_type.trim().is_empty() => {
                Err(OrderError::CakeTypeRequired)
            }
            _ => Ok(()),
        }
    }

    /// Name of the order field this command touches, used in logs and metrics.
    pub fn field(&self) -> &'static str {
        match self {
            OrderCommand::SetName { .. } => "name",
            OrderCommand::SetCakeType { .. } => "cakeType",
            OrderCommand::SetFillings { .. } => "fillings",
        }
    }
}
