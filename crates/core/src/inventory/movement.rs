//! Stock movements and the arithmetic that applies them.

use serde::{Deserialize, Serialize};

use super::error::InventoryError;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    /// Goods received; quantity goes up.
    #[serde(rename = "IN")]
    In,
    /// Goods issued; quantity goes down.
    #[serde(rename = "OUT")]
    Out,
}

impl MovementType {
    /// Returns the uppercase name used in storage and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MovementType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(Self::In),
            "OUT" => Ok(Self::Out),
            _ => Err(InventoryError::InvalidMovementType(s.to_string())),
        }
    }
}

/// A validated movement: a direction and a positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    quantity: i32,
    movement_type: MovementType,
}

impl Movement {
    /// Creates a movement.
    ///
    /// Takes an `i64` so oversized request values are rejected here instead
    /// of wrapping.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NonPositiveQuantity` if `quantity <= 0`, and
    /// `InventoryError::QuantityTooLarge` if it does not fit the stock column.
    pub fn new(quantity: i64, movement_type: MovementType) -> Result<Self, InventoryError> {
        if quantity <= 0 {
            return Err(InventoryError::NonPositiveQuantity(quantity));
        }
        let quantity =
            i32::try_from(quantity).map_err(|_| InventoryError::QuantityTooLarge(quantity))?;

        Ok(Self {
            quantity,
            movement_type,
        })
    }

    /// Shorthand for an IN movement.
    ///
    /// # Errors
    ///
    /// See [`Movement::new`].
    pub fn inbound(quantity: i64) -> Result<Self, InventoryError> {
        Self::new(quantity, MovementType::In)
    }

    /// Shorthand for an OUT movement.
    ///
    /// # Errors
    ///
    /// See [`Movement::new`].
    pub fn outbound(quantity: i64) -> Result<Self, InventoryError> {
        Self::new(quantity, MovementType::Out)
    }

    /// Magnitude, always positive.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Direction.
    #[must_use]
    pub const fn movement_type(&self) -> MovementType {
        self.movement_type
    }

    /// Change recorded in the transaction log: `+q` for IN, `-q` for OUT.
    #[must_use]
    pub const fn signed_change(&self) -> i32 {
        match self.movement_type {
            MovementType::In => self.quantity,
            MovementType::Out => -self.quantity,
        }
    }

    /// Applies the movement to `current` and returns the new quantity.
    ///
    /// OUT movements that exceed `current` are rejected, never clamped.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InsufficientStock` for an OUT larger than
    /// `current`, and `InventoryError::QuantityOverflow` for an IN that does
    /// not fit.
    pub fn apply(&self, current: i32) -> Result<i32, InventoryError> {
        match self.movement_type {
            MovementType::In => {
                current
                    .checked_add(self.quantity)
                    .ok_or(InventoryError::QuantityOverflow {
                        current,
                        requested: self.quantity,
                    })
            }
            MovementType::Out => {
                if current < self.quantity {
                    Err(InventoryError::InsufficientStock {
                        available: current,
                        requested: self.quantity,
                    })
                } else {
                    Ok(current - self.quantity)
                }
            }
        }
    }
}
