//! Bank account ledger type
//!
//! A single-owner balance with deposit and withdrawal. Overdrawing is a
//! [`DomainError::InsufficientFunds`]; the balance is untouched on failure.

use crate::error::{DomainError, Result};

/// A named account holding a balance
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    owner: String,
    balance: f64,
}

impl BankAccount {
    /// Open an account with a zero balance
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_balance(owner, 0.0)
    }

    /// Open an account with an initial balance
    pub fn with_balance(owner: impl Into<String>, balance: f64) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }

    /// Account owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add to the balance, returning the new balance
    pub fn deposit(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        self.balance
    }

    /// Remove from the balance, returning the new balance
    ///
    /// Fails without mutating when the amount exceeds the balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        if amount > self.balance {
            return Err(DomainError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            }
            .into());
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
