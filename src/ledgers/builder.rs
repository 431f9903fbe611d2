use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;
use crate::client::ClientError;

/// Builder for [`CreateLedgerTransactionRequest`].
///
/// ```
/// use chrono::NaiveDate;
/// use rechnungs_api::ledgers::LedgerTransactionBuilder;
/// use rust_decimal_macros::dec;
///
/// let request = LedgerTransactionBuilder::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
///     .description("Büromaterial")
///     .position("4400", "1800", dec!(100))
///     .build()
///     .unwrap();
/// assert_eq!(request.positions.len(), 1);
/// ```
pub struct LedgerTransactionBuilder {
    date: NaiveDate,
    description: Option<String>,
    positions: Vec<Position>,
}

impl LedgerTransactionBuilder {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            description: None,
            positions: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Debit `debit_account` and credit `credit_account` with `value`.
    pub fn position(
        mut self,
        debit_account: impl Into<String>,
        credit_account: impl Into<String>,
        value: Decimal,
    ) -> Self {
        self.positions
            .push(Position::new(debit_account, credit_account, value));
        self
    }

    pub fn add_position(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    /// # Errors
    ///
    /// Returns `ClientError::Builder` if no position was added.
    pub fn build(self) -> Result<CreateLedgerTransactionRequest, ClientError> {
        if self.positions.is_empty() {
            return Err(ClientError::Builder(
                "a transaction needs at least one position".into(),
            ));
        }
        Ok(CreateLedgerTransactionRequest {
            date: self.date,
            description: self.description,
            positions: self.positions,
        })
    }
}
