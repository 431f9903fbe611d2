use super::types::*;
use crate::client::{Client, ClientError, Page, PageParams, QueryParams};

impl Client {
    /// List ledgers (`GET /ledgers`).
    pub async fn list_ledgers(&self, page: &PageParams) -> Result<Page<Ledger>, ClientError> {
        self.get(self.endpoint(&["ledgers"])?, &page.into()).await
    }

    /// Create an empty ledger (`POST /ledgers` with body `{}`).
    pub async fn create_ledger(&self) -> Result<Ledger, ClientError> {
        self.create_ledger_with(&CreateLedgerRequest::default()).await
    }

    /// Create a ledger carrying custom data.
    pub async fn create_ledger_with(
        &self,
        request: &CreateLedgerRequest,
    ) -> Result<Ledger, ClientError> {
        self.post(self.endpoint(&["ledgers"])?, request).await
    }

    /// Delete a ledger with all its accounts and transactions (`DELETE /ledgers/{id}`).
    ///
    /// Returns the deleted ledger.
    pub async fn delete_ledger(&self, ledger_id: &str) -> Result<Ledger, ClientError> {
        self.delete(self.endpoint(&["ledgers", ledger_id])?).await
    }

    /// List the accounts of a ledger (`GET /ledgers/{id}/accounts`).
    pub async fn list_ledger_accounts(
        &self,
        ledger_id: &str,
        page: &PageParams,
    ) -> Result<Page<LedgerAccount>, ClientError> {
        self.get(self.endpoint(&["ledgers", ledger_id, "accounts"])?, &page.into())
            .await
    }

    /// Create an account (`POST /ledgers/{id}/accounts`).
    pub async fn create_ledger_account(
        &self,
        ledger_id: &str,
        request: &CreateLedgerAccountRequest,
    ) -> Result<LedgerAccount, ClientError> {
        self.post(self.endpoint(&["ledgers", ledger_id, "accounts"])?, request)
            .await
    }

    /// List the transactions of a ledger (`GET /ledgers/{id}/transactions`).
    pub async fn list_ledger_transactions(
        &self,
        ledger_id: &str,
        page: &PageParams,
    ) -> Result<Page<LedgerTransaction>, ClientError> {
        self.get(
            self.endpoint(&["ledgers", ledger_id, "transactions"])?,
            &page.into(),
        )
        .await
    }

    /// Book a transaction (`POST /ledgers/{id}/transactions`).
    pub async fn create_ledger_transaction(
        &self,
        ledger_id: &str,
        request: &CreateLedgerTransactionRequest,
    ) -> Result<LedgerTransaction, ClientError> {
        self.post(
            self.endpoint(&["ledgers", ledger_id, "transactions"])?,
            request,
        )
        .await
    }

    /// Archive a transaction (`DELETE /ledgers/{id}/transactions/{number}`).
    ///
    /// Nothing is deleted: the service books a new transaction that reverses
    /// `transaction_number` and returns that new transaction. The original
    /// stays in the ledger so the audit trail is complete.
    pub async fn archive_ledger_transaction(
        &self,
        ledger_id: &str,
        transaction_number: u64,
    ) -> Result<LedgerTransaction, ClientError> {
        let number = transaction_number.to_string();
        self.delete(self.endpoint(&["ledgers", ledger_id, "transactions", number.as_str()])?)
            .await
    }

    /// Account balances over a date range (`GET /ledgers/{id}/balances`).
    pub async fn list_ledger_balances(
        &self,
        ledger_id: &str,
        range: &BalanceRange,
    ) -> Result<Page<LedgerBalance>, ClientError> {
        self.get(
            self.endpoint(&["ledgers", ledger_id, "balances"])?,
            &QueryParams::from(range),
        )
        .await
    }
}
