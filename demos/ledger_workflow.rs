//! Books a single expense and prints the resulting balances.
//!
//! Run with: `RECHNUNGS_API_KEY=... cargo run --example ledger_workflow`

use chrono::NaiveDate;
use rechnungs_api::ledgers::*;
use rechnungs_api::{ClientBuilder, ClientError, PageParams};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    let client = ClientBuilder::from_env()?.build()?;

    // ── 1. Ledger with a bank and an expense account ─────────────────
    let ledger = client.create_ledger().await?;
    println!("Created ledger {}", ledger.id);

    for account in [
        CreateLedgerAccountRequest::new("1800", AccountType::Assets, "Bank"),
        CreateLedgerAccountRequest::new("4400", AccountType::Expenses, "Büromaterial"),
    ] {
        let created = client.create_ledger_account(&ledger.id, &account).await?;
        println!("  account {} ({:?}) {}", created.number, created.account_type, created.name);
    }

    // ── 2. Book and list ──────────────────────────────────────────────
    let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let request = LedgerTransactionBuilder::new(date)
        .description("Büromaterial")
        .position("4400", "1800", dec!(100))
        .build()?;
    let booked = client.create_ledger_transaction(&ledger.id, &request).await?;
    println!("Booked transaction #{}", booked.number);

    let transactions = client
        .list_ledger_transactions(&ledger.id, &PageParams::new())
        .await?;
    println!("{} transaction(s) in ledger", transactions.len());

    // ── 3. Balances ───────────────────────────────────────────────────
    let balances = client
        .list_ledger_balances(&ledger.id, &BalanceRange::between(date, date))
        .await?;
    for balance in &balances.data {
        println!(
            "  {}: debit={} credit={} balance={}",
            balance.account_number, balance.debit, balance.credit, balance.balance
        );
    }

    // ── 4. Reverse instead of delete ──────────────────────────────────
    let reversal = client
        .archive_ledger_transaction(&ledger.id, booked.number)
        .await?;
    println!(
        "Archived #{} via reversing transaction #{}",
        booked.number, reversal.number
    );

    client.delete_ledger(&ledger.id).await?;
    Ok(())
}
