#![cfg(feature = "ledgers")]

mod common;

use chrono::NaiveDate;
use common::{MockResponse, MockServer};
use rechnungs_api::PageParams;
use rechnungs_api::ledgers::*;
use rust_decimal_macros::dec;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn transaction_json(number: u64, value: &str, reverses: Option<u64>) -> serde_json::Value {
    json!({
        "ledgerId": "led_1",
        "number": number,
        "date": "2024-05-02",
        "description": "Büromaterial",
        "positions": [{"debitAccount": "4400", "creditAccount": "1800", "value": value}],
        "reverses": reverses
    })
}

// ---------------------------------------------------------------------------
// Ledgers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_ledger_with_custom_data() {
    let server = MockServer::start(vec![MockResponse::json(
        201,
        json!({"id": "led_1", "customData": {"tenant": "acme"}}),
    )])
    .await;

    let ledger = server
        .client()
        .create_ledger_with(&CreateLedgerRequest {
            custom_data: Some(json!({"tenant": "acme"})),
        })
        .await
        .unwrap();
    assert_eq!(ledger.custom_data, Some(json!({"tenant": "acme"})));
    assert_eq!(
        server.single_request().json(),
        json!({"customData": {"tenant": "acme"}})
    );
}

#[tokio::test]
async fn delete_ledger_returns_deleted_record() {
    let server = MockServer::start(vec![MockResponse::json(200, json!({"id": "led_1"}))]).await;

    let ledger = server.client().delete_ledger("led_1").await.unwrap();
    assert_eq!(ledger.id, "led_1");

    let req = server.single_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.target, "/api/v1/ledgers/led_1");
    assert!(req.body.is_empty());
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_list_accounts() {
    let server = MockServer::start(vec![
        MockResponse::json(
            201,
            json!({"ledgerId": "led_1", "number": "1800", "type": "assets", "name": "Bank"}),
        ),
        MockResponse::json(
            200,
            json!({"data": [{"number": "1800", "type": "assets", "name": "Bank"}], "cursor": "next"}),
        ),
    ])
    .await;
    let client = server.client();

    let account = client
        .create_ledger_account(
            "led_1",
            &CreateLedgerAccountRequest::new("1800", AccountType::Assets, "Bank"),
        )
        .await
        .unwrap();
    assert_eq!(account.account_type, AccountType::Assets);

    let page = client
        .list_ledger_accounts("led_1", &PageParams::new().limit(50).cursor("abc"))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.cursor.as_deref(), Some("next"));

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path(), "/api/v1/ledgers/led_1/accounts");
    assert_eq!(
        requests[0].json(),
        json!({"number": "1800", "type": "assets", "name": "Bank"})
    );
    assert_eq!(requests[1].method, "GET");
    assert_eq!(requests[1].query(), Some("limit=50&cursor=abc"));
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn archive_uses_delete_and_returns_reversal() {
    let server = MockServer::start(vec![MockResponse::json(
        200,
        transaction_json(2, "-100", Some(1)),
    )])
    .await;

    let reversal = server
        .client()
        .archive_ledger_transaction("led_1", 1)
        .await
        .unwrap();
    assert_ne!(reversal.number, 1);
    assert_eq!(reversal.reverses, Some(1));
    assert!(reversal.is_reversal());
    assert_eq!(reversal.positions[0].value, dec!(-100));

    let req = server.single_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.target, "/api/v1/ledgers/led_1/transactions/1");
}

#[tokio::test]
async fn list_transactions_paginates() {
    let server = MockServer::start(vec![MockResponse::json(
        200,
        json!({"data": [transaction_json(1, "100", None)]}),
    )])
    .await;

    let page = server
        .client()
        .list_ledger_transactions("led_1", &PageParams::new().cursor("opaque=="))
        .await
        .unwrap();
    assert_eq!(page.data[0].number, 1);
    assert!(!page.data[0].is_reversal());
    assert_eq!(server.single_request().query(), Some("cursor=opaque%3D%3D"));
}

#[tokio::test]
async fn balances_without_range_send_no_query() {
    let server = MockServer::start(vec![MockResponse::json(200, json!({"data": []}))]).await;

    server
        .client()
        .list_ledger_balances("led_1", &BalanceRange::all())
        .await
        .unwrap();
    assert_eq!(server.single_request().target, "/api/v1/ledgers/led_1/balances");
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bookkeeping_round_trip() {
    let server = MockServer::start(vec![
        MockResponse::json(201, json!({"id": "led_1"})),
        MockResponse::json(
            201,
            json!({"ledgerId": "led_1", "number": "1800", "type": "assets", "name": "Bank"}),
        ),
        MockResponse::json(
            201,
            json!({"ledgerId": "led_1", "number": "4400", "type": "expenses", "name": "Büromaterial"}),
        ),
        MockResponse::json(201, transaction_json(1, "100", None)),
        MockResponse::json(200, json!({"data": [transaction_json(1, "100", None)]})),
        MockResponse::json(
            200,
            json!({"data": [
                {"accountNumber": "1800", "debit": "0", "credit": "100", "balance": "-100"},
                {"accountNumber": "4400", "debit": "100", "credit": "0", "balance": "100"}
            ]}),
        ),
    ])
    .await;
    let client = server.client();

    let ledger = client.create_ledger().await.unwrap();
    client
        .create_ledger_account(
            &ledger.id,
            &CreateLedgerAccountRequest::new("1800", AccountType::Assets, "Bank"),
        )
        .await
        .unwrap();
    client
        .create_ledger_account(
            &ledger.id,
            &CreateLedgerAccountRequest::new("4400", AccountType::Expenses, "Büromaterial"),
        )
        .await
        .unwrap();

    let request = LedgerTransactionBuilder::new(date(2024, 5, 2))
        .description("Büromaterial")
        .position("4400", "1800", dec!(100))
        .build()
        .unwrap();
    let booked = client
        .create_ledger_transaction(&ledger.id, &request)
        .await
        .unwrap();
    assert_eq!(booked.number, 1);

    let transactions = client
        .list_ledger_transactions(&ledger.id, &PageParams::new())
        .await
        .unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transactions.data[0].positions,
        vec![Position::new("4400", "1800", dec!(100))]
    );

    let balances = client
        .list_ledger_balances(
            &ledger.id,
            &BalanceRange::between(date(2024, 5, 1), date(2024, 5, 31)),
        )
        .await
        .unwrap();
    let expenses = balances
        .data
        .iter()
        .find(|b| b.account_number == "4400")
        .unwrap();
    assert_eq!(expenses.debit, dec!(100));
    assert_eq!(expenses.balance, dec!(100));

    let requests = server.requests();
    assert_eq!(requests.len(), 6);
    assert_eq!(
        requests[3].json(),
        json!({
            "date": "2024-05-02",
            "description": "Büromaterial",
            "positions": [{"debitAccount": "4400", "creditAccount": "1800", "value": "100"}]
        })
    );
    assert_eq!(
        requests[5].target,
        "/api/v1/ledgers/led_1/balances?startDate=2024-05-01&endDate=2024-05-31"
    );
}
