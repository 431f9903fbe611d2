#![no_main]

use libfuzzer_sys::fuzz_target;
use rechnungs_api::Page;
use rechnungs_api::documents::Document;
use rechnungs_api::ledgers::{Ledger, LedgerAccount, LedgerBalance, LedgerTransaction};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bodies must fail cleanly, never panic.
    let _ = serde_json::from_slice::<Document>(data);
    let _ = serde_json::from_slice::<Page<Ledger>>(data);
    let _ = serde_json::from_slice::<Page<LedgerAccount>>(data);
    let _ = serde_json::from_slice::<Page<LedgerBalance>>(data);
    if let Ok(tx) = serde_json::from_slice::<LedgerTransaction>(data) {
        let json = serde_json::to_vec(&tx).unwrap();
        let _ = serde_json::from_slice::<LedgerTransaction>(&json).unwrap();
    }
});
