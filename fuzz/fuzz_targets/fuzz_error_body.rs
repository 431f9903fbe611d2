#![no_main]

use libfuzzer_sys::fuzz_target;
use rechnungs_api::ClientError;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let err = ClientError::request_failed(400, s);
        assert_eq!(err.status(), Some(400));
        assert!(err.body().is_some());
        let _ = err.message();
        let _ = err.to_string();
    }
});
