//! Fuzz target for date formatting.
//!
//! Tests that format_date() never panics and always yields DD.MM.YYYY.

#![no_main]

use bank_widget::format_date;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(formatted) = format_date(data) {
        let bytes = formatted.as_bytes();
        assert_eq!(bytes.len(), 10);
        assert_eq!((bytes[2], bytes[5]), (b'.', b'.'));
    }
});
