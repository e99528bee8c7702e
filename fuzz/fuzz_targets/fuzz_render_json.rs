#![no_main]

use libfuzzer_sys::fuzz_target;
use navwalker::{diagnose, mark_current, render, MenuItem};

fuzz_target!(|data: &[u8]| {
    if let Ok(mut items) = serde_json::from_slice::<Vec<MenuItem>>(data) {
        // Any parent graph must render and diagnose without panicking
        let _ = diagnose(&items);
        let url = items.first().map(|item| item.url.clone()).unwrap_or_default();
        mark_current(&mut items, &url);
        let html = render(&items);
        assert_eq!(html.matches("<li ").count(), items.len());
    }
});
