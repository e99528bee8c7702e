#![no_main]

use libfuzzer_sys::fuzz_target;
use navwalker::escaping::{escape_attr, escape_url};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let url = escape_url(raw);
        assert!(!url.contains('"'));
        assert!(!url.contains('<'));
        assert_eq!(escape_attr(&url), url);
    }
});
