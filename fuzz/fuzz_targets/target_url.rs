#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (root, para) = input.split_once('\n').unwrap_or((input, ""));
    if let Ok(url) = rangebench::fuzzing::target_url_input(root, para, 10) {
        debug_assert!(url.starts_with("http://") || url.starts_with("https://"));
        debug_assert!(url.contains("/10M"));
        debug_assert!(!url.ends_with('?'));
    }
});
