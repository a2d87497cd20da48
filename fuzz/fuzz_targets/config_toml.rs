#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = rangebench::fuzzing::resolve_config_from_toml(input) {
            debug_assert!(config.workers.get() >= 1);
            debug_assert!(config.bounds.file_units.min() >= 1);
            debug_assert!(config.bounds.block_units.min() >= 1);
            debug_assert!(!config.target.root().ends_with('/'));
        }
    }
});
