#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = rangebench::fuzzing::resolve_config_from_json(data) {
        debug_assert!(config.workers.get() >= 1);
        debug_assert!(config.bounds.file_units.min() <= config.bounds.file_units.max());
        debug_assert!(config.bounds.block_units.min() <= config.bounds.block_units.max());
        debug_assert!(config.mode.max_attempts() >= 1);
    }
});
