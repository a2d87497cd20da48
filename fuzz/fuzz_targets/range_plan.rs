#![no_main]

use libfuzzer_sys::fuzz_target;
use rangebench::plan::BlockUnit;

fn take_u64(data: &[u8], cursor: &mut usize) -> u64 {
    let mut bytes = [0u8; 8];
    for byte in &mut bytes {
        if let Some(value) = data.get(*cursor) {
            *byte = *value;
        }
        *cursor = cursor.saturating_add(1);
    }
    u64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    let mut cursor = 0usize;
    let seed = take_u64(data, &mut cursor);
    // Keep sizes small enough that byte counts never saturate.
    let file = (take_u64(data, &mut cursor) % 4096, take_u64(data, &mut cursor) % 4096);
    let block = (take_u64(data, &mut cursor) % 65536, take_u64(data, &mut cursor) % 65536);
    let block_unit = match data.get(cursor).map(|byte| byte % 3) {
        Some(1) => BlockUnit::Mib,
        Some(2) => BlockUnit::Kib,
        _ => BlockUnit::TenMib,
    };

    if let Some(plan) = rangebench::fuzzing::plan_range_input(seed, file, block, block_unit) {
        debug_assert!(plan.block_size_bytes >= 1);
        debug_assert!(plan.block_size_bytes <= plan.file_size_bytes);
        debug_assert_eq!(plan.end_offset, plan.start_offset + plan.block_size_bytes - 1);
        debug_assert!(plan.end_offset < plan.file_size_bytes);
        debug_assert_eq!(plan.range_header().is_none(), plan.is_whole_file());
    }
});
