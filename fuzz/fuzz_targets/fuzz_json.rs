#![no_main]

use libfuzzer_sys::fuzz_target;
use vanilla_farm_portal::io::read_snapshot_json_from_bytes;

fuzz_target!(|data: &[u8]| {
    if let Ok(snapshot) = read_snapshot_json_from_bytes(data) {
        for farm in &snapshot.farms {
            assert!(farm.validate_all().is_empty());
        }
    }
});
