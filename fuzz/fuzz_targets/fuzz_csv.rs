#![no_main]

use libfuzzer_sys::fuzz_target;
use vanilla_farm_portal::io::{parse_farms_csv_lenient, read_farms_csv_from_bytes};

fuzz_target!(|data: &[u8]| {
    let strict = read_farms_csv_from_bytes(data);
    let lenient = parse_farms_csv_lenient(data);

    // Whatever the strict reader accepts, the lenient one accepts without issues.
    if let Ok(farms) = strict {
        let (lenient_farms, issues) = lenient.expect("lenient parse failed on valid input");
        assert_eq!(farms.len(), lenient_farms.len());
        assert!(issues.is_empty());
    }
});
