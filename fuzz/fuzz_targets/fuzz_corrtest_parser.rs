#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode the way parse_file does; the parser must reject bad input
    // with an error and never panic
    let content = String::from_utf8_lossy(data);
    if let Ok(dataset) = corrbook::corrtest::parse_str(&content) {
        let rows = dataset.row_count();
        assert!(dataset.columns.iter().all(|c| c.len() <= rows));
    }
});
