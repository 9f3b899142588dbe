#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for line in text.lines() {
            if let Some(rec) = symaddr::symbols::parse_line(line) {
                assert!(rec.address <= 0xffff_ffff);
            }
        }
    }
});
