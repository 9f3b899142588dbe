#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(mut program) = symaddr::core::Program::from_json_str(text) {
        let table = symaddr::SymbolTable::new();
        let _ = symaddr::analysis::propagate_addresses(&table, &mut program);
    }
});
