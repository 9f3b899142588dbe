use std::path::Path;

use symaddr::analysis::{extract_symbols_with, SymbolExtractor};
use symaddr::config::ExtractConfig;
use symaddr::core::{Block, MachineFunction, Program};
use symaddr::io::{CannedLines, DumpFile};
use symaddr::symbols::{parse_line, SymbolTable, TextSections};

const SYMBOLS: &str = "tests/data/hello.symbols";
const PROGRAM: &str = "tests/data/hello.program.json";

fn block_addrs(f: &MachineFunction) -> Vec<Option<u64>> {
    f.blocks.iter().map(|b| b.address).collect()
}

fn instr_addrs(b: &Block) -> Vec<Option<u64>> {
    b.instructions.iter().map(|i| i.address).collect()
}

fn run_fixture(program: &mut Program) -> symaddr::PropagationReport {
    let mut extractor = SymbolExtractor::new(ExtractConfig::default());
    extract_symbols_with(
        &mut extractor,
        DumpFile::new(SYMBOLS),
        Path::new("hello.elf"),
        program,
    )
    .expect("extraction from captured dump")
}

#[test]
fn parse_example_row() {
    let rec = parse_line("00001040 g     F .text\t00000010 main").unwrap();
    assert_eq!(rec.address, 4160);
    assert_eq!(rec.section, ".text");
    assert_eq!(rec.label, "main");
}

#[test]
fn rodata_rows_are_filtered() {
    let lines = [
        "00001040 g     F .text\t00000010 main",
        "00002000 g     O .rodata\t00000004 msg",
    ];
    let (table, _) = SymbolTable::from_lines(lines, &TextSections::default());
    assert_eq!(table.get("main"), Some(0x1040));
    assert!(!table.contains("msg"));
}

#[test]
fn fixture_program_is_annotated() {
    let mut program = Program::from_file(PROGRAM).unwrap();
    let report = run_fixture(&mut program);

    assert_eq!(report.functions_annotated, 2);
    assert_eq!(report.functions_skipped, vec!["2/missing".to_string()]);

    // entry label, one inferred block, one labeled block
    let f0 = &program.machine_functions[0];
    assert_eq!(
        block_addrs(f0),
        vec![Some(0x20000), Some(0x20010), Some(0x20030)]
    );
    assert_eq!(
        instr_addrs(&f0.blocks[0]),
        vec![Some(0x20000), Some(0x20004), Some(0x20008)]
    );
    assert_eq!(instr_addrs(&f0.blocks[1]), vec![Some(0x20010), Some(0x20014)]);

    // no .LBB1_0, so the entry comes from `mapsto`
    let f1 = &program.machine_functions[1];
    assert_eq!(block_addrs(f1), vec![Some(0x20060), Some(0x20080)]);
    assert_eq!(instr_addrs(&f1.blocks[0]), vec![Some(0x20060), Some(0x20064)]);

    // .LBB2_0 lives in .rodata and must not resolve
    let f2 = &program.machine_functions[2];
    assert_eq!(block_addrs(f2), vec![None]);
    assert_eq!(instr_addrs(&f2.blocks[0]), vec![None]);
}

#[test]
fn instruction_addresses_are_contiguous_within_blocks() {
    let mut program = Program::from_file(PROGRAM).unwrap();
    run_fixture(&mut program);

    for f in program.machine_functions.iter().take(2) {
        for b in &f.blocks {
            assert_eq!(b.instructions[0].address, b.address);
            for pair in b.instructions.windows(2) {
                assert_eq!(pair[1].address, pair[0].end_address());
            }
        }
    }
}

#[test]
fn cursor_and_override_example() {
    let lines = ["00001000 g     F .text\t00000000 f"];
    let mut program = Program::new(vec![MachineFunction::new("9", Some("f".to_string()))
        .with_block(Block::with_sizes(0, &[4, 4, 8]))
        .with_block(Block::with_sizes(1, &[4]))]);

    let mut extractor = SymbolExtractor::new(ExtractConfig::default());
    extractor.ingest(lines);
    extractor.update_program(&mut program);
    let f = &program.machine_functions[0];
    assert_eq!(
        instr_addrs(&f.blocks[0]),
        vec![Some(0x1000), Some(0x1004), Some(0x1008)]
    );
    assert_eq!(f.blocks[1].instructions[0].address, Some(0x1010));

    // with a label on the second block the inherited cursor is ignored
    extractor.ingest(["00002000 l       .text\t00000000 .LBB9_1"]);
    extractor.update_program(&mut program);
    let f = &program.machine_functions[0];
    assert_eq!(f.blocks[1].address, Some(0x2000));
    assert_eq!(f.blocks[1].instructions[0].address, Some(0x2000));
}

#[test]
fn rerunning_on_annotated_document_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.json");

    let mut program = Program::from_file(PROGRAM).unwrap();
    run_fixture(&mut program);
    program.to_file(&path).unwrap();

    let mut again = Program::from_file(&path).unwrap();
    run_fixture(&mut again);
    assert_eq!(program, again);
}

#[test]
fn unrelated_metadata_survives_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    let mut program = Program::from_file(PROGRAM).unwrap();
    run_fixture(&mut program);
    program.to_file(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["triple"], "patmos-unknown-unknown-elf");
    let f0 = &value["machine-functions"][0];
    assert_eq!(f0["name"], serde_json::json!(0));
    assert_eq!(f0["blocks"][2]["name"], serde_json::json!(2));
    assert_eq!(f0["level"], "machinecode");
    assert_eq!(f0["blocks"][0]["successors"][0], 1);
    assert_eq!(f0["blocks"][1]["instructions"][1]["branch-type"], "unconditional");
    assert_eq!(f0["blocks"][1]["address"], 0x20010);
    // unresolved blocks stay without an address key
    assert!(value["machine-functions"][2]["blocks"][0]
        .get("address")
        .is_none());
}

#[test]
fn canned_lines_drive_the_pipeline() {
    let source = CannedLines::new(["00000400 g     F .text\t00000008 start"]);
    let mut program = Program::new(vec![
        MachineFunction::new("0", Some("start".to_string())).with_block(Block::with_sizes(0, &[8]))
    ]);
    let mut extractor = SymbolExtractor::new(ExtractConfig::default());
    let report =
        extract_symbols_with(&mut extractor, source, Path::new("x.elf"), &mut program).unwrap();
    assert_eq!(report.instructions_annotated, 1);
    assert_eq!(program.machine_functions[0].blocks[0].address, Some(0x400));
}

#[test]
fn numeric_names_stay_numbers_in_written_document() {
    let doc = r#"{"machine-functions": [
        {"name": 7, "mapsto": "f", "blocks": [
            {"name": 0, "instructions": [{"index": 0, "size": 4}]},
            {"name": "1", "instructions": [{"index": 0, "size": 4}]}
        ]}
    ]}"#;
    let mut program = Program::from_json_str(doc).unwrap();
    let source = CannedLines::new([
        "00001000 g     F .text\t00000008 f",
        "00001100 l       .text\t00000000 .LBB7_1",
    ]);
    let mut extractor = SymbolExtractor::new(ExtractConfig::default());
    extract_symbols_with(&mut extractor, source, Path::new("f.elf"), &mut program).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&program.to_json_string().unwrap()).unwrap();
    let f = &written["machine-functions"][0];
    assert_eq!(f["name"], serde_json::json!(7));
    assert_eq!(f["blocks"][0]["name"], serde_json::json!(0));
    assert_eq!(f["blocks"][1]["name"], serde_json::json!("1"));
    assert_eq!(f["blocks"][0]["address"], 0x1000);
    assert_eq!(f["blocks"][1]["address"], 0x1100);
}
