use arch::optab::OpTab;
use arch::record::{Record, TEXT_CAP};
use sicasm::error::Error;
use sicasm::pass1::{pass_one, PassOne};
use sicasm::pass2::{pass_two, PassTwo, LOAD_ADDR};
use sicasm::{listing, Assembler};

const COPY: &str = "COPY START 1000
- LDA FIVE
FIVE WORD 5
- END";

fn assemble(src: &str) -> (PassOne, PassTwo) {
    let optab = OpTab::standard();
    let p1 = pass_one(src, &optab).unwrap();
    let p2 = pass_two(src, &optab, &p1).unwrap();
    (p1, p2)
}

fn code_of<'a>(p2: &'a PassTwo, opcode: &str) -> &'a str {
    &p2.output
        .iter()
        .find(|rec| rec.line.opcode == opcode)
        .unwrap()
        .code
}

fn texts(p2: &PassTwo) -> Vec<&arch::record::Text> {
    p2.records
        .iter()
        .filter_map(|rec| match rec {
            Record::Text(text) => Some(text),
            _ => None,
        })
        .collect()
}

#[test]
fn forward_reference_lands_after_the_instruction() {
    let (p1, _) = assemble(COPY);
    assert_eq!(p1.start, 0x1000);
    assert_eq!(p1.symtab.get("FIVE"), Some(0x1003));
}

#[test]
fn forward_reference_resolves_in_pass_two() {
    let (_, p2) = assemble(COPY);
    assert_eq!(code_of(&p2, "LDA"), "331003");
}

#[test]
fn program_length_is_the_width_sum() {
    let (p1, _) = assemble(COPY);
    // LDA (+3) and WORD (+3)
    assert_eq!(p1.length, 6);
}

#[test]
fn header_carries_start_and_length() {
    let (_, p2) = assemble(COPY);
    assert_eq!(p2.records[0].to_string(), "H^--^001000^000006");
}

#[test]
fn text_record_for_the_sample_program() {
    let (_, p2) = assemble(COPY);
    assert_eq!(p2.records[1].to_string(), "T^002000^06^331003^000005^");
}

#[test]
fn end_record_sits_at_the_load_address_not_start() {
    let (_, p2) = assemble(COPY);
    assert_eq!(*p2.records.last().unwrap(), Record::End { addr: LOAD_ADDR });
    assert_eq!(p2.records.last().unwrap().to_string(), "E^002000");

    // A different START moves the header but never the end record.
    let moved = COPY.replace("1000", "5000");
    let (_, p2) = assemble(&moved);
    assert_eq!(*p2.records.last().unwrap(), Record::End { addr: LOAD_ADDR });
}

#[test]
fn pass_one_is_idempotent() {
    let optab = OpTab::standard();
    let a = pass_one(COPY, &optab).unwrap();
    let b = pass_one(COPY, &optab).unwrap();
    assert_eq!(a, b);
}

#[test]
fn pass_two_requires_pass_one() {
    let asm = Assembler::new(OpTab::standard());
    assert!(matches!(asm.pass_two(COPY), Err(Error::PassOneNotRun)));

    let empty = PassOne::default();
    assert!(matches!(
        pass_two(COPY, &OpTab::standard(), &empty),
        Err(Error::PassOneNotRun)
    ));
}

#[test]
fn assembler_runs_both_passes_in_order() {
    let mut asm = Assembler::new(OpTab::standard());
    let p1 = asm.pass_one(COPY).unwrap();
    assert_eq!(p1.symtab.get("FIVE"), Some(0x1003));
    let p2 = asm.pass_two(COPY).unwrap();
    assert_eq!(code_of(&p2, "LDA"), "331003");
}

#[test]
fn byte_char_constant_spells_code_points() {
    let src = "P START 100
B BYTE C'EOF'
A WORD 1
- END";
    let (p1, p2) = assemble(src);
    assert_eq!(code_of(&p2, "BYTE"), "454F46");
    // Pass one advances a fixed 1 past BYTE; pass two advances the 3
    // generated bytes. The two counters disagree on purpose.
    assert_eq!(p1.symtab.get("A"), Some(0x101));
    let word = p2.output.iter().find(|r| r.line.opcode == "WORD").unwrap();
    assert_eq!(word.addr, LOAD_ADDR + 3);
}

#[test]
fn byte_hex_constant_passes_through() {
    let src = "P START 100
B BYTE X'F1'
- END";
    let (_, p2) = assemble(src);
    assert_eq!(code_of(&p2, "BYTE"), "F1");
}

#[test]
fn resw_reserves_without_code() {
    let src = "R START 1000
ONE RESW 2
TWO WORD 9
- END";
    let (p1, p2) = assemble(src);
    assert_eq!(p1.symtab.get("ONE"), Some(0x1000));
    assert_eq!(p1.symtab.get("TWO"), Some(0x1006));
    assert_eq!(code_of(&p2, "RESW"), "");
    // The text record opens where code actually begins.
    assert_eq!(p2.records[1].to_string(), "T^002006^03^000009^");
}

#[test]
fn text_records_never_exceed_the_cap() {
    let mut src = String::from("BIG START 100\n");
    for i in 0..12 {
        src.push_str(&format!("W{i} WORD {i}\n"));
    }
    src.push_str("- END");

    let (_, p2) = assemble(&src);
    let texts = texts(&p2);
    assert_eq!(texts.len(), 2);
    for text in &texts {
        assert!(text.bytes <= TEXT_CAP);
        let digits: usize = text.entries.iter().map(|e| e.len()).sum();
        assert_eq!(text.bytes as usize, digits / 2);
    }
    assert_eq!(texts[0].bytes, 30);
    assert_eq!(texts[1].bytes, 6);
    assert_eq!(texts[1].start, LOAD_ADDR + 30);
}

#[test]
fn duplicate_label_last_write_wins() {
    let src = "D START 100
L WORD 1
L WORD 2
- END";
    let (p1, _) = assemble(src);
    assert_eq!(p1.symtab.get("L"), Some(0x103));
    assert_eq!(p1.symtab.len(), 1);
    assert_eq!(p1.msgs.warns(), 1);
}

#[test]
fn malformed_lines_are_skipped_and_counted() {
    let src = "M START 100
X WORD
Y WORD 2
- END";
    let (p1, _) = assemble(src);
    assert_eq!(p1.symtab.get("X"), None);
    assert_eq!(p1.symtab.get("Y"), Some(0x100));
    assert_eq!(p1.msgs.warns(), 1);
    assert_eq!(p1.length, 3);
}

#[test]
fn unresolved_operand_falls_back_to_zero() {
    let src = "U START 100
- LDA NOWHERE
- END";
    let (_, p2) = assemble(src);
    assert_eq!(code_of(&p2, "LDA"), "330000");
}

#[test]
fn numeric_operand_renders_as_hex_address() {
    let src = "N START 100
- LDA 4096
- END";
    let (_, p2) = assemble(src);
    assert_eq!(code_of(&p2, "LDA"), "331000");
}

#[test]
fn negative_word_encodes_twos_complement() {
    let src = "W START 100
M WORD -1
- END";
    let (_, p2) = assemble(src);
    assert_eq!(code_of(&p2, "WORD"), "FFFFFF");
}

#[test]
fn missing_start_line_assembles_at_zero() {
    let src = "- LDA FIVE
FIVE WORD 5
- END";
    let (p1, p2) = assemble(src);
    assert_eq!(p1.start, 0);
    assert_eq!(p1.symtab.get("FIVE"), Some(3));
    assert_eq!(p2.records[0].to_string(), "H^--^000000^000006");
}

#[test]
fn bad_start_address_names_the_line() {
    let err = pass_one("P START GGG\n- END", &OpTab::standard()).unwrap_err();
    assert!(matches!(err, Error::BadStartAddress { line: 1, .. }));
}

#[test]
fn bad_reservation_count_names_the_line() {
    let src = "P START 100
Z RESW xyz
- END";
    let err = pass_one(src, &OpTab::standard()).unwrap_err();
    assert!(matches!(err, Error::BadCount { line: 2, .. }));
}

#[test]
fn bad_word_literal_names_the_line() {
    let src = "P START 100
Z WORD five
- END";
    let p1 = pass_one(src, &OpTab::standard()).unwrap();
    let err = pass_two(src, &OpTab::standard(), &p1).unwrap_err();
    assert!(matches!(err, Error::BadWord { line: 2, .. }));
}

#[test]
fn intermediate_listing_ends_with_the_synthetic_end() {
    let (p1, _) = assemble(COPY);
    assert_eq!(
        listing::intermediate(&p1),
        "1000\t-\tLDA\tFIVE\n1003\tFIVE\tWORD\t5\n1006\t-\tEND\t-\n"
    );
}

#[test]
fn symbol_listing_keeps_insertion_order() {
    let src = "P START 100
ZZZ WORD 1
AAA WORD 2
- END";
    let (p1, _) = assemble(src);
    assert_eq!(listing::symbol_table(&p1), "ZZZ: 100\nAAA: 103\n");
}

#[test]
fn output_table_has_one_row_per_statement() {
    let (_, p2) = assemble(COPY);
    let opcodes: Vec<&str> = p2.output.iter().map(|r| r.line.opcode.as_str()).collect();
    assert_eq!(opcodes, ["START", "LDA", "WORD", "-"]);
    assert_eq!(
        listing::output_table(&p2),
        "2000\tCOPY\tSTART\t1000\t\n2000\t-\tLDA\tFIVE\t331003\n2003\tFIVE\tWORD\t5\t000005\n2006\t-\t-\tEND\t\n"
    );
}

#[test]
fn object_program_joins_records_with_newlines() {
    let (_, p2) = assemble(COPY);
    assert_eq!(
        p2.object_program(),
        "H^--^001000^000006\nT^002000^06^331003^000005^\nE^002000"
    );
}
