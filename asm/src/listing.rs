use color_print::cprintln;

use crate::pass1::PassOne;
use crate::pass2::PassTwo;

/// Intermediate listing: one address-tagged line per statement, closed by
/// the synthetic END line at the final address.
pub fn intermediate(pass: &PassOne) -> String {
    let mut out = String::new();
    for rec in &pass.inter {
        out.push_str(&format!(
            "{:04X}\t{}\t{}\t{}\n",
            rec.addr, rec.line.label, rec.line.opcode, rec.line.operand
        ));
    }
    out
}

/// Symbol table listing in insertion order.
pub fn symbol_table(pass: &PassOne) -> String {
    let mut out = String::new();
    for (label, addr) in pass.symtab.iter() {
        out.push_str(&format!("{}: {:X}\n", label, addr));
    }
    out
}

/// Output table listing with the generated code column.
pub fn output_table(pass: &PassTwo) -> String {
    let mut out = String::new();
    for rec in &pass.output {
        out.push_str(&format!(
            "{:04X}\t{}\t{}\t{}\t{}\n",
            rec.addr, rec.line.label, rec.line.opcode, rec.line.operand, rec.code
        ));
    }
    out
}

/// Colored dump of every artifact, in pass order.
pub fn dump(p1: &PassOne, p2: &PassTwo) {
    cprintln!("<bold>Symbol Table</>");
    for (label, addr) in p1.symtab.iter() {
        cprintln!("  <green>{:04X}</> {}", addr, label);
    }

    cprintln!("<bold>Intermediate Program</>");
    for rec in &p1.inter {
        cprintln!(
            "  <green>{:04X}</> | {:<8} <red>{:<6}</> {}",
            rec.addr,
            rec.line.label,
            rec.line.opcode,
            rec.line.operand
        );
    }

    cprintln!("<bold>Output Table</>");
    for rec in &p2.output {
        cprintln!(
            "  <green>{:04X}</> | {:<8} <red>{:<6}</> {:<10} <yellow>{}</>",
            rec.addr,
            rec.line.label,
            rec.line.opcode,
            rec.line.operand,
            rec.code
        );
    }

    cprintln!("<bold>Object Program</>");
    for record in &p2.records {
        println!("  {}", record.cformat());
    }
}
