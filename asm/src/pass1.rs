use arch::op::{Directive, Pseudo};
use arch::optab::OpTab;

use crate::error::Error;
use crate::msg::Msgs;
use crate::parser::{self, Scan, SourceLine, NO_LABEL};
use crate::symtab::SymTab;

// ----------------------------------------------------------------------------
// Intermediate program

/// One line of the intermediate program: the statement tagged with the
/// address it will occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterRecord {
    pub addr: u32,
    pub line: SourceLine,
}

/// Everything pass one hands to pass two. Rebuilt from scratch on every
/// run; nothing accumulates across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassOne {
    pub symtab: SymTab,
    pub inter: Vec<InterRecord>,
    pub start: u32,
    pub length: u32,
    pub msgs: Msgs,
}

// ----------------------------------------------------------------------------
// Scan

pub fn pass_one(source: &str, optab: &OpTab) -> Result<PassOne, Error> {
    let lines: Vec<&str> = source.lines().collect();

    // A leading `label START operand` line seeds the location counter with
    // its hex operand; without one the program assembles at 0.
    let mut start = 0;
    let mut first = lines.len();
    for (idx, raw) in lines.iter().enumerate() {
        let words: Vec<&str> = raw.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        first = idx;
        if let [_, opcode, operand] = words[..] {
            if matches!(Pseudo::parse(opcode), Ok(Pseudo::START)) {
                start = u32::from_str_radix(operand, 16).map_err(|_| Error::BadStartAddress {
                    text: operand.to_string(),
                    line: idx + 1,
                })?;
                first = idx + 1;
            }
        }
        break;
    }

    let mut symtab = SymTab::new();
    let mut inter = Vec::new();
    let mut msgs = Msgs::new();
    let mut locctr = start;

    for (idx, raw) in lines.iter().enumerate().skip(first) {
        let stmt = match parser::scan_strict(raw) {
            Scan::Stmt(stmt) => stmt,
            Scan::End => break,
            Scan::Blank => continue,
            Scan::Skip => {
                msgs.warn(
                    "Skipped: expected `label opcode operand`".to_string(),
                    idx + 1,
                    raw,
                );
                continue;
            }
        };

        // The label takes the statement's own starting address, before the
        // width advance.
        if stmt.has_label() {
            if let Some(prev) = symtab.insert(&stmt.label, locctr) {
                msgs.warn(format!("Re-defined label: `{}`", stmt.label), idx + 1, raw);
                msgs.note(
                    format!("Previous value 0x{:04X} has been overridden.", prev),
                    idx + 1,
                    raw,
                );
            }
        }

        inter.push(InterRecord {
            addr: locctr,
            line: stmt.clone(),
        });
        locctr += width(&stmt, optab, idx + 1)?;
    }

    let length = locctr - start;
    inter.push(InterRecord {
        addr: locctr,
        line: SourceLine::new(NO_LABEL, "END", NO_LABEL),
    });

    Ok(PassOne {
        symtab,
        inter,
        start,
        length,
        msgs,
    })
}

/// Location-counter advance for one statement. BYTE advances a fixed 1 no
/// matter how long its constant is; pass two sizes it from the generated
/// bytes instead.
fn width(stmt: &SourceLine, optab: &OpTab, line: usize) -> Result<u32, Error> {
    Ok(match Directive::classify(&stmt.opcode, optab) {
        Directive::Op(_) | Directive::Word => 3,
        Directive::Byte => 1,
        Directive::Resw => 3 * count(&stmt.operand, line)?,
        Directive::Resb => count(&stmt.operand, line)?,
        Directive::Other => 0,
    })
}

pub(crate) fn count(operand: &str, line: usize) -> Result<u32, Error> {
    operand.parse::<u32>().map_err(|_| Error::BadCount {
        text: operand.to_string(),
        line,
    })
}
