use arch::op::{Directive, Pseudo};
use arch::optab::OpTab;
use arch::record::{Record, Text};

use crate::error::Error;
use crate::parser::{self, SourceLine};
use crate::pass1::{count, PassOne};

/// Fixed load address seeding pass two's location counter. Independent of
/// the START operand, which only feeds the header record.
pub const LOAD_ADDR: u32 = 0x2000;

// ----------------------------------------------------------------------------
// Output

/// One row of the output table: the statement, its pass-two address, and
/// the hex code it generated (empty when it generated none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub addr: u32,
    pub line: SourceLine,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassTwo {
    pub output: Vec<OutputRecord>,
    pub records: Vec<Record>,
}

impl PassTwo {
    pub fn object_program(&self) -> String {
        self.records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ----------------------------------------------------------------------------
// Replay

pub fn pass_two(source: &str, optab: &OpTab, prev: &PassOne) -> Result<PassTwo, Error> {
    if prev.inter.is_empty() {
        return Err(Error::PassOneNotRun);
    }

    let mut output = Vec::new();
    let mut texts: Vec<Text> = Vec::new();
    let mut open = Text::open(LOAD_ADDR);
    let mut locctr = LOAD_ADDR;
    let mut header_start = 0;

    for (idx, raw) in source.lines().enumerate() {
        let stmt = match parser::scan_lenient(raw) {
            Some(stmt) => stmt,
            None => continue,
        };

        // START names the header's load origin and nothing else here.
        if matches!(Pseudo::parse(&stmt.opcode), Ok(Pseudo::START)) {
            header_start =
                u32::from_str_radix(&stmt.operand, 16).map_err(|_| Error::BadStartAddress {
                    text: stmt.operand.clone(),
                    line: idx + 1,
                })?;
            output.push(OutputRecord {
                addr: locctr,
                line: stmt,
                code: String::new(),
            });
            continue;
        }

        let directive = Directive::classify(&stmt.opcode, optab);
        let code = generate(&stmt, directive, prev, idx + 1)?;

        if !code.is_empty() {
            if open.is_empty() {
                open.start = locctr;
            } else if open.would_overflow(&code) {
                texts.push(std::mem::replace(&mut open, Text::open(locctr)));
            }
            open.push(&code);
        }

        let advance = match directive {
            Directive::Op(_) | Directive::Word => 3,
            // Byte-accurate, unlike pass one's fixed advance of 1.
            Directive::Byte => code.len() as u32 / 2,
            Directive::Resw => 3 * count(&stmt.operand, idx + 1)?,
            Directive::Resb => count(&stmt.operand, idx + 1)?,
            Directive::Other => 0,
        };

        output.push(OutputRecord {
            addr: locctr,
            line: stmt,
            code,
        });
        locctr += advance;
    }

    if !open.is_empty() {
        texts.push(open);
    }

    let mut records = vec![Record::Header {
        start: header_start,
        length: prev.length,
    }];
    records.extend(texts.into_iter().map(Record::Text));
    records.push(Record::End { addr: LOAD_ADDR });

    Ok(PassTwo { output, records })
}

/// Code bytes for one statement, as hex digits.
fn generate(
    stmt: &SourceLine,
    directive: Directive,
    prev: &PassOne,
    line: usize,
) -> Result<String, Error> {
    Ok(match directive {
        Directive::Op(opcode) => {
            let addr = prev
                .symtab
                .get(&stmt.operand)
                .or_else(|| stmt.operand.parse::<u32>().ok())
                .unwrap_or(0);
            format!("{:02X}{:04X}", opcode, addr)
        }
        Directive::Word => {
            let value = stmt.operand.parse::<i64>().map_err(|_| Error::BadWord {
                text: stmt.operand.clone(),
                line,
            })?;
            format!("{:06X}", value & 0xFFFFFF)
        }
        Directive::Byte => byte_constant(&stmt.operand),
        Directive::Resw | Directive::Resb | Directive::Other => String::new(),
    })
}

/// BYTE constants: C'..' spells each character's code point in hex, X'..'
/// passes its hex digits through unchanged.
fn byte_constant(operand: &str) -> String {
    if let Some(chars) = operand.strip_prefix("C'").and_then(|s| s.strip_suffix('\'')) {
        chars.chars().map(|c| format!("{:02X}", c as u32)).collect()
    } else if let Some(digits) = operand.strip_prefix("X'").and_then(|s| s.strip_suffix('\'')) {
        digits.to_string()
    } else {
        String::new()
    }
}
