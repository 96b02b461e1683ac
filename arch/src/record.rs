use std::fmt;

use color_print::cformat;

/// Field separator in the object program text.
pub const SEP: char = '^';

/// Program name placeholder in the header record.
pub const NAME: &str = "--";

/// Most code bytes a single text record may declare.
pub const TEXT_CAP: u32 = 30;

/// One record of the object program. Emission order is one header, the
/// text records in generation order, one end record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Header { start: u32, length: u32 },
    Text(Text),
    End { addr: u32 },
}

/// A length-capped run of generated code. `bytes` counts code bytes
/// (hex-digit pairs), never separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub start: u32,
    pub entries: Vec<String>,
    pub bytes: u32,
}

impl Text {
    pub fn open(start: u32) -> Self {
        Text {
            start,
            entries: Vec::new(),
            bytes: 0,
        }
    }

    pub fn would_overflow(&self, code: &str) -> bool {
        self.bytes + code.len() as u32 / 2 > TEXT_CAP
    }

    pub fn push(&mut self, code: &str) {
        self.bytes += code.len() as u32 / 2;
        self.entries.push(code.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Header { start, length } => {
                write!(f, "H{SEP}{NAME}{SEP}{start:06X}{SEP}{length:06X}")
            }
            Record::Text(text) => {
                write!(f, "T{SEP}{:06X}{SEP}{:02X}{SEP}", text.start, text.bytes)?;
                for entry in &text.entries {
                    write!(f, "{entry}{SEP}")?;
                }
                Ok(())
            }
            Record::End { addr } => write!(f, "E{SEP}{addr:06X}"),
        }
    }
}

impl Record {
    pub fn cformat(&self) -> String {
        match self {
            Record::Header { start, length } => {
                cformat!("<red>H</> {} <green>{:06X}</> <yellow>{:06X}</>", NAME, start, length)
            }
            Record::Text(text) => {
                let entries = text
                    .entries
                    .iter()
                    .map(|e| cformat!("<blue>{}</>", e))
                    .collect::<Vec<_>>()
                    .join(" ");
                cformat!(
                    "<red>T</> <green>{:06X}</> <yellow>{:02X}</> {}",
                    text.start,
                    text.bytes,
                    entries
                )
            }
            Record::End { addr } => cformat!("<red>E</> <green>{:06X}</>", addr),
        }
    }
}
