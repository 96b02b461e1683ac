use arch::op::Pseudo;

// ----------------------------------------------------------------------------
// Statement

/// Placeholder in the label field of an unlabeled statement.
pub const NO_LABEL: &str = "-";

/// One statement split into its (label, opcode, operand) fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub label: String,
    pub opcode: String,
    pub operand: String,
}

impl SourceLine {
    pub fn new(label: &str, opcode: &str, operand: &str) -> Self {
        Self {
            label: label.to_string(),
            opcode: opcode.to_string(),
            operand: operand.to_string(),
        }
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_empty() && self.label != NO_LABEL
    }
}

// ----------------------------------------------------------------------------
// Field splitting

/// What the pass-one scanner makes of a raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    Stmt(SourceLine),
    End,
    Blank,
    Skip,
}

/// Pass-one split: a statement is exactly three whitespace fields. `END`
/// also terminates the scan in its one- and two-field spellings, since the
/// terminator line usually carries no operand.
pub fn scan_strict(code: &str) -> Scan {
    let words: Vec<&str> = code.split_whitespace().collect();
    match words[..] {
        [] => Scan::Blank,
        [_, opcode, _] if matches!(Pseudo::parse(opcode), Ok(Pseudo::END)) => Scan::End,
        [label, opcode, operand] => Scan::Stmt(SourceLine::new(label, opcode, operand)),
        [opcode] | [_, opcode] if matches!(Pseudo::parse(opcode), Ok(Pseudo::END)) => Scan::End,
        _ => Scan::Skip,
    }
}

/// Pass-two split: label-less two-field statements are accepted with the
/// placeholder label filled in.
pub fn scan_lenient(code: &str) -> Option<SourceLine> {
    let words: Vec<&str> = code.split_whitespace().collect();
    match words[..] {
        [opcode, operand] => Some(SourceLine::new(NO_LABEL, opcode, operand)),
        [label, opcode, operand] => Some(SourceLine::new(label, opcode, operand)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_takes_exactly_three_fields() {
        assert_eq!(
            scan_strict("FIVE WORD 5"),
            Scan::Stmt(SourceLine::new("FIVE", "WORD", "5"))
        );
        assert_eq!(scan_strict("   "), Scan::Blank);
        assert_eq!(scan_strict("LDA FIVE"), Scan::Skip);
        assert_eq!(scan_strict("A B C D"), Scan::Skip);
    }

    #[test]
    fn strict_stops_on_every_end_spelling() {
        assert_eq!(scan_strict("END"), Scan::End);
        assert_eq!(scan_strict("- END"), Scan::End);
        assert_eq!(scan_strict("- END -"), Scan::End);
    }

    #[test]
    fn lenient_fills_the_placeholder_label() {
        assert_eq!(
            scan_lenient("LDA FIVE"),
            Some(SourceLine::new("-", "LDA", "FIVE"))
        );
        assert_eq!(
            scan_lenient("FIVE WORD 5"),
            Some(SourceLine::new("FIVE", "WORD", "5"))
        );
        assert_eq!(scan_lenient(""), None);
        assert_eq!(scan_lenient("END"), None);
    }

    #[test]
    fn placeholder_label_is_not_a_label() {
        assert!(!SourceLine::new("-", "LDA", "FIVE").has_label());
        assert!(SourceLine::new("FIVE", "WORD", "5").has_label());
    }
}
