use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::optab::OpTab;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
pub enum Pseudo {
    START,
    WORD,
    BYTE,
    RESW,
    RESB,
    END,
}

impl Pseudo {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined directive: {s}")),
        }
    }
}

/// Everything the opcode field of a statement can dispatch to. One variant
/// per distinct location-counter rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Machine instruction: 3-byte opcode + address format.
    Op(u8),
    Word,
    Byte,
    Resw,
    Resb,
    /// Anything else occupies no space.
    Other,
}

impl Directive {
    pub fn classify(mnemonic: &str, optab: &OpTab) -> Self {
        if let Some(code) = optab.get(mnemonic) {
            return Directive::Op(code);
        }
        match Pseudo::parse(mnemonic) {
            Ok(Pseudo::WORD) => Directive::Word,
            Ok(Pseudo::BYTE) => Directive::Byte,
            Ok(Pseudo::RESW) => Directive::Resw,
            Ok(Pseudo::RESB) => Directive::Resb,
            _ => Directive::Other,
        }
    }
}

#[test]
fn test() {
    let optab = OpTab::standard();
    assert_eq!(Directive::classify("LDA", &optab), Directive::Op(0x33));
    assert_eq!(Directive::classify("WORD", &optab), Directive::Word);
    assert_eq!(Directive::classify("resb", &optab), Directive::Resb);
    assert_eq!(Directive::classify("START", &optab), Directive::Other);
    assert_eq!(Directive::classify("HOGE", &optab), Directive::Other);
    assert_eq!(Pseudo::parse("end"), Ok(Pseudo::END));
    assert!(Pseudo::parse("hoge").is_err());
}
