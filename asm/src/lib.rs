pub mod error;
pub mod listing;
pub mod msg;
pub mod parser;
pub mod pass1;
pub mod pass2;
pub mod symtab;

use arch::optab::OpTab;

use crate::error::Error;
use crate::pass1::PassOne;
use crate::pass2::PassTwo;

/// Serializes the two passes over one source program. Pass one rebuilds
/// the symbol table and intermediate program from scratch on every call;
/// pass two refuses to run until pass one has produced them.
pub struct Assembler {
    optab: OpTab,
    pass1: Option<PassOne>,
}

impl Assembler {
    pub fn new(optab: OpTab) -> Self {
        Assembler { optab, pass1: None }
    }

    pub fn optab(&self) -> &OpTab {
        &self.optab
    }

    pub fn pass_one(&mut self, source: &str) -> Result<PassOne, Error> {
        let result = pass1::pass_one(source, &self.optab)?;
        self.pass1 = Some(result.clone());
        Ok(result)
    }

    pub fn pass_two(&self, source: &str) -> Result<PassTwo, Error> {
        let prev = self.pass1.as_ref().ok_or(Error::PassOneNotRun)?;
        pass2::pass_two(source, &self.optab, prev)
    }
}
