use color_print::cprintln;

/// A non-fatal condition attached to one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Warn(String),
    Note(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub msg: Msg,
    pub line: usize,
    pub raw: String,
}

/// Diagnostics collected while a pass runs, in source order. Carried in the
/// pass result so callers decide whether to print them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Msgs(Vec<Diag>);

impl Msgs {
    pub fn new() -> Self {
        Msgs(Vec::new())
    }

    pub fn warn(&mut self, msg: String, line: usize, raw: &str) {
        self.0.push(Diag {
            msg: Msg::Warn(msg),
            line,
            raw: raw.to_string(),
        });
    }

    pub fn note(&mut self, msg: String, line: usize, raw: &str) {
        self.0.push(Diag {
            msg: Msg::Note(msg),
            line,
            raw: raw.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diag> {
        self.0.iter()
    }

    pub fn warns(&self) -> usize {
        self.0
            .iter()
            .filter(|d| matches!(d.msg, Msg::Warn(_)))
            .count()
    }

    pub fn print(&self, file: &str) {
        for diag in &self.0 {
            diag.print(file);
        }
    }
}

impl Diag {
    pub fn print(&self, file: &str) {
        match &self.msg {
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, self.line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", self.line, self.raw);
        cprintln!("      <blue>|</>");
    }
}
