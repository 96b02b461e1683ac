use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Pass two requires a completed pass one")]
    PassOneNotRun,

    #[error("Cannot parse `{text}` as a hex start address (line {line})")]
    BadStartAddress { text: String, line: usize },

    #[error("Cannot parse `{text}` as a reservation count (line {line})")]
    BadCount { text: String, line: usize },

    #[error("Cannot parse `{text}` as a word literal (line {line})")]
    BadWord { text: String, line: usize },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
