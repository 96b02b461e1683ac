use bimap::BiMap;
use once_cell::sync::Lazy;

/// Mnemonic <-> opcode table. Filled before assembly starts and read-only
/// from then on; both passes share one table.
#[derive(Debug, Clone, Default)]
pub struct OpTab(BiMap<String, u8>);

static STANDARD: Lazy<OpTab> = Lazy::new(|| {
    let mut tab = OpTab::new();
    tab.insert("LDA", 0x33);
    tab.insert("STA", 0x44);
    tab.insert("LDCH", 0x53);
    tab.insert("STCH", 0x57);
    tab
});

impl OpTab {
    pub fn new() -> Self {
        OpTab(BiMap::new())
    }

    /// The built-in instruction set. Callers extend a clone of this with
    /// `insert` before handing the table to the passes.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    pub fn insert(&mut self, mnemonic: &str, opcode: u8) {
        self.0.insert(mnemonic.to_string(), opcode);
    }

    /// Mnemonic lookup is case-insensitive, like the rest of the grammar.
    pub fn get(&self, mnemonic: &str) -> Option<u8> {
        match self.0.get_by_left(mnemonic) {
            Some(code) => Some(*code),
            None => self.0.get_by_left(&mnemonic.to_uppercase()).copied(),
        }
    }

    pub fn mnemonic(&self, opcode: u8) -> Option<&str> {
        self.0.get_by_right(&opcode).map(|s| s.as_str())
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.get(mnemonic).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test() {
    let mut tab = OpTab::standard();
    assert_eq!(tab.get("LDA"), Some(0x33));
    assert_eq!(tab.get("sta"), Some(0x44));
    assert_eq!(tab.mnemonic(0x57), Some("STCH"));
    assert_eq!(tab.get("COMP"), None);
    tab.insert("COMP", 0x28);
    assert_eq!(tab.get("COMP"), Some(0x28));
    assert_eq!(OpTab::standard().get("COMP"), None);
}
