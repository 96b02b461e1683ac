use indexmap::IndexMap;

/// Label -> address table built by pass one and read-only in pass two.
/// Iteration order is insertion order, which is also the listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymTab(IndexMap<String, u32>);

impl SymTab {
    pub fn new() -> Self {
        SymTab(IndexMap::new())
    }

    /// Returns the address the label previously mapped to, if any. The new
    /// address always wins.
    pub fn insert(&mut self, name: &str, addr: u32) -> Option<u32> {
        self.0.insert(name.to_string(), addr)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, u32> {
        self.0.iter()
    }
}

#[test]
fn test() {
    let mut tab = SymTab::new();
    assert_eq!(tab.insert("LOOP", 0x1000), None);
    assert_eq!(tab.insert("EXIT", 0x1009), None);
    assert_eq!(tab.insert("LOOP", 0x1012), Some(0x1000));
    assert_eq!(tab.get("LOOP"), Some(0x1012));
    assert_eq!(tab.len(), 2);
    let order: Vec<&str> = tab.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(order, ["LOOP", "EXIT"]);
}
