use std::collections::BTreeSet;
use std::path::Path;

use crate::data::loader::load_file;
use crate::data::lookup::normalize;
use crate::data::model::ElementTable;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Startup state
// ---------------------------------------------------------------------------

/// Everything the session needs, built once before the prompt loop starts.
#[derive(Debug)]
pub struct AppState {
    /// Loaded element table, read-only from here on.
    pub table: ElementTable,

    /// Lowercased symbols of every loaded element.
    pub symbols: BTreeSet<String>,

    /// Lowercased full names of every loaded element.
    pub names: BTreeSet<String>,
}

impl AppState {
    /// Derive the symbol and name sets from a loaded table.
    pub fn new(table: ElementTable) -> Self {
        let symbols = table.keys().map(|k| k.symbol.clone()).collect();
        let names = table.keys().map(|k| k.name.clone()).collect();
        Self {
            table,
            symbols,
            names,
        }
    }

    /// Load the data file and build the state from it.
    pub fn load(path: &Path) -> Result<Self> {
        load_file(path).map(Self::new)
    }

    /// Whether `input` names a known symbol or element name.
    pub fn is_known(&self, input: &str) -> bool {
        let query = normalize(input);
        self.symbols.contains(&query) || self.names.contains(&query)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    #[test]
    fn derives_symbol_and_name_sets() {
        let data = "\
1,H,Hydrogen,Greek,1,1,1.008,0.1,14,20,14.3,2.2,1400
8,O,Oxygen,Greek,16,2,15.999,0.0014,54.36,90.20,0.918,3.44,461000
";
        let state = AppState::new(load_reader(data.as_bytes()).unwrap());
        assert_eq!(state.len(), 2);
        assert!(state.symbols.contains("o"));
        assert!(state.names.contains("hydrogen"));
        assert!(state.is_known(" OXYGEN "));
        assert!(state.is_known("H"));
        assert!(!state.is_known("xx"));
    }

    #[test]
    fn load_failure_is_isolated_from_session() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppState::load(&dir.path().join("missing.csv")).is_err());
    }
}
