use super::model::{ElementRecord, ElementTable};
use crate::error::{Error, Result};

/// Inputs at most this many characters long are looked up as symbols.
pub const MAX_SYMBOL_LEN: usize = 2;

/// Which half of the composite key a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Symbol,
    Name,
}

/// Trim and lowercase raw user input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Decide how a normalized query is matched, by length alone.
pub fn classify(query: &str) -> QueryKind {
    if query.chars().count() <= MAX_SYMBOL_LEN {
        QueryKind::Symbol
    } else {
        QueryKind::Name
    }
}

/// Find the record addressed by `input`, either by symbol or by full name.
///
/// Matching is exact after normalization; the first key that matches wins.
pub fn resolve_query<'t>(table: &'t ElementTable, input: &str) -> Result<&'t ElementRecord> {
    let query = normalize(input);
    let kind = classify(&query);
    log::debug!("resolving {query:?} as {kind:?}");

    table
        .iter()
        .find(|(key, _)| match kind {
            QueryKind::Symbol => key.symbol == query,
            QueryKind::Name => key.name == query,
        })
        .map(|(_, record)| record)
        .ok_or(Error::NotFound(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;
    use crate::data::model::Attribute;

    const SAMPLE: &str = "\
1,H,Hydrogen,Greek,1,1,1.008,0.00008988,14.01,20.28,14.304,2.20,1400
2,He,Helium,Greek,18,1,4.0026,0.0001785,0.95,4.22,5.193,–,0.008
26,Fe,Iron,Anglo-Saxon,8,4,55.845,7.874,1811,3134,0.449,1.83,56300
";

    fn table() -> ElementTable {
        load_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn symbol_lookup_ignores_case() {
        let table = table();
        for input in ["fe", "Fe", "FE", "  fE \n"] {
            let record = resolve_query(&table, input).unwrap();
            assert_eq!(record.get(Attribute::Element), "Iron");
        }
    }

    #[test]
    fn symbol_and_name_reach_same_record() {
        let table = table();
        let by_symbol = resolve_query(&table, "He").unwrap();
        let by_name = resolve_query(&table, "Helium").unwrap();
        assert_eq!(by_symbol, by_name);
        assert_eq!(classify("he"), QueryKind::Symbol);
        assert_eq!(classify("helium"), QueryKind::Name);
    }

    #[test]
    fn dispatch_is_by_length_only() {
        let table = table();
        // Three characters is a name lookup, so a symbol-like string misses.
        assert!(resolve_query(&table, "fe ").is_ok());
        assert!(matches!(
            resolve_query(&table, "iro"),
            Err(Error::NotFound(q)) if q == "iro"
        ));
    }

    #[test]
    fn unknown_and_empty_inputs_are_not_found() {
        let table = table();
        assert!(matches!(resolve_query(&table, "xx"), Err(Error::NotFound(_))));
        assert!(matches!(resolve_query(&table, ""), Err(Error::NotFound(_))));
        assert!(matches!(resolve_query(&table, "   "), Err(Error::NotFound(_))));
        assert!(matches!(
            resolve_query(&table, "unobtainium"),
            Err(Error::NotFound(_))
        ));
    }
}
