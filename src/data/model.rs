use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Attribute – one named column of the element data file
// ---------------------------------------------------------------------------

/// The recognised attributes, in the positional order of the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    AtomicNumber,
    Symbol,
    Element,
    OriginOfName,
    Group,
    Period,
    AtomicWeight,
    Density,
    MeltingPoint,
    BoilingPoint,
    SpecificHeatCapacity,
    Electronegativity,
    CrustalAbundance,
}

/// Number of fields every data row must carry.
pub const ATTRIBUTE_COUNT: usize = 13;

impl Attribute {
    /// All attributes in file / display order.
    pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::AtomicNumber,
        Attribute::Symbol,
        Attribute::Element,
        Attribute::OriginOfName,
        Attribute::Group,
        Attribute::Period,
        Attribute::AtomicWeight,
        Attribute::Density,
        Attribute::MeltingPoint,
        Attribute::BoilingPoint,
        Attribute::SpecificHeatCapacity,
        Attribute::Electronegativity,
        Attribute::CrustalAbundance,
    ];

    /// Human-readable label used when listing a record.
    pub const fn label(self) -> &'static str {
        match self {
            Attribute::AtomicNumber => "Atomic Number",
            Attribute::Symbol => "Symbol",
            Attribute::Element => "Element",
            Attribute::OriginOfName => "Origin of Name",
            Attribute::Group => "Group",
            Attribute::Period => "Period",
            Attribute::AtomicWeight => "Atomic Weight",
            Attribute::Density => "Density",
            Attribute::MeltingPoint => "Melting Point",
            Attribute::BoilingPoint => "Boiling Point",
            Attribute::SpecificHeatCapacity => "Specific Heat Capacity",
            Attribute::Electronegativity => "Electronegativity",
            Attribute::CrustalAbundance => "Abundance in Earth's Crust",
        }
    }

    /// Literal unit appended to the raw text at load time, if any.
    pub const fn unit_suffix(self) -> Option<&'static str> {
        match self {
            Attribute::AtomicWeight => Some(" u"),
            Attribute::Density => Some(" g/cm^3"),
            Attribute::MeltingPoint | Attribute::BoilingPoint => Some(" K"),
            Attribute::SpecificHeatCapacity => Some(" J/(g*K)"),
            Attribute::CrustalAbundance => Some(" mg/kg"),
            _ => None,
        }
    }

    /// Width of the longest label; record listings right-justify to it.
    pub fn label_width() -> usize {
        Self::ALL
            .iter()
            .map(|a| a.label().len())
            .max()
            .unwrap_or(0)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ElementRecord – one row of the data file
// ---------------------------------------------------------------------------

/// Every attribute of one element, kept as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    values: [String; ATTRIBUTE_COUNT],
}

impl ElementRecord {
    pub fn new(values: [String; ATTRIBUTE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, attr: Attribute) -> &str {
        &self.values[attr.index()]
    }

    /// Attribute/value pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> {
        Attribute::ALL
            .iter()
            .map(move |&attr| (attr, self.get(attr)))
    }

    pub fn symbol(&self) -> &str {
        self.get(Attribute::Symbol)
    }

    pub fn name(&self) -> &str {
        self.get(Attribute::Element)
    }

    /// Composite key derived from this record's symbol and name.
    pub fn key(&self) -> ElementKey {
        ElementKey::new(self.symbol(), self.name())
    }
}

// ---------------------------------------------------------------------------
// ElementKey / ElementTable
// ---------------------------------------------------------------------------

/// Lowercased `(symbol, name)` pair identifying exactly one element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementKey {
    pub symbol: String,
    pub name: String,
}

impl ElementKey {
    pub fn new(symbol: &str, name: &str) -> Self {
        Self {
            symbol: symbol.to_lowercase(),
            name: name.to_lowercase(),
        }
    }
}

/// The loaded element data. Built once by the loader, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTable {
    entries: BTreeMap<ElementKey, ElementRecord>,
}

impl ElementTable {
    /// Insert a record under its composite key, returning any record it replaced.
    pub(crate) fn insert(&mut self, record: ElementRecord) -> Option<ElementRecord> {
        self.entries.insert(record.key(), record)
    }

    #[cfg(test)]
    pub fn get(&self, key: &ElementKey) -> Option<&ElementRecord> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementKey, &ElementRecord)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ElementKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_order_matches_discriminants() {
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn exactly_six_attributes_carry_units() {
        let with_units: Vec<_> = Attribute::ALL
            .iter()
            .filter(|a| a.unit_suffix().is_some())
            .collect();
        assert_eq!(with_units.len(), 6);
        assert_eq!(Attribute::Symbol.unit_suffix(), None);
        assert_eq!(Attribute::MeltingPoint.unit_suffix(), Some(" K"));
    }

    #[test]
    fn label_width_is_longest_label() {
        assert_eq!(Attribute::label_width(), "Abundance in Earth's Crust".len());
    }

    #[test]
    fn key_is_lowercased() {
        let mut values: [String; ATTRIBUTE_COUNT] = Default::default();
        values[Attribute::Symbol as usize] = "Fe".into();
        values[Attribute::Element as usize] = "Iron".into();
        let record = ElementRecord::new(values);
        assert_eq!(record.key(), ElementKey::new("fe", "iron"));
        assert_eq!(record.key().symbol, "fe");
    }
}
