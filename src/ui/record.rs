use std::io::{self, Write};

use crate::data::model::{Attribute, ElementRecord};

/// Write every attribute as `<label>: <value>`, labels right-justified.
pub fn print_record<W: Write>(out: &mut W, record: &ElementRecord) -> io::Result<()> {
    let width = Attribute::label_width();
    for (attr, value) in record.iter() {
        writeln!(out, "{:>width$}: {value}", attr.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;
    use crate::data::model::ElementKey;

    #[test]
    fn labels_are_right_justified_in_fixed_order() {
        let data = "1,H,Hydrogen,Greek,1,1,1.008[V],0.00008988,14.01,20.28,14.304,2.20,1400\n";
        let table = load_reader(data.as_bytes()).unwrap();
        let record = table.get(&ElementKey::new("h", "hydrogen")).unwrap();

        let mut buf = Vec::new();
        print_record(&mut buf, record).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), Attribute::ALL.len());
        assert_eq!(lines[0], "             Atomic Number: 1");
        assert_eq!(lines[6], "             Atomic Weight: 1.008 u");
        assert_eq!(lines[12], "Abundance in Earth's Crust: 1400 mg/kg");
        for line in &lines {
            assert_eq!(line.find(": "), Some(Attribute::label_width()));
        }
    }
}
