use std::io::{self, Write};

pub const TITLE: &str = "Periodic Table of Elements";

pub const GROUPS: usize = 18;
pub const PERIODS: usize = 7;

/// Main-group and transition-metal layout, `[period][group]`.
/// Lanthanides and actinides have no cell of their own.
pub const GRID: [[Option<&str>; GROUPS]; PERIODS] = {
    const N: Option<&str> = None;
    [
        [
            Some("H"), N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, Some("He"),
        ],
        [
            Some("Li"), Some("Be"), N, N, N, N, N, N, N, N, N, N,
            Some("B"), Some("C"), Some("N"), Some("O"), Some("F"), Some("Ne"),
        ],
        [
            Some("Na"), Some("Mg"), N, N, N, N, N, N, N, N, N, N,
            Some("Al"), Some("Si"), Some("P"), Some("S"), Some("Cl"), Some("Ar"),
        ],
        [
            Some("K"), Some("Ca"), Some("Sc"), Some("Ti"), Some("V"), Some("Cr"),
            Some("Mn"), Some("Fe"), Some("Co"), Some("Ni"), Some("Cu"), Some("Zn"),
            Some("Ga"), Some("Ge"), Some("As"), Some("Se"), Some("Br"), Some("Kr"),
        ],
        [
            Some("Rb"), Some("Sr"), Some("Y"), Some("Zr"), Some("Nb"), Some("Mo"),
            Some("Tc"), Some("Ru"), Some("Rh"), Some("Pd"), Some("Ag"), Some("Cd"),
            Some("In"), Some("Sn"), Some("Sb"), Some("Te"), Some("I"), Some("Xe"),
        ],
        [
            Some("Cs"), Some("Ba"), Some("La"), Some("Hf"), Some("Ta"), Some("W"),
            Some("Re"), Some("Os"), Some("Ir"), Some("Pt"), Some("Au"), Some("Hg"),
            Some("Tl"), Some("Pb"), Some("Bi"), Some("Po"), Some("At"), Some("Rn"),
        ],
        [
            Some("Fr"), Some("Ra"), Some("Ac"), Some("Rf"), Some("Db"), Some("Sg"),
            Some("Bh"), Some("Hs"), Some("Mt"), Some("Ds"), Some("Rg"), Some("Cn"),
            Some("Nh"), Some("Fl"), Some("Mc"), Some("Lv"), Some("Ts"), Some("Og"),
        ],
    ]
};

const CELL: usize = 3;

/// Group numbers across the top, aligned with the symbol cells.
fn header_line() -> String {
    let mut line = String::from("  ");
    for group in 1..=GROUPS {
        line.push_str(&format!("{group:<width$}", width = CELL));
    }
    line.trim_end().to_string()
}

/// One period: its number, then each group's symbol or blanks.
fn period_line(period: usize, cells: &[Option<&str>; GROUPS]) -> String {
    let mut line = format!("{period} ");
    for cell in cells {
        line.push_str(&format!("{:<width$}", cell.unwrap_or(""), width = CELL));
    }
    line.trim_end().to_string()
}

/// Write the static periodic table followed by a blank line.
pub fn render_table_diagram<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, " {TITLE}")?;
    writeln!(out, "{}", header_line())?;
    for (i, cells) in GRID.iter().enumerate() {
        writeln!(out, "{}", period_line(i + 1, cells))?;
    }
    writeln!(out)
}
