//! Element symbol table, neutron (`n`, Z = 0) through oganesson (Z = 118).
//!
//! Lookups are case-sensitive: `N` is nitrogen and `n` the neutron.

pub const MAX_PROTON_NUMBER: u32 = 118;

const ELEMENT_SYMBOLS: [&str; 119] = [
    "n", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Placeholder names used for the superheavy elements before they were
/// named. Older expression strings still contain them.
const LEGACY_ALIASES: [(&str, u32); 4] = [("Ed", 113), ("Ef", 115), ("Eh", 117), ("Ei", 118)];

pub fn proton_number_for_symbol(symbol: &str) -> Option<u32> {
    ELEMENT_SYMBOLS
        .iter()
        .position(|candidate| *candidate == symbol)
        .map(|index| index as u32)
        .or_else(|| {
            LEGACY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == symbol)
                .map(|(_, z)| *z)
        })
}

pub fn element_symbol(proton_number: u32) -> Option<&'static str> {
    ELEMENT_SYMBOLS.get(proton_number as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::{MAX_PROTON_NUMBER, element_symbol, proton_number_for_symbol};

    #[test]
    fn symbols_round_trip_through_proton_numbers() {
        for z in 0..=MAX_PROTON_NUMBER {
            let symbol = element_symbol(z).expect("symbol should exist");
            assert_eq!(proton_number_for_symbol(symbol), Some(z), "{symbol}");
        }
        assert_eq!(element_symbol(MAX_PROTON_NUMBER + 1), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(proton_number_for_symbol("n"), Some(0));
        assert_eq!(proton_number_for_symbol("N"), Some(7));
        assert_eq!(proton_number_for_symbol("CA"), None);
        assert_eq!(proton_number_for_symbol("Zz"), None);
        assert_eq!(proton_number_for_symbol(""), None);
    }

    #[test]
    fn legacy_placeholders_resolve_to_named_elements() {
        assert_eq!(
            proton_number_for_symbol("Ed"),
            proton_number_for_symbol("Nh")
        );
        assert_eq!(proton_number_for_symbol("Ef"), Some(115));
        assert_eq!(proton_number_for_symbol("Eh"), Some(117));
        assert_eq!(proton_number_for_symbol("Ei"), Some(118));
        assert_eq!(element_symbol(118), Some("Og"));
    }
}
