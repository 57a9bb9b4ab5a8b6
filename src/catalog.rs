//! The 118 standard chemical elements, compiled in.

use crate::models::Language;
use std::ops::RangeInclusive;

/// A chemical element as shown in the table and asked about in quizzes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub number: u8,
    pub symbol: &'static str,
    pub name_pl: &'static str,
    pub name_en: &'static str,
    pub mass: f64,
    pub group: u8,
}

impl Element {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Pl => self.name_pl,
            Language::En => self.name_en,
        }
    }

    /// Mass rounded to two decimals, without the unit.
    pub fn formatted_mass(&self) -> String {
        format!("{:.2}", self.mass)
    }
}

const fn el(
    number: u8,
    symbol: &'static str,
    name_pl: &'static str,
    name_en: &'static str,
    mass: f64,
    group: u8,
) -> Element {
    Element {
        number,
        symbol,
        name_pl,
        name_en,
        mass,
        group,
    }
}

pub const ELEMENT_COUNT: usize = 118;

/// Ordered by atomic number; `ELEMENTS[n - 1].number == n`.
/// Lanthanides and actinides carry group 3.
pub static ELEMENTS: [Element; ELEMENT_COUNT] = [
    // Period 1
    el(1, "H", "Wodór", "Hydrogen", 1.008, 1),
    el(2, "He", "Hel", "Helium", 4.0026, 18),
    // Period 2
    el(3, "Li", "Lit", "Lithium", 6.94, 1),
    el(4, "Be", "Beryl", "Beryllium", 9.0122, 2),
    el(5, "B", "Bor", "Boron", 10.81, 13),
    el(6, "C", "Węgiel", "Carbon", 12.011, 14),
    el(7, "N", "Azot", "Nitrogen", 14.007, 15),
    el(8, "O", "Tlen", "Oxygen", 15.999, 16),
    el(9, "F", "Fluor", "Fluorine", 18.998, 17),
    el(10, "Ne", "Neon", "Neon", 20.180, 18),
    // Period 3
    el(11, "Na", "Sód", "Sodium", 22.990, 1),
    el(12, "Mg", "Magnez", "Magnesium", 24.305, 2),
    el(13, "Al", "Glin", "Aluminium", 26.982, 13),
    el(14, "Si", "Krzem", "Silicon", 28.085, 14),
    el(15, "P", "Fosfor", "Phosphorus", 30.974, 15),
    el(16, "S", "Siarka", "Sulfur", 32.06, 16),
    el(17, "Cl", "Chlor", "Chlorine", 35.45, 17),
    el(18, "Ar", "Argon", "Argon", 39.948, 18),
    // Period 4
    el(19, "K", "Potas", "Potassium", 39.098, 1),
    el(20, "Ca", "Wapń", "Calcium", 40.078, 2),
    el(21, "Sc", "Skand", "Scandium", 44.956, 3),
    el(22, "Ti", "Tytan", "Titanium", 47.867, 4),
    el(23, "V", "Wanad", "Vanadium", 50.942, 5),
    el(24, "Cr", "Chrom", "Chromium", 51.996, 6),
    el(25, "Mn", "Mangan", "Manganese", 54.938, 7),
    el(26, "Fe", "Żelazo", "Iron", 55.845, 8),
    el(27, "Co", "Kobalt", "Cobalt", 58.933, 9),
    el(28, "Ni", "Nikiel", "Nickel", 58.693, 10),
    el(29, "Cu", "Miedź", "Copper", 63.546, 11),
    el(30, "Zn", "Cynk", "Zinc", 65.38, 12),
    el(31, "Ga", "Gal", "Gallium", 69.723, 13),
    el(32, "Ge", "German", "Germanium", 72.630, 14),
    el(33, "As", "Arsen", "Arsenic", 74.922, 15),
    el(34, "Se", "Selen", "Selenium", 78.971, 16),
    el(35, "Br", "Brom", "Bromine", 79.904, 17),
    el(36, "Kr", "Krypton", "Krypton", 83.798, 18),
    // Period 5
    el(37, "Rb", "Rubid", "Rubidium", 85.468, 1),
    el(38, "Sr", "Stront", "Strontium", 87.62, 2),
    el(39, "Y", "Itr", "Yttrium", 88.906, 3),
    el(40, "Zr", "Cyrkon", "Zirconium", 91.224, 4),
    el(41, "Nb", "Niob", "Niobium", 92.906, 5),
    el(42, "Mo", "Molibden", "Molybdenum", 95.95, 6),
    el(43, "Tc", "Technet", "Technetium", 98.0, 7),
    el(44, "Ru", "Ruten", "Ruthenium", 101.07, 8),
    el(45, "Rh", "Rod", "Rhodium", 102.91, 9),
    el(46, "Pd", "Pallad", "Palladium", 106.42, 10),
    el(47, "Ag", "Srebro", "Silver", 107.87, 11),
    el(48, "Cd", "Kadm", "Cadmium", 112.41, 12),
    el(49, "In", "Ind", "Indium", 114.82, 13),
    el(50, "Sn", "Cyna", "Tin", 118.71, 14),
    el(51, "Sb", "Antymon", "Antimony", 121.76, 15),
    el(52, "Te", "Tellur", "Tellurium", 127.60, 16),
    el(53, "I", "Jod", "Iodine", 126.90, 17),
    el(54, "Xe", "Ksenon", "Xenon", 131.29, 18),
    // Period 6
    el(55, "Cs", "Cez", "Caesium", 132.91, 1),
    el(56, "Ba", "Bar", "Barium", 137.33, 2),
    el(57, "La", "Lantan", "Lanthanum", 138.91, 3),
    el(58, "Ce", "Cer", "Cerium", 140.12, 3),
    el(59, "Pr", "Prazeodym", "Praseodymium", 140.91, 3),
    el(60, "Nd", "Neodym", "Neodymium", 144.24, 3),
    el(61, "Pm", "Promet", "Promethium", 145.0, 3),
    el(62, "Sm", "Samar", "Samarium", 150.36, 3),
    el(63, "Eu", "Europ", "Europium", 151.96, 3),
    el(64, "Gd", "Gadolin", "Gadolinium", 157.25, 3),
    el(65, "Tb", "Terb", "Terbium", 158.93, 3),
    el(66, "Dy", "Dysproz", "Dysprosium", 162.50, 3),
    el(67, "Ho", "Holm", "Holmium", 164.93, 3),
    el(68, "Er", "Erb", "Erbium", 167.26, 3),
    el(69, "Tm", "Tul", "Thulium", 168.93, 3),
    el(70, "Yb", "Iterb", "Ytterbium", 173.05, 3),
    el(71, "Lu", "Lutet", "Lutetium", 174.97, 3),
    el(72, "Hf", "Hafn", "Hafnium", 178.49, 4),
    el(73, "Ta", "Tantal", "Tantalum", 180.95, 5),
    el(74, "W", "Wolfram", "Tungsten", 183.84, 6),
    el(75, "Re", "Ren", "Rhenium", 186.21, 7),
    el(76, "Os", "Osm", "Osmium", 190.23, 8),
    el(77, "Ir", "Iryd", "Iridium", 192.22, 9),
    el(78, "Pt", "Platyna", "Platinum", 195.08, 10),
    el(79, "Au", "Złoto", "Gold", 196.97, 11),
    el(80, "Hg", "Rtęć", "Mercury", 200.59, 12),
    el(81, "Tl", "Tal", "Thallium", 204.38, 13),
    el(82, "Pb", "Ołów", "Lead", 207.2, 14),
    el(83, "Bi", "Bizmut", "Bismuth", 208.98, 15),
    el(84, "Po", "Polon", "Polonium", 209.0, 16),
    el(85, "At", "Astat", "Astatine", 210.0, 17),
    el(86, "Rn", "Radon", "Radon", 222.0, 18),
    // Period 7
    el(87, "Fr", "Frans", "Francium", 223.0, 1),
    el(88, "Ra", "Rad", "Radium", 226.0, 2),
    el(89, "Ac", "Aktyn", "Actinium", 227.0, 3),
    el(90, "Th", "Tor", "Thorium", 232.04, 3),
    el(91, "Pa", "Protaktyn", "Protactinium", 231.04, 3),
    el(92, "U", "Uran", "Uranium", 238.03, 3),
    el(93, "Np", "Neptun", "Neptunium", 237.0, 3),
    el(94, "Pu", "Pluton", "Plutonium", 244.0, 3),
    el(95, "Am", "Ameryk", "Americium", 243.0, 3),
    el(96, "Cm", "Kiur", "Curium", 247.0, 3),
    el(97, "Bk", "Berkel", "Berkelium", 247.0, 3),
    el(98, "Cf", "Kaliforn", "Californium", 251.0, 3),
    el(99, "Es", "Einstein", "Einsteinium", 252.0, 3),
    el(100, "Fm", "Ferm", "Fermium", 257.0, 3),
    el(101, "Md", "Mendelew", "Mendelevium", 258.0, 3),
    el(102, "No", "Nobel", "Nobelium", 259.0, 3),
    el(103, "Lr", "Lorens", "Lawrencium", 266.0, 3),
    el(104, "Rf", "Rutherford", "Rutherfordium", 267.0, 4),
    el(105, "Db", "Dubn", "Dubnium", 268.0, 5),
    el(106, "Sg", "Seaborg", "Seaborgium", 269.0, 6),
    el(107, "Bh", "Bohr", "Bohrium", 270.0, 7),
    el(108, "Hs", "Has", "Hassium", 277.0, 8),
    el(109, "Mt", "Meitner", "Meitnerium", 278.0, 9),
    el(110, "Ds", "Darmsztadt", "Darmstadtium", 281.0, 10),
    el(111, "Rg", "Roentgen", "Roentgenium", 282.0, 11),
    el(112, "Cn", "Kopernik", "Copernicium", 285.0, 12),
    el(113, "Nh", "Nihon", "Nihonium", 286.0, 13),
    el(114, "Fl", "Flerow", "Flerovium", 289.0, 14),
    el(115, "Mc", "Moskow", "Moscovium", 290.0, 15),
    el(116, "Lv", "Liwermor", "Livermorium", 293.0, 16),
    el(117, "Ts", "Tenes", "Tennessine", 294.0, 17),
    el(118, "Og", "Oganeson", "Oganesson", 294.0, 18),
];

pub fn list_elements() -> &'static [Element] {
    &ELEMENTS
}

pub fn by_number(number: u8) -> Option<&'static Element> {
    let index = usize::from(number).checked_sub(1)?;
    ELEMENTS.get(index)
}

/// Case-insensitive symbol lookup.
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
    let symbol = symbol.trim();
    ELEMENTS
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}

/// Elements whose atomic number falls in `range`, in order.
pub fn in_range(range: RangeInclusive<u8>) -> impl Iterator<Item = &'static Element> {
    ELEMENTS.iter().filter(move |e| range.contains(&e.number))
}
