//! Grid placement and color classification for the periodic table.
//!
//! The grid is 18 columns by 10 rows. Rows 1-7 are the periods, row 8 is
//! left empty as a spacer, and rows 9 and 10 hold the lanthanide and
//! actinide series.

use crate::catalog::{Element, list_elements};
use crate::models::Language;

pub const GRID_ROWS: u8 = 10;
pub const GRID_COLS: u8 = 18;

pub const LANTHANIDES: std::ops::RangeInclusive<u8> = 57..=71;
pub const ACTINIDES: std::ops::RangeInclusive<u8> = 89..=103;

const LANTHANIDE_ROW: u8 = 9;
const ACTINIDE_ROW: u8 = 10;

/// 1-based cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Cell of `element` in the table grid.
///
/// The f-block series are checked first since their numbers sit inside the
/// ranges used for periods 6 and 7.
pub fn position_of(element: &Element) -> GridPos {
    let n = element.number;
    if LANTHANIDES.contains(&n) {
        return GridPos::new(LANTHANIDE_ROW, n - 57 + 3);
    }
    if ACTINIDES.contains(&n) {
        return GridPos::new(ACTINIDE_ROW, n - 89 + 3);
    }

    match n {
        1 => GridPos::new(1, 1),
        2 => GridPos::new(1, 18),
        3..=4 => GridPos::new(2, n - 2),
        5..=10 => GridPos::new(2, n + 8),
        11..=12 => GridPos::new(3, n - 10),
        13..=18 => GridPos::new(3, n),
        19..=36 => GridPos::new(4, element.group),
        37..=54 => GridPos::new(5, element.group),
        55..=56 | 72..=86 => GridPos::new(6, element.group),
        87..=88 | 104..=118 => GridPos::new(7, element.group),
        _ => unreachable!("atomic number {} is outside the 1-118 table", n),
    }
}

/// Reverse of [`position_of`]: the element drawn at `pos`, if any.
pub fn element_at(pos: GridPos) -> Option<&'static Element> {
    list_elements().iter().find(|e| position_of(e) == pos)
}

/// Element in `row` whose column is closest to `col`; ties go to the left.
pub fn nearest_in_row(row: u8, col: u8) -> Option<&'static Element> {
    list_elements()
        .iter()
        .map(|e| (position_of(e), e))
        .filter(|(p, _)| p.row == row)
        .min_by_key(|(p, _)| (p.col.abs_diff(col), p.col))
        .map(|(_, e)| e)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    Lanthanide,
    Actinide,
    TransitionMetal,
    BoronGroup,
    CarbonGroup,
    Pnictogen,
    Chalcogen,
    Halogen,
    NobleGas,
    Hydrogen,
    Unclassified,
}

impl ElementCategory {
    /// Legend order.
    pub const ALL: [ElementCategory; 13] = [
        ElementCategory::Hydrogen,
        ElementCategory::AlkaliMetal,
        ElementCategory::AlkalineEarthMetal,
        ElementCategory::TransitionMetal,
        ElementCategory::Lanthanide,
        ElementCategory::Actinide,
        ElementCategory::BoronGroup,
        ElementCategory::CarbonGroup,
        ElementCategory::Pnictogen,
        ElementCategory::Chalcogen,
        ElementCategory::Halogen,
        ElementCategory::NobleGas,
        ElementCategory::Unclassified,
    ];

    pub fn name(self, language: Language) -> &'static str {
        match self {
            ElementCategory::AlkaliMetal => language.pick("Litowce", "Alkali metals"),
            ElementCategory::AlkalineEarthMetal => {
                language.pick("Berylowce", "Alkaline earth metals")
            }
            ElementCategory::Lanthanide => language.pick("Lantanowce", "Lanthanides"),
            ElementCategory::Actinide => language.pick("Aktynowce", "Actinides"),
            ElementCategory::TransitionMetal => {
                language.pick("Metale przejściowe", "Transition metals")
            }
            ElementCategory::BoronGroup => language.pick("Borowce", "Boron group"),
            ElementCategory::CarbonGroup => language.pick("Węglowce", "Carbon group"),
            ElementCategory::Pnictogen => language.pick("Azotowce", "Pnictogens"),
            ElementCategory::Chalcogen => language.pick("Tlenowce", "Chalcogens"),
            ElementCategory::Halogen => language.pick("Fluorowce", "Halogens"),
            ElementCategory::NobleGas => language.pick("Helowce", "Noble gases"),
            ElementCategory::Hydrogen => language.pick("Wodór", "Hydrogen"),
            ElementCategory::Unclassified => language.pick("Inne", "Other"),
        }
    }
}

/// Display category, by rules applied in priority order. Hydrogen sits in
/// group 1 but must never be classified as an alkali metal.
pub fn category_of(element: &Element) -> ElementCategory {
    let n = element.number;
    match element.group {
        1 if n != 1 => ElementCategory::AlkaliMetal,
        2 => ElementCategory::AlkalineEarthMetal,
        _ if LANTHANIDES.contains(&n) => ElementCategory::Lanthanide,
        _ if ACTINIDES.contains(&n) => ElementCategory::Actinide,
        3..=12 => ElementCategory::TransitionMetal,
        13 => ElementCategory::BoronGroup,
        14 => ElementCategory::CarbonGroup,
        15 => ElementCategory::Pnictogen,
        16 => ElementCategory::Chalcogen,
        17 => ElementCategory::Halogen,
        18 => ElementCategory::NobleGas,
        _ if n == 1 => ElementCategory::Hydrogen,
        _ => ElementCategory::Unclassified,
    }
}
