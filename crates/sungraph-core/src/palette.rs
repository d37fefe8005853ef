// File: crates/sungraph-core/src/palette.rs
// Summary: Ordered series color palette with cyclic first-seen assignment.

use crate::types::Rgb;

/// An ordered, finite list of series colors. Series are colored in first-seen
/// group order; when groups outnumber the palette the colors repeat
/// cyclically, so assignment is total for any group count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn len(&self) -> usize { self.colors.len() }

    /// Color for the i-th series (first-seen order), cycling past the end.
    /// Panics on an empty palette; `build_chart` rejects that up front.
    pub fn color_for(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            Rgb::new(0x41, 0xbb, 0xc5),
            Rgb::new(0xca, 0x62, 0x85),
            Rgb::new(0xcc, 0x98, 0x28),
        ])
    }
}
