use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Page margins. The text column and the page-break threshold are derived from
/// them; running headers and footers are drawn inside the top and bottom margins.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Mm, horizontal: Mm) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Mm(0.0))
    }

    /// Width of the text column on a page of the given width
    pub fn column_width(&self, page_width: Mm) -> Mm {
        page_width - self.left - self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_width_of_a4_with_default_margins() {
        let margins = Margins::trbl(Mm(35.0), Mm(20.0), Mm(20.0), Mm(25.0));
        assert_eq!(margins.column_width(Mm(210.0)), Mm(165.0));
    }
}
