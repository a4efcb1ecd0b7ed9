//! Text layout for flowed document bodies.
//!
//! Layout happens in three steps, each usable on its own:
//!
//! - [`break_into_lines`](crate::layout::break_into_lines) - greedy word wrap
//!   against a column width, narrowing the first line of every paragraph by the
//!   indent
//! - [`justify`](crate::layout::justify) / [`align`](crate::layout::align) - give
//!   every word of a line its horizontal offset
//! - [`PageFlow`](crate::layout::PageFlow) - stamp lines with a page and a
//!   baseline, breaking pages when the bottom margin is reached
//!
//! [`layout_paragraph`](crate::layout::layout_paragraph) runs all three for a
//! [`LayoutRequest`](crate::layout::LayoutRequest). All positions are in
//! millimetres measured from the top-left corner of the sheet.
//!
//! # Example
//!
//! ```
//! use acta_pdf::layout::{layout_text, FlowGeometry, LayoutRequest, Margins};
//! use acta_pdf::{pagesize, Mm};
//!
//! // any `Fn(&str) -> Mm` can measure text; a real document uses `FontMeasure`
//! let measure = |text: &str| Mm(text.chars().count() as f32 * 2.0);
//!
//! let margins = Margins::trbl(Mm(35.0), Mm(20.0), Mm(20.0), Mm(20.0));
//! let geometry = FlowGeometry::for_page(pagesize::A4, &margins, Mm(6.5));
//! let request = LayoutRequest::new("Se presenta ante esta unidad policial", Mm(170.0))
//!     .indent(Mm(12.7));
//!
//! let layout = layout_text(&request, geometry, &measure).expect("geometry is valid");
//! assert_eq!(layout.page_count, 1);
//! assert_eq!(layout.words[0].x, Mm(20.0 + 12.7));
//! assert_eq!(layout.words[0].y, Mm(35.0));
//! ```

mod flow;
mod justify;
mod lines;
mod margins;
mod measure;
mod paragraph;

pub use flow::*;
pub use justify::*;
pub use lines::*;
pub use margins::*;
pub use measure::*;
pub use paragraph::*;
