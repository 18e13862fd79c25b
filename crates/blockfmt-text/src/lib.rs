//! Range formatting on top of a whole-block formatter.
//!
//! Formatters usually only accept complete top-level declarations. This
//! crate provides the pure text side of formatting just a selection:
//!
//! - [`Document`]: line-addressed snapshot of the text being formatted
//! - [`BlockLocator`]: finds the top-level blocks (by indentation) that
//!   enclose a selection
//! - [`find_anchors`]: maps symbol counts measured in the original text onto
//!   the formatter's output, where line breaks and indentation differ
//! - [`SelectionSplit`]: cuts a block around the selection and stitches the
//!   formatted selection back between the untouched surroundings
//! - [`PreparedBlock`]: wraps a block in a synthetic unit header for
//!   formatters that insist on a complete unit
//!
//! Everything here is synchronous and works on a snapshot; running the
//! formatter itself is somebody else's job.

pub mod anchor;
pub mod document;
pub mod edit;
pub mod locator;
pub mod split;
pub mod symbols;
pub mod unit;

pub use anchor::{AnchorPosition, Anchors, find_anchors};
pub use document::{Document, LineEnding, LineKind, Position, TextRange};
pub use edit::{ReplacementEdit, apply_edits};
pub use locator::{BlockLocator, locate_block};
pub use split::SelectionSplit;
pub use symbols::{Side, shift_symbols, symbol_count};
pub use unit::{PreparedBlock, UnitHeader};
