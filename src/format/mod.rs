//! Text I/O for weighted-matrix graph files.
//!
//! ```text
//! A B C
//! 0 1 0
//! 0 0 1
//! 0 0 0
//! ```
//!
//! The first line lists one-character vertex labels; the rest is a
//! row-major `V x V` integer matrix.

pub mod reader;
pub mod writer;

pub use reader::MatrixReader;
pub use writer::MatrixWriter;

/// How matrix cells turn into edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixMode {
    /// A cell equal to 1 is an edge of weight 1; anything else is no edge.
    #[default]
    Unweighted,
    /// A positive cell is an edge carrying that weight; 0 is no edge.
    Weighted,
}
