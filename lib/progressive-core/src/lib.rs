//! Progressive renumbering of the integer literals found in a set of text
//! selections.
//!
//! Every literal is replaced by the next value of one running progression
//! shared by all selections, so `0 0 0` becomes `1 2 3` and `00 00 00`
//! becomes `01 02 03`. Literals keep their zero-padded width when the new
//! value is shorter.
//!
//! ```
//! use progressive_core::{process_batch, Options, Span, Step};
//!
//! let text = "a0 b0 c0";
//! let spans = [Span::new(0, 8)];
//! let batch = process_batch(text, &spans, &Step::increment(1.0), Options::default());
//! assert_eq!(batch.edits[0].new_text, "a1 b2 c3");
//! ```

pub mod batch;
pub mod format;
pub mod locate;
pub mod rewrite;
pub mod source;
pub mod span;
pub mod step;
pub mod token;

pub use batch::{process_batch, Batch, Edit, Options};
pub use locate::locate_adjacent;
pub use rewrite::{process_span, rewrite_span, Reference};
pub use source::TextSource;
pub use span::Span;
pub use step::{Direction, Step, StepError, StepFunction};
pub use token::{tokens, Token};
