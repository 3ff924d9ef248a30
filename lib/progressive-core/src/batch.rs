use crate::rewrite::{rewrite_span, Reference};
use crate::source::TextSource;
use crate::span::Span;
use crate::step::StepFunction;

/// Switches for one batch. Resolving them from user settings is up to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Keep the first literal of the batch as written and count from it.
    pub skip_first_number: bool,
    /// Treat a bare caret as a selection of the number touching it.
    pub allow_zero_length_selection: bool,
    /// Read `-12` as one negative literal instead of `-` followed by `12`.
    pub negative_numbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_first_number: false,
            allow_zero_length_selection: false,
            negative_numbers: true,
        }
    }
}

/// Replacement text for one span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub new_text: String,
}

/// Outcome of [`process_batch`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    /// Changed spans only, in the order the spans were given.
    pub edits: Vec<Edit>,
    /// The progression value after the last literal of the batch.
    pub reference: Reference,
}

impl Batch {
    pub fn changed(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Renumber the literals of all `spans` as a single progression.
///
/// Spans are visited in the given order and share one [`Reference`]. An
/// empty span stands for a caret and is widened to the adjacent number when
/// `allow_zero_length_selection` is set, otherwise it is skipped, as are
/// spans the source cannot resolve. A span overlapping one already visited
/// is skipped too, so the edits never overlap and every literal is counted
/// once.
pub fn process_batch<T, S>(source: &T, spans: &[Span], step: &S, options: Options) -> Batch
where
    T: TextSource + ?Sized,
    S: StepFunction + ?Sized,
{
    let mut batch = Batch::default();
    let mut visited: Vec<Span> = Vec::with_capacity(spans.len());

    for &span in spans {
        let span = if span.is_empty() {
            if !options.allow_zero_length_selection {
                continue;
            }
            match source.adjacent_number(span.start, options.negative_numbers) {
                Some(found) => found,
                None => continue,
            }
        } else {
            span
        };
        if visited.iter().any(|seen| seen.overlaps(&span)) {
            continue;
        }
        let Some(text) = source.slice_text(span) else {
            continue;
        };
        visited.push(span);

        let rewritten = rewrite_span(
            &text,
            &mut batch.reference,
            step,
            options.skip_first_number,
            options.negative_numbers,
        );
        if rewritten != text {
            batch.edits.push(Edit {
                span,
                new_text: rewritten.into_owned(),
            });
        }
    }

    batch
}
