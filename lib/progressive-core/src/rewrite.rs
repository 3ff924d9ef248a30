use std::borrow::Cow;

use crate::format::{pad_to_width, render};
use crate::step::StepFunction;
use crate::token::tokens;

/// Running value of a progression.
///
/// Unset until the first literal of a batch is seen, then always holds the
/// last value produced. One `Reference` is shared by every span of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reference(Option<f64>);

impl Reference {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn starting_at(value: f64) -> Self {
        Self(Some(value))
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Rewrite every literal in `text` as the next value of the progression.
///
/// When the reference is unset, the first literal seeds it. With
/// `skip_first` that literal is kept as written, otherwise it is stepped
/// like all the following ones. Later literals ignore their own value.
///
/// Returns the input borrowed when nothing changed.
pub fn rewrite_span<'a, S>(
    text: &'a str,
    reference: &mut Reference,
    step: &S,
    skip_first: bool,
    negative_numbers: bool,
) -> Cow<'a, str>
where
    S: StepFunction + ?Sized,
{
    let mut out: Option<String> = None;
    let mut copied_to = 0;

    for token in tokens(text, negative_numbers) {
        let current = match reference.0 {
            Some(current) => current,
            None => {
                let seed = token.value();
                reference.0 = Some(seed);
                if skip_first {
                    continue;
                }
                seed
            }
        };
        let next = step.apply(current);
        reference.0 = Some(next);

        let replacement = pad_to_width(render(next), &token);
        if replacement == token.text {
            continue;
        }
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
        buf.push_str(&text[copied_to..token.offset]);
        buf.push_str(&replacement);
        copied_to = token.end();
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied_to..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

/// Value-returning form of [`rewrite_span`]: takes the incoming reference and
/// hands back the rewritten text together with the updated reference.
pub fn process_span<S>(
    text: &str,
    reference: Reference,
    step: &S,
    skip_first: bool,
) -> (String, Reference)
where
    S: StepFunction + ?Sized,
{
    let mut reference = reference;
    let new_text = rewrite_span(text, &mut reference, step, skip_first, true).into_owned();
    (new_text, reference)
}
