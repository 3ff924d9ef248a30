use progressive_core::{process_batch, Batch, Options, Span, Step};

/// Apply the edits of a batch back onto `text`.
fn apply(text: &str, batch: &Batch) -> String {
    let mut out = text.to_string();
    for edit in batch.edits.iter().rev() {
        out.replace_range(edit.span.start..edit.span.end, &edit.new_text);
    }
    out
}

/// One selection over the whole text.
fn select_all(text: &str) -> Vec<Span> {
    vec![Span::new(0, text.len())]
}

/// One selection per line, from line start to line end.
fn split_lines(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;
    for line in text.split('\n') {
        spans.push(Span::new(start, start + line.len()));
        start += line.len() + 1;
    }
    spans
}

fn run(text: &str, spans: &[Span], step: Step, options: Options) -> String {
    let batch = process_batch(text, spans, &step, options);
    apply(text, &batch)
}

const LIST: &str = "\
item 0: alpha
item 0: beta
item 0: gamma
no number here
item 0: delta";

const LIST_EXPECTED: &str = "\
item 1: alpha
item 2: beta
item 3: gamma
no number here
item 4: delta";

#[test]
fn select_all_increments_by_one() {
    let out = run(LIST, &select_all(LIST), Step::increment(1.0), Options::default());
    assert_eq!(out, LIST_EXPECTED);
}

#[test]
fn split_selections_match_select_all() {
    let out = run(LIST, &split_lines(LIST), Step::increment(1.0), Options::default());
    assert_eq!(out, LIST_EXPECTED);
}

const PADDED: &str = "\
<td id=\"cell_000\">0</td>
<td id=\"cell_000\">0</td>
<td id=\"cell_000\">0</td>";

#[test]
fn padded_ids_keep_their_width() {
    let out = run(PADDED, &select_all(PADDED), Step::increment(1.0), Options::default());
    assert_eq!(
        out,
        "\
<td id=\"cell_001\">2</td>
<td id=\"cell_003\">4</td>
<td id=\"cell_005\">6</td>"
    );
}

#[test]
fn dashes_before_digits_depend_on_the_sign_setting() {
    let text = "row-0 row-0";
    let out = run(text, &select_all(text), Step::increment(1.0), Options::default());
    assert_eq!(out, "row1 row2");

    let options = Options {
        negative_numbers: false,
        ..Default::default()
    };
    let out = run(text, &select_all(text), Step::increment(1.0), options);
    assert_eq!(out, "row-1 row-2");
}

#[test]
fn skip_first_number_counts_from_the_first_literal() {
    let text = "\
case 10:
case 0:
case 0:
case 0:";
    let options = Options {
        skip_first_number: true,
        ..Default::default()
    };
    let expected = "\
case 10:
case 11:
case 12:
case 13:";
    assert_eq!(run(text, &select_all(text), Step::increment(1.0), options), expected);
    assert_eq!(run(text, &split_lines(text), Step::increment(1.0), options), expected);
}

#[test]
fn increments_by_one_hundred() {
    let text = "x = 0\ny = 0\nz = 0";
    let step = Step::parse("100", progressive_core::Direction::Increment).unwrap();
    let out = run(text, &select_all(text), step, Options::default());
    assert_eq!(out, "x = 100\ny = 200\nz = 300");
}

#[test]
fn decrements_into_negative_values() {
    let text = "[2] [2] [2] [2]";
    let out = run(text, &select_all(text), Step::decrement(1.0), Options::default());
    assert_eq!(out, "[1] [0] [-1] [-2]");
}

#[test]
fn carets_on_each_line() {
    let text = "v1 = 0;\nv1 = 0;\nv1 = 0;";
    let options = Options {
        allow_zero_length_selection: true,
        ..Default::default()
    };
    // caret right after the value on each line
    let carets: Vec<Span> = (0..3).map(|line| Span::caret(line * 8 + 6)).collect();
    let out = run(text, &carets, Step::increment(1.0), options);
    assert_eq!(out, "v1 = 1;\nv1 = 2;\nv1 = 3;");
}

#[test]
fn output_is_strictly_increasing() {
    let text = "7 3 99 -4 0012 8";
    let batch = process_batch(text, &select_all(text), &Step::increment(1.0), Options::default());
    let out = apply(text, &batch);
    let values: Vec<i64> = out
        .split(' ')
        .map(|literal| literal.parse().unwrap())
        .collect();
    assert_eq!(values[0], 8);
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}
