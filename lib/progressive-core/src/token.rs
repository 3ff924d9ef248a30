use nom::{
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    IResult, Parser,
};

/// A numeric literal found in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset of the literal inside the scanned text.
    pub offset: usize,
    /// The literal as written, including a leading `-` if any.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_negative(&self) -> bool {
        self.text.starts_with('-')
    }

    /// The digit run without its sign.
    pub fn digits(&self) -> &'a str {
        self.text.strip_prefix('-').unwrap_or(self.text)
    }

    /// Tokens only ever contain an optional sign and ASCII digits, so the
    /// fallback is unreachable in practice.
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or_default()
    }
}

/// `-?[0-9]+`
pub fn signed_number(i: &str) -> IResult<&str, &str> {
    recognize((opt(char('-')), digit1)).parse(i)
}

/// `[0-9]+`
pub fn unsigned_number(i: &str) -> IResult<&str, &str> {
    digit1(i)
}

/// Parse a number at the very start of `i`, honoring the sign setting.
pub fn number(i: &str, negative_numbers: bool) -> IResult<&str, &str> {
    if negative_numbers {
        signed_number(i)
    } else {
        unsigned_number(i)
    }
}

/// Left-to-right scan for non-overlapping, maximal numeric literals.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    negative_numbers: bool,
}

pub fn tokens(text: &str, negative_numbers: bool) -> Tokens<'_> {
    Tokens {
        text,
        pos: 0,
        negative_numbers,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            if let Ok((_, literal)) = number(rest, self.negative_numbers) {
                let token = Token {
                    offset: self.pos,
                    text: literal,
                };
                self.pos += literal.len();
                return Some(token);
            }
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}
