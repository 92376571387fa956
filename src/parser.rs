use crate::error::ParseError;
use crate::pattern::{Pattern, PatternElement, Quantifier};
use std::fmt;
use std::str::FromStr;

pub fn parse_pattern(s: &str) -> Result<Pattern, ParseError> {
    let pattern = Scanner::new(s).scan()?;
    log::debug!("Parsed {:?} into {} element(s)", s, pattern.len());
    Ok(pattern)
}

impl FromStr for Pattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}

// A pattern string together with its parsed tree. The tree always belongs
// to the current source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parser {
    source: String,
    pattern: Pattern,
}

impl Parser {
    pub fn new(source: impl Into<String>) -> Result<Self, ParseError> {
        let source = source.into();
        let pattern = parse_pattern(&source)?;
        Ok(Parser { source, pattern })
    }

    // On failure the parser is left untouched.
    pub fn set_source(&mut self, source: impl Into<String>) -> Result<(), ParseError> {
        let source = source.into();
        self.pattern = parse_pattern(&source)?;
        self.source = source;
        Ok(())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    // The source unchanged, not a rendering of the tree.
    pub fn description(&self) -> &str {
        &self.source
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn into_pattern(self) -> Pattern {
        self.pattern
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// Escape state. A first backslash arms `Compiler`, a second one while armed
// moves to `CompilerAndRegex`. `at` is where the escape began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Escape {
    None,
    Compiler { at: usize },
    CompilerAndRegex { at: usize },
}

impl Escape {
    // Feeds one character through the machine. The flag is set when `c` is
    // taken as an escaped literal.
    fn advance(self, i: usize, c: char) -> (Escape, bool) {
        match self {
            Escape::CompilerAndRegex { .. } => (Escape::None, true),
            Escape::Compiler { at } if c == '\\' => (Escape::CompilerAndRegex { at }, false),
            Escape::Compiler { .. } => (Escape::None, true),
            Escape::None if c == '\\' => (Escape::Compiler { at: i }, false),
            Escape::None => (Escape::None, false),
        }
    }
}

// Group and quantifier bodies are sliced out by index once closed, so while
// nesting nothing is emitted. A group body runs its own escape machine so
// escaped parens are not counted towards `depth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Nesting {
    None,
    Group { start: usize, depth: usize, escape: Escape },
    Quantifier { start: usize },
}

struct Scanner<'a> {
    source: &'a str,
    pattern: Pattern,
    escape: Escape,
    nesting: Nesting,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            source,
            pattern: Pattern::new(),
            escape: Escape::None,
            nesting: Nesting::None,
        }
    }

    fn scan(mut self) -> Result<Pattern, ParseError> {
        for (i, c) in self.source.char_indices() {
            self.step(i, c)?;
        }

        match self.escape {
            Escape::Compiler { at } | Escape::CompilerAndRegex { at } => {
                return Err(ParseError::DanglingEscape { offset: at })
            }
            Escape::None => {}
        }
        match self.nesting {
            Nesting::Group { start, .. } => Err(ParseError::UnbalancedGroup { offset: start }),
            Nesting::Quantifier { start } => Err(ParseError::UnbalancedQuantifier { offset: start }),
            Nesting::None => Ok(self.pattern),
        }
    }

    fn step(&mut self, i: usize, c: char) -> Result<(), ParseError> {
        if self.escape != Escape::None {
            let (escape, literal) = self.escape.advance(i, c);
            self.escape = escape;
            if literal {
                self.pattern.push_char(c);
            }
            return Ok(());
        }

        match self.nesting {
            Nesting::None => self.step_top_level(i, c),
            Nesting::Group { start, depth, escape } => self.step_group(i, c, start, depth, escape)?,
            Nesting::Quantifier { start } => {
                if c == '}' {
                    let quantifier = parse_bounds(&self.source[start + 1..i], start)?;
                    log::trace!("Quantifier {:?} at offset {}", quantifier, start);
                    self.pattern.push(PatternElement::Quantifier(quantifier));
                    self.nesting = Nesting::None;
                }
            }
        }
        Ok(())
    }

    fn step_top_level(&mut self, i: usize, c: char) {
        match c {
            '\\' => self.escape = Escape::Compiler { at: i },
            '(' => {
                self.nesting = Nesting::Group {
                    start: i,
                    depth: 1,
                    escape: Escape::None,
                }
            }
            '{' => self.nesting = Nesting::Quantifier { start: i },
            '*' => self.pattern.push(PatternElement::Quantifier(Quantifier::ZERO_OR_MORE)),
            '+' => self.pattern.push(PatternElement::Quantifier(Quantifier::ONE_OR_MORE)),
            '?' => self.pattern.push(PatternElement::Quantifier(Quantifier::ZERO_OR_ONE)),
            // Closers with nothing open.
            ')' | '}' => {}
            other => self.pattern.push_char(other),
        }
    }

    fn step_group(
        &mut self,
        i: usize,
        c: char,
        start: usize,
        depth: usize,
        escape: Escape,
    ) -> Result<(), ParseError> {
        let (escape, escaped) = escape.advance(i, c);
        let depth = match c {
            _ if escaped => depth,
            '(' => depth + 1,
            ')' => depth - 1,
            _ => depth,
        };

        if depth == 0 {
            let body = &self.source[start + 1..i];
            log::trace!("Group body {:?} at offset {}", body, start);
            let nested = parse_pattern(body).map_err(|e| e.shifted(start + 1))?;
            self.pattern.push(PatternElement::Group(nested));
            self.nesting = Nesting::None;
        } else {
            self.nesting = Nesting::Group {
                start,
                depth,
                escape,
            };
        }
        Ok(())
    }
}

// Parses the text between `{` and `}`. `open` is the offset of the `{`.
fn parse_bounds(body: &str, open: usize) -> Result<Quantifier, ParseError> {
    let invalid = || ParseError::InvalidQuantifierBound {
        offset: open,
        text: body.to_string(),
    };

    let (min_text, max_text) = match body.split_once(',') {
        Some((min, max)) => (min, Some(max)),
        None => (body, None),
    };

    let min = parse_bound(min_text).ok_or_else(invalid)?;
    let max = match max_text {
        None => Some(min),
        Some(text) if text.trim().is_empty() => None,
        Some(text) => Some(parse_bound(text).ok_or_else(invalid)?),
    };

    if let Some(max) = max {
        if min > max {
            return Err(ParseError::InvalidQuantifierRange { offset: open, min, max });
        }
    }
    Ok(Quantifier { min, max })
}

fn parse_bound(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
