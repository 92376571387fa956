// Parsed form of a pattern string: an ordered run of elements, groups nest
// a full Pattern of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    elements: Vec<PatternElement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternElement {
    Literal(String),
    Group(Pattern),
    // Applies to whatever precedes it; owns no operand.
    Quantifier(Quantifier),
    // Never produced by the parser.
    OneOf(Vec<CharRange>),
}

// `max: None` is unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantifier {
    pub min: usize,
    pub max: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharRange {
    pub from: String,
    pub to: String,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    // Literals merge into a literal run that already ends the sequence.
    pub fn push(&mut self, element: PatternElement) {
        if let PatternElement::Literal(text) = &element {
            if let Some(PatternElement::Literal(run)) = self.elements.last_mut() {
                run.push_str(text);
                return;
            }
            if text.is_empty() {
                return;
            }
        }
        self.elements.push(element);
    }

    pub fn push_char(&mut self, c: char) {
        match self.elements.last_mut() {
            Some(PatternElement::Literal(run)) => run.push(c),
            _ => self.elements.push(PatternElement::Literal(c.to_string())),
        }
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl From<Vec<PatternElement>> for Pattern {
    fn from(elements: Vec<PatternElement>) -> Self {
        let mut pattern = Pattern::new();
        for element in elements {
            pattern.push(element);
        }
        pattern
    }
}

impl PatternElement {
    pub fn literal(text: impl Into<String>) -> Self {
        PatternElement::Literal(text.into())
    }

    pub fn group(elements: Vec<PatternElement>) -> Self {
        PatternElement::Group(Pattern::from(elements))
    }

    pub fn quantifier(min: usize, max: Option<usize>) -> Self {
        PatternElement::Quantifier(Quantifier { min, max })
    }
}

impl Quantifier {
    pub const ZERO_OR_MORE: Quantifier = Quantifier { min: 0, max: None };
    pub const ONE_OR_MORE: Quantifier = Quantifier { min: 1, max: None };
    pub const ZERO_OR_ONE: Quantifier = Quantifier { min: 0, max: Some(1) };
}

impl CharRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        CharRange {
            from: from.into(),
            to: to.into(),
        }
    }
}
