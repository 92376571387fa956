use thiserror::Error;

// Offsets are byte offsets into the string given to the outermost parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated group: '(' at offset {offset} has no matching ')'")]
    UnbalancedGroup { offset: usize },
    #[error("unterminated quantifier: '{{' at offset {offset} has no matching '}}'")]
    UnbalancedQuantifier { offset: usize },
    #[error("malformed quantifier bound {text:?} at offset {offset}: expected `{{n}}`, `{{n,}}` or `{{n,m}}`")]
    InvalidQuantifierBound { offset: usize, text: String },
    #[error("quantifier at offset {offset} has min {min} greater than max {max}")]
    InvalidQuantifierRange { offset: usize, min: usize, max: usize },
    #[error("dangling escape at offset {offset}: pattern ends before the escaped character")]
    DanglingEscape { offset: usize },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnbalancedGroup { offset }
            | ParseError::UnbalancedQuantifier { offset }
            | ParseError::InvalidQuantifierBound { offset, .. }
            | ParseError::InvalidQuantifierRange { offset, .. }
            | ParseError::DanglingEscape { offset } => *offset,
        }
    }

    // Rebases an error raised while parsing a group body onto the enclosing string.
    pub(crate) fn shifted(mut self, by: usize) -> Self {
        match &mut self {
            ParseError::UnbalancedGroup { offset }
            | ParseError::UnbalancedQuantifier { offset }
            | ParseError::InvalidQuantifierBound { offset, .. }
            | ParseError::InvalidQuantifierRange { offset, .. }
            | ParseError::DanglingEscape { offset } => *offset += by,
        }
        self
    }
}
