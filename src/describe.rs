// Natural-language rendering of a parsed Pattern.
// `ab{2,5}` in English reads `(a) and between 2 and 5-times (b)`.

use crate::pattern::{CharRange, Pattern, PatternElement, Quantifier};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationConfig {
    pub and: String,
    pub or: String,
    pub between: String,
    pub any_char: String,
    pub at_least: String,
    pub times: String,
    // Stands in for a literal space.
    pub whitespace: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxConfig {
    // `a, b and c` instead of `a and b and c`
    pub use_comma: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptionConfig {
    pub translation: TranslationConfig,
    pub syntax: SyntaxConfig,
}

impl TranslationConfig {
    pub fn english() -> Self {
        TranslationConfig {
            and: "and".into(),
            or: "or".into(),
            between: "between".into(),
            any_char: "any char".into(),
            at_least: "at least".into(),
            times: "times".into(),
            whitespace: "whitespace".into(),
        }
    }

    pub fn german() -> Self {
        TranslationConfig {
            and: "und".into(),
            or: "oder".into(),
            between: "zwischen".into(),
            any_char: "Beliebiges Zeichen".into(),
            at_least: "Mindestens".into(),
            times: "mal".into(),
            whitespace: "Leerzeichen".into(),
        }
    }
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        SyntaxConfig { use_comma: true }
    }
}

impl DescriptionConfig {
    pub fn english() -> Self {
        DescriptionConfig {
            translation: TranslationConfig::english(),
            syntax: SyntaxConfig::default(),
        }
    }

    pub fn german() -> Self {
        DescriptionConfig {
            translation: TranslationConfig::german(),
            syntax: SyntaxConfig::default(),
        }
    }
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self::english()
    }
}

impl Pattern {
    pub fn describe(&self, config: &DescriptionConfig) -> String {
        let items = describe_items(self, config);
        concat(&items, &config.translation.and, config)
    }
}

fn describe_items(pattern: &Pattern, config: &DescriptionConfig) -> Vec<String> {
    let trans = &config.translation;
    let elements = pattern.elements();
    let mut items: Vec<String> = Vec::with_capacity(elements.len());

    for (idx, element) in elements.iter().enumerate() {
        match element {
            PatternElement::Literal(text) => {
                let quantified = matches!(elements.get(idx + 1), Some(PatternElement::Quantifier(_)));
                let mut chars = text.chars();
                // A following quantifier repeats only the last character of the run.
                match chars.next_back() {
                    Some(last) if quantified && !chars.as_str().is_empty() => {
                        items.push(describe_literal(chars.as_str(), trans));
                        items.push(describe_literal(&last.to_string(), trans));
                    }
                    _ => items.push(describe_literal(text, trans)),
                }
            }
            PatternElement::Group(nested) => {
                let inner = describe_items(nested, config);
                let joined = concat(&inner, &trans.and, config);
                if inner.len() > 1 {
                    items.push(format!("({})", joined));
                } else {
                    items.push(joined);
                }
            }
            PatternElement::Quantifier(quantifier) => {
                let operand = items.pop().unwrap_or_default();
                items.push(describe_repeat(quantifier, &operand, trans));
            }
            PatternElement::OneOf(ranges) => items.push(describe_one_of(ranges, config)),
        }
    }
    items
}

fn describe_literal(text: &str, trans: &TranslationConfig) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for c in text.chars() {
        out.push_str(&symbol(c, trans));
    }
    out.push(')');
    out
}

fn describe_repeat(quantifier: &Quantifier, operand: &str, trans: &TranslationConfig) -> String {
    let min = quantifier.min;
    let phrase = match quantifier.max {
        Some(max) if max == min => format!("{}-{}", min, trans.times),
        None => format!("{} {}-{}", trans.at_least, min, trans.times),
        Some(max) if min + 1 == max => format!("{} {} {}-{}", min, trans.or, max, trans.times),
        Some(max) => format!("{} {} {} {}-{}", trans.between, min, trans.and, max, trans.times),
    };
    if operand.is_empty() {
        phrase
    } else {
        format!("{} {}", phrase, operand)
    }
}

fn describe_one_of(ranges: &[CharRange], config: &DescriptionConfig) -> String {
    let trans = &config.translation;
    let parts: Vec<String> = ranges
        .iter()
        .map(|range| {
            if range.from == range.to {
                symbols(&range.from, trans)
            } else {
                format!(
                    "{} {} {} {} {}",
                    trans.any_char,
                    trans.between,
                    symbols(&range.from, trans),
                    trans.and,
                    symbols(&range.to, trans)
                )
            }
        })
        .collect();
    format!("({})", concat(&parts, &trans.or, config))
}

fn symbol(c: char, trans: &TranslationConfig) -> String {
    match c {
        ' ' => trans.whitespace.clone(),
        other => other.to_string(),
    }
}

fn symbols(text: &str, trans: &TranslationConfig) -> String {
    text.chars().map(|c| symbol(c, trans)).collect()
}

fn concat(parts: &[String], join: &str, config: &DescriptionConfig) -> String {
    if let Some((last, rest)) = parts.split_last().filter(|_| config.syntax.use_comma && parts.len() > 2) {
        return format!("{} {} {}", rest.join(", "), join, last);
    }
    parts.join(&format!(" {} ", join))
}
