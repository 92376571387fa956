mod describe;
mod error;
mod parser;
mod pattern;

pub use describe::{DescriptionConfig, SyntaxConfig, TranslationConfig};
pub use error::ParseError;
pub use parser::{parse_pattern, Parser};
pub use pattern::{CharRange, Pattern, PatternElement, Quantifier};

use anyhow::{bail, Context};
use std::env;

pub const DEFAULT_PATTERN: &str = "\\w";

pub fn run() -> anyhow::Result<()> {
    let mut pattern_str = DEFAULT_PATTERN.to_string();
    let mut config = DescriptionConfig::english();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => {
                config = match args.next().as_deref() {
                    Some("en") => DescriptionConfig::english(),
                    Some("de") => DescriptionConfig::german(),
                    Some(other) => bail!("Unknown language {:?}, expected 'en' or 'de'", other),
                    None => bail!("Expected a language after '--lang'"),
                }
            }
            _ => pattern_str = arg,
        }
    }
    log::debug!("Pattern string: {:?}", pattern_str);

    let parser = Parser::new(pattern_str.as_str())
        .with_context(|| format!("Invalid pattern {:?}", pattern_str))?;
    log::debug!("Parsed pattern: {:?}", parser.pattern());

    println!("{}", parser.description());
    println!("{}", parser.pattern().describe(&config));
    Ok(())
}
