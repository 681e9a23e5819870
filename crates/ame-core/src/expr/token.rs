use std::fmt::{Display, Formatter};

/// Longest digit chunk read as one number; longer runs split left to right.
pub const MAX_NUMBER_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(u32),
    Symbol(String),
    Colon,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Symbol(symbol) => f.write_str(symbol),
            Self::Colon => f.write_str(":"),
        }
    }
}

/// Splits an expression into numbers, element symbols and colons.
///
/// A symbol is one uppercase letter, optionally followed by one lowercase
/// letter. Whitespace and parentheses are skipped.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, TokenizeError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < chars.len() {
        let character = chars[position];
        match character {
            '0'..='9' => {
                let run_end = chars[position..]
                    .iter()
                    .position(|c| !c.is_ascii_digit())
                    .map_or(chars.len(), |offset| position + offset);
                for chunk in chars[position..run_end].chunks(MAX_NUMBER_DIGITS) {
                    let value = chunk
                        .iter()
                        .filter_map(|digit| digit.to_digit(10))
                        .fold(0, |acc, digit| acc * 10 + digit);
                    tokens.push(Token::Number(value));
                }
                position = run_end;
            }
            'A'..='Z' => {
                let mut symbol = character.to_string();
                if let Some(next) = chars.get(position + 1).filter(|c| c.is_ascii_lowercase()) {
                    symbol.push(*next);
                    position += 1;
                }
                tokens.push(Token::Symbol(symbol));
                position += 1;
            }
            ':' => {
                tokens.push(Token::Colon);
                position += 1;
            }
            '(' | ')' => position += 1,
            c if c.is_whitespace() => position += 1,
            _ => {
                return Err(TokenizeError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
        }
    }

    Ok(tokens)
}
