//! Nuclide and molecule expressions such as `85Rb`, `40Ca:19F` or `2H1:1O16`.

mod parser;
mod token;

pub use parser::{combine_expression, expression_tokens, parse_expression, parse_tokens};
pub use token::{MAX_NUMBER_DIGITS, Token, TokenizeError, tokenize};
