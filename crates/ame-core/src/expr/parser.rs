use super::token::{Token, tokenize};
use crate::common::elements::proton_number_for_symbol;
use crate::domain::{AmeError, CombinedExpression, ParsedConstituent, ParserResult};

/// Tokenizes an expression, reporting stray characters as a malformed
/// expression.
pub fn expression_tokens(expression: &str) -> ParserResult<Vec<Token>> {
    tokenize(expression).map_err(|source| AmeError::malformed_expression(expression, source))
}

/// Decomposes an expression into `(multiplicity, mass number, symbol)`
/// triples.
///
/// Without a colon, numbers pair one to one with symbols as mass numbers.
/// With a colon and more numbers than symbols, numbers alternate
/// multiplicity and mass number (`2H1:1O16`). An expression that mixes
/// both forms (`2H1:O16`) is rejected rather than reinterpreted.
pub fn parse_expression(expression: &str) -> ParserResult<Vec<ParsedConstituent>> {
    let tokens = expression_tokens(expression)?;
    parse_tokens(expression, &tokens)
}

/// [`parse_expression`] over tokens that were already produced for
/// `expression`, which is only used in error messages.
pub fn parse_tokens(expression: &str, tokens: &[Token]) -> ParserResult<Vec<ParsedConstituent>> {
    let has_colon = tokens.contains(&Token::Colon);
    let mut numbers = Vec::new();
    let mut symbols = Vec::new();
    for token in tokens {
        match token {
            Token::Number(value) => numbers.push(*value),
            Token::Symbol(symbol) => symbols.push(symbol.as_str()),
            Token::Colon => {}
        }
    }

    if symbols.is_empty() {
        return Err(AmeError::malformed_expression(expression, "no element symbol found"));
    }

    let pairs = if has_colon && numbers.len() > symbols.len() {
        interleaved_pairs(expression, &numbers, symbols.len())?
    } else {
        mass_number_pairs(expression, &numbers, symbols.len())?
    };

    symbols
        .into_iter()
        .zip(pairs)
        .map(|(symbol, (multiplicity, mass_number))| {
            let proton_number =
                proton_number_for_symbol(symbol).ok_or_else(|| AmeError::unknown_symbol(symbol))?;
            Ok(ParsedConstituent {
                multiplicity,
                mass_number,
                symbol: symbol.to_string(),
                proton_number,
            })
        })
        .collect()
}

/// Parses an expression and folds it into its scalar sums.
pub fn combine_expression(expression: &str) -> ParserResult<CombinedExpression> {
    let constituents = parse_expression(expression)?;
    Ok(CombinedExpression::from_constituents(&constituents))
}

fn interleaved_pairs(
    expression: &str,
    numbers: &[u32],
    symbol_count: usize,
) -> ParserResult<Vec<(u32, u32)>> {
    if numbers.len() != 2 * symbol_count {
        return Err(AmeError::malformed_expression(
            expression,
            format!(
                "{} numbers cannot be read as (multiplicity, mass number) pairs for {} symbols",
                numbers.len(),
                symbol_count
            ),
        ));
    }

    Ok(numbers
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

fn mass_number_pairs(
    expression: &str,
    numbers: &[u32],
    symbol_count: usize,
) -> ParserResult<Vec<(u32, u32)>> {
    if numbers.is_empty() {
        return Ok(vec![(1, 0); symbol_count]);
    }

    if numbers.len() != symbol_count {
        return Err(AmeError::malformed_expression(
            expression,
            format!(
                "{} numbers do not match {} symbols",
                numbers.len(),
                symbol_count
            ),
        ));
    }

    Ok(numbers.iter().map(|&number| (1, number)).collect())
}
