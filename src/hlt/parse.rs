use std::str::FromStr;

use crate::hlt::error::{HaliteError, Result};

/// Reads a value out of the whitespace separated token stream the engine
/// sends every turn.
pub trait Decodable: Sized {
    fn parse<'a, I>(tokens: &mut I) -> Result<Self>
    where
        I: Iterator<Item = &'a str>;
}

fn parse_token<'a, I, T>(tokens: &mut I, kind: &'static str) -> Result<T>
where
    I: Iterator<Item = &'a str>,
    T: FromStr,
{
    let token = tokens.next().ok_or(HaliteError::UnexpectedEnd(kind))?;
    token.parse().map_err(|_| HaliteError::InvalidToken {
        kind,
        token: token.to_string(),
    })
}

impl Decodable for i32 {
    fn parse<'a, I>(tokens: &mut I) -> Result<i32>
    where
        I: Iterator<Item = &'a str>,
    {
        parse_token(tokens, "i32")
    }
}

impl Decodable for usize {
    fn parse<'a, I>(tokens: &mut I) -> Result<usize>
    where
        I: Iterator<Item = &'a str>,
    {
        parse_token(tokens, "usize")
    }
}

impl Decodable for f64 {
    fn parse<'a, I>(tokens: &mut I) -> Result<f64>
    where
        I: Iterator<Item = &'a str>,
    {
        parse_token(tokens, "f64")
    }
}

/// A count followed by that many items.
impl<T: Decodable> Decodable for Vec<T> {
    fn parse<'a, I>(tokens: &mut I) -> Result<Vec<T>>
    where
        I: Iterator<Item = &'a str>,
    {
        let count = usize::parse(tokens)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::parse(tokens)?);
        }
        Ok(items)
    }
}

/// A 0/1 flag followed by the value. The value is always present on the
/// wire and is discarded when the flag is 0.
impl<T: Decodable> Decodable for Option<T> {
    fn parse<'a, I>(tokens: &mut I) -> Result<Option<T>>
    where
        I: Iterator<Item = &'a str>,
    {
        let present = i32::parse(tokens)? != 0;
        let value = T::parse(tokens)?;
        Ok(if present { Some(value) } else { None })
    }
}
