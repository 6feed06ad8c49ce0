// SPDX-License-Identifier: PMPL-1.0-or-later

//! Recursive-descent parser over the token stream.

use super::lexer::{Lexer, Token};
use super::{Dict, Value};
use anyhow::{anyhow, Result};

/// Parses a whole descriptor. Trailing content after the root value is an
/// error; Xcode never writes any.
pub fn parse_document(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    if parser.next()?.is_some() {
        return Err(anyhow!(
            "trailing content after descriptor root at line {}",
            parser.line()
        ));
    }
    Ok(value)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            lookahead: None,
        }
    }

    fn line(&self) -> usize {
        self.lexer.line()
    }

    fn next(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.lookahead.take() {
            Ok(Some(token))
        } else {
            self.lexer.next_token()
        }
    }

    fn peek(&mut self) -> Result<Option<&Token>> {
        if self.lookahead.is_none() {
            self.lookahead = self.lexer.next_token()?;
        }
        Ok(self.lookahead.as_ref())
    }

    fn expect(&mut self, expected: Token, context: &str) -> Result<()> {
        match self.next()? {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(anyhow!(
                "line {}: expected {:?} {}, found {:?}",
                self.line(),
                expected,
                context,
                token
            )),
            None => Err(anyhow!(
                "line {}: expected {:?} {}, found end of input",
                self.line(),
                expected,
                context
            )),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.next()? {
            Some(Token::OpenBrace) => self.parse_dict(),
            Some(Token::OpenParen) => self.parse_array(),
            Some(Token::Str(s)) => Ok(Value::String(s)),
            Some(token) => Err(anyhow!(
                "line {}: expected a value, found {:?}",
                self.line(),
                token
            )),
            None => Err(anyhow!("line {}: expected a value, found end of input", self.line())),
        }
    }

    fn parse_dict(&mut self) -> Result<Value> {
        let mut entries = Dict::new();
        loop {
            let key = match self.next()? {
                Some(Token::CloseBrace) => break,
                Some(Token::Str(key)) => key,
                Some(token) => {
                    return Err(anyhow!(
                        "line {}: expected a dictionary key, found {:?}",
                        self.line(),
                        token
                    ))
                }
                None => return Err(anyhow!("line {}: unterminated dictionary", self.line())),
            };
            self.expect(Token::Equals, "after dictionary key")?;
            let value = self.parse_value()?;
            self.expect(Token::Semicolon, "after dictionary value")?;
            entries.insert(key, value);
        }
        Ok(Value::Dict(entries))
    }

    fn parse_array(&mut self) -> Result<Value> {
        let mut items = Vec::new();
        loop {
            match self.peek()? {
                Some(Token::CloseParen) => {
                    self.next()?;
                    break;
                }
                Some(_) => {
                    items.push(self.parse_value()?);
                    match self.next()? {
                        Some(Token::Comma) => {}
                        Some(Token::CloseParen) => break,
                        Some(token) => {
                            return Err(anyhow!(
                                "line {}: expected ',' or ')' in array, found {:?}",
                                self.line(),
                                token
                            ))
                        }
                        None => {
                            return Err(anyhow!("line {}: unterminated array", self.line()))
                        }
                    }
                }
                None => return Err(anyhow!("line {}: unterminated array", self.line())),
            }
        }
        Ok(Value::Array(items))
    }
}
