// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tokenizer for the OpenStep plist dialect.
//!
//! Comments (`/* ... */` and `// ...`) are consumed as whitespace. An
//! unquoted token runs until whitespace, punctuation, a quote, or the
//! start of a comment; `/` itself is a legal token character (relative
//! paths like `en.lproj/InfoPlist.strings` are written bare by Xcode).

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Equals,
    Semicolon,
    Comma,
    Str(String),
}

pub(crate) struct Lexer<'a> {
    chars: std::str::Chars<'a>,
    peeked: Option<Option<char>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            peeked: None,
            line: 1,
        }
    }

    /// Line number of the most recently consumed character, for errors.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    fn peek(&mut self) -> Option<char> {
        if let Some(opt) = self.peeked {
            opt
        } else {
            let opt = self.chars.clone().next();
            self.peeked = Some(opt);
            opt
        }
    }

    /// The character after the next one, without consuming anything.
    fn peek_second(&mut self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    fn next_char(&mut self) -> Option<char> {
        let opt = if let Some(opt) = self.peeked.take() {
            if opt.is_some() {
                self.chars.next();
            }
            opt
        } else {
            self.chars.next()
        };
        if opt == Some('\n') {
            self.line += 1;
        }
        opt
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.next_char();
                }
                Some('/') => match self.peek_second() {
                    Some('/') => {
                        while let Some(ch) = self.next_char() {
                            if ch == '\n' {
                                break;
                            }
                        }
                    }
                    Some('*') => {
                        self.next_char();
                        self.next_char();
                        let start_line = self.line;
                        loop {
                            match self.next_char() {
                                Some('*') if self.peek() == Some('/') => {
                                    self.next_char();
                                    break;
                                }
                                Some(_) => {}
                                None => {
                                    return Err(anyhow!(
                                        "unterminated comment starting at line {}",
                                        start_line
                                    ))
                                }
                            }
                        }
                    }
                    _ => break,
                },
                _ => break,
            }
        }
        Ok(())
    }

    /// Returns the next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace_and_comments()?;
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(None),
        };
        let token = match ch {
            '{' => {
                self.next_char();
                Token::OpenBrace
            }
            '}' => {
                self.next_char();
                Token::CloseBrace
            }
            '(' => {
                self.next_char();
                Token::OpenParen
            }
            ')' => {
                self.next_char();
                Token::CloseParen
            }
            '=' => {
                self.next_char();
                Token::Equals
            }
            ';' => {
                self.next_char();
                Token::Semicolon
            }
            ',' => {
                self.next_char();
                Token::Comma
            }
            '"' => Token::Str(self.read_quoted()?),
            _ => Token::Str(self.read_bare()?),
        };
        Ok(Some(token))
    }

    fn read_quoted(&mut self) -> Result<String> {
        let start_line = self.line;
        self.next_char(); // consume '"'
        let mut value = String::new();
        while let Some(ch) = self.next_char() {
            match ch {
                '"' => return Ok(value),
                '\\' => {
                    if let Some(esc) = self.next_char() {
                        let replacement = match esc {
                            'n' => '\n',
                            'r' => '\r',
                            't' => '\t',
                            '"' => '"',
                            '\\' => '\\',
                            other => other,
                        };
                        value.push(replacement);
                    }
                }
                other => value.push(other),
            }
        }
        Err(anyhow!(
            "unterminated string literal starting at line {}",
            start_line
        ))
    }

    fn read_bare(&mut self) -> Result<String> {
        let mut value = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || matches!(ch, '{' | '}' | '(' | ')' | '=' | ';' | ',' | '"') {
                break;
            }
            if ch == '/' && matches!(self.peek_second(), Some('/') | Some('*')) {
                break;
            }
            value.push(ch);
            self.next_char();
        }
        if value.is_empty() {
            Err(anyhow!("unexpected character at line {}", self.line))
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        while let Some(token) = lexer.next_token().unwrap() {
            out.push(token);
        }
        out
    }

    #[test]
    fn punctuation_and_bare_strings() {
        assert_eq!(
            tokens("{ isa = PBXGroup; }"),
            vec![
                Token::OpenBrace,
                Token::Str("isa".into()),
                Token::Equals,
                Token::Str("PBXGroup".into()),
                Token::Semicolon,
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            tokens("// !$*UTF8*$!\nABC123 /* Runner.app */ = DEF456"),
            vec![
                Token::Str("ABC123".into()),
                Token::Equals,
                Token::Str("DEF456".into()),
            ]
        );
    }

    #[test]
    fn bare_tokens_keep_slashes_and_dashes() {
        assert_eq!(
            tokens("en.lproj/InfoPlist.strings zh-Hans"),
            vec![
                Token::Str("en.lproj/InfoPlist.strings".into()),
                Token::Str("zh-Hans".into()),
            ]
        );
    }

    #[test]
    fn quoted_strings_unescape() {
        assert_eq!(
            tokens(r#""<group>" "a\"b\\c\n""#),
            vec![
                Token::Str("<group>".into()),
                Token::Str("a\"b\\c\n".into()),
            ]
        );
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let mut lexer = Lexer::new("{ /* never closed");
        assert_eq!(lexer.next_token().unwrap(), Some(Token::OpenBrace));
        assert!(lexer.next_token().is_err());
    }
}
