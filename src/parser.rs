//! Module for parsing tokens into S-exps.
//!
//! Grammar:
//!   Form     := Integer | Symbol | '(' ListBody | Quote Form
//!   ListBody := ')' | Form '.' Form ')' | Form ListBody

use std::rc::Rc;

use log::{debug, warn};

use crate::error::{Error, ErrorKind};
use crate::sexp::{ConsList, HeapSexp, Sexp, Symbol};
use crate::token::{Token, TokenKind, Tokenizer};

use self::ParseErrorReason::*;

pub const MAX_DEPTH: usize = 128;


/// Recursive-descent reader for a single top-level form.
pub struct Parser<'t, 'a> {
    tokenizer: &'t mut Tokenizer<'a>,
    // Open lists plus pending quotes.
    depth: usize,
    max_depth: usize,
}

#[derive(Debug)]
pub enum ParseErrorReason {
    DepthOverflow,
    TrailingQuote,
    UnmatchedOpen,
    UnmatchedClose,
    IsolatedPeriod,
    NotPenultimatePeriod,
    MalformedQuote,
}

#[derive(Debug)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Option<Token>,
}


/// Read one top-level form with the default nesting limit.
///
/// Returns None for empty input. Input after the form is still tokenized so
/// lexical errors and unbalanced brackets anywhere are reported, then dropped.
pub fn read(tokenizer: &mut Tokenizer) -> Result<Option<HeapSexp>, Error> {
    Parser::new(tokenizer).read()
}

fn parse_err<T>(reason: ParseErrorReason, token: Option<Token>) -> Result<T, Error> {
    Err(Error::syntax(ParseError { reason, token }))
}

fn quote_form(payload: HeapSexp) -> HeapSexp {
    Rc::new(Sexp::cons(
        Some(Rc::new(Symbol::quote().into())),
        Some(payload),
    ))
}


impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokenizer: &'t mut Tokenizer<'a>) -> Self {
        Self::with_max_depth(tokenizer, MAX_DEPTH)
    }

    pub fn with_max_depth(tokenizer: &'t mut Tokenizer<'a>, max_depth: usize) -> Self {
        Self {
            tokenizer,
            depth: 0,
            max_depth,
        }
    }

    pub fn read(mut self) -> Result<Option<HeapSexp>, Error> {
        let form = self.read_form()?;

        let discarded = self.tokenizer.tokenize_remaining()?;
        self.check_balance(true)?;
        if discarded > 0 {
            warn!("Discarding {} token(s) after top-level form", discarded);
        }

        match &form {
            Some(sexp) => debug!("read: {}", sexp),
            None => debug!("read: <empty>"),
        }
        Ok(form)
    }

    fn read_form(&mut self) -> Result<Option<HeapSexp>, Error> {
        self.check_balance(false)?;
        let token = match self.tokenizer.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };

        match token.kind().clone() {
            TokenKind::LeftParen => {
                self.enter(&token)?;
                let list = self.read_list(token)?;
                self.leave();
                Ok(Some(list))
            }
            TokenKind::RightParen => parse_err(UnmatchedClose, Some(token)),
            TokenKind::Period => parse_err(IsolatedPeriod, Some(token)),
            TokenKind::Integer(i) => Ok(Some(Rc::new(Sexp::Integer(i)))),
            TokenKind::Symbol(symbol) => Ok(Some(Rc::new(Sexp::Symbol(symbol)))),
            TokenKind::Quote => {
                self.enter(&token)?;
                let quoted = match self.read_form()? {
                    Some(quoted) => quoted,
                    None => return parse_err(TrailingQuote, Some(token)),
                };
                self.leave();
                Ok(Some(quote_form(quoted)))
            }
        }
    }

    fn read_list(&mut self, open: Token) -> Result<HeapSexp, Error> {
        let mut elements = Vec::<HeapSexp>::new();
        loop {
            let next = match self.tokenizer.peek_token()? {
                Some(token) => token.kind().clone(),
                None => return parse_err(UnmatchedOpen, Some(open)),
            };

            match next {
                TokenKind::RightParen => {
                    self.tokenizer.next_token()?;
                    return self.close(&open, elements, None);
                }
                TokenKind::Period => {
                    let period = self.tokenizer.next_token()?;
                    if elements.is_empty() {
                        return parse_err(IsolatedPeriod, period);
                    }
                    if let Some(token) = self.tokenizer.peek_token()? {
                        if token.is(&TokenKind::RightParen) {
                            let token = token.clone();
                            return parse_err(NotPenultimatePeriod, Some(token));
                        }
                    }

                    let tail = match self.read_form()? {
                        Some(tail) => tail,
                        None => return parse_err(UnmatchedOpen, Some(open)),
                    };
                    return match self.tokenizer.next_token()? {
                        Some(token) if token.is(&TokenKind::RightParen) => {
                            self.close(&open, elements, Some(tail))
                        }
                        Some(token) => parse_err(NotPenultimatePeriod, Some(token)),
                        None => parse_err(UnmatchedOpen, Some(open)),
                    };
                }
                _ => match self.read_form()? {
                    Some(elem) => elements.push(elem),
                    None => return parse_err(UnmatchedOpen, Some(open)),
                },
            }
        }
    }

    /// Build the list, folding an explicit `(quote X)` into the same shape
    /// that `'X` reads as.
    fn close(
        &self,
        open: &Token,
        elements: Vec<HeapSexp>,
        tail: Option<HeapSexp>,
    ) -> Result<HeapSexp, Error> {
        if elements.first().map_or(false, |e| e.is_symbol("quote")) {
            return match (elements.len(), tail) {
                (1, Some(payload)) => Ok(quote_form(payload)),
                (2, None) => Ok(quote_form(elements[1].clone())),
                _ => parse_err(MalformedQuote, Some(open.clone())),
            };
        }

        Ok(elements
            .into_iter()
            .collect::<ConsList>()
            .release_with_tail(tail))
    }

    fn enter(&mut self, token: &Token) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return parse_err(DepthOverflow, Some(token.clone()));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Whole-history bracket check. Closes may never outnumber opens; at end
    /// of input the counts must match.
    fn check_balance(&self, at_end: bool) -> Result<(), Error> {
        let (opens, closes) = self.tokenizer.bracket_counts();

        let last = || self.tokenizer.all_tokens().last().cloned();
        if closes > opens {
            return parse_err(UnmatchedClose, last());
        }
        if at_end && opens != closes {
            return parse_err(UnmatchedOpen, last());
        }
        Ok(())
    }
}


impl ParseError {
    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }
}

impl ErrorKind for ParseError {
    fn reify(&self) -> Sexp {
        let token = match &self.token {
            Some(token) => token.to_string(),
            None => "EOF".to_string(),
        };
        list!(
            Symbol::unchecked("ParseError"),
            Symbol::unchecked(format!("{:?}", self.reason)),
            Symbol::unchecked(token),
        )
        .into()
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
