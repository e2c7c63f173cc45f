use std::borrow::Cow;

use colored::Colorize;
use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::line_buffer::LineBuffer;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::tokenizer::Tokenizer;
use crate::builtins;
use crate::error::Error;


// Rustyline Helper for the REPL.
pub struct CliHelper {
    color: bool,
}

pub struct CliCandidate {
    name: &'static str,
}


pub fn paren_color(depth: usize) -> (u8, u8, u8) {
    match depth % 6 {
        0 => (0, 255, 204),
        1 => (204, 51, 0),
        2 => (153, 255, 102),
        3 => (153, 102, 255),
        4 => (255, 255, 102),
        _ => (255, 179, 179),
    }
}

/// Color each bracket of `text` by its nesting depth.
pub fn colorize(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    let mut depth: usize = 0;
    for c in text.chars() {
        match c {
            '(' => {
                let (r, g, b) = paren_color(depth);
                res += &"(".truecolor(r, g, b).to_string();
                depth += 1;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                let (r, g, b) = paren_color(depth);
                res += &")".truecolor(r, g, b).to_string();
            }
            _ => res.push(c),
        }
    }
    res
}

/// Number of brackets `text` leaves open, lexing all of it.
pub fn open_depth(text: &str) -> Result<usize, Error> {
    let mut tokenizer = Tokenizer::new(text);
    tokenizer.tokenize_remaining()?;
    Ok(tokenizer.depth())
}


impl CliHelper {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if c.is_whitespace() || c == '(' || c == ')' || c == '\'' {
                if i < pos {
                    start = i + 1;
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, end) = self.word_bounds(line, pos);
        let prefix = &line[start..end];
        Ok((
            start,
            builtins::names()
                .into_iter()
                .filter(|name| name.starts_with(prefix))
                .map(|name| CliCandidate { name })
                .collect(),
        ))
    }

    fn update(&self, line: &mut LineBuffer, _: usize, elected: &str) {
        let (start, end) = self.word_bounds(line.as_str(), line.pos());
        line.delete_range(start..end);
        line.insert_str(start, elected);
        line.set_pos(start + elected.len());
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Validator for CliHelper {}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.color {
            Cow::Owned(colorize(line))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        self.color
    }
}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn replacement(&self) -> &str {
        self.name
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name)
    }
}
