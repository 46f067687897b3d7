//! Low-level OpenAir tokenizing
//!
//! This module splits definition text into airspace blocks and each line into
//! a [`Command`] with its raw argument string. Apart from the coordinate and
//! altitude sub-grammars nothing here interprets arguments; that is left to
//! [`crate::interpreter`].

mod altitude;
mod command;
mod coordinate;

pub use self::altitude::parse_altitude;
pub use self::command::Command;
pub use self::coordinate::parse_coordinate;

use std::iter::Enumerate;
use std::str::Lines;

/// A single dispatchable line and its 1-based position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// One airspace definition: the lines between two `*` separators
///
/// Comment and blank lines are already removed. A block always holds at
/// least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub lines: Vec<Line<'a>>,
}

/// Group definition text into blocks
///
/// A line whose trimmed content is exactly `*` ends the current block.
/// Consecutive separators collapse and the last block ends at end of input,
/// so no empty block is ever yielded.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        lines: text.lines().enumerate(),
    }
}

/// Iterator over the blocks of a definition text
///
/// Created by [`blocks`].
pub struct Blocks<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut lines = Vec::new();

        for (index, text) in self.lines.by_ref() {
            if text.trim() == "*" {
                if lines.is_empty() {
                    continue;
                }
                return Some(Block { lines });
            }

            // Comment marker must be the very first character
            if text.starts_with('*') || text.trim().is_empty() {
                continue;
            }

            lines.push(Line {
                number: index + 1,
                text,
            });
        }

        if lines.is_empty() {
            None
        } else {
            Some(Block { lines })
        }
    }
}
