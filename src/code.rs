use std::fmt;

use crate::error::{HuffmanError, Result};


pub const LEFT_BIT: char = '0';
pub const RIGHT_BIT: char = '1';


/// The path from the root of a tree to one of its nodes, one bit per edge
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {

    /// '0' for every left edge, '1' for every right edge
    bits: String

}

impl Code {

    pub const fn new_empty() -> Self {
        Self {
            bits: String::new()
        }
    }


    pub fn step_left(&self) -> Self {
        self.step(LEFT_BIT)
    }


    pub fn step_right(&self) -> Self {
        self.step(RIGHT_BIT)
    }


    fn step(&self, bit: char) -> Self {

        let mut bits = String::with_capacity(self.bits.len() + 1);
        bits.push_str(&self.bits);
        bits.push(bit);

        Self { bits }
    }


    /// Number of edges between the root and the node
    pub fn len(&self) -> usize {
        self.bits.len()
    }


    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }


    pub fn as_str(&self) -> &str {
        &self.bits
    }


    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

}

impl fmt::Display for Code {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }

}

impl AsRef<str> for Code {

    fn as_ref(&self) -> &str {
        &self.bits
    }

}

impl From<Code> for String {

    fn from(code: Code) -> Self {
        code.bits
    }

}


/// Reads one character of a '0'/'1' string as a direction: `false` is left, `true` is right.
pub fn parse_bit(found: char, position: usize) -> Result<bool> {
    match found {
        LEFT_BIT => Ok(false),
        RIGHT_BIT => Ok(true),
        _ => Err(HuffmanError::MalformedEncoding { found, position })
    }
}
