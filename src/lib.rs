//! Huffman codes for weighted alphabets.
//!
//! A [`HuffmanTree`] is built once from `(symbol, weight)` pairs and is immutable afterwards.
//! Codes are strings of `'0'` (left) and `'1'` (right) characters.
//!
//! ```
//! use huffman_codes::HuffmanTree;
//!
//! let tree = HuffmanTree::<char>::build([('a', 45.0), ('b', 13.0), ('c', 12.0), ('d', 16.0), ('e', 9.0), ('f', 5.0)])?;
//!
//! let encoded = tree.encode_text("cafe")?;
//! assert_eq!(tree.decode_text(&encoded)?, "cafe");
//! assert_eq!(tree.encode_symbol(&'a')?.as_str(), "1");
//! # Ok::<(), huffman_codes::HuffmanError>(())
//! ```

mod code;
mod codec;
mod error;
mod frequencies;
mod render;
mod tree;

pub use code::Code;
pub use error::{HuffmanError, InputError, Result};
pub use frequencies::{english_frequencies, value_frequencies};
pub use tree::{HuffmanTree, LeafEntry, Node, SymbolFrequency};
