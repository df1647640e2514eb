use thiserror::Error;


/// Why an alphabet was rejected by the tree builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {

    #[error("the alphabet is empty")]
    EmptyAlphabet,

    #[error("symbol {symbol} appears more than once in the alphabet")]
    DuplicateSymbol { symbol: String },

    #[error("symbol {symbol} has weight {weight}, expected a finite value >= 0")]
    InvalidWeight { symbol: String, weight: f64 },

}


/// Everything that can go wrong while building a tree or coding with it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HuffmanError {

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("symbol {symbol} is not present in the tree")]
    SymbolNotFound { symbol: String },

    /// A character other than '0' or '1' in a bit string.
    #[error("found {found:?} at bit {position}, the encoding is not binary")]
    MalformedEncoding { found: char, position: usize },

    /// The bit at `position` asks for a child the current node doesn't have.
    #[error("bit {position} leads outside the tree")]
    PathExhausted { position: usize },

    /// The bits stop on an internal node, `depth` edges below the root.
    #[error("the encoding ends on an internal node at depth {depth}")]
    IncompleteCode { depth: usize },

    /// Trailing bits that never reached a leaf.
    #[error("{pending} trailing bits do not complete a symbol")]
    TruncatedEncoding { pending: usize },

}


pub type Result<T> = std::result::Result<T, HuffmanError>;
