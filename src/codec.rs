use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::code::{parse_bit, Code};
use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanTree, Node};


/// Where the decoding cursor stands after consuming a bit
enum Step<'a, S> {

    /// Still on an internal node, more bits are needed
    Descending(&'a Node<S>),
    /// A whole code was read
    AtLeaf(&'a S),
    /// The bit asked for a child that doesn't exist
    Stuck

}


fn step<'a, S>(node: &'a Node<S>, bit: bool) -> Step<'a, S> {
    match node.child(bit) {
        Some(Node::Leaf { symbol, .. }) => Step::AtLeaf(symbol),
        Some(next_node) => Step::Descending(next_node),
        None => Step::Stuck,
    }
}


fn not_found<S: Debug>(symbol: &S) -> HuffmanError {
    HuffmanError::SymbolNotFound { symbol: format!("{symbol:?}") }
}


impl<S> HuffmanTree<S>
where
    S: Eq + Hash + Clone + Debug
{

    /// Returns the path leading to `symbol`'s leaf. The only symbol of a single-leaf tree has an
    /// empty code.
    pub fn encode_symbol(&self, symbol: &S) -> Result<Code> {
        self.root()
            .encode(Code::new_empty(), symbol)
            .ok_or_else(|| not_found(symbol))
    }


    /// Follows `bits` from the root and returns the symbol of the leaf they end on.
    pub fn decode_symbol(&self, bits: &str) -> Result<S> {

        let mut node = self.root();

        for (position, found) in bits.chars().enumerate() {

            let bit = parse_bit(found, position)?;

            node = node.child(bit)
                .ok_or(HuffmanError::PathExhausted { position })?;
        }

        node.symbol()
            .cloned()
            .ok_or(HuffmanError::IncompleteCode { depth: bits.chars().count() })
    }


    /// Maps every symbol of the tree to its code.
    pub fn code_table(&self) -> HashMap<S, Code> {
        self.leaves()
            .into_iter()
            .map(|leaf| (leaf.symbol.clone(), leaf.code))
            .collect()
    }


    /// Concatenates the codes of every value of `data`, failing on the first one missing from the
    /// tree.
    pub fn encode_sequence<T>(&self, data: impl IntoIterator<Item = T>) -> Result<String>
    where
        T: Borrow<S>
    {

        let table = self.code_table();

        let mut encoded = String::new();

        for symbol in data {

            let symbol: &S = symbol.borrow();

            let code = table.get(symbol)
                .ok_or_else(|| not_found(symbol))?;

            encoded.push_str(code.as_str());
        }

        Ok(encoded)
    }


    /// Decodes a concatenation of codes, one bit at a time.
    ///
    /// Bits left over after the last complete code are reported as
    /// [`HuffmanError::TruncatedEncoding`] instead of being dropped. Once a bit leads outside the
    /// tree no later bit can complete a code, so everything from there on counts as left over.
    pub fn decode_sequence(&self, bits: &str) -> Result<Vec<S>> {

        let mut decoded = Vec::new();

        let root = self.root();
        let mut node = root;
        let mut pending = 0;
        let mut stuck = false;

        for (position, found) in bits.chars().enumerate() {

            let bit = parse_bit(found, position)?;

            if stuck {
                pending += 1;
                continue;
            }

            match step(node, bit) {

                Step::Descending(next_node) => {
                    node = next_node;
                    pending += 1;
                },

                Step::AtLeaf(symbol) => {
                    decoded.push(symbol.clone());
                    node = root;
                    pending = 0;
                },

                Step::Stuck => {
                    stuck = true;
                    pending += 1;
                },
            }
        }

        if pending != 0 {
            return Err(HuffmanError::TruncatedEncoding { pending });
        }

        Ok(decoded)
    }


    /// Height of the tree, which is the length of the longest code.
    pub fn max_bit_length(&self) -> usize {
        self.root().height()
    }


    pub fn encoding_bit_length(&self, symbol: &S) -> Result<usize> {
        Ok(self.encode_symbol(symbol)?.len())
    }


    /// Sum of every leaf's weight times its depth.
    ///
    /// The weights are the ones the tree was built from, so this is in bits per symbol only when
    /// they were probabilities summing to 1.
    pub fn average_bit_length(&self) -> f64 {
        self.leaves()
            .iter()
            .map(|leaf| leaf.weight * leaf.depth() as f64)
            .sum()
    }

}

impl HuffmanTree<char> {

    pub fn encode_text(&self, text: &str) -> Result<String> {
        self.encode_sequence(text.chars())
    }


    pub fn decode_text(&self, bits: &str) -> Result<String> {
        Ok(self.decode_sequence(bits)?
            .into_iter()
            .collect())
    }


    /// How many times shorter the encoding of `text` is than 8 bits per character.
    ///
    /// An empty encoding divides by zero: the factor is infinite for a non-empty text on a
    /// single-symbol tree, and NaN for an empty text.
    pub fn compression_factor(&self, text: &str) -> Result<f64> {

        let encoded = self.encode_text(text)?;

        Ok((text.chars().count() * 8) as f64 / encoded.len() as f64)
    }

}


#[cfg(test)]
mod tests {

    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::*;


    fn textbook_tree() -> HuffmanTree<char> {
        HuffmanTree::build([
            ('a', 45.0), ('b', 13.0), ('c', 12.0), ('d', 16.0), ('e', 9.0), ('f', 5.0)
        ]).unwrap()
    }


    fn single_tree() -> HuffmanTree<char> {
        HuffmanTree::build([('x', 1.0)]).unwrap()
    }


    fn random_text(rng: &mut StdRng, alphabet: &[char], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }


    #[rstest]
    #[case('a', "1")]
    #[case('b', "010")]
    #[case('c', "011")]
    #[case('d', "000")]
    #[case('e', "0010")]
    #[case('f', "0011")]
    fn textbook_codes(#[case] symbol: char, #[case] expected: &str) {

        let tree = textbook_tree();

        let code = tree.encode_symbol(&symbol).unwrap();

        assert_eq!(code.as_str(), expected);
        assert_eq!(tree.decode_symbol(expected), Ok(symbol));
        assert_eq!(tree.encoding_bit_length(&symbol), Ok(expected.len()));
    }


    #[test]
    fn textbook_metrics() {

        let tree = textbook_tree();

        assert_eq!(tree.max_bit_length(), 4);
        assert_eq!(tree.encoding_bit_length(&'f'), Ok(tree.max_bit_length()));
        assert_eq!(tree.average_bit_length(), 224.0);
    }


    #[test]
    fn code_table_matches_search() {

        let tree = textbook_tree();

        let table = tree.code_table();

        assert_eq!(table.len(), 6);

        for (symbol, code) in &table {
            assert_eq!(tree.encode_symbol(symbol).as_ref(), Ok(code));
        }
    }


    #[test]
    fn single_symbol_tree() {

        let tree = single_tree();

        assert_eq!(tree.encode_symbol(&'x'), Ok(Code::new_empty()));
        assert_eq!(tree.decode_symbol(""), Ok('x'));
        assert_eq!(tree.max_bit_length(), 0);
        assert_eq!(tree.average_bit_length(), 0.0);
        assert_eq!(tree.encode_text("xxx"), Ok(String::new()));
        assert_eq!(tree.decode_text(""), Ok(String::new()));
        assert_eq!(tree.decode_text("0"), Err(HuffmanError::TruncatedEncoding { pending: 1 }));
        assert_eq!(tree.decode_text("0110"), Err(HuffmanError::TruncatedEncoding { pending: 4 }));
        assert_eq!(
            tree.decode_text("01a"),
            Err(HuffmanError::MalformedEncoding { found: 'a', position: 2 })
        );
        assert_eq!(tree.compression_factor("xx"), Ok(f64::INFINITY));
        assert!(tree.compression_factor("").unwrap().is_nan());
    }


    #[test]
    fn single_symbol_text_is_not_recoverable() {

        let tree = single_tree();

        // Every code is empty, so the number of symbols is lost
        let encoded = tree.encode_text("xxx").unwrap();

        assert_eq!(encoded, "");
        assert_eq!(tree.decode_text(&encoded), Ok(String::new()));
        assert_ne!(tree.decode_text(&encoded), Ok("xxx".to_string()));
    }


    #[test]
    fn small_coherency() {

        let tree = textbook_tree();

        let text = "fade";

        let encoded = tree.encode_text(text).unwrap();

        assert_eq!(encoded, "001110000010");
        assert_eq!(tree.decode_text(&encoded).unwrap(), text);
    }


    #[test]
    fn check_coherency() {

        let mut rng = StdRng::seed_from_u64(0);

        let tree = textbook_tree();
        let alphabet = ['a', 'b', 'c', 'd', 'e', 'f'];

        for _ in 0..100 {

            let len = rng.gen_range(0..200);
            let text = random_text(&mut rng, &alphabet, len);

            let encoded = tree.encode_text(&text).unwrap();

            assert_eq!(tree.decode_text(&encoded).unwrap(), text);
        }
    }


    #[test]
    fn generic_sequences() {

        let tree = HuffmanTree::<u8>::build([(0u8, 10.0), (1, 3.0), (2, 2.0), (255, 1.0)]).unwrap();

        let data = [0u8, 255, 1, 1, 2, 0];

        let encoded = tree.encode_sequence(&data).unwrap();

        assert_eq!(tree.decode_sequence(&encoded).unwrap(), data);
    }


    #[test]
    fn missing_symbols() {

        let tree = textbook_tree();

        let expected = HuffmanError::SymbolNotFound { symbol: "'z'".to_string() };

        assert_eq!(tree.encode_symbol(&'z'), Err(expected.clone()));
        assert_eq!(tree.encoding_bit_length(&'z'), Err(expected.clone()));
        assert_eq!(tree.encode_text("abzcz"), Err(expected));
        assert!(tree.compression_factor("z").is_err());
    }


    #[rstest]
    #[case::not_binary("2", HuffmanError::MalformedEncoding { found: '2', position: 0 })]
    #[case::late_malformed("01x", HuffmanError::MalformedEncoding { found: 'x', position: 2 })]
    #[case::past_leaf("10", HuffmanError::PathExhausted { position: 1 })]
    #[case::partial("01", HuffmanError::IncompleteCode { depth: 2 })]
    #[case::empty("", HuffmanError::IncompleteCode { depth: 0 })]
    fn decode_symbol_errors(#[case] bits: &str, #[case] expected: HuffmanError) {
        assert_eq!(textbook_tree().decode_symbol(bits), Err(expected));
    }


    #[rstest]
    #[case::not_binary("1 1", HuffmanError::MalformedEncoding { found: ' ', position: 1 })]
    #[case::truncated("100", HuffmanError::TruncatedEncoding { pending: 2 })]
    #[case::only_partial("0", HuffmanError::TruncatedEncoding { pending: 1 })]
    fn decode_text_errors(#[case] bits: &str, #[case] expected: HuffmanError) {
        assert_eq!(textbook_tree().decode_text(bits), Err(expected));
    }


    #[test]
    fn compression_factor() {

        let tree = textbook_tree();

        // "aaab": 3 * 1 + 3 bits against 4 * 8 bits
        assert_eq!(tree.compression_factor("aaab"), Ok(32.0 / 6.0));
    }

}
