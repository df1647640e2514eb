use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::code::Code;
use crate::error::{InputError, Result};


/// A symbol of the alphabet together with its weight.
///
/// Weights may be probabilities or raw counts; they only have to be finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolFrequency<S> {

    pub symbol: S,
    pub weight: f64

}

impl<S> SymbolFrequency<S> {

    pub const fn new(symbol: S, weight: f64) -> Self {
        Self { symbol, weight }
    }

}

impl<S> From<(S, f64)> for SymbolFrequency<S> {

    fn from((symbol, weight): (S, f64)) -> Self {
        Self::new(symbol, weight)
    }

}


#[derive(Debug, Clone, PartialEq)]
pub enum Node<S> {

    Internal { weight: f64, left: Box<Node<S>>, right: Box<Node<S>> },
    Leaf { weight: f64, symbol: S },

}

impl<S> Node<S> {

    pub const fn weight(&self) -> f64 {
        match self {
            Node::Internal { weight, .. } |
            Node::Leaf { weight, .. }
                => *weight
        }
    }


    /// Only leaves carry a symbol
    pub const fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }


    pub fn left(&self) -> Option<&Node<S>> {
        match self {
            Node::Internal { left, .. } => Some(left),
            Node::Leaf { .. } => None,
        }
    }


    pub fn right(&self) -> Option<&Node<S>> {
        match self {
            Node::Internal { right, .. } => Some(right),
            Node::Leaf { .. } => None,
        }
    }


    /// The child a single bit leads to: `false` goes left, `true` goes right.
    pub fn child(&self, bit: bool) -> Option<&Node<S>> {
        if bit {
            self.right()
        } else {
            self.left()
        }
    }


    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }


    /// Longest root-to-leaf path of this subtree, counted in edges
    pub fn height(&self) -> usize {
        match self {
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
            Node::Leaf { .. } => 0,
        }
    }


    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
            Node::Leaf { .. } => 1,
        }
    }


    pub fn internal_count(&self) -> usize {
        match self {
            Node::Internal { left, right, .. } => 1 + left.internal_count() + right.internal_count(),
            Node::Leaf { .. } => 0,
        }
    }


    fn collect_leaves<'a>(&'a self, code: Code, leaves: &mut Vec<LeafEntry<'a, S>>) {

        match self {

            Node::Internal { left, right, .. } => {
                left.collect_leaves(code.step_left(), leaves);
                right.collect_leaves(code.step_right(), leaves);
            },

            Node::Leaf { weight, symbol } => {
                leaves.push(LeafEntry { symbol, weight: *weight, code });
            },
        }
    }

}

impl<S> Node<S>
where
    S: PartialEq
{

    /// Depth-first search for `target`, left subtree first.
    pub fn encode(&self, encoding: Code, target: &S) -> Option<Code> {

        match self {

            Node::Internal { left, right, .. } => {

                if let Some(ret) = left.encode(encoding.step_left(), target) {
                    Some(ret)
                } else {
                    right.encode(encoding.step_right(), target)
                }
            },

            Node::Leaf { symbol, .. } => {

                if symbol == target {
                    Some(encoding)
                } else {
                    None
                }
            },
        }
    }

}


/// A leaf seen from the root: its symbol, its original weight and the path leading to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafEntry<'a, S> {

    pub symbol: &'a S,
    pub weight: f64,
    pub code: Code

}

impl<S> LeafEntry<'_, S> {

    pub fn depth(&self) -> usize {
        self.code.len()
    }

}


/// Heap entry ordering nodes by ascending weight, then by push order
struct Pending<S> {

    seq: usize,
    node: Node<S>

}

impl<S> PartialEq for Pending<S> {

    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }

}

impl<S> Eq for Pending<S> {}

impl<S> PartialOrd for Pending<S> {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

}

impl<S> Ord for Pending<S> {

    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the lightest, then oldest, entry must compare greatest
        other.node.weight().total_cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }

}


/// An immutable Huffman tree built from an alphabet of weighted symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree<S> {

    root: Node<S>

}

impl<S> HuffmanTree<S>
where
    S: Eq + Hash + Clone + Debug
{

    /// Builds the tree by greedily merging the two lightest nodes until one is left.
    ///
    /// The first node taken from the queue becomes the right child and the second one the left
    /// child. Nodes of equal weight leave the queue in the order they entered it, alphabet entries
    /// first in their given order, then merged nodes in creation order.
    pub fn build<I, T>(alphabet: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<SymbolFrequency<S>>
    {

        let alphabet: Vec<SymbolFrequency<S>> = alphabet.into_iter().map(Into::into).collect();

        validate_alphabet(&alphabet)?;

        let symbol_count = alphabet.len();

        let mut queue: BinaryHeap<Pending<S>> = alphabet.into_iter()
            .enumerate()
            .map(|(seq, SymbolFrequency { symbol, weight })| Pending {
                seq,
                node: Node::Leaf { weight, symbol }
            })
            .collect();

        let mut next_seq = symbol_count;

        while queue.len() > 1 {

            let (Some(right), Some(left)) = (queue.pop(), queue.pop()) else {
                unreachable!()
            };

            let weight = right.node.weight() + left.node.weight();

            trace!(right = right.seq, left = left.seq, merged = next_seq, weight, "merged nodes");

            queue.push(Pending {
                seq: next_seq,
                node: Node::Internal {
                    weight,
                    left: Box::new(left.node),
                    right: Box::new(right.node)
                }
            });

            next_seq += 1;
        }

        let Some(Pending { node: root, .. }) = queue.pop() else {
            return Err(InputError::EmptyAlphabet.into());
        };

        debug!(symbols = symbol_count, weight = root.weight(), height = root.height(), "built huffman tree");

        Ok(Self { root })
    }

}

impl<S> HuffmanTree<S> {

    pub const fn root(&self) -> &Node<S> {
        &self.root
    }


    /// Sum of all the input weights
    pub const fn weight(&self) -> f64 {
        self.root.weight()
    }


    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }


    pub fn internal_count(&self) -> usize {
        self.root.internal_count()
    }


    /// Every leaf from left to right, with its code.
    pub fn leaves(&self) -> Vec<LeafEntry<'_, S>> {

        let mut leaves = Vec::new();

        self.root.collect_leaves(Code::new_empty(), &mut leaves);

        leaves
    }


    pub fn symbols(&self) -> Vec<&S> {
        self.leaves()
            .into_iter()
            .map(|leaf| leaf.symbol)
            .collect()
    }

}


fn validate_alphabet<S>(alphabet: &[SymbolFrequency<S>]) -> std::result::Result<(), InputError>
where
    S: Eq + Hash + Debug
{

    if alphabet.is_empty() {
        return Err(InputError::EmptyAlphabet);
    }

    let mut seen = HashSet::with_capacity(alphabet.len());

    for SymbolFrequency { symbol, weight } in alphabet {

        if !weight.is_finite() || *weight < 0.0 {
            return Err(InputError::InvalidWeight { symbol: format!("{symbol:?}"), weight: *weight });
        }

        if !seen.insert(symbol) {
            return Err(InputError::DuplicateSymbol { symbol: format!("{symbol:?}") });
        }
    }

    Ok(())
}
