use std::fmt;

use crate::code::{LEFT_BIT, RIGHT_BIT};
use crate::tree::{HuffmanTree, Node};


const INDENT: &str = "       ";
const ROOT_LABEL: &str = "[    ROOT    ]";


fn render_node<S>(f: &mut fmt::Formatter<'_>, node: &Node<S>, depth: usize, edge: Option<char>) -> fmt::Result
where
    S: fmt::Display
{

    match edge {
        Some(bit) => write!(f, "{}|__ ({bit})", INDENT.repeat(depth))?,
        None if !node.is_leaf() => f.write_str(ROOT_LABEL)?,
        None => {},
    }

    if let Some(symbol) = node.symbol() {
        write!(f, " {symbol}")?;
    }

    writeln!(f)?;

    if let Node::Internal { left, right, .. } = node {
        render_node(f, left, depth + 1, Some(LEFT_BIT))?;
        render_node(f, right, depth + 1, Some(RIGHT_BIT))?;
    }

    Ok(())
}


/// One line per node, left subtree first, each line indented by depth and labelled with the bit
/// of the edge leading to it.
impl<S> fmt::Display for HuffmanTree<S>
where
    S: fmt::Display
{

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_node(f, self.root(), 0, None)
    }

}


#[cfg(test)]
mod tests {

    use super::*;


    #[test]
    fn renders_small_tree() {

        let tree = HuffmanTree::<char>::build([('a', 3.0), ('b', 1.0), ('c', 1.0)]).unwrap();

        let expected = "\
[    ROOT    ]
       |__ (0) a
       |__ (1)
              |__ (0) c
              |__ (1) b
";

        assert_eq!(tree.to_string(), expected);
    }


    #[test]
    fn renders_single_leaf() {

        let tree = HuffmanTree::<char>::build([('x', 1.0)]).unwrap();

        assert_eq!(tree.to_string(), " x\n");
    }

}
