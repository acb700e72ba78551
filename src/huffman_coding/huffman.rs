use log::{debug, trace};

/// What a node holds: a symbol, or the arena indices of its two children.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeKind {
    Leaf(u8),
    Branch { left: usize, right: usize },
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Node {
    pub weight: u64,
    pub kind: NodeKind,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, kind: NodeKind) -> Node {
        Node { weight, kind }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }
}

/// One merge step. `first` is the smallest live node, `second` the runner up. Both are
/// arena indices, as is the new `parent`.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Merge {
    pub first: usize,
    pub second: usize,
    pub parent: usize,
}

/// A Huffman tree held in an arena. Leaves come first in ascending symbol order, each merged
/// parent is appended after them, so the root is always the last node.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub nodes: Vec<Node>,
    pub merges: Vec<Merge>,
    pub root: usize,
}

impl HuffmanTree {
    /// Build the tree from a 256 entry frequency table. Returns None if no symbol occurs.
    pub fn from_freqs(freqs: &[u32]) -> Option<HuffmanTree> {
        let mut nodes: Vec<Node> = freqs
            .iter()
            .enumerate()
            .filter(|(_, &f)| f > 0)
            .map(|(sym, &f)| Node::new(f as u64, NodeKind::Leaf(sym as u8)))
            .collect();

        if nodes.is_empty() {
            return None;
        }
        debug!("Building tree from {} symbols", nodes.len());

        // Consumed nodes drop out of the scan. The last live node is the root.
        let mut live = vec![true; nodes.len()];
        let mut merges = Vec::with_capacity(nodes.len() - 1);

        while let Some((first, second)) = smallest_two(&nodes, &live) {
            let parent = nodes.len();
            // The runner up goes left, the smallest goes right.
            nodes.push(Node::new(
                nodes[first].weight + nodes[second].weight,
                NodeKind::Branch {
                    left: second,
                    right: first,
                },
            ));
            live[first] = false;
            live[second] = false;
            live.push(true);
            merges.push(Merge {
                first,
                second,
                parent,
            });
            trace!(
                "Merged {} ({}) and {} ({}) into {}",
                first,
                nodes[first].weight,
                second,
                nodes[second].weight,
                parent
            );
        }

        let root = nodes.len() - 1;
        Some(HuffmanTree {
            nodes,
            merges,
            root,
        })
    }

    /// Number of leaves, which is the number of distinct symbols.
    pub fn leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Stable linear scan for the two smallest live nodes. On a tie the node found first wins.
/// Returns None when fewer than two nodes are live.
fn smallest_two(nodes: &[Node], live: &[bool]) -> Option<(usize, usize)> {
    let mut first: Option<usize> = None;
    let mut second: Option<usize> = None;

    for (i, node) in nodes.iter().enumerate().filter(|(i, _)| live[*i]) {
        match (first, second) {
            (None, _) => first = Some(i),
            (Some(f), _) if node.weight < nodes[f].weight => {
                second = first;
                first = Some(i);
            }
            (Some(_), None) => second = Some(i),
            (Some(_), Some(s)) if node.weight < nodes[s].weight => second = Some(i),
            _ => {}
        }
    }
    Some((first?, second?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::freqs;

    fn tree_for(data: &[u8]) -> HuffmanTree {
        HuffmanTree::from_freqs(&freqs(data)).unwrap()
    }

    #[test]
    fn empty_test() {
        assert!(HuffmanTree::from_freqs(&[0; 256]).is_none());
    }

    #[test]
    fn single_symbol_test() {
        let tree = tree_for(b"aaaaa");
        assert_eq!(tree.len(), 1);
        assert!(tree.merges.is_empty());
        assert_eq!(tree.root, 0);
        assert_eq!(tree.nodes[0], Node::new(5, NodeKind::Leaf(b'a')));
    }

    #[test]
    fn node_count_test() {
        for data in [
            &b"ab"[..],
            &b"abracadabra"[..],
            &b"the quick brown fox jumps over the lazy dog"[..],
        ] {
            let tree = tree_for(data);
            let k = crate::tools::freq_count::distinct(&freqs(data));
            assert_eq!(tree.len(), 2 * k - 1);
            assert_eq!(tree.leaves(), k);
            assert_eq!(tree.nodes[tree.root].weight, data.len() as u64);
        }
        let all: Vec<u8> = (0..=255).collect();
        let tree = tree_for(&all);
        assert_eq!(tree.len(), 511);
        assert_eq!(tree.leaves(), 256);
    }

    #[test]
    fn merges_pick_smallest_live_nodes_test() {
        let text = b"it was the best of times, it was the worst of times, it was the age of wisdom";
        let tree = tree_for(text);
        // Replay the merge history and check no other live node was lighter.
        let mut live: Vec<bool> = tree.nodes.iter().map(|n| n.is_leaf()).collect();
        for m in &tree.merges {
            let w1 = tree.nodes[m.first].weight;
            let w2 = tree.nodes[m.second].weight;
            assert!(w1 <= w2);
            for (i, node) in tree.nodes.iter().enumerate() {
                if live[i] && i != m.first && i != m.second {
                    assert!(node.weight >= w1 && node.weight >= w2);
                }
            }
            live[m.first] = false;
            live[m.second] = false;
            live[m.parent] = true;
        }
        assert_eq!(live.iter().filter(|&&l| l).count(), 1);
        assert!(live[tree.root]);
    }

    #[test]
    fn ties_prefer_earliest_test() {
        // Five leaves c, d, e, f, g all weigh 1.
        let tree = tree_for(b"cdefg");
        assert_eq!(
            tree.merges[0],
            Merge {
                first: 0,
                second: 1,
                parent: 5
            }
        );
        // Smallest goes right, runner up left.
        assert_eq!(
            tree.nodes[5].kind,
            NodeKind::Branch { left: 1, right: 0 }
        );
    }

    #[test]
    fn abracadabra_shape_test() {
        // Leaves: a:5 b:2 c:1 d:1 r:2 at indices 0..5
        let tree = tree_for(b"abracadabra");
        let firsts: Vec<(usize, usize)> = tree.merges.iter().map(|m| (m.first, m.second)).collect();
        assert_eq!(firsts, vec![(2, 3), (1, 4), (5, 6), (0, 7)]);
        assert_eq!(tree.root, 8);
        assert_eq!(tree.nodes[8].weight, 11);
    }
}
