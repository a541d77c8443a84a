use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Interns node identities into dense indices, in first-seen order
#[derive(Debug, Clone)]
pub struct NodeArena<N> {
    /// Node identity for each dense index
    nodes: Vec<N>,

    /// Reverse lookup: node identity -> dense index
    index: HashMap<N, usize>,
}

impl<N> NodeArena<N>
where
    N: Clone + Eq + Hash,
{
    /// Creates an empty arena
    pub fn new() -> Self {
        NodeArena {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the index of `node`, assigning the next free index if it is new
    pub fn intern(&mut self, node: N) -> usize {
        if let Some(&existing) = self.index.get(&node) {
            return existing;
        }

        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        id
    }

    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn get(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in index order
    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }
}

impl<N> Default for NodeArena<N>
where
    N: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> FromIterator<N> for NodeArena<N>
where
    N: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut arena = NodeArena::new();
        for node in iter {
            arena.intern(node);
        }
        arena
    }
}

// The reverse index is derived from `nodes`, so comparing `nodes` is enough.
impl<N: PartialEq> PartialEq for NodeArena<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<N: Eq> Eq for NodeArena<N> {}
