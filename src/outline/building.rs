//! Tree builder: flat records to a nested forest
//!
//! The Algorithm
//!
//!     Records are folded in input order. For every record a cursor starts at the top-level
//!     sequence and descends `depth` times, each time into the children of the *last* node
//!     of the current sequence. The record is appended where the cursor stops. Parents are
//!     never matched by name: the most recently placed node at each shallower level is the
//!     parent. The parser already guarantees that depth never rises by more than one level
//!     between consecutive records, which is what makes "last node so far" the right parent.
//!
//!     While building, nodes live in an arena and refer to their children by index, so the
//!     cursor is just an index. Once every record is placed, the arena is turned into an
//!     owned forest of [`TreeNode`]s.
//!
//! Leniency
//!
//!     The builder accepts anything the parser lets through and never fails:
//!
//!     - A file node (no children sequence) that is followed by a deeper record gets a
//!       children sequence on demand. It renders as a folder from then on.
//!     - If the cursor runs out of nodes before reaching the record's depth (only possible
//!       when the first entry sits below the baseline), the record is attached at the level
//!       reached so far. It keeps its own depth value, and later records descend through
//!       it like through any other node.

use crate::outline::parsing::FlatRecord;
use log::trace;
use serde::Serialize;

/// A folder or file in the built tree.
///
/// `children` is `Some` for folders, even empty ones, and `None` for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn folder(name: impl Into<String>, depth: usize, children: Vec<TreeNode>) -> Self {
        TreeNode {
            name: name.into(),
            depth,
            children: Some(children),
        }
    }

    pub fn file(name: impl Into<String>, depth: usize) -> Self {
        TreeNode {
            name: name.into(),
            depth,
            children: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.children.is_some()
    }

    /// Children, or an empty slice for files
    pub fn child_nodes(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl From<FlatRecord> for TreeNode {
    fn from(record: FlatRecord) -> Self {
        TreeNode {
            name: record.name,
            depth: record.depth,
            children: record.is_container.then(Vec::new),
        }
    }
}

/// Arena slot while the tree is being assembled
#[derive(Debug)]
struct Slot {
    name: String,
    depth: usize,
    children: Option<Vec<usize>>,
}

#[derive(Debug, Default)]
struct Arena {
    slots: Vec<Slot>,
    roots: Vec<usize>,
}

impl Arena {
    /// The sequence the cursor points at: the roots, or a node's children.
    fn sequence(&self, cursor: Option<usize>) -> &[usize] {
        match cursor {
            None => &self.roots,
            Some(index) => self.slots[index].children.as_deref().unwrap_or(&[]),
        }
    }

    fn sequence_mut(&mut self, cursor: Option<usize>) -> &mut Vec<usize> {
        match cursor {
            None => &mut self.roots,
            Some(index) => self.slots[index].children.get_or_insert_with(Vec::new),
        }
    }

    fn place(&mut self, record: FlatRecord) {
        let mut cursor = None;
        for _ in 0..record.depth {
            let Some(&last) = self.sequence(cursor).last() else {
                trace!(
                    "no parent at depth {} for {:?}, attaching higher",
                    record.depth,
                    record.name
                );
                break;
            };
            self.slots[last].children.get_or_insert_with(Vec::new);
            cursor = Some(last);
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            name: record.name,
            depth: record.depth,
            children: record.is_container.then(Vec::new),
        });
        self.sequence_mut(cursor).push(index);
    }

    fn into_forest(mut self) -> Vec<TreeNode> {
        let roots = std::mem::take(&mut self.roots);
        roots
            .into_iter()
            .map(|index| self.materialize(index))
            .collect()
    }

    fn materialize(&mut self, index: usize) -> TreeNode {
        let name = std::mem::take(&mut self.slots[index].name);
        let depth = self.slots[index].depth;
        let children = self.slots[index].children.take().map(|children| {
            children
                .into_iter()
                .map(|child| self.materialize(child))
                .collect()
        });
        TreeNode {
            name,
            depth,
            children,
        }
    }
}

/// Fold flat records into a forest of top-level nodes.
pub fn build(records: Vec<FlatRecord>) -> Vec<TreeNode> {
    let mut arena = Arena::default();
    for record in records {
        arena.place(record);
    }
    arena.into_forest()
}
