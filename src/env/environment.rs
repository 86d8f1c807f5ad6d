//! The linked environment: an immutable tree plus the indices the
//! linked-stage queries need.

use rustc_hash::FxHashMap;

use crate::base::{MemoCache, Name, NodeId};
use crate::model::{Filled, KindOrCategory, Linked, Node};

use super::error::ResolveError;

/// A fully linked tree and its derived indices.
///
/// Constructed once by [`Environment::link`] and treated as immutable
/// afterwards. The id and parent indices are built in a single walk at
/// construction time; the qualified-name caches fill lazily as queries
/// arrive. Parenthood is a derived relation kept in a side index, never
/// a pointer stored on nodes.
#[derive(Debug)]
pub struct Environment {
    pub(super) root: Node<Linked>,
    /// Child-index path from the root to each node.
    pub(super) paths: FxHashMap<NodeId, Vec<u32>>,
    pub(super) parents: FxHashMap<NodeId, NodeId>,
    pub(super) fqn_by_id: MemoCache<NodeId, Name>,
    pub(super) id_by_fqn: MemoCache<Name, NodeId>,
}

impl Environment {
    /// The linked factory: takes a filled tree whose ids and reference
    /// scopes were assigned by the external linker, checks them, and
    /// indexes the result.
    pub fn link(root: Node<Filled>) -> Result<Self, ResolveError> {
        let root: Node<Linked> = root.convert_stage(
            &mut |kind, id| id.ok_or(ResolveError::UnlinkedNode { kind }),
            &mut |name, scope| {
                scope.ok_or_else(|| ResolveError::UnscopedReference {
                    name: name.to_string(),
                })
            },
        )?;

        let mut paths = FxHashMap::default();
        let mut parents = FxHashMap::default();
        index(&root, &mut Vec::new(), None, &mut paths, &mut parents)?;

        Ok(Self {
            root,
            paths,
            parents,
            fqn_by_id: MemoCache::new(),
            id_by_fqn: MemoCache::new(),
        })
    }

    pub fn root(&self) -> &Node<Linked> {
        &self.root
    }

    /// Top-level entities.
    pub fn members(&self) -> &[Node<Linked>] {
        self.root.members()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.paths.contains_key(&id)
    }

    /// The unique node with the given id.
    pub fn node(&self, id: NodeId) -> Result<&Node<Linked>, ResolveError> {
        let path = self
            .paths
            .get(&id)
            .ok_or(ResolveError::MissingNode { id })?;
        let mut node = &self.root;
        for &step in path {
            // Paths were built from this exact tree, which never
            // changes after linking.
            node = node.children()[step as usize];
        }
        Ok(node)
    }

    /// Parent of the given node. The root has none.
    pub fn parent(&self, id: NodeId) -> Result<&Node<Linked>, ResolveError> {
        let parent_id = *self
            .parents
            .get(&id)
            .ok_or(ResolveError::Orphan { id })?;
        self.node(parent_id)
    }

    /// Nearest ancestor matching the filter, if any.
    pub fn closest_ancestor(
        &self,
        id: NodeId,
        filter: impl Into<KindOrCategory>,
    ) -> Option<&Node<Linked>> {
        let filter = filter.into();
        let mut current = id;
        while let Some(&parent_id) = self.parents.get(&current) {
            let parent = self.node(parent_id).ok()?;
            if parent.is(filter) {
                return Some(parent);
            }
            current = parent_id;
        }
        None
    }
}

fn index(
    node: &Node<Linked>,
    path: &mut Vec<u32>,
    parent: Option<NodeId>,
    paths: &mut FxHashMap<NodeId, Vec<u32>>,
    parents: &mut FxHashMap<NodeId, NodeId>,
) -> Result<(), ResolveError> {
    if paths.insert(node.id, path.clone()).is_some() {
        return Err(ResolveError::DuplicateId { id: node.id });
    }
    if let Some(parent) = parent {
        parents.insert(node.id, parent);
    }
    for (position, child) in node.children().into_iter().enumerate() {
        path.push(position as u32);
        index(child, path, Some(node.id), paths, parents)?;
        path.pop();
    }
    Ok(())
}
