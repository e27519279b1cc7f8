//! Vertex welding

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::vertex::{VertexAttributes, VertexKey};

/// Maps distinct vertex keys to dense local indices within one submesh
///
/// Indices are handed out in first-seen order, so output depends only on
/// traversal order. Each unique vertex keeps the attributes of its first
/// occurrence; the folded [`VertexKey`] is used for lookup only.
#[derive(Debug, Default)]
pub struct VertexWelder {
    known: HashMap<VertexKey, u32>,
    vertices: Vec<VertexAttributes>,
}

impl VertexWelder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of an equal vertex seen before, or append this one
    pub fn weld(&mut self, attributes: VertexAttributes) -> u32 {
        match self.known.entry(VertexKey::new(attributes)) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let index = self.vertices.len() as u32;
                self.vertices.push(attributes);
                e.insert(index);
                index
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Unique vertices in index order
    pub fn vertices(&self) -> &[VertexAttributes] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<VertexAttributes> {
        self.vertices
    }
}
