//! Arena of vertices keyed by identity.
//!
//! A payload may only reference vertices that are already in the arena, and every new vertex
//! receives a larger id than anything it references. Ownership paths therefore strictly
//! decrease in id and the refinement structure cannot contain a cycle.
//!
//! Sharing is allowed: the same agent may perform for several goals and the same vertex may
//! appear under two refinements. The renderer emits shared vertices once per occurrence.

use crate::error::{Error, Result};
use crate::ids::{IdAllocator, IdSource, VertexId};
use crate::links::Link;
use crate::model::{Goal, Node, Obstacle, Refinement, Vertex, VertexKind};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RefinementGraph {
    ids: IdSource,
    vertices: IndexMap<VertexId, Vertex, FxBuildHasher>,
}

impl RefinementGraph {
    /// A graph drawing ids from the process-wide counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph drawing ids from `ids`, which may be shared with other graphs.
    pub fn with_allocator(ids: Arc<IdAllocator>) -> Self {
        Self {
            ids: IdSource::Shared(ids),
            vertices: IndexMap::default(),
        }
    }

    /// Validates the references held by `node`, assigns it a fresh id and stores it.
    ///
    /// Nothing is allocated when validation fails.
    pub fn add(&mut self, node: impl Into<Node>) -> Result<VertexId> {
        let node = node.into();
        self.check_references(&node)?;
        let id = self.ids.next_id();
        tracing::trace!(%id, kind = %node.kind(), "vertex added");
        self.vertices.insert(id, Vertex::new(id, node));
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertices
            .get(&id)
            .ok_or(Error::UnknownVertex { id })
    }

    pub fn goal(&self, id: VertexId) -> Result<&Goal> {
        match self.vertex(id)?.node() {
            Node::Goal(goal) => Ok(goal),
            other => Err(mismatch(id, "goal", other)),
        }
    }

    pub fn obstacle(&self, id: VertexId) -> Result<&Obstacle> {
        match self.vertex(id)?.node() {
            Node::Obstacle(obstacle) => Ok(obstacle),
            other => Err(mismatch(id, "obstacle", other)),
        }
    }

    pub fn refinement(&self, id: VertexId) -> Result<&Refinement> {
        match self.vertex(id)?.node() {
            Node::Refinement(refinement) => Ok(refinement),
            other => Err(mismatch(id, "refinement", other)),
        }
    }

    /// Conflict between two goals.
    pub fn conflict(&self, first: VertexId, second: VertexId) -> Result<Link> {
        self.goal(first)?;
        self.goal(second)?;
        Ok(Link::Conflict { first, second })
    }

    /// `obstacle` obstructs `goal`.
    pub fn obstruction(&self, goal: VertexId, obstacle: VertexId) -> Result<Link> {
        self.goal(goal)?;
        self.obstacle(obstacle)?;
        Ok(Link::Obstruction { goal, obstacle })
    }

    /// `goal` resolves `obstacle`.
    pub fn resolution(&self, goal: VertexId, obstacle: VertexId) -> Result<Link> {
        self.goal(goal)?;
        self.obstacle(obstacle)?;
        Ok(Link::Resolution { goal, obstacle })
    }

    fn expect_kind(&self, id: VertexId, expected: VertexKind) -> Result<()> {
        let found = self.vertex(id)?.kind();
        if found != expected {
            return Err(Error::KindMismatch {
                id,
                expected: expected.as_str(),
                found,
            });
        }
        Ok(())
    }

    fn check_references(&self, node: &Node) -> Result<()> {
        match node {
            Node::Goal(goal) => {
                for &refinement in &goal.refinements {
                    self.expect_kind(refinement, VertexKind::Refinement)?;
                }
                for link in &goal.performs {
                    self.expect_kind(link.agent, VertexKind::Agent)?;
                    if let Some(operation) = link.operation {
                        self.expect_kind(operation, VertexKind::Operation)?;
                    }
                }
            }
            Node::Obstacle(obstacle) => {
                for &refinement in &obstacle.refinements {
                    self.expect_kind(refinement, VertexKind::Refinement)?;
                }
            }
            Node::Refinement(refinement) => {
                if refinement.children.is_empty() {
                    return Err(Error::EmptyRefinement);
                }
                for &child in &refinement.children {
                    let found = self.vertex(child)?.kind();
                    if found == VertexKind::Refinement {
                        return Err(Error::KindMismatch {
                            id: child,
                            expected: "non-refinement vertex",
                            found,
                        });
                    }
                }
            }
            Node::Agent(_) | Node::Operation(_) | Node::DomainProperty(_) => {}
        }
        Ok(())
    }
}

fn mismatch(id: VertexId, expected: &'static str, found: &Node) -> Error {
    Error::KindMismatch {
        id,
        expected,
        found: found.kind(),
    }
}
