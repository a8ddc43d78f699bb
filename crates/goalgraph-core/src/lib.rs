#![forbid(unsafe_code)]

//! Goal-refinement graphs (goals, obstacles, agents, operations, domain properties) and their
//! rendering as Mermaid flowchart markup.
//!
//! Build a [`RefinementGraph`] bottom-up (children before the refinements that own them,
//! refinements before their goal), then hand the roots and any standalone [`Link`]s to
//! [`render`]:
//!
//! ```
//! use goalgraph_core::{Goal, RefinementGraph, Refinement};
//!
//! let mut g = RefinementGraph::new();
//! let g1 = g.add(Goal::soft("G1")).unwrap();
//! let g2 = g.add(Goal::soft("G2")).unwrap();
//! let r = g.add(Refinement::partial([g1, g2])).unwrap();
//! let root = g.add(Goal::soft("G").refined_by(r)).unwrap();
//!
//! let text = goalgraph_core::render(&g, &[root], &[]).unwrap();
//! assert!(text.starts_with("flowchart BT\n"));
//! ```

pub mod error;
pub mod graph;
pub mod ids;
pub mod links;
pub mod markup;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use graph::RefinementGraph;
pub use ids::{IdAllocator, VertexId};
pub use links::{Link, LinkKind};
pub use model::{
    Agent, AgentType, DomainProperty, Goal, GoalClass, GoalKind, Node, Obstacle, Operation,
    OperationCategory, PerformanceLink, Refinement, RefinementKind, Vertex, VertexKind,
};
pub use render::{placements, render, render_lines, render_node, render_subtree};

impl RefinementGraph {
    /// See [`render()`].
    pub fn render(&self, roots: &[VertexId], links: &[Link]) -> Result<String> {
        render::render(self, roots, links)
    }

    /// See [`render_node()`].
    pub fn render_node(&self, id: VertexId) -> Result<String> {
        render::render_node(self, id)
    }

    /// See [`render_subtree()`].
    pub fn render_subtree(&self, id: VertexId) -> Result<String> {
        render::render_subtree(self, id)
    }
}

#[cfg(test)]
mod tests;
