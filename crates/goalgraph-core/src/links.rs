//! Cross-cutting relations drawn outside the refinement tree.

use crate::error::Result;
use crate::graph::RefinementGraph;
use crate::ids::VertexId;
use crate::markup;

/// Every relation kind of a refinement graph. Refinement and performance relations are held
/// by their owning vertex; the rest are standalone [`Link`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Refinement,
    Responsibility,
    Performance,
    Conflict,
    Obstruction,
    Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    Conflict { first: VertexId, second: VertexId },
    Obstruction { goal: VertexId, obstacle: VertexId },
    Resolution { goal: VertexId, obstacle: VertexId },
}

impl Link {
    pub fn kind(&self) -> LinkKind {
        match self {
            Link::Conflict { .. } => LinkKind::Conflict,
            Link::Obstruction { .. } => LinkKind::Obstruction,
            Link::Resolution { .. } => LinkKind::Resolution,
        }
    }

    /// The connector followed by the single-node statements of its endpoints, so that both
    /// ends are declared even when no traversal reached them.
    pub fn lines(&self, graph: &RefinementGraph) -> Result<Vec<String>> {
        let node = |id: VertexId| -> Result<String> {
            let vertex = graph.vertex(id)?;
            Ok(markup::node(id, vertex.node()))
        };

        Ok(match *self {
            Link::Conflict { first, second } => vec![
                markup::conflict(first, second),
                node(second)?,
                node(first)?,
            ],
            Link::Obstruction { goal, obstacle } => {
                graph.vertex(goal)?;
                vec![markup::cross(obstacle, goal), node(obstacle)?]
            }
            Link::Resolution { goal, obstacle } => vec![
                markup::cross(goal, obstacle),
                node(goal)?,
                node(obstacle)?,
            ],
        })
    }

    pub fn render(&self, graph: &RefinementGraph) -> Result<String> {
        Ok(crate::render::join_lines(self.lines(graph)?))
    }
}
