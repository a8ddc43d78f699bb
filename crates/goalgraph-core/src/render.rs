//! Tree traversal producing a complete flowchart document.
//!
//! Output is collected as a list of statements and joined once. Within a goal or obstacle the
//! order is fixed: annotation, refinement blocks, performance blocks, then the vertex itself.

use crate::error::{Error, Result};
use crate::graph::RefinementGraph;
use crate::ids::VertexId;
use crate::links::Link;
use crate::markup::{self, Arrowhead};
use crate::model::{Node, PerformanceLink, VertexKind};
use rustc_hash::FxHashMap;

/// Renders `roots` (goals or obstacles) followed by `links`, wrapped in the flowchart
/// directive and class definitions.
pub fn render(graph: &RefinementGraph, roots: &[VertexId], links: &[Link]) -> Result<String> {
    let lines = render_lines(graph, roots, links)?;
    let text = join_lines(lines);
    tracing::debug!(
        roots = roots.len(),
        links = links.len(),
        bytes = text.len(),
        "rendered refinement graph"
    );
    Ok(text)
}

/// Same as [`render`], one statement per entry. Blank separator lines are empty entries.
pub fn render_lines(
    graph: &RefinementGraph,
    roots: &[VertexId],
    links: &[Link],
) -> Result<Vec<String>> {
    let mut w = DiagramWriter::new(graph);
    w.push(markup::DIRECTIVE.to_string());
    for &root in roots {
        w.root(root)?;
    }
    for link in links {
        w.lines.extend(link.lines(graph)?);
        w.push(String::new());
    }
    w.push(String::new());
    w.lines.extend(markup::CLASS_DEFS.iter().map(|s| (*s).to_string()));
    Ok(w.finish())
}

/// The statement for `id` alone.
pub fn render_node(graph: &RefinementGraph, id: VertexId) -> Result<String> {
    let vertex = graph.vertex(id)?;
    Ok(markup::node(id, vertex.node()))
}

/// Everything `id` owns, recursively. A goal or obstacle with neither refinements nor
/// performances contributes only its annotation.
pub fn render_subtree(graph: &RefinementGraph, id: VertexId) -> Result<String> {
    let mut w = DiagramWriter::new(graph);
    w.subtree(id)?;
    Ok(join_lines(w.finish()))
}

pub(crate) fn join_lines(lines: Vec<String>) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// How many times each vertex's glyph is placed under a parent (or as a root) when `roots`
/// are rendered. Links are not counted. A count above one means the vertex is drawn once per
/// placement.
pub fn placements(
    graph: &RefinementGraph,
    roots: &[VertexId],
) -> Result<FxHashMap<VertexId, usize>> {
    let mut w = DiagramWriter::new(graph);
    for &root in roots {
        w.root(root)?;
    }
    Ok(w.placed)
}

/// Pending work for [`DiagramWriter::subtree`]. An explicit stack keeps deep refinement
/// chains off the call stack.
enum Step {
    Subtree(VertexId),
    Refinement {
        parent: VertexId,
        id: VertexId,
        arrowhead: Arrowhead,
    },
    Child {
        junction: VertexId,
        child: VertexId,
    },
    Perform {
        goal: VertexId,
        link: PerformanceLink,
    },
    Node(VertexId),
    Blank,
}

struct DiagramWriter<'g> {
    graph: &'g RefinementGraph,
    lines: Vec<String>,
    placed: FxHashMap<VertexId, usize>,
}

impl<'g> DiagramWriter<'g> {
    fn new(graph: &'g RefinementGraph) -> Self {
        Self {
            graph,
            lines: Vec::new(),
            placed: FxHashMap::default(),
        }
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    fn node(&self, id: VertexId) -> Result<String> {
        render_node(self.graph, id)
    }

    fn place(&mut self, id: VertexId) {
        *self.placed.entry(id).or_default() += 1;
    }

    fn finish(self) -> Vec<String> {
        for (id, count) in &self.placed {
            if *count > 1 {
                tracing::debug!(%id, count, "vertex rendered under more than one parent");
            }
        }
        self.lines
    }

    fn annotation(&mut self, id: VertexId, text: Option<&str>) {
        if let Some(text) = text {
            self.push(markup::annotation(id, text));
        }
    }

    /// A root that owns nothing would otherwise never be declared, so its node is emitted.
    fn root(&mut self, id: VertexId) -> Result<()> {
        let owns_nothing = match self.graph.vertex(id)?.node() {
            Node::Goal(goal) => goal.refinements.is_empty() && goal.performs.is_empty(),
            Node::Obstacle(obstacle) => obstacle.refinements.is_empty(),
            other => {
                return Err(Error::KindMismatch {
                    id,
                    expected: "goal or obstacle",
                    found: other.kind(),
                });
            }
        };
        self.place(id);
        self.subtree(id)?;
        if owns_nothing {
            let node = self.node(id)?;
            self.push(node);
        }
        Ok(())
    }

    fn subtree(&mut self, id: VertexId) -> Result<()> {
        let graph = self.graph;
        let mut stack = vec![Step::Subtree(id)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Subtree(id) => {
                    let vertex = graph.vertex(id)?;
                    self.annotation(id, vertex.annotation());
                    match vertex.node() {
                        Node::Goal(goal) => {
                            if goal.refinements.is_empty() && goal.performs.is_empty() {
                                continue;
                            }
                            stack.push(Step::Node(id));
                            for &link in goal.performs.iter().rev() {
                                stack.push(Step::Perform { goal: id, link });
                            }
                            for &refinement in goal.refinements.iter().rev() {
                                let arrowhead = self.goal_arrowhead(refinement)?;
                                stack.push(Step::Refinement {
                                    parent: id,
                                    id: refinement,
                                    arrowhead,
                                });
                            }
                        }
                        Node::Obstacle(obstacle) => {
                            if obstacle.refinements.is_empty() {
                                continue;
                            }
                            stack.push(Step::Node(id));
                            for &refinement in obstacle.refinements.iter().rev() {
                                stack.push(Step::Refinement {
                                    parent: id,
                                    id: refinement,
                                    arrowhead: Arrowhead::Cross,
                                });
                            }
                        }
                        Node::Refinement(_)
                        | Node::Agent(_)
                        | Node::Operation(_)
                        | Node::DomainProperty(_) => {}
                    }
                }
                Step::Refinement {
                    parent,
                    id,
                    arrowhead,
                } => {
                    let refinement = graph.refinement(id)?;
                    self.annotation(id, graph.vertex(id)?.annotation());
                    let junction = markup::junction(id, refinement.complete);
                    self.push(markup::junction_to_parent(&junction, arrowhead, parent));

                    stack.push(Step::Blank);
                    for &child in refinement.children.iter().rev() {
                        stack.push(Step::Subtree(child));
                        stack.push(Step::Child {
                            junction: id,
                            child,
                        });
                    }
                }
                Step::Child { junction, child } => {
                    self.place(child);
                    let leaf = graph.vertex(child)?.is_leaf();
                    let node = self.node(child)?;
                    self.push(markup::child_to_junction(&node, leaf, junction));
                }
                Step::Perform { goal, link } => {
                    self.place(link.agent);
                    let agent = self.node(link.agent)?;
                    self.push(markup::plain(&agent, goal));
                    if let Some(operation) = link.operation {
                        self.place(operation);
                        let operation = self.node(operation)?;
                        self.push(markup::plain(&operation, link.agent));
                    }
                    stack.push(Step::Subtree(link.agent));
                }
                Step::Node(id) => {
                    let node = self.node(id)?;
                    self.push(node);
                }
                Step::Blank => self.push(String::new()),
            }
        }
        Ok(())
    }

    /// `===x` when the refinement's first child is an obstacle.
    fn goal_arrowhead(&self, refinement: VertexId) -> Result<Arrowhead> {
        let first_child = self.graph.refinement(refinement)?.children.first().copied();
        Ok(match first_child {
            Some(child) if self.graph.vertex(child)?.kind() == VertexKind::Obstacle => {
                Arrowhead::Cross
            }
            _ => Arrowhead::Normal,
        })
    }
}
