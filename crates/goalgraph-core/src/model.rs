//! Vertex payloads of a goal-refinement graph.
//!
//! Payloads reference other vertices by [`VertexId`] only. They are plain values until they
//! are added to a [`crate::RefinementGraph`], which assigns their identity.

use crate::ids::VertexId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Goal,
    Refinement,
    Obstacle,
    Agent,
    Operation,
    DomainProperty,
}

impl VertexKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VertexKind::Goal => "goal",
            VertexKind::Refinement => "refinement",
            VertexKind::Obstacle => "obstacle",
            VertexKind::Agent => "agent",
            VertexKind::Operation => "operation",
            VertexKind::DomainProperty => "domain property",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GoalKind {
    #[default]
    Soft,
    Behavioral,
    Achieve,
    Cease,
    Maintain,
    Avoid,
}

/// Behavioral goals are satisfied; soft goals can only be satisficed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalClass {
    Behavioral,
    Soft,
}

impl GoalKind {
    pub fn class(self) -> GoalClass {
        match self {
            GoalKind::Soft => GoalClass::Soft,
            GoalKind::Behavioral
            | GoalKind::Achieve
            | GoalKind::Cease
            | GoalKind::Maintain
            | GoalKind::Avoid => GoalClass::Behavioral,
        }
    }

    /// Keyword wrapped around the goal name in its node label, e.g. `Achieve[name]`.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            GoalKind::Soft | GoalKind::Behavioral => None,
            GoalKind::Achieve => Some("Achieve"),
            GoalKind::Cease => Some("Cease"),
            GoalKind::Maintain => Some("Maintain"),
            GoalKind::Avoid => Some("Avoid"),
        }
    }
}

/// Only AND-refinement is ever distinguished when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefinementKind {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentType {
    Environment,
    Software,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationCategory {
    Environment,
    SoftwareToBe,
}

/// An agent, optionally performing an operation, responsible for a goal.
///
/// Both ends are references: the same agent may perform for several goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PerformanceLink {
    pub agent: VertexId,
    pub operation: Option<VertexId>,
}

impl PerformanceLink {
    pub fn new(agent: VertexId, operation: Option<VertexId>) -> Self {
        Self { agent, operation }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub kind: GoalKind,
    /// May embed lightweight markdown such as `**If**`.
    pub name: String,
    pub performs: Vec<PerformanceLink>,
    pub refinements: Vec<VertexId>,
    pub leaf: bool,
    pub annotation: Option<String>,
}

impl Goal {
    pub fn new(kind: GoalKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            performs: Vec::new(),
            refinements: Vec::new(),
            leaf: false,
            annotation: None,
        }
    }

    pub fn soft(name: impl Into<String>) -> Self {
        Self::new(GoalKind::Soft, name)
    }

    pub fn behavioral(name: impl Into<String>) -> Self {
        Self::new(GoalKind::Behavioral, name)
    }

    pub fn achieve(name: impl Into<String>) -> Self {
        Self::new(GoalKind::Achieve, name)
    }

    pub fn cease(name: impl Into<String>) -> Self {
        Self::new(GoalKind::Cease, name)
    }

    pub fn maintain(name: impl Into<String>) -> Self {
        Self::new(GoalKind::Maintain, name)
    }

    pub fn avoid(name: impl Into<String>) -> Self {
        Self::new(GoalKind::Avoid, name)
    }

    pub fn refined_by(mut self, refinement: VertexId) -> Self {
        self.refinements.push(refinement);
        self
    }

    pub fn performed_by(mut self, agent: VertexId, operation: Option<VertexId>) -> Self {
        self.performs.push(PerformanceLink::new(agent, operation));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub name: String,
    pub refinements: Vec<VertexId>,
    pub leaf: bool,
    pub annotation: Option<String>,
}

impl Obstacle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refinements: Vec::new(),
            leaf: false,
            annotation: None,
        }
    }

    pub fn refined_by(mut self, refinement: VertexId) -> Self {
        self.refinements.push(refinement);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refinement {
    pub kind: RefinementKind,
    /// Drawn as a filled junction when the decomposition is believed sufficient.
    pub complete: bool,
    /// Must be non-empty; the first child decides the junction arrowhead under a goal.
    pub children: Vec<VertexId>,
    pub annotation: Option<String>,
}

impl Refinement {
    pub fn new(complete: bool, children: impl IntoIterator<Item = VertexId>) -> Self {
        Self {
            kind: RefinementKind::And,
            complete,
            children: children.into_iter().collect(),
            annotation: None,
        }
    }

    pub fn complete(children: impl IntoIterator<Item = VertexId>) -> Self {
        Self::new(true, children)
    }

    pub fn partial(children: impl IntoIterator<Item = VertexId>) -> Self {
        Self::new(false, children)
    }

    pub fn with_kind(mut self, kind: RefinementKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub agent_type: AgentType,
    pub leaf: bool,
    pub annotation: Option<String>,
}

impl Agent {
    pub fn new(name: impl Into<String>, agent_type: AgentType) -> Self {
        Self {
            name: name.into(),
            agent_type,
            leaf: false,
            annotation: None,
        }
    }

    pub fn environment(name: impl Into<String>) -> Self {
        Self::new(name, AgentType::Environment)
    }

    pub fn software(name: impl Into<String>) -> Self {
        Self::new(name, AgentType::Software)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub category: OperationCategory,
    pub leaf: bool,
    pub annotation: Option<String>,
}

impl Operation {
    pub fn new(name: impl Into<String>, category: OperationCategory) -> Self {
        Self {
            name: name.into(),
            category,
            leaf: false,
            annotation: None,
        }
    }

    pub fn environment(name: impl Into<String>) -> Self {
        Self::new(name, OperationCategory::Environment)
    }

    pub fn software(name: impl Into<String>) -> Self {
        Self::new(name, OperationCategory::SoftwareToBe)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainProperty {
    pub name: String,
    pub leaf: bool,
    pub annotation: Option<String>,
}

impl DomainProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            leaf: false,
            annotation: None,
        }
    }
}

macro_rules! vertex_attributes {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn annotated(mut self, annotation: impl Into<String>) -> Self {
                    self.annotation = Some(annotation.into());
                    self
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$ty(value)
                }
            }
        )*
    };
}

/// Kinds that may hang off a refinement junction.
macro_rules! refinement_children {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Draws the vertex with a bold border where it hangs off a refinement.
                pub fn leaf(mut self) -> Self {
                    self.leaf = true;
                    self
                }
            }
        )*
    };
}

vertex_attributes!(
    Goal,
    Refinement,
    Obstacle,
    Agent,
    Operation,
    DomainProperty
);
refinement_children!(Goal, Obstacle, Agent, Operation, DomainProperty);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Goal(Goal),
    Refinement(Refinement),
    Obstacle(Obstacle),
    Agent(Agent),
    Operation(Operation),
    DomainProperty(DomainProperty),
}

impl Node {
    pub fn kind(&self) -> VertexKind {
        match self {
            Node::Goal(_) => VertexKind::Goal,
            Node::Refinement(_) => VertexKind::Refinement,
            Node::Obstacle(_) => VertexKind::Obstacle,
            Node::Agent(_) => VertexKind::Agent,
            Node::Operation(_) => VertexKind::Operation,
            Node::DomainProperty(_) => VertexKind::DomainProperty,
        }
    }

    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Goal(v) => v.leaf,
            Node::Refinement(_) => false,
            Node::Obstacle(v) => v.leaf,
            Node::Agent(v) => v.leaf,
            Node::Operation(v) => v.leaf,
            Node::DomainProperty(v) => v.leaf,
        }
    }

    pub fn annotation(&self) -> Option<&str> {
        let annotation = match self {
            Node::Goal(v) => &v.annotation,
            Node::Refinement(v) => &v.annotation,
            Node::Obstacle(v) => &v.annotation,
            Node::Agent(v) => &v.annotation,
            Node::Operation(v) => &v.annotation,
            Node::DomainProperty(v) => &v.annotation,
        };
        annotation.as_deref().filter(|a| !a.is_empty())
    }

    /// Refinements have no name; everything else does.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Goal(v) => Some(&v.name),
            Node::Refinement(_) => None,
            Node::Obstacle(v) => Some(&v.name),
            Node::Agent(v) => Some(&v.name),
            Node::Operation(v) => Some(&v.name),
            Node::DomainProperty(v) => Some(&v.name),
        }
    }
}

/// A payload bound to its identity inside a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    node: Node,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, node: Node) -> Self {
        Self { id, node }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> VertexKind {
        self.node.kind()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    pub fn annotation(&self) -> Option<&str> {
        self.node.annotation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_kinds_classify_as_behavioral_or_soft() {
        assert_eq!(GoalKind::Soft.class(), GoalClass::Soft);
        for kind in [
            GoalKind::Behavioral,
            GoalKind::Achieve,
            GoalKind::Cease,
            GoalKind::Maintain,
            GoalKind::Avoid,
        ] {
            assert_eq!(kind.class(), GoalClass::Behavioral, "{kind:?}");
        }
    }

    #[test]
    fn empty_annotation_counts_as_none() {
        let node = Node::from(DomainProperty::new("Moving").annotated(""));
        assert_eq!(node.annotation(), None);

        let node = Node::from(DomainProperty::new("Moving").annotated("domain property"));
        assert_eq!(node.annotation(), Some("domain property"));
    }

    #[test]
    fn refinements_default_to_and() {
        let r = Refinement::partial(Vec::new());
        assert_eq!(r.kind, RefinementKind::And);
        assert!(!r.complete);
        assert_eq!(r.with_kind(RefinementKind::Or).kind, RefinementKind::Or);
    }

    #[test]
    fn refinements_never_count_as_leaves() {
        assert!(!Node::from(Refinement::complete(Vec::new())).is_leaf());
        assert!(Node::from(Operation::software("OpenDoors").leaf()).is_leaf());
        assert!(!Node::from(Operation::software("OpenDoors")).is_leaf());
    }
}
