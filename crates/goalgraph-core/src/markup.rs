//! Mermaid flowchart statements.
//!
//! Each function returns one statement without a trailing newline. The exact text is part of
//! the public contract: downstream viewers and snapshot tests compare it byte for byte.

use crate::ids::VertexId;
use crate::model::{AgentType, Node};

pub const DIRECTIVE: &str = "flowchart BT";

pub const CLASS_DEFS: [&str; 4] = [
    "classDef bold stroke-width:3,stroke:#000",
    "classDef filled fill:#000;",
    "classDef nostroke stroke-width:0,fill-opacity:0.0",
    "classDef stroke stroke-dasharray: 5 5,fill-opacity:0.0,text-align:left",
];

pub const BOLD: &str = ":::bold";
pub const FILLED: &str = ":::filled";

const PERSON_ICON: &str = "fa:fa-person ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrowhead {
    Normal,
    Cross,
}

impl Arrowhead {
    fn as_char(self) -> char {
        match self {
            Arrowhead::Normal => '>',
            Arrowhead::Cross => 'x',
        }
    }
}

/// The single-node statement for a vertex, keyed by its id.
pub fn node(id: VertexId, node: &Node) -> String {
    match node {
        Node::Goal(goal) => match goal.kind.keyword() {
            Some(keyword) => format!("{id}[/\"{keyword}[{}]\"/]", goal.name),
            None => format!("{id}[/\"{}\"/]", goal.name),
        },
        Node::Obstacle(obstacle) => format!("{id}[\\\"{}\"\\]", obstacle.name),
        Node::Operation(operation) => format!("{id}([\"{}\"])", operation.name),
        Node::Agent(agent) => {
            let figure = match agent.agent_type {
                AgentType::Environment => PERSON_ICON,
                AgentType::Software => "",
            };
            format!("{id}{{{{{figure}{}}}}}", agent.name)
        }
        Node::DomainProperty(property) => format!("{id}[/\"{}\"\\]", property.name),
        Node::Refinement(refinement) => junction(id, refinement.complete),
    }
}

pub fn junction(id: VertexId, complete: bool) -> String {
    let filled = if complete { FILLED } else { "" };
    format!("{id}((\" \")){filled}")
}

/// Dashed connector from a synthetic annotation node to the vertex it describes.
pub fn annotation(id: VertexId, text: &str) -> String {
    format!("annotation{id}[\"{text}\"]:::stroke -.- {id}")
}

pub fn junction_to_parent(junction: &str, arrowhead: Arrowhead, parent: VertexId) -> String {
    format!("{junction} ==={} {parent}", arrowhead.as_char())
}

pub fn child_to_junction(child: &str, leaf: bool, junction: VertexId) -> String {
    let bold = if leaf { BOLD } else { "" };
    format!("{child}{bold} --- {junction}")
}

/// Plain connector used by performance links (agent to goal, operation to agent).
pub fn plain(from: &str, to: VertexId) -> String {
    format!("{from} --- {to}")
}

pub fn conflict(first: VertexId, second: VertexId) -> String {
    format!("{first} --\"#128498;\"--- {second}")
}

pub fn cross(from: VertexId, to: VertexId) -> String {
    format!("{from} ---x {to}")
}
