use crate::ids::VertexId;
use crate::model::VertexKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown vertex {id}: it was never added to this graph")]
    UnknownVertex { id: VertexId },

    #[error("vertex {id} is a {found}, expected {expected}")]
    KindMismatch {
        id: VertexId,
        expected: &'static str,
        found: VertexKind,
    },

    #[error("a refinement needs at least one child")]
    EmptyRefinement,
}
