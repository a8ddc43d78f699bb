#![forbid(unsafe_code)]

//! `goalgraph` builds requirements-engineering goal-refinement graphs and renders them as
//! Mermaid flowcharts, plus a compressed mermaid.live link to view or edit them.
//!
//! ```
//! use goalgraph::{Goal, Obstacle, RefinementGraph, Refinement};
//!
//! let mut g = RefinementGraph::new();
//! let g1 = g.add(Goal::soft("G1")).unwrap();
//! let not_g1 = g.add(Obstacle::new("**not** G1")).unwrap();
//! let r = g.add(Refinement::partial([g1])).unwrap();
//! let root = g.add(Goal::soft("G").refined_by(r)).unwrap();
//! let obstruction = g.obstruction(g1, not_g1).unwrap();
//!
//! let text = g.render(&[root], &[obstruction]).unwrap();
//! # #[cfg(feature = "link")]
//! # {
//! let url = goalgraph::link::encode_link(&text, &Default::default()).unwrap();
//! assert!(url.starts_with("https://mermaid.live/view#pako:"));
//! # }
//! ```
//!
//! # Features
//!
//! - `link` (default): pako link encoding and decoding (`goalgraph::link`)

pub use goalgraph_core::*;

pub mod config;
#[cfg(feature = "link")]
pub mod link;

pub use config::{LinkMode, LinkOptions, MermaidConfig, Theme};
