#![cfg(feature = "link")]

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use flate2::read::DeflateDecoder;
use goalgraph::link::{decode_link, encode_link, encode_link_with, render_with_link};
use goalgraph::{Goal, LinkMode, LinkOptions, Obstacle, Refinement, RefinementGraph};
use serde_json::{Value, json};
use std::io::Read;

/// Independent inverse: urlsafe base64, raw inflate, JSON.
fn open_link(url: &str) -> Value {
    let (_, pako) = url.split_once("#pako:").expect("pako fragment");
    let compressed = URL_SAFE.decode(pako).expect("urlsafe base64");
    let mut json = String::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_string(&mut json)
        .expect("raw deflate stream");
    serde_json::from_str(&json).expect("json envelope")
}

#[test]
fn edit_link_for_minimal_document() {
    let url = encode_link_with(
        "flowchart BT\n",
        LinkMode::Edit,
        "https://mermaid.live",
        &json!({ "theme": "neutral" }),
    )
    .unwrap();

    assert!(url.starts_with("https://mermaid.live/edit#pako:"), "{url}");
    assert_eq!(
        open_link(&url),
        json!({ "code": "flowchart BT\n", "mermaid": { "theme": "neutral" } })
    );
}

#[test]
fn default_options_produce_a_neutral_view_link() {
    let url = encode_link("flowchart BT\n", &LinkOptions::default()).unwrap();
    assert!(url.starts_with("https://mermaid.live/view#pako:"));
    assert_eq!(open_link(&url)["mermaid"], json!({ "theme": "neutral" }));
}

#[test]
fn rendered_graphs_survive_the_round_trip() {
    let mut g = RefinementGraph::new();
    let g1 = g.add(Goal::soft("G1 ✓ ünïcode")).unwrap();
    let not_g1 = g.add(Obstacle::new("**not** G1")).unwrap();
    let r = g.add(Refinement::complete([g1])).unwrap();
    let root = g.add(Goal::maintain("G").refined_by(r)).unwrap();
    let obstruction = g.obstruction(g1, not_g1).unwrap();

    let options = LinkOptions::edit();
    let rendered = render_with_link(&g, &[root], &[obstruction], &options).unwrap();

    let opened = open_link(&rendered.url);
    assert_eq!(opened["code"], Value::String(rendered.text.clone()));

    let decoded = decode_link(&rendered.url).unwrap();
    assert_eq!(decoded.code, rendered.text);
    assert_eq!(decoded.mermaid, json!({ "theme": "neutral" }));
}

#[test]
fn encoding_is_deterministic() {
    let options = LinkOptions::default();
    let a = encode_link("flowchart BT\nA --- B\n", &options).unwrap();
    let b = encode_link("flowchart BT\nA --- B\n", &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn graph_errors_surface_through_render_with_link() {
    let mut g = RefinementGraph::new();
    let agent = g.add(goalgraph::Agent::software("Ctl")).unwrap();
    let err = render_with_link(&g, &[agent], &[], &LinkOptions::default()).unwrap_err();
    assert!(matches!(err, goalgraph::link::LinkError::Graph(_)));
}
