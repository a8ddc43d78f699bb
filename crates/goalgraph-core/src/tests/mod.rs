use crate::*;
use std::sync::Arc;


/// A graph with its own counter so ids in expected text are stable.
fn local_graph() -> RefinementGraph {
    RefinementGraph::with_allocator(Arc::new(IdAllocator::new()))
}

/// Rewrites every `node<N>` to `n<k>`, numbering ids by first appearance.
fn normalize_ids(text: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("node") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 4..];
        let digits = after.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            out.push_str("node");
            rest = after;
            continue;
        }
        let id = &after[..digits];
        let k = match seen.iter().position(|s| s == id) {
            Some(k) => k,
            None => {
                seen.push(id.to_string());
                seen.len() - 1
            }
        };
        out.push_str(&format!("n{k}"));
        rest = &after[digits..];
    }
    out.push_str(rest);
    out
}
