//! Shareable mermaid.live links.
//!
//! A link carries the whole diagram in its fragment:
//! `{host}/{mode}#pako:{urlsafe-base64(raw-deflate(json({code, mermaid})))}`. The payload is
//! a raw DEFLATE stream (no zlib header or checksum) at the best compression level, and
//! [`decode_link`] reads back exactly that envelope.

use crate::config::{LinkMode, LinkOptions};
use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use goalgraph_core::{Link, RefinementGraph, VertexId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{Read, Write};

const PAKO_MARKER: &str = "#pako:";

/// Links produced elsewhere sometimes drop the base64 padding.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error(transparent)]
    Graph(#[from] goalgraph_core::Error),
    #[error("link payload JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("DEFLATE stream error: {0}")]
    Deflate(#[from] std::io::Error),
    #[error("invalid base64 in link: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("malformed link: {message}")]
    MalformedLink { message: String },
}

pub type Result<T> = std::result::Result<T, LinkError>;

#[derive(Serialize)]
struct Envelope<'a, C: ?Sized> {
    code: &'a str,
    mermaid: &'a C,
}

/// The decoded contents of a link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PakoPayload {
    pub code: String,
    pub mermaid: Value,
}

/// Encodes `text` with the mode, host and config of `options`.
pub fn encode_link(text: &str, options: &LinkOptions) -> Result<String> {
    encode_link_with(text, options.mode, &options.host, &options.config)
}

/// Encodes `text` with any serializable config. A config serde cannot turn into JSON (for
/// example a map with non-string keys) fails with [`LinkError::Json`].
pub fn encode_link_with<C>(text: &str, mode: LinkMode, host: &str, config: &C) -> Result<String>
where
    C: Serialize + ?Sized,
{
    let json = serde_json::to_string(&Envelope {
        code: text,
        mermaid: config,
    })?;
    let compressed = deflate(json.as_bytes())?;
    let pako = URL_SAFE.encode(&compressed);
    tracing::debug!(
        %mode,
        json_bytes = json.len(),
        compressed_bytes = compressed.len(),
        "encoded pako link"
    );
    Ok(format!("{host}/{mode}{PAKO_MARKER}{pako}"))
}

/// Inverse of [`encode_link`]. Host and mode are ignored.
pub fn decode_link(url: &str) -> Result<PakoPayload> {
    let Some((_, pako)) = url.split_once(PAKO_MARKER) else {
        return Err(LinkError::MalformedLink {
            message: format!("missing `{PAKO_MARKER}` fragment"),
        });
    };
    let compressed = URL_SAFE_LENIENT.decode(pako.trim_end())?;
    let mut json = String::new();
    DeflateDecoder::new(compressed.as_slice()).read_to_string(&mut json)?;
    Ok(serde_json::from_str(&json)?)
}

fn deflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// A rendered document and its link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub text: String,
    pub url: String,
}

/// Renders `roots` and `links` and encodes the result with `options`.
pub fn render_with_link(
    graph: &RefinementGraph,
    roots: &[VertexId],
    links: &[Link],
    options: &LinkOptions,
) -> Result<RenderedDiagram> {
    let text = graph.render(roots, links)?;
    let url = encode_link(&text, options)?;
    Ok(RenderedDiagram { text, url })
}
