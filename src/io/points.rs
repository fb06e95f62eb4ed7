//! Coordinate files: one `id x y` node per line.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::models::Node;
use crate::{Error, Result};

/// Parses nodes from text, one `id x y` triple per line.
///
/// Only lines with exactly three whitespace-separated fields that parse as
/// an unsigned id and two floats become nodes. Everything else (TSPLIB
/// headers such as `EDGE_WEIGHT_TYPE : EUC_2D`, `NODE_COORD_SECTION`, `EOF`,
/// blank or malformed lines) is skipped.
///
/// # Examples
///
/// ```
/// use nn_tour::io::parse_nodes;
///
/// let text = "NAME: demo\nNODE_COORD_SECTION\n1 64 96\n2 80 39\nEOF\n";
/// let nodes = parse_nodes(text);
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[1].id(), 2);
/// assert_eq!(nodes[1].x(), 80.0);
/// ```
pub fn parse_nodes(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(node) => nodes.push(node),
            None if line.trim().is_empty() => {}
            None => debug!("skipping line {}: {:?}", lineno + 1, line.trim()),
        }
    }
    nodes
}

fn parse_line(line: &str) -> Option<Node> {
    let mut fields = line.split_whitespace();
    let (id, x, y) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    let x: f64 = x.parse().ok()?;
    let y: f64 = y.parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Node::new(id.parse().ok()?, x, y))
}

/// Reads nodes from a coordinate file.
///
/// # Errors
///
/// [`Error::Open`] if the file cannot be read.
pub fn read_nodes(path: impl AsRef<Path>) -> Result<Vec<Node>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::open(path, e))?;
    let nodes = parse_nodes(&text);
    info!("read {} nodes from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Writes nodes as `id x y` lines.
pub fn write_nodes<W: Write>(mut writer: W, nodes: &[Node]) -> Result<()> {
    for node in nodes {
        writeln!(writer, "{} {} {}", node.id(), node.x(), node.y())?;
    }
    writer.flush()?;
    Ok(())
}
