//! Graph rendering
//!
//! Serializes the word graph to Graphviz DOT (via petgraph) and optionally
//! shells out to the `dot` tool to draw it.

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info};
use wordgraph_core::GraphStore;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Graphviz binary '{binary}' not found. Install graphviz or pass --no-image")]
    DotNotFound { binary: String },

    #[error("'{binary}' exited with {status}: {stderr}")]
    DotFailed {
        binary: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Graphviz invocation settings
#[derive(Debug, Clone)]
pub struct DotTool {
    pub binary: String,
    /// Output format passed as `-T<format>` (png, svg, pdf, ...)
    pub format: String,
}

impl Default for DotTool {
    fn default() -> Self {
        Self {
            binary: "dot".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Build a petgraph view of the word graph; edge weights become labels.
fn to_petgraph(graph: &GraphStore) -> DiGraph<&str, u32> {
    let mut view = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(graph.node_count());

    for word in graph.words() {
        index.insert(word, view.add_node(word));
    }
    for edge in graph.edges() {
        if let (Some(&src), Some(&dst)) = (index.get(edge.source), index.get(edge.target)) {
            view.add_edge(src, dst, edge.weight);
        }
    }
    view
}

/// Render the graph as DOT text
pub fn to_dot(graph: &GraphStore) -> String {
    let view = to_petgraph(graph);
    format!("{}", Dot::new(&view))
}

/// Write the DOT representation to `path`
pub fn write_dot(graph: &GraphStore, path: &Path) -> Result<(), RenderError> {
    std::fs::write(path, to_dot(graph))?;
    debug!(path = %path.display(), "wrote dot file");
    Ok(())
}

impl DotTool {
    /// Run `dot -T<format> <dot_path> -o <image_path>`
    pub fn render(&self, dot_path: &Path, image_path: &Path) -> Result<(), RenderError> {
        let output = Command::new(&self.binary)
            .arg(format!("-T{}", self.format))
            .arg(dot_path)
            .arg("-o")
            .arg(image_path)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RenderError::DotNotFound {
                    binary: self.binary.clone(),
                },
                _ => RenderError::Io(e),
            })?;

        if !output.status.success() {
            return Err(RenderError::DotFailed {
                binary: self.binary.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        info!(image = %image_path.display(), format = %self.format, "rendered graph image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(text: &str) -> GraphStore {
        GraphStore::from_tokens(text.split_whitespace())
    }

    #[test]
    fn test_dot_contains_nodes_and_weighted_edges() {
        let g = graph("a b a b c");
        let dot = to_dot(&g);

        assert!(dot.starts_with("digraph"));
        for word in ["a", "b", "c"] {
            assert!(dot.contains(&format!("\"{word}\"")), "missing node {word}:\n{dot}");
        }
        // a -> b weight 2, b -> a weight 1, b -> c weight 1
        assert_eq!(dot.matches(" -> ").count(), 3);
        assert!(dot.contains("\"2\""));
    }

    #[test]
    fn test_isolated_node_is_rendered() {
        let dot = to_dot(&graph("alone"));
        assert!(dot.contains("\"alone\""));
        assert_eq!(dot.matches(" -> ").count(), 0);
    }

    #[test]
    fn test_write_dot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.dot");
        write_dot(&graph("the cat sat"), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"cat\""));
    }

    #[test]
    fn test_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let dot_path = dir.path().join("output.dot");
        write_dot(&graph("the cat"), &dot_path).unwrap();

        let tool = DotTool {
            binary: "wordgraph-no-such-dot-binary".to_string(),
            ..DotTool::default()
        };
        let err = tool
            .render(&dot_path, &dir.path().join("image.png"))
            .unwrap_err();
        assert!(matches!(err, RenderError::DotNotFound { .. }), "{err}");
    }
}
