//! Render command - DOT file and Graphviz image

use anyhow::Result;
use console::style;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

use super::{print_json, OutputFormat, Session};
use crate::config::ProjectConfig;
use crate::render::{write_dot, DotTool};

/// Render settings after merging flags over config
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub dot_path: PathBuf,
    pub image_path: PathBuf,
    pub tool: DotTool,
    pub draw_image: bool,
}

impl RenderOptions {
    pub fn resolve(
        config: &ProjectConfig,
        dot: Option<PathBuf>,
        image: Option<PathBuf>,
        image_format: Option<String>,
        draw_image: bool,
    ) -> Self {
        Self {
            dot_path: dot.unwrap_or_else(|| config.render.dot_path.clone()),
            image_path: image.unwrap_or_else(|| config.render.image_path.clone()),
            tool: DotTool {
                binary: config.render.dot_binary.clone(),
                format: image_format.unwrap_or_else(|| config.render.image_format.clone()),
            },
            draw_image,
        }
    }
}

pub fn run<W: Write>(session: &Session, options: &RenderOptions, out: &mut W) -> Result<()> {
    write_dot(&session.graph, &options.dot_path)?;
    if options.draw_image {
        options.tool.render(&options.dot_path, &options.image_path)?;
    }

    if session.format == OutputFormat::Json {
        return print_json(
            out,
            &json!({
                "dot": options.dot_path,
                "image": options.draw_image.then_some(&options.image_path),
            }),
        );
    }

    writeln!(
        out,
        "{} Wrote {}",
        style("✓").green(),
        style(options.dot_path.display()).cyan()
    )?;
    if options.draw_image {
        writeln!(
            out,
            "{} Dot file converted to {} image {}",
            style("✓").green(),
            options.tool.format,
            style(options.image_path.display()).cyan()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests_support::session;
    use super::*;

    #[test]
    fn test_resolve_prefers_flags() {
        let config = ProjectConfig::default();
        let options = RenderOptions::resolve(
            &config,
            Some(PathBuf::from("g.dot")),
            None,
            Some("svg".to_string()),
            true,
        );
        assert_eq!(options.dot_path, PathBuf::from("g.dot"));
        assert_eq!(options.image_path, PathBuf::from("image.png"));
        assert_eq!(options.tool.format, "svg");
        assert_eq!(options.tool.binary, "dot");
    }

    #[test]
    fn test_dot_only() {
        let dir = tempfile::tempdir().unwrap();
        let session = session("the cat sat", OutputFormat::Text);
        let options = RenderOptions::resolve(
            &session.config,
            Some(dir.path().join("output.dot")),
            None,
            None,
            false,
        );
        let mut out = Vec::new();
        run(&session, &options, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Wrote"), "{text}");
        assert!(!text.contains("image"), "{text}");
        assert!(dir.path().join("output.dot").exists());
    }

    #[test]
    fn test_missing_dot_binary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let session = session("the cat sat", OutputFormat::Text);
        let mut options = RenderOptions::resolve(
            &session.config,
            Some(dir.path().join("output.dot")),
            Some(dir.path().join("image.png")),
            None,
            true,
        );
        options.tool.binary = "wordgraph-no-such-dot-binary".to_string();

        let mut out = Vec::new();
        let err = run(&session, &options, &mut out).unwrap_err();
        assert!(err.to_string().contains("not found"), "{err}");
    }
}
