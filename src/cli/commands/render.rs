use log::{error, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::types::Commands;
use crate::config::MrkdwnConfig;
use crate::layout::PageRenderer;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{BoxResult, MrkdwnError};

/// Handle the render command
pub async fn handle_render_command(command: &Commands, config: &MrkdwnConfig) {
    if let Commands::Render { input, json, output } = command {
        let result = read_source(input.as_deref())
            .and_then(|source| render_output(&source, config, *json))
            .and_then(|rendered| write_output(output.as_ref(), &rendered));

        match result {
            Ok(_) => {
                if let Some(path) = output {
                    info!("Rendered markdown to {}", path.display());
                }
            }
            Err(e) => error!("Failed to render markdown: {}", e),
        }
    }
}

/// Read markdown from a file, or from stdin when no file (or `-`) is given
fn read_source(input: Option<&Path>) -> BoxResult<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            let source = fs::read_to_string(path).map_err(|e| {
                MrkdwnError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
            })?;
            Ok(source)
        }
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Render `source` as a full page, or as a JSON document of the HTML fragment and TOC
fn render_output(source: &str, config: &MrkdwnConfig, json: bool) -> BoxResult<String> {
    let rendered = MarkdownRenderer::new(&config.markdown).render(source);

    if json {
        let mut out = serde_json::to_string_pretty(&rendered)
            .map_err(|e| MrkdwnError::Generic(format!("Failed to encode JSON: {}", e)))?;
        out.push('\n');
        return Ok(out);
    }

    PageRenderer::new(config)?.render(source, &rendered)
}

fn write_output(output: Option<&PathBuf>, rendered: &str) -> BoxResult<()> {
    match output {
        Some(path) => fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::RenderedMarkdown;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mrkdwn-cli-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_render_json() {
        let out = render_output("## Hello\n\n## Hello\n", &MrkdwnConfig::default(), true).unwrap();
        let rendered: RenderedMarkdown = serde_json::from_str(&out).unwrap();

        let ids: Vec<&str> = rendered.toc_items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["hello", "hello-2"]);
        assert!(rendered.content_html.contains("<h2 id=\"hello-2\">"));
    }

    #[test]
    fn test_render_page() {
        let out = render_output("# Title\n\n## Part\n", &MrkdwnConfig::default(), false).unwrap();
        assert!(out.starts_with("<!doctype html>"));
        assert!(out.contains("<h2 id=\"part\">Part</h2>"));
        assert!(out.contains("href=\"#part\""));
    }

    #[test]
    fn test_read_source_from_file() {
        let dir = temp_dir("read");
        let path = dir.join("doc.md");
        fs::write(&path, "# Doc\n").unwrap();

        assert_eq!(read_source(Some(&path)).unwrap(), "# Doc\n");
        assert!(read_source(Some(&dir.join("missing.md"))).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = temp_dir("write");
        let path = dir.join("out.html");

        write_output(Some(&path), "<p>ok</p>\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>ok</p>\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
