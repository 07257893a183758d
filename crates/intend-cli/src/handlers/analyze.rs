use crate::presentation::Renderer;
use crate::presentation::views::AnalysisView;
use anyhow::{Context, Result};
use intend_runtime::Workspace;
use std::io::Read;
use std::path::{Path, PathBuf};

pub fn handle(workspace: &Workspace, file: Option<PathBuf>, renderer: &Renderer) -> Result<()> {
    let text = match file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let result = workspace.analyzer().analyze(&text);
    renderer.render(&AnalysisView::new(&result))
}
