use crate::presentation::Renderer;
use crate::presentation::views::ExportView;
use anyhow::{Context, Result};
use intend_runtime::Workspace;
use std::path::Path;

pub fn handle(workspace: &Workspace, path: &Path, renderer: &Renderer) -> Result<()> {
    let dashboard = workspace.dashboard();

    if path == Path::new("-") {
        dashboard.export_csv(std::io::stdout().lock())?;
        return Ok(());
    }

    let rows = dashboard
        .export_csv_file(path)
        .with_context(|| format!("failed to export to {}", path.display()))?;
    renderer.render(&ExportView {
        path: path.to_path_buf(),
        rows,
    })
}
