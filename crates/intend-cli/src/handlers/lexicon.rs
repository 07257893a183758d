use crate::presentation::Renderer;
use crate::presentation::views::{LexiconView, Notice};
use anyhow::Result;
use intend_runtime::{Workspace, save_lexicon};
use std::path::Path;

pub fn show(workspace: &Workspace, renderer: &Renderer) -> Result<()> {
    renderer.render(&LexiconView::new(workspace.lexicon()))
}

pub fn export(workspace: &Workspace, path: &Path, renderer: &Renderer) -> Result<()> {
    let lexicon = workspace.lexicon();
    save_lexicon(lexicon, path)?;
    renderer.render(&Notice::new(format!(
        "Wrote lexicon {} to {}",
        lexicon.version(),
        path.display()
    )))
}
