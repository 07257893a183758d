use crate::presentation::Renderer;
use crate::presentation::views::InitView;
use anyhow::Result;
use intend_runtime::Workspace;
use std::path::Path;

pub fn handle(data_dir: &Path, renderer: &Renderer) -> Result<()> {
    let result = Workspace::init(data_dir)?;
    renderer.render(&InitView::from(result))
}
