use crate::presentation::Renderer;
use crate::presentation::views::OverviewView;
use anyhow::Result;
use intend_runtime::Workspace;

pub fn handle(workspace: &Workspace, renderer: &Renderer) -> Result<()> {
    let overview = workspace.dashboard().overview()?;
    renderer.render(&OverviewView::new(overview))
}
