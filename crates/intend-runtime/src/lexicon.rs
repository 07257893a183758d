use crate::{Error, Result};
use intend_types::Lexicon;
use std::path::Path;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a lexicon file. `.json` files are read as JSON, anything else as TOML.
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        Error::Lexicon(format!("failed to read {}: {}", path.display(), err))
    })?;

    let lexicon: Lexicon = if is_json(path) {
        serde_json::from_str(&content)
            .map_err(|err| Error::Lexicon(format!("{}: {}", path.display(), err)))?
    } else {
        toml::from_str(&content)
            .map_err(|err| Error::Lexicon(format!("{}: {}", path.display(), err)))?
    };

    Ok(lexicon)
}

pub fn save_lexicon(lexicon: &Lexicon, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if is_json(path) {
        serde_json::to_string_pretty(lexicon)
            .map_err(|err| Error::Lexicon(err.to_string()))?
    } else {
        toml::to_string_pretty(lexicon)?
    };
    std::fs::write(path, content)?;
    Ok(())
}
