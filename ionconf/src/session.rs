use anyhow::{Context, Result};
use ionconf_table::Table;

use crate::paths::SearchPaths;

/// Write `tab` as the save file `basename` in the session directory.
pub fn write_savefile(paths: &SearchPaths, basename: &str, tab: &Table) -> Result<()> {
    let path = paths
        .get_savefile(basename)
        .context("No session directory set")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create session directory {:?}", parent))?;
    }

    let data = serde_json::to_string_pretty(tab)?;
    std::fs::write(&path, data).with_context(|| format!("Failed to write {:?}", path))?;

    tracing::info!("Saved {} to {:?}", basename, path);
    Ok(())
}

/// Read the save file `basename`. A missing file is reported as an error,
/// like any other read failure.
pub fn read_savefile(paths: &SearchPaths, basename: &str) -> Result<Table> {
    let path = paths
        .get_savefile(basename)
        .context("No session directory set")?;

    let data =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
    let tab: Table = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse save file {:?}", path))?;
    Ok(tab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = SearchPaths::default();
        paths.sessiondir = Some(dir.path().join("session"));

        let mut tab = Table::new();
        tab.set("autoraise", false);
        tab.set("dblclick_delay", 300);

        write_savefile(&paths, "saved_settings", &tab).unwrap();
        let restored = read_savefile(&paths, "saved_settings").unwrap();
        assert_eq!(restored, tab);
    }

    #[test]
    fn test_no_sessiondir() {
        let paths = SearchPaths::default();
        assert!(write_savefile(&paths, "x", &Table::new()).is_err());
        assert!(read_savefile(&paths, "x").is_err());
    }

    #[test]
    fn test_read_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = SearchPaths::default();
        paths.sessiondir = Some(dir.path().to_path_buf());
        assert!(read_savefile(&paths, "absent").is_err());
    }
}
