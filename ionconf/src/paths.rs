use std::path::{Path, PathBuf};

use ionconf_table::Table;

const APP_DIR: &str = "ionconf";
const SYSTEM_DIR: &str = "/etc/ionconf";
const SCRIPT_EXT: &str = "json";

/// Directories searched for configuration scripts and session files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPaths {
    pub userdir: PathBuf,
    pub sessiondir: Option<PathBuf>,
    pub searchpath: Vec<PathBuf>,
}

impl SearchPaths {
    pub fn new(userdir: PathBuf, searchpath: Vec<PathBuf>) -> Self {
        Self {
            userdir,
            sessiondir: None,
            searchpath,
        }
    }

    /// User directory under the platform config dir, followed by the
    /// system-wide directory.
    pub fn from_env() -> Self {
        let userdir = dirs::config_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR));
        let sessiondir = userdir.join("default-session");
        let searchpath = vec![userdir.clone(), PathBuf::from(SYSTEM_DIR)];
        let mut paths = Self::new(userdir, searchpath);
        paths.sessiondir = Some(sessiondir);
        paths
    }

    /// Find script `name`, trying `try_dir` first, then the session
    /// directory, then the search path. Both `name` and `name.json` are
    /// accepted.
    pub fn lookup_script(&self, name: &str, try_dir: Option<&Path>) -> Option<PathBuf> {
        let dirs = try_dir
            .into_iter()
            .chain(self.sessiondir.as_deref())
            .chain(self.searchpath.iter().map(PathBuf::as_path));

        for dir in dirs {
            for candidate in script_candidates(name) {
                let path = dir.join(&candidate);
                if path.is_file() {
                    tracing::debug!("Found script {} at {:?}", name, path);
                    return Some(path);
                }
            }
        }
        None
    }

    pub fn get_paths(&self) -> Table {
        let mut tab = Table::new();
        tab.set("userdir", self.userdir.display().to_string());
        if let Some(dir) = &self.sessiondir {
            tab.set("sessiondir", dir.display().to_string());
        }
        let searchpath: Vec<String> = self
            .searchpath
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        tab.set("searchpath", searchpath.join(":"));
        tab
    }

    /// Apply `sessiondir` and `searchpath` from `tab`. The user directory is
    /// fixed; asking to change it is refused and nothing is applied.
    pub fn set_paths(&mut self, tab: &Table) -> bool {
        if tab.get_str("userdir").is_some() {
            tracing::warn!("User directory can not be set");
            return false;
        }

        if let Some(dir) = tab.get_str("sessiondir") {
            self.sessiondir = Some(PathBuf::from(dir));
        }

        if let Some(sp) = tab.get_str("searchpath") {
            self.searchpath = sp
                .split(':')
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
        }

        true
    }

    /// Path of the save file `basename` in the session directory.
    pub fn get_savefile(&self, basename: &str) -> Option<PathBuf> {
        let dir = self.sessiondir.as_ref()?;
        Some(dir.join(format!("{}.{}", basename, SCRIPT_EXT)))
    }
}

fn script_candidates(name: &str) -> Vec<String> {
    if Path::new(name).extension().is_some_and(|e| e == SCRIPT_EXT) {
        vec![name.to_string()]
    } else {
        vec![name.to_string(), format!("{}.{}", name, SCRIPT_EXT)]
    }
}


#[cfg(test)]
mod tests {
    use super::testdir::write_file;
    use super::*;

    #[test]
    fn test_lookup_prefers_try_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "local/cfg_main.json", "{}");
        write_file(dir.path(), "user/cfg_main.json", "{}");

        let paths = SearchPaths::new(dir.path().join("user"), vec![dir.path().join("user")]);
        let found = paths
            .lookup_script("cfg_main", Some(&dir.path().join("local")))
            .unwrap();
        assert_eq!(found, dir.path().join("local/cfg_main.json"));

        let found = paths.lookup_script("cfg_main", None).unwrap();
        assert_eq!(found, dir.path().join("user/cfg_main.json"));
    }

    #[test]
    fn test_lookup_session_before_searchpath() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "session/layout.json", "{}");
        write_file(dir.path(), "user/layout.json", "{}");

        let mut paths = SearchPaths::new(dir.path().join("user"), vec![dir.path().join("user")]);
        paths.sessiondir = Some(dir.path().join("session"));

        let found = paths.lookup_script("layout", None).unwrap();
        assert_eq!(found, dir.path().join("session/layout.json"));
    }

    #[test]
    fn test_lookup_explicit_extension_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "cfg_extra.json", "{}");

        let paths = SearchPaths::new(dir.path().to_path_buf(), vec![dir.path().to_path_buf()]);
        assert!(paths.lookup_script("cfg_extra.json", None).is_some());
        assert!(paths.lookup_script("cfg_absent", None).is_none());
    }

    #[test]
    fn test_get_paths() {
        let mut paths = SearchPaths::new(
            PathBuf::from("/home/u/.config/ionconf"),
            vec![PathBuf::from("/a"), PathBuf::from("/b")],
        );
        paths.sessiondir = Some(PathBuf::from("/s"));

        let tab = paths.get_paths();
        assert_eq!(tab.get_str("userdir"), Some("/home/u/.config/ionconf"));
        assert_eq!(tab.get_str("sessiondir"), Some("/s"));
        assert_eq!(tab.get_str("searchpath"), Some("/a:/b"));
    }

    #[test]
    fn test_set_paths() {
        let mut paths = SearchPaths::default();
        let mut tab = Table::new();
        tab.set("sessiondir", "/tmp/session");
        tab.set("searchpath", "/x::/y");

        assert!(paths.set_paths(&tab));
        assert_eq!(paths.sessiondir, Some(PathBuf::from("/tmp/session")));
        assert_eq!(paths.searchpath, vec![PathBuf::from("/x"), PathBuf::from("/y")]);
    }

    #[test]
    fn test_set_userdir_refused() {
        let mut paths = SearchPaths::default();
        let mut tab = Table::new();
        tab.set("userdir", "/elsewhere");
        tab.set("sessiondir", "/tmp/session");

        assert!(!paths.set_paths(&tab));
        assert_eq!(paths.userdir, PathBuf::new());
        assert_eq!(paths.sessiondir, None);
    }

    #[test]
    fn test_savefile_requires_sessiondir() {
        let mut paths = SearchPaths::default();
        assert!(paths.get_savefile("saved_layout").is_none());

        paths.sessiondir = Some(PathBuf::from("/s"));
        assert_eq!(
            paths.get_savefile("saved_layout"),
            Some(PathBuf::from("/s/saved_layout.json"))
        );
    }
}
