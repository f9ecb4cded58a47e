use crate::core::State;
use crate::loader::ScriptLoader;

/// Configuration run when the caller does not name one.
pub const DEFAULT_MAIN_CONFIG: &str = "cfg_notion";

/// Built-in fallback that provides a minimal set of bindings.
pub const FALLBACK_CONFIG: &str = "ioncore_efbb";

/// Outcome of reading the main configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// The main configuration was found and ran without error.
    pub main_loaded: bool,
    /// Number of required binding maps that were empty after the main load.
    pub empty_bindmaps: usize,
    /// Result of the fallback load, if one was attempted.
    pub fallback_loaded: Option<bool>,
}

impl BootstrapReport {
    /// Overall success: the main configuration loaded and left no required
    /// binding map empty. Running the fallback never makes this true, even
    /// when the fallback itself loads cleanly.
    pub fn success(&self) -> bool {
        self.main_loaded && self.empty_bindmaps == 0
    }
}

/// Read the main configuration `cfgfile` (or [`DEFAULT_MAIN_CONFIG`]),
/// trying the current directory first. If any of the screen, mplex or frame
/// binding maps is still empty afterwards, [`FALLBACK_CONFIG`] is loaded to
/// keep the window manager usable.
pub fn read_main_config<L: ScriptLoader>(
    state: &mut State,
    loader: &mut L,
    cfgfile: Option<&str>,
) -> BootstrapReport {
    let cfgfile = cfgfile.unwrap_or(DEFAULT_MAIN_CONFIG);

    let main_loaded = loader.read_config(state, cfgfile, Some("."), true);
    if !main_loaded {
        tracing::warn!("Failed to load main configuration {}", cfgfile);
    }

    let empty_bindmaps = state.bindmaps.empty_count();

    let fallback_loaded = if empty_bindmaps > 0 {
        tracing::warn!("Some bindmaps were empty, loading {}", FALLBACK_CONFIG);
        let ok = loader.read_config(state, FALLBACK_CONFIG, None, true);
        if !ok {
            tracing::error!(
                "Fallback configuration {} failed to load; {} bindmap(s) may be empty",
                FALLBACK_CONFIG,
                state.bindmaps.empty_count()
            );
        }
        Some(ok)
    } else {
        None
    };

    let report = BootstrapReport {
        main_loaded,
        empty_bindmaps,
        fallback_loaded,
    };
    tracing::info!("Configuration bootstrap finished: {:?}", report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::mock::MockScriptLoader;
    use ionconf_table::Table;

    fn full_bindings() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("screen", "Mod1+1", "switch_nth 0"),
            ("mplex", "Mod1+C", "close"),
            ("frame", "Mod1+Tab", "switch_next"),
        ]
    }

    #[test]
    fn test_success_without_fallback() {
        let mut state = State::default();
        let mut loader = MockScriptLoader::new()
            .with_result("cfg_notion", true)
            .with_bindings("cfg_notion", full_bindings());

        let report = read_main_config(&mut state, &mut loader, None);

        assert!(report.success());
        assert_eq!(report.fallback_loaded, None);
        assert_eq!(loader.call_count(FALLBACK_CONFIG), 0);
        assert_eq!(
            loader.calls,
            vec![("cfg_notion".to_string(), Some(".".to_string()))]
        );
    }

    #[test]
    fn test_custom_config_name() {
        let mut state = State::default();
        let mut loader = MockScriptLoader::new()
            .with_result("cfg_custom", true)
            .with_bindings("cfg_custom", full_bindings());

        let report = read_main_config(&mut state, &mut loader, Some("cfg_custom"));

        assert!(report.success());
        assert_eq!(loader.call_count("cfg_custom"), 1);
        assert_eq!(loader.call_count(DEFAULT_MAIN_CONFIG), 0);
    }

    #[test]
    fn test_empty_bindmap_triggers_fallback_and_fails() {
        let mut state = State::default();
        let mut loader = MockScriptLoader::new()
            .with_result("cfg_notion", true)
            .with_bindings(
                "cfg_notion",
                vec![
                    ("screen", "Mod1+1", "switch_nth 0"),
                    ("mplex", "Mod1+C", "close"),
                ],
            )
            .with_result(FALLBACK_CONFIG, true)
            .with_bindings(FALLBACK_CONFIG, full_bindings());

        let report = read_main_config(&mut state, &mut loader, None);

        assert_eq!(loader.call_count(FALLBACK_CONFIG), 1);
        assert_eq!(loader.calls[1], (FALLBACK_CONFIG.to_string(), None));
        assert_eq!(report.empty_bindmaps, 1);
        assert_eq!(report.fallback_loaded, Some(true));
        // The fallback loaded cleanly and filled every map, yet the
        // overall result still reports failure.
        assert_eq!(state.bindmaps.empty_count(), 0);
        assert!(!report.success());
    }

    #[test]
    fn test_failed_fallback_reported_separately() {
        let mut state = State::default();
        let mut loader = MockScriptLoader::new().with_result("cfg_notion", true);

        let report = read_main_config(&mut state, &mut loader, None);

        assert_eq!(report.empty_bindmaps, 3);
        assert_eq!(report.fallback_loaded, Some(false));
        assert!(!report.success());
    }

    #[test]
    fn test_main_failure_still_checks_bindings() {
        let mut state = State::default();
        let mut loader = MockScriptLoader::new()
            .with_result("cfg_notion", false)
            .with_bindings("cfg_notion", full_bindings());

        let report = read_main_config(&mut state, &mut loader, None);

        assert!(!report.main_loaded);
        assert_eq!(report.empty_bindmaps, 0);
        assert_eq!(loader.call_count(FALLBACK_CONFIG), 0);
        assert!(!report.success());
    }

    #[test]
    fn test_missing_main_loads_fallback() {
        let mut state = State::default();
        let mut loader = MockScriptLoader::new()
            .with_result(FALLBACK_CONFIG, true)
            .with_bindings(FALLBACK_CONFIG, full_bindings());

        let report = read_main_config(&mut state, &mut loader, None);

        assert!(!report.main_loaded);
        assert_eq!(report.empty_bindmaps, 3);
        assert_eq!(report.fallback_loaded, Some(true));
        assert_eq!(state.bindmaps.empty_count(), 0);
        assert!(!report.success());
    }

    #[test]
    fn test_main_config_settings_applied() {
        let mut state = State::default();
        let settings: Table = [("mousefocus", "disabled")].into_iter().collect();
        let mut loader = MockScriptLoader::new()
            .with_result("cfg_notion", true)
            .with_bindings("cfg_notion", full_bindings())
            .with_settings("cfg_notion", settings);

        assert!(read_main_config(&mut state, &mut loader, None).success());
        assert!(state.settings.no_mousefocus);
    }

    #[test]
    fn test_with_json_loader_builtin_fallback() {
        use crate::loader::JsonScriptLoader;
        use crate::paths::SearchPaths;

        let dir = tempfile::tempdir().unwrap();
        let mut state = State::new(SearchPaths::new(
            dir.path().to_path_buf(),
            vec![dir.path().to_path_buf()],
        ));
        let mut loader = JsonScriptLoader::new();

        let report = read_main_config(&mut state, &mut loader, Some("cfg_not_there"));

        assert!(!report.success());
        assert_eq!(report.fallback_loaded, Some(true));
        assert_eq!(state.bindmaps.empty_count(), 0);
    }
}
