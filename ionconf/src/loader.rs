use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ionconf_table::Table;
use serde::Deserialize;

use crate::core::{State, GET_LAYOUT_KEY, GET_WINPROP_KEY};
use crate::winprop::{layout_provider, winprop_provider, WinpropRule};

const MAX_INCLUDE_DEPTH: usize = 16;

const BUILTIN_SCRIPTS: &[(&str, &str)] = &[(
    "ioncore_efbb",
    include_str!("../data/ioncore_efbb.json"),
)];

/// Runs configuration scripts against the application state.
pub trait ScriptLoader {
    /// Run script `name`. `try_dir` is searched before the standard search
    /// path. Returns false if the script could not be found or failed.
    fn read_config(
        &mut self,
        state: &mut State,
        name: &str,
        try_dir: Option<&str>,
        warn_missing: bool,
    ) -> bool;
}

/// One configuration script.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigScript {
    include: Vec<String>,
    settings: Option<Table>,
    bindings: BTreeMap<String, BTreeMap<String, String>>,
    winprops: Vec<WinpropRule>,
    layouts: BTreeMap<String, Table>,
}

enum Source {
    File(PathBuf),
    Builtin(&'static str),
}

impl Source {
    /// Identity used to detect a script that is already being run.
    fn id(&self, name: &str) -> String {
        match self {
            Source::File(path) => std::fs::canonicalize(path)
                .unwrap_or_else(|_| path.clone())
                .display()
                .to_string(),
            Source::Builtin(_) => format!("builtin:{}", name),
        }
    }
}

/// Loads JSON configuration scripts from the search path, falling back to
/// scripts built into the binary.
///
/// Winprops and layouts accumulate across every script run by this loader;
/// whenever a script adds some, fresh providers over the accumulated set are
/// installed through the settings setter.
///
/// A script that includes itself, directly or through other scripts, is
/// refused at the point of re-entry.
#[derive(Debug, Default)]
pub struct JsonScriptLoader {
    builtins: HashMap<&'static str, &'static str>,
    winprops: Vec<WinpropRule>,
    layouts: BTreeMap<String, Table>,
    loading: Vec<String>,
}

impl JsonScriptLoader {
    pub fn new() -> Self {
        Self {
            builtins: BUILTIN_SCRIPTS.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn find(&self, state: &State, name: &str, try_dir: Option<&str>) -> Option<Source> {
        if let Some(path) = state.paths.lookup_script(name, try_dir.map(Path::new)) {
            return Some(Source::File(path));
        }
        self.builtins.get(name).copied().map(Source::Builtin)
    }

    fn run(&mut self, state: &mut State, name: &str, source: Source) -> Result<()> {
        let (text, dir) = match source {
            Source::File(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?;
                let dir = path.parent().map(|d| d.display().to_string());
                (text, dir)
            }
            Source::Builtin(text) => (text.to_string(), None),
        };

        let script: ConfigScript =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", name))?;

        for include in &script.include {
            if !self.read_config(state, include, dir.as_deref(), true) {
                tracing::warn!("{}: include \"{}\" failed", name, include);
            }
        }

        if let Some(settings) = &script.settings {
            state.set(settings);
        }

        for (context, keys) in &script.bindings {
            let Some(map) = state.bindmaps.get_mut(context) else {
                tracing::warn!("{}: unknown binding context \"{}\"", name, context);
                continue;
            };
            for (key, action) in keys {
                map.bind(key, action);
            }
        }

        self.install_providers(state, script.winprops, script.layouts);

        Ok(())
    }

    fn install_providers(
        &mut self,
        state: &mut State,
        winprops: Vec<WinpropRule>,
        layouts: BTreeMap<String, Table>,
    ) {
        let mut tab = Table::new();

        if !winprops.is_empty() {
            self.winprops.extend(winprops);
            tab.set(GET_WINPROP_KEY, winprop_provider(self.winprops.clone()));
        }

        if !layouts.is_empty() {
            self.layouts.extend(layouts);
            tab.set(GET_LAYOUT_KEY, layout_provider(self.layouts.clone()));
        }

        if !tab.is_empty() {
            state.set(&tab);
        }
    }
}

impl ScriptLoader for JsonScriptLoader {
    fn read_config(
        &mut self,
        state: &mut State,
        name: &str,
        try_dir: Option<&str>,
        warn_missing: bool,
    ) -> bool {
        if self.loading.len() >= MAX_INCLUDE_DEPTH {
            tracing::warn!("{}: too many nested includes", name);
            return false;
        }

        let Some(source) = self.find(state, name, try_dir) else {
            if warn_missing {
                tracing::warn!("Unable to find '{}' on search path", name);
            }
            return false;
        };

        let id = source.id(name);
        if self.loading.contains(&id) {
            tracing::warn!("{}: include cycle, already loading {}", name, id);
            return false;
        }

        tracing::info!("Loading configuration {}", name);

        self.loading.push(id);
        let result = self.run(state, name, source);
        self.loading.pop();

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{:#}", e);
                false
            }
        }
    }
}
