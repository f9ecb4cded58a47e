use std::rc::Rc;

use super::{BindMaps, CallbackRegistry, GroupWsSettings, MoveresAccel, Settings};
use crate::paths::SearchPaths;

/// Everything the configuration scripts can tune, plus the binding maps they
/// populate. Owned by the top-level controller; nothing here is global.
pub struct State {
    pub settings: Settings,
    pub moveres: MoveresAccel,
    pub groupws: GroupWsSettings,
    pub bindmaps: BindMaps,
    pub paths: SearchPaths,
    pub(super) callbacks: Rc<CallbackRegistry>,
}

impl State {
    pub fn new(paths: SearchPaths) -> Self {
        Self {
            settings: Settings::new(),
            moveres: MoveresAccel::default(),
            groupws: GroupWsSettings::default(),
            bindmaps: BindMaps::new(),
            paths,
            callbacks: Rc::new(CallbackRegistry::new()),
        }
    }

    /// Shared handle to the provider registry. Callers invoke providers
    /// through this handle so that no borrow of `State` is held while
    /// external code runs.
    pub fn callbacks(&self) -> Rc<CallbackRegistry> {
        Rc::clone(&self.callbacks)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(SearchPaths::default())
    }
}
