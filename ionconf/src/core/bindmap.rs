#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub action: String,
}

/// Key bindings for one context. Rebinding a key replaces its action in place.
#[derive(Debug, Clone, Default)]
pub struct BindMap {
    bindings: Vec<Binding>,
}

impl BindMap {
    pub fn bind(&mut self, key: &str, action: &str) {
        match self.bindings.iter_mut().find(|b| b.key == key) {
            Some(b) => b.action = action.to_string(),
            None => self.bindings.push(Binding {
                key: key.to_string(),
                action: action.to_string(),
            }),
        }
    }

    pub fn nbindings(&self) -> usize {
        self.bindings.len()
    }
}

/// The binding contexts that must be populated for the window manager to be
/// usable at all.
#[derive(Debug, Clone, Default)]
pub struct BindMaps {
    pub screen: BindMap,
    pub mplex: BindMap,
    pub frame: BindMap,
}

impl BindMaps {
    pub const CONTEXTS: [&'static str; 3] = ["screen", "mplex", "frame"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, context: &str) -> Option<&BindMap> {
        match context {
            "screen" => Some(&self.screen),
            "mplex" => Some(&self.mplex),
            "frame" => Some(&self.frame),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, context: &str) -> Option<&mut BindMap> {
        match context {
            "screen" => Some(&mut self.screen),
            "mplex" => Some(&mut self.mplex),
            "frame" => Some(&mut self.frame),
            _ => None,
        }
    }

    /// Number of required contexts without a single binding.
    pub fn empty_count(&self) -> usize {
        [&self.screen, &self.mplex, &self.frame]
            .iter()
            .filter(|m| m.nbindings() == 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_rebind() {
        let mut map = BindMap::default();
        map.bind("Mod1+1", "switch_nth 0");
        map.bind("Mod1+2", "switch_nth 1");
        map.bind("Mod1+1", "switch_nth 9");

        assert_eq!(map.nbindings(), 2);
        assert_eq!(map.bindings[0].key, "Mod1+1");
        assert_eq!(map.bindings[0].action, "switch_nth 9");
    }

    #[test]
    fn test_empty_count() {
        let mut maps = BindMaps::new();
        assert_eq!(maps.empty_count(), 3);

        maps.screen.bind("Mod1+1", "switch_nth 0");
        maps.frame.bind("Mod1+Tab", "switch_next");
        assert_eq!(maps.empty_count(), 1);
    }

    #[test]
    fn test_lookup_by_context_name() {
        let mut maps = BindMaps::new();
        maps.get_mut("mplex").unwrap().bind("Mod1+C", "close");

        assert_eq!(maps.get("mplex").unwrap().nbindings(), 1);
        assert!(maps.get("tiling").is_none());
        for ctx in BindMaps::CONTEXTS {
            assert!(maps.get(ctx).is_some());
        }
    }
}
