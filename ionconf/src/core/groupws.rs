use ionconf_table::Table;

use super::fields::read_non_negative;
use super::{key_of, StringMap};

/// How new floating frames are placed on a floating workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMethod {
    /// Up-down, then left-right.
    Udlr,
    /// Left-right, then up-down.
    #[default]
    Lrud,
    Pointer,
    Random,
}

pub const PLACEMENT_METHODS: &StringMap<PlacementMethod> = &[
    ("udlr", PlacementMethod::Udlr),
    ("lrud", PlacementMethod::Lrud),
    ("pointer", PlacementMethod::Pointer),
    ("random", PlacementMethod::Random),
];

#[derive(Debug, Clone, PartialEq)]
pub struct GroupWsSettings {
    pub placement_method: PlacementMethod,
    /// Pixels between frames for the `udlr` and `lrud` methods.
    pub placement_padding: i64,
}

impl Default for GroupWsSettings {
    fn default() -> Self {
        Self {
            placement_method: PlacementMethod::default(),
            placement_padding: 4,
        }
    }
}

impl GroupWsSettings {
    pub fn set(&mut self, tab: &Table) {
        if let Some(method) = tab.get_str("float_placement_method") {
            match PLACEMENT_METHODS.iter().find(|(k, _)| *k == method) {
                Some((_, m)) => self.placement_method = *m,
                None => tracing::warn!("Unknown placement method \"{}\"", method),
            }
        }

        read_non_negative(tab, "float_placement_padding", &mut self.placement_padding);
    }

    pub fn get(&self, tab: &mut Table) {
        if let Some(method) = key_of(PLACEMENT_METHODS, self.placement_method, None) {
            tab.set("float_placement_method", method);
        }
        tab.set("float_placement_padding", self.placement_padding);
    }
}
