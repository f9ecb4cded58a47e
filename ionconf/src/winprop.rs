use std::collections::BTreeMap;

use anyhow::{anyhow, bail};
use ionconf_table::{Function, Table, Value};
use serde::Deserialize;

use crate::core::CLIENTWIN_KIND;

/// Window properties applied to client windows matching every given field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WinpropRule {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub props: Table,
}

impl WinpropRule {
    pub fn specificity(&self) -> usize {
        [&self.class, &self.instance, &self.role]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }

    pub fn matches(&self, ident: &Table) -> bool {
        let field_matches = |want: &Option<String>, key: &str| match want {
            Some(w) => ident.get_str(key) == Some(w.as_str()),
            None => true,
        };
        field_matches(&self.class, "class")
            && field_matches(&self.instance, "instance")
            && field_matches(&self.role, "role")
    }
}

/// Sort rules so the most specific match is found first. The sort is stable:
/// among equally specific rules, the one declared first wins.
pub fn sort_rules(rules: &mut [WinpropRule]) {
    rules.sort_by_key(|r| std::cmp::Reverse(r.specificity()));
}

/// Provider for window properties. Called with a client window object, it
/// returns the props of the best matching rule, or an empty table.
pub fn winprop_provider(mut rules: Vec<WinpropRule>) -> Function {
    sort_rules(&mut rules);
    Function::new(move |args| {
        let obj = match args.first() {
            Some(Value::Object(obj)) if obj.kind == CLIENTWIN_KIND => obj,
            Some(other) => bail!("expected a client window, got {}", other.type_name()),
            None => bail!("expected a client window argument"),
        };

        let props = rules
            .iter()
            .find(|r| r.matches(&obj.ident))
            .map(|r| r.props.clone())
            .unwrap_or_default();
        Ok(vec![Value::Table(props)])
    })
}

/// Provider for named layouts.
pub fn layout_provider(layouts: BTreeMap<String, Table>) -> Function {
    Function::new(move |args| {
        let name = args
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("expected a layout name"))?;
        let layout = layouts
            .get(name)
            .ok_or_else(|| anyhow!("unknown layout \"{}\"", name))?;
        Ok(vec![Value::Table(layout.clone())])
    })
}
