use ionconf_table::{ObjectRef, Table};

pub const CLIENTWIN_KIND: &str = "WClientWin";

/// Identifying properties of a managed client window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientWin {
    pub id: u32,
    pub class: String,
    pub instance: String,
    pub role: Option<String>,
}

impl ClientWin {
    pub fn new(id: u32, class: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            id,
            class: class.into(),
            instance: instance.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn ident(&self) -> Table {
        let mut tab = Table::new();
        tab.set("class", self.class.as_str());
        tab.set("instance", self.instance.as_str());
        if let Some(role) = &self.role {
            tab.set("role", role.as_str());
        }
        tab
    }

    pub fn to_object(&self) -> ObjectRef {
        ObjectRef::new(CLIENTWIN_KIND, self.id).with_ident(self.ident())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_object() {
        let cwin = ClientWin::new(42, "Gimp", "gimp").with_role("gimp-toolbox");
        let obj = cwin.to_object();

        assert_eq!(obj.kind, CLIENTWIN_KIND);
        assert_eq!(obj.id, 42);
        assert_eq!(obj.ident.get_str("class"), Some("Gimp"));
        assert_eq!(obj.ident.get_str("instance"), Some("gimp"));
        assert_eq!(obj.ident.get_str("role"), Some("gimp-toolbox"));
    }

    #[test]
    fn test_ident_without_role() {
        let cwin = ClientWin::new(1, "XTerm", "xterm");
        assert!(!cwin.ident().contains_key("role"));
    }
}
