use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use ionconf_table::{Function, Table, Value};

use super::ClientWin;

/// Internal settings keys used by the configuration scripts to install the
/// providers. They are accepted by the setter but never reported back.
pub const GET_WINPROP_KEY: &str = "_get_winprop";
pub const GET_LAYOUT_KEY: &str = "_get_layout";

/// Holds at most one provider function.
#[derive(Debug, Default)]
struct CallbackSlot {
    func: RefCell<Option<Function>>,
}

impl CallbackSlot {
    fn is_set(&self) -> bool {
        self.func.borrow().is_some()
    }

    /// Swaps in the new function before the old one is released, so a
    /// release that re-enters the registry never sees a half-updated slot.
    fn replace(&self, func: Function) {
        let old = self.func.replace(Some(func));
        drop(old);
    }

    fn current(&self) -> Option<Function> {
        self.func.borrow().clone()
    }
}

/// Externally supplied providers for window properties and named layouts.
///
/// Slots use interior mutability: a provider may reconfigure the registry
/// while it is being invoked. The invoker keeps its own reference to the
/// running function, so replacing it mid-call releases the slot's reference
/// only; the function itself stays alive until the call returns.
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    winprop: CallbackSlot,
    layout: CallbackSlot,
    protect_depth: Cell<u32>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_winprop_fn(&self, func: Function) {
        self.winprop.replace(func);
        tracing::debug!("winprop provider replaced");
    }

    pub fn set_layout_fn(&self, func: Function) {
        self.layout.replace(func);
        tracing::debug!("layout provider replaced");
    }

    pub fn has_winprop_fn(&self) -> bool {
        self.winprop.is_set()
    }

    pub fn has_layout_fn(&self) -> bool {
        self.layout.is_set()
    }

    /// True while a provider is running.
    pub fn is_protected(&self) -> bool {
        self.protect_depth.get() > 0
    }

    /// Window properties for `cwin`, or `None` when no provider is set or
    /// the provider fails.
    pub fn get_winprop(&self, cwin: &ClientWin) -> Option<Table> {
        let func = self.winprop.current()?;
        self.call_protected("winprop", &func, Value::Object(cwin.to_object()))
    }

    /// Layout table named `layout`, or `None` when no provider is set or the
    /// provider fails.
    pub fn get_layout(&self, layout: &str) -> Option<Table> {
        let func = self.layout.current()?;
        self.call_protected("layout", &func, Value::from(layout))
    }

    fn call_protected(&self, what: &str, func: &Function, arg: Value) -> Option<Table> {
        let _guard = Protect::enter(&self.protect_depth);

        let result = panic::catch_unwind(AssertUnwindSafe(|| func.call(&[arg])));

        match result {
            Ok(Ok(values)) => match values.into_iter().next() {
                Some(Value::Table(tab)) => Some(tab),
                Some(other) => {
                    tracing::warn!(
                        "{} provider returned {} instead of a table",
                        what,
                        other.type_name()
                    );
                    None
                }
                None => {
                    tracing::warn!("{} provider returned nothing", what);
                    None
                }
            },
            Ok(Err(e)) => {
                tracing::warn!("{} provider failed: {:#}", what, e);
                None
            }
            Err(_) => {
                tracing::error!("{} provider panicked", what);
                None
            }
        }
    }
}

/// Marks the registry as protected for the guard's lifetime; the mark is
/// removed on every exit path, including unwinding.
struct Protect<'a> {
    depth: &'a Cell<u32>,
}

impl<'a> Protect<'a> {
    fn enter(depth: &'a Cell<u32>) -> Self {
        depth.set(depth.get() + 1);
        Self { depth }
    }
}

impl Drop for Protect<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}
