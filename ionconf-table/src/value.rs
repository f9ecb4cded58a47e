use std::fmt;
use std::rc::Rc;

use crate::Table;

/// Return values of a host function call.
pub type FnResult = anyhow::Result<Vec<Value>>;

type Callable = dyn Fn(&[Value]) -> FnResult;

/// Reference to an object owned by the host, e.g. a managed client window.
/// `ident` carries whatever identifying properties the host chooses to expose.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRef {
    pub kind: String,
    pub id: u32,
    pub ident: Table,
}

impl ObjectRef {
    pub fn new(kind: impl Into<String>, id: u32) -> Self {
        Self {
            kind: kind.into(),
            id,
            ident: Table::new(),
        }
    }

    pub fn with_ident(mut self, ident: Table) -> Self {
        self.ident = ident;
        self
    }
}

/// Reference-counted handle to a callable value.
///
/// Cloning takes another reference; dropping releases one. Two handles are
/// equal only when they refer to the same underlying closure.
#[derive(Clone)]
pub struct Function {
    inner: Rc<Callable>,
}

impl Function {
    pub fn new(f: impl Fn(&[Value]) -> FnResult + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }

    pub fn call(&self, args: &[Value]) -> FnResult {
        (self.inner)(args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
    }

    /// Number of live handles to this function.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:p})", Rc::as_ptr(&self.inner) as *const ())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Object(ObjectRef),
    Function(Function),
    Table(Table),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "number",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Table(_) => "table",
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Value::Object(v)
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Value::Function(v)
    }
}

impl From<Table> for Value {
    fn from(v: Table) -> Self {
        Value::Table(v)
    }
}
