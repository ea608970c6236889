//! Runtime values.
//!
//! Errors are values: a failing primitive returns [`Value::Error`] and the
//! enclosing expression decides whether to propagate it. `Clone` is the deep
//! copy used whenever a value is stored or returned from the symbol table.

use std::fmt;

use haplo_diagnostic::ErrorCode;
use haplo_ir::Atom;

/// A Haplo runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
    /// An unresolved name. Transient: argument evaluation resolves it.
    Symbol(String),
    /// A literal name, written `'name`.
    Quote(String),
    List(ValueList),
    /// Result of forms evaluated for their effect.
    Empty,
    Error(ErrorCode),
}

impl Value {
    /// Value of a literal leaf. Symbol and quote atoms stay unresolved.
    pub fn from_atom(atom: &Atom) -> Self {
        match atom {
            Atom::Integer(n) => Value::Integer(*n),
            Atom::Float(x) => Value::Float(*x),
            Atom::Bool(b) => Value::Bool(*b),
            Atom::String(s) => Value::String(s.clone()),
            Atom::Symbol(s) => Value::Symbol(s.clone()),
            Atom::Quote(s) => Value::Quote(s.clone()),
        }
    }

    /// Get the kind name for diagnostics and logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Symbol(_) => "symbol",
            Value::Quote(_) => "quote",
            Value::List(_) => "list",
            Value::Empty => "empty",
            Value::Error(_) => "error",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&ValueList> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

impl From<Atom> for Value {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Integer(n) => Value::Integer(n),
            Atom::Float(x) => Value::Float(x),
            Atom::Bool(b) => Value::Bool(b),
            Atom::String(s) => Value::String(s),
            Atom::Symbol(s) => Value::Symbol(s),
            Atom::Quote(s) => Value::Quote(s),
        }
    }
}

impl From<ErrorCode> for Value {
    fn from(code: ErrorCode) -> Self {
        Value::Error(code)
    }
}

/// Text written by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:.6}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Symbol(s) => f.write_str(s),
            Value::Quote(s) => write!(f, "'{s}"),
            Value::List(list) => {
                f.write_str("(")?;
                for value in list {
                    write!(f, " {value}")?;
                }
                f.write_str(" )")
            }
            Value::Empty => f.write_str("empty"),
            Value::Error(code) => write!(f, "{code} {}", code.description()),
        }
    }
}

struct Node {
    value: Value,
    next: Option<Box<Node>>,
}

/// Singly linked list of values.
///
/// Used both for call arguments and as the payload of [`Value::List`].
/// The length is counted by traversal. Drop and clone walk the chain
/// iteratively, so long lists never recurse per node.
#[derive(Default)]
pub struct ValueList {
    head: Option<Box<Node>>,
}

impl ValueList {
    pub const fn new() -> Self {
        ValueList { head: None }
    }

    pub fn push_front(&mut self, value: Value) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    pub fn pop_front(&mut self) -> Option<Value> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        Some(value)
    }

    pub fn front(&self) -> Option<&Value> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Number of values, counted by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> ValueListIter<'_> {
        ValueListIter {
            next: self.head.as_deref(),
        }
    }
}

/// Frees the chain and any nested lists without recursion.
impl Drop for ValueList {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.head.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.next.take());
            if let Value::List(nested) = &mut node.value {
                pending.extend(nested.head.take());
            }
        }
    }
}

impl Clone for ValueList {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl PartialEq for ValueList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl fmt::Debug for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Collects in iteration order: the first item becomes the front.
impl FromIterator<Value> for ValueList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let items: Vec<Value> = iter.into_iter().collect();
        let mut list = ValueList::new();
        for value in items.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

/// Borrowing iterator over a [`ValueList`], front to back.
#[derive(Clone)]
pub struct ValueListIter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for ValueListIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a Value;
    type IntoIter = ValueListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValueList {
    type Item = Value;
    type IntoIter = ValueListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        ValueListIntoIter { list: self }
    }
}

/// Owning iterator over a [`ValueList`], front to back.
pub struct ValueListIntoIter {
    list: ValueList,
}

impl Iterator for ValueListIntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

#[cfg(test)]
mod tests;
