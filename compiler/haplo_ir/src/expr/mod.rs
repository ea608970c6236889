//! Cons-cell syntax tree.
//!
//! Every parsed form is an [`Expr`]: either an atom leaf or a pair of a
//! `head` and an optional `tail`. The list `(a b c)` is encoded as
//!
//! ```text
//! Pair { head: a, tail: Pair { head: b, tail: Pair { head: c, tail: None } } }
//! ```
//!
//! A nested list element is stored as the `head` at its position, so
//! `(* (+ 1 2) 3)` has the whole `(+ 1 2)` chain as the head of its second
//! pair.
//!
//! # Invariants
//!
//! - A leaf has no head or tail.
//! - A pair always has a head.
//! - `tail` is `None` only at the end of a list.
//!
//! Cloning, comparing, printing and dropping walk the tree with an explicit
//! work list, so neither long lists nor deep nesting grow the call stack.

use std::fmt;

use crate::Atom;

/// A parsed S-expression.
pub enum Expr {
    /// Literal leaf.
    Atom(Atom),
    /// One cons cell of a list.
    Pair {
        head: Box<Expr>,
        tail: Option<Box<Expr>>,
    },
}

impl Expr {
    /// Create an atom leaf.
    #[inline]
    pub fn atom(atom: Atom) -> Self {
        Expr::Atom(atom)
    }

    /// Stand-in leaf for a slot that is about to be overwritten or freed.
    #[inline]
    const fn placeholder() -> Self {
        Expr::Atom(Atom::Bool(false))
    }

    /// Create a cons cell.
    #[inline]
    pub fn pair(head: Expr, tail: Option<Expr>) -> Self {
        Expr::Pair {
            head: Box::new(head),
            tail: tail.map(Box::new),
        }
    }

    /// Build a right-nested list from its elements.
    ///
    /// Returns `None` for an empty sequence, which has no head to store.
    /// Construction folds from the back, so no recursion over the list
    /// length is needed.
    pub fn list<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = Expr>,
        I::IntoIter: DoubleEndedIterator,
    {
        elements
            .into_iter()
            .rev()
            .fold(None, |tail, head| Some(Expr::pair(head, tail)))
    }

    /// Returns `true` for an atom leaf.
    #[inline]
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Atom(_))
    }

    /// The atom payload of a leaf.
    #[inline]
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Expr::Atom(atom) => Some(atom),
            Expr::Pair { .. } => None,
        }
    }

    /// The head of a pair.
    #[inline]
    pub fn head(&self) -> Option<&Expr> {
        match self {
            Expr::Pair { head, .. } => Some(head),
            Expr::Atom(_) => None,
        }
    }

    /// The tail of a pair, `None` at the end of a list and for leaves.
    #[inline]
    pub fn tail(&self) -> Option<&Expr> {
        match self {
            Expr::Pair { tail, .. } => tail.as_deref(),
            Expr::Atom(_) => None,
        }
    }

    /// Iterate the elements of the list this pair starts.
    ///
    /// Yields each `head` along the tail chain. A leaf yields itself once,
    /// so an improper trailing atom is still visited.
    pub fn iter(&self) -> ExprIter<'_> {
        ExprIter { next: Some(self) }
    }

    /// Number of elements in the list this pair starts (1 for a leaf).
    pub fn list_len(&self) -> usize {
        self.iter().count()
    }
}

/// Iterator over list elements. See [`Expr::iter`].
#[derive(Clone, Debug)]
pub struct ExprIter<'a> {
    next: Option<&'a Expr>,
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        match current {
            Expr::Pair { head, tail } => {
                self.next = tail.as_deref();
                Some(head)
            }
            Expr::Atom(_) => Some(current),
        }
    }
}

impl<'a> IntoIterator for &'a Expr {
    type Item = &'a Expr;
    type IntoIter = ExprIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Piece of pending output while printing.
enum Piece<'a> {
    Expr(&'a Expr),
    Text(&'static str),
}

/// Canonical textual form: `( HEAD )` or `( HEAD TAIL )`, recursively.
///
/// `(a b c)` prints as `( a ( b ( c ) ) )`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Expr(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Expr(Expr::Atom(atom)) => write!(f, "{atom}")?,
                Piece::Expr(Expr::Pair { head, tail }) => {
                    f.write_str("( ")?;
                    pending.push(Piece::Text(" )"));
                    if let Some(tail) = tail {
                        pending.push(Piece::Expr(tail));
                        pending.push(Piece::Text(" "));
                    }
                    pending.push(Piece::Expr(head));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&format_args!("{self}")).finish()
    }
}

impl Clone for Expr {
    /// Builds the copy top-down: each cell is allocated with placeholder
    /// children, which are filled in when their source cell is popped.
    fn clone(&self) -> Self {
        let mut root = Expr::placeholder();
        let mut pending: Vec<(&Expr, &mut Expr)> = vec![(self, &mut root)];
        while let Some((source, target)) = pending.pop() {
            match source {
                Expr::Atom(atom) => *target = Expr::Atom(atom.clone()),
                Expr::Pair { head, tail } => {
                    *target = Expr::Pair {
                        head: Box::new(Expr::placeholder()),
                        tail: tail.as_ref().map(|_| Box::new(Expr::placeholder())),
                    };
                    if let Expr::Pair {
                        head: new_head,
                        tail: new_tail,
                    } = target
                    {
                        if let (Some(tail), Some(new_tail)) = (tail, new_tail) {
                            pending.push((&**tail, &mut **new_tail));
                        }
                        pending.push((&**head, &mut **new_head));
                    }
                }
            }
        }
        root
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&Expr, &Expr)> = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Expr::Atom(left), Expr::Atom(right)) => {
                    if left != right {
                        return false;
                    }
                }
                (
                    Expr::Pair {
                        head: left_head,
                        tail: left_tail,
                    },
                    Expr::Pair {
                        head: right_head,
                        tail: right_tail,
                    },
                ) => {
                    match (left_tail, right_tail) {
                        (Some(left), Some(right)) => pending.push((&**left, &**right)),
                        (None, None) => {}
                        _ => return false,
                    }
                    pending.push((&**left_head, &**right_head));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

/// Move the children of a pair onto `pending`, leaving it a shallow cell.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::Pair { head, tail } = expr {
        if let Some(mut tail) = tail.take() {
            pending.push(std::mem::replace(&mut *tail, Expr::placeholder()));
        }
        if !head.is_atom() {
            pending.push(std::mem::replace(&mut **head, Expr::placeholder()));
        }
    }
}
