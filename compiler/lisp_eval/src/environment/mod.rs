//! Lexical environments.
//!
//! A scope holds its own bindings plus a shared link to its enclosing scope.
//! Lookups and assignments walk that chain outward. Parents never hold
//! their children, so the links form a tree; a closure keeps its defining
//! scope (and everything above it) alive by holding an `Environment` handle.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lisp_ir::Token;

use crate::errors::{undefined_variable, EvalResult};
use crate::Value;

/// A single-threaded, shared, mutable cell.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// [`LocalScope::new`]. Not `Send`: evaluation runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// True when both handles point at the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One level of variable bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Insert or overwrite a binding in this scope only.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_owned(), value);
    }

    /// Find the nearest binding for `name`, searching outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Overwrite the nearest existing binding for `name`.
    ///
    /// Returns `false`, changing nothing, when no scope in the chain binds it.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return true;
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => false,
        }
    }

    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

impl fmt::Debug for Scope {
    // Values may be closures that capture this very scope; print names only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Scope")
            .field("bindings", &names)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Handle to a scope in the environment chain.
///
/// Cloning the handle shares the scope: a binding defined or assigned through
/// one clone is visible through all of them.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh top-level environment with no parent.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// A new empty scope whose parent is this one.
    #[must_use]
    pub fn child_scope(&self) -> Environment {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// Bind `name` in this scope, replacing any existing local binding.
    pub fn define(&self, name: &str, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    /// Resolve a symbol through the scope chain.
    pub fn get(&self, name: &Token) -> EvalResult {
        self.lookup(&name.lexeme)
            .ok_or_else(|| undefined_variable(name))
    }

    /// Untyped lookup by name.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Overwrite the nearest existing binding of `name`; never creates one.
    pub fn assign(&self, name: &Token, value: Value) -> EvalResult<()> {
        if self.scope.borrow_mut().assign(&name.lexeme, value) {
            Ok(())
        } else {
            Err(undefined_variable(name))
        }
    }

    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.scope.borrow().is_defined_locally(name)
    }

    /// True when both handles refer to the same scope.
    pub fn same_scope(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Environment")
            .field(&*self.scope.borrow())
            .finish()
    }
}
