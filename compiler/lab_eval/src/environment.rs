//! Name bindings and package resolution.
//!
//! The evaluator does not own variable state. Every evaluation call receives
//! the environment as `&mut E` where `E: Environment`, so hosts can plug in
//! their own storage. [`Scope`] is the stock implementation: a scope stack
//! over `FxHashMap`s, pushed and popped by the host (no cloning).

use rustc_hash::FxHashMap;

use lab_value::{type_mismatch, unresolved_package, EvalError, Value};

/// Variable and package storage consulted during evaluation.
pub trait Environment {
    /// What a resolved package reference yields.
    type Package;

    /// Current value bound to `name`, searching outward.
    fn lookup(&self, name: &str) -> Option<Value>;

    /// Bind `name` to `value`.
    fn bind(&mut self, name: &str, value: Value);

    /// Resolve a package reference by name.
    fn resolve_package(&self, name: &str) -> Option<Self::Package>;
}

/// Resolve a [`Value::PackageRef`] through `env`.
///
/// Package references evaluate to their bare name; constructs that need the
/// package itself (imports, member access) call this.
pub fn resolve_package<E: Environment>(value: &Value, env: &E) -> Result<E::Package, EvalError> {
    match value {
        Value::PackageRef(name) => env
            .resolve_package(name)
            .ok_or_else(|| unresolved_package(name)),
        other => Err(type_mismatch("package", other.type_name())),
    }
}

/// A package registered with a [`Scope`].
#[derive(Clone, Debug, PartialEq)]
pub struct PackageHandle {
    name: String,
    exports: FxHashMap<String, Value>,
}

impl PackageHandle {
    pub fn new(name: impl Into<String>) -> Self {
        PackageHandle {
            name: name.into(),
            exports: FxHashMap::default(),
        }
    }

    /// Add an exported member.
    #[must_use]
    pub fn with_export(mut self, name: impl Into<String>, value: Value) -> Self {
        self.exports.insert(name.into(), value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn export(&self, name: &str) -> Option<&Value> {
        self.exports.get(name)
    }
}

/// Scope-stack environment.
///
/// The global frame is always present; `pop_scope` never removes it.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    global: FxHashMap<String, Value>,
    locals: Vec<FxHashMap<String, Value>>,
    packages: FxHashMap<String, PackageHandle>,
}

impl Scope {
    /// Create an environment with only the global frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames, including the global one.
    pub fn depth(&self) -> usize {
        self.locals.len() + 1
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.locals.push(FxHashMap::default());
    }

    #[inline]
    pub fn pop_scope(&mut self) {
        self.locals.pop();
    }

    /// Define `name` in the innermost frame, shadowing outer bindings.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.current_mut().insert(name.to_string(), value);
    }

    /// Make a package resolvable under its name.
    pub fn register_package(&mut self, package: PackageHandle) {
        self.packages.insert(package.name.clone(), package);
    }

    fn current_mut(&mut self) -> &mut FxHashMap<String, Value> {
        self.locals.last_mut().unwrap_or(&mut self.global)
    }

    fn frames(&self) -> impl Iterator<Item = &FxHashMap<String, Value>> {
        self.locals.iter().rev().chain(std::iter::once(&self.global))
    }
}

impl Environment for Scope {
    type Package = PackageHandle;

    fn lookup(&self, name: &str) -> Option<Value> {
        self.frames().find_map(|frame| frame.get(name)).cloned()
    }

    /// Reassign the nearest existing binding; define in the innermost frame
    /// when there is none.
    fn bind(&mut self, name: &str, value: Value) {
        let existing = self
            .locals
            .iter_mut()
            .rev()
            .chain(std::iter::once(&mut self.global))
            .find_map(|frame| frame.get_mut(name));
        match existing {
            Some(slot) => *slot = value,
            None => self.define(name, value),
        }
    }

    fn resolve_package(&self, name: &str) -> Option<PackageHandle> {
        self.packages.get(name).cloned()
    }
}
