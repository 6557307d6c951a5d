use std::{collections::hash_map, fmt, sync::Mutex};

use fnv::FnvHashMap;

use crate::runtime::{AfterFn, BeforeFn, MethodFn, Runtime, Value};

use super::Error;

/// Where a replacement behavior runs relative to the original body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Before,
    After,
    Replace,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Before => write!(f, "before"),
            Mode::After => write!(f, "after"),
            Mode::Replace => write!(f, "replace"),
        }
    }
}

/// Returned by a before hook to decide whether the original body runs.
/// `Suppress` carries the result handed back to the caller in its place.
pub enum Flow {
    Continue,
    Suppress(Value),
}

pub enum Behavior {
    Before(BeforeFn),
    After(AfterFn),
    Replace(MethodFn),
}

impl Behavior {
    pub fn mode(&self) -> Mode {
        match self {
            Behavior::Before(_) => Mode::Before,
            Behavior::After(_) => Mode::After,
            Behavior::Replace(_) => Mode::Replace,
        }
    }
}

/// One declared interception. The target is named, not typed; it gets
/// resolved against the live surface at registration.
pub struct InterceptionRule {
    pub class: &'static str,
    pub method: &'static str,
    pub arity: usize,
    pub behavior: Behavior,
}

impl InterceptionRule {
    pub fn before(class: &'static str, method: &'static str, arity: usize, hook: BeforeFn) -> Self {
        Self { class, method, arity, behavior: Behavior::Before(hook) }
    }

    pub fn after(class: &'static str, method: &'static str, arity: usize, hook: AfterFn) -> Self {
        Self { class, method, arity, behavior: Behavior::After(hook) }
    }

    pub fn replace(class: &'static str, method: &'static str, arity: usize, hook: MethodFn) -> Self {
        Self { class, method, arity, behavior: Behavior::Replace(hook) }
    }

    pub fn key(&self) -> String {
        format!("{}::{}", self.class, self.method)
    }
}

#[derive(Default)]
pub struct Interceptor {
    hook_map: Mutex<FnvHashMap<(String, String, Mode), HookHandle>>,
}

pub struct HookHandle {
    pub trampoline: MethodFn,
}

impl Interceptor {
    /// Resolves the rule's target by name and redirects it. At most one rule
    /// per (target, mode) pair; the map is append-only for the process
    /// lifetime.
    pub fn register(&self, rt: &Runtime, rule: InterceptionRule) -> Result<(), Error> {
        let class = rt.class(rule.class)?;
        let mode = rule.behavior.mode();

        match self.hook_map.lock().unwrap().entry((rule.class.to_owned(), rule.method.to_owned(), mode)) {
            hash_map::Entry::Occupied(_) => {
                Err(Error::HookConflict(rule.class.to_owned(), rule.method.to_owned(), mode))
            }
            hash_map::Entry::Vacant(e) => {
                let trampoline = class.install(rule.method, rule.arity, rule.behavior)?;
                e.insert(HookHandle { trampoline });
                Ok(())
            }
        }
    }

    /// Original body of a hooked method. Calling it bypasses every installed
    /// redirection on that method.
    pub fn trampoline(&self, class: &str, method: &str, mode: Mode) -> Option<MethodFn> {
        if let Some(handle) = self.hook_map.lock().unwrap().get(&(class.to_owned(), method.to_owned(), mode)) {
            Some(handle.trampoline)
        }
        else {
            warn!("Attempted to get invalid hook: {}::{}", class, method);
            None
        }
    }

    pub fn installed(&self) -> usize {
        self.hook_map.lock().unwrap().len()
    }
}
