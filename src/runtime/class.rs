use std::sync::{Arc, Mutex};

use fnv::FnvHashMap;

use crate::core::interceptor::{Behavior, Flow};
use crate::core::Error;

use super::{Object, Runtime, Value};

/// Method bodies and replace hooks. `this` is `Value::Unit` for static
/// calls, `Value::Obj` otherwise.
pub type MethodFn = fn(rt: &Runtime, this: &Value, args: &[Value]) -> Result<Value, Error>;
pub type BeforeFn = fn(rt: &Runtime, this: &Value, args: &[Value]) -> Result<Flow, Error>;
pub type AfterFn = fn(rt: &Runtime, this: &Value, args: &[Value]) -> Result<(), Error>;

#[derive(Clone, Copy, Default)]
struct Detour {
    before: Option<BeforeFn>,
    after: Option<AfterFn>,
    replace: Option<MethodFn>,
}

#[derive(Clone, Copy)]
struct MethodSlot {
    arity: usize,
    body: MethodFn,
    detour: Detour,
}

pub struct Class {
    name: String,
    field_template: Vec<(String, Value)>,
    methods: Mutex<FnvHashMap<String, MethodSlot>>,
    statics: Mutex<FnvHashMap<String, Value>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Class {
            name: name.into(),
            field_template: Vec::new(),
            methods: Mutex::default(),
            statics: Mutex::default(),
        }
    }

    pub fn field(mut self, name: &str, default: Value) -> Self {
        self.field_template.push((name.to_owned(), default));
        self
    }

    pub fn method(self, name: &str, arity: usize, body: MethodFn) -> Self {
        self.methods.lock().unwrap().insert(
            name.to_owned(),
            MethodSlot { arity, body, detour: Detour::default() },
        );
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instantiate(self: &Arc<Self>) -> Object {
        let fields = self.field_template.iter()
            .map(|(name, default)| (name.clone(), default.clone()))
            .collect();
        Object::new(self.clone(), fields)
    }

    pub fn set_static(&self, name: &str, value: Value) {
        self.statics.lock().unwrap().insert(name.to_owned(), value);
    }

    pub fn get_static(&self, name: &str) -> Result<Value, Error> {
        self.statics.lock().unwrap().get(name).cloned()
            .ok_or_else(|| Error::FieldNotFound(self.name.clone(), name.to_owned()))
    }

    pub fn invoke_static(&self, rt: &Runtime, name: &str, args: &[Value]) -> Result<Value, Error> {
        self.call(rt, &Value::Unit, name, args)
    }

    /// Shared dispatch for instance and static calls. The slot is copied out
    /// so no lock is held while hooks or the body run; hooks are free to
    /// re-enter this class.
    pub(crate) fn call(&self, rt: &Runtime, this: &Value, name: &str, args: &[Value]) -> Result<Value, Error> {
        let slot = self.slot(name)?;
        if args.len() != slot.arity {
            return Err(Error::ArityMismatch(self.name.clone(), name.to_owned(), slot.arity, args.len()));
        }

        let Detour { before, after, replace } = slot.detour;

        let mut suppressed = None;
        if let Some(hook) = before {
            debug!("{}::{}: before hook fired", self.name, name);
            match hook(rt, this, args)? {
                Flow::Continue => {}
                Flow::Suppress(value) => suppressed = Some(value),
            }
        }

        let result = match suppressed {
            Some(value) => value,
            None => {
                if let Some(hook) = replace {
                    debug!("{}::{}: replace hook fired", self.name, name);
                    hook(rt, this, args)?
                }
                else {
                    (slot.body)(rt, this, args)?
                }
            }
        };

        // Observers run regardless of whether the original body did; their
        // return value is dropped.
        if let Some(hook) = after {
            debug!("{}::{}: after hook fired", self.name, name);
            hook(rt, this, args)?;
        }

        Ok(result)
    }

    fn slot(&self, name: &str) -> Result<MethodSlot, Error> {
        self.methods.lock().unwrap().get(name).copied()
            .ok_or_else(|| Error::MethodNotFound(self.name.clone(), name.to_owned()))
    }

    /// Redirects one method slot. An arity mismatch means the named member
    /// does not exist in the shape the rule expects.
    pub(crate) fn install(&self, method: &str, arity: usize, behavior: Behavior) -> Result<MethodFn, Error> {
        let mode = behavior.mode();
        let mut methods = self.methods.lock().unwrap();

        let Some(slot) = methods.get_mut(method) else {
            return Err(Error::MethodNotFound(self.name.clone(), method.to_owned()));
        };
        if slot.arity != arity {
            return Err(Error::MethodNotFound(self.name.clone(), method.to_owned()));
        }

        match behavior {
            Behavior::Before(hook) => {
                if slot.detour.before.is_some() {
                    return Err(Error::HookConflict(self.name.clone(), method.to_owned(), mode));
                }
                slot.detour.before = Some(hook);
            }
            Behavior::After(hook) => {
                if slot.detour.after.is_some() {
                    return Err(Error::HookConflict(self.name.clone(), method.to_owned(), mode));
                }
                slot.detour.after = Some(hook);
            }
            Behavior::Replace(hook) => {
                if slot.detour.replace.is_some() {
                    return Err(Error::HookConflict(self.name.clone(), method.to_owned(), mode));
                }
                slot.detour.replace = Some(hook);
            }
        }

        Ok(slot.body)
    }
}
