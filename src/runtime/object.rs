use std::fmt;
use std::sync::{Arc, Mutex};

use fnv::FnvHashMap;

use crate::core::Error;

use super::{Class, Runtime, Value};

/// Handle to a live instance owned by the target surface. Clones share the
/// instance.
#[derive(Clone)]
pub struct Object(Arc<ObjectData>);

struct ObjectData {
    class: Arc<Class>,
    fields: Mutex<FnvHashMap<String, Value>>,
}

impl Object {
    pub(crate) fn new(class: Arc<Class>, fields: FnvHashMap<String, Value>) -> Self {
        Object(Arc::new(ObjectData { class, fields: Mutex::new(fields) }))
    }

    pub fn get(&self, field: &str) -> Result<Value, Error> {
        self.0.fields.lock().unwrap().get(field).cloned()
            .ok_or_else(|| Error::FieldNotFound(self.0.class.name().to_owned(), field.to_owned()))
    }

    /// Writes an existing field; the instance shape is fixed at
    /// instantiation, so an unknown name is an error, not an insert.
    pub fn set(&self, field: &str, value: Value) -> Result<(), Error> {
        match self.0.fields.lock().unwrap().get_mut(field) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::FieldNotFound(self.0.class.name().to_owned(), field.to_owned())),
        }
    }

    /// Routes through any installed redirections, like a reflected call in
    /// the host would.
    pub fn invoke(&self, rt: &Runtime, method: &str, args: &[Value]) -> Result<Value, Error> {
        self.0.class.call(rt, &Value::Obj(self.clone()), method, args)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.0.class.name(), Arc::as_ptr(&self.0))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
