//! Dynamic view of the target surface. A host adapter registers the live
//! game types here; everything past that point is looked up by name.

mod class;
mod object;
mod value;

pub use class::{AfterFn, BeforeFn, Class, MethodFn};
pub use object::Object;
pub use value::Value;

use std::sync::{Arc, Mutex};

use fnv::FnvHashMap;

use crate::core::Error;

#[derive(Default)]
pub struct Runtime {
    classes: Mutex<FnvHashMap<String, Arc<Class>>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, class: Class) -> Arc<Class> {
        let class = Arc::new(class);
        self.classes.lock().unwrap().insert(class.name().to_owned(), class.clone());
        class
    }

    pub fn class(&self, name: &str) -> Result<Arc<Class>, Error> {
        self.classes.lock().unwrap().get(name).cloned()
            .ok_or_else(|| Error::ClassNotFound(name.to_owned()))
    }
}
