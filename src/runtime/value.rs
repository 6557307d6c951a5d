use crate::core::Error;

use super::Object;

#[derive(Clone, Debug)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Obj(Object),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Obj(_) => "object",
        }
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        if let Value::Bool(v) = self {
            Ok(*v)
        }
        else {
            Err(Error::TypeMismatch("bool", self.type_name()))
        }
    }

    pub fn as_int(&self) -> Result<i64, Error> {
        if let Value::Int(v) = self {
            Ok(*v)
        }
        else {
            Err(Error::TypeMismatch("int", self.type_name()))
        }
    }

    pub fn as_float(&self) -> Result<f64, Error> {
        if let Value::Float(v) = self {
            Ok(*v)
        }
        else {
            Err(Error::TypeMismatch("float", self.type_name()))
        }
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        if let Value::Str(v) = self {
            Ok(v)
        }
        else {
            Err(Error::TypeMismatch("string", self.type_name()))
        }
    }

    /// Objects are shared handles; this hands out another handle to the
    /// same instance.
    pub fn as_object(&self) -> Result<Object, Error> {
        if let Value::Obj(v) = self {
            Ok(v.clone())
        }
        else {
            Err(Error::TypeMismatch("object", self.type_name()))
        }
    }
}
