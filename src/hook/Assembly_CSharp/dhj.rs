use crate::core::interceptor::InterceptionRule;
use crate::core::{Error, Interceptor};
use crate::runtime::{Runtime, Value};

// Analytics dispatch. The payload carries device identifiers that do not
// exist without a headset attached.
fn tcc(_rt: &Runtime, _this: &Value, _args: &[Value]) -> Result<Value, Error> {
    Ok(Value::Unit)
}

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    new_hook!(rt, interceptor, InterceptionRule::replace("dhj", "tcc", 2, tcc));
}
