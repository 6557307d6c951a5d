use crate::core::interceptor::InterceptionRule;
use crate::core::{Error, Interceptor};
use crate::runtime::{Runtime, Value};

// The original polls the connected devices before writing the ready flag;
// write the flag directly instead.
fn rtr(_rt: &Runtime, this: &Value, args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("bvxp", args[0].clone())?;
    Ok(Value::Unit)
}

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    new_hook!(rt, interceptor, InterceptionRule::replace("PlayerDataManager", "rtr", 1, rtr));
}
