use crate::core::interceptor::InterceptionRule;
use crate::core::{Error, Interceptor};
use crate::runtime::{Runtime, Value};

// sze and syy drive the laser switch and tracker state; with nothing
// attached both raise inside the device runtime. Suppressed calls still
// show up in the debug log.
fn sze(_rt: &Runtime, _this: &Value, _args: &[Value]) -> Result<Value, Error> {
    Ok(Value::Unit)
}

fn syy(_rt: &Runtime, _this: &Value, _args: &[Value]) -> Result<Value, Error> {
    Ok(Value::Unit)
}

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    new_hook!(rt, interceptor, InterceptionRule::replace("PlayerController", "sze", 0, sze));
    new_hook!(rt, interceptor, InterceptionRule::replace("PlayerController", "syy", 1, syy));
}
