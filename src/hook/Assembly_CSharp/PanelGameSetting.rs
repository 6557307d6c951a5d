use crate::core::interceptor::InterceptionRule;
use crate::core::{Error, Interceptor};
use crate::runtime::{Runtime, Value};

// Fire the HP toggle callback as soon as the panel wakes up; with nobody
// dodging, infinite HP is the only way a song finishes.
fn Awake(rt: &Runtime, this: &Value, _args: &[Value]) -> Result<(), Error> {
    this.as_object()?.invoke(rt, "OnToggleHpChange", &[Value::Bool(true)])?;
    Ok(())
}

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    new_hook!(rt, interceptor, InterceptionRule::after("PanelGameSetting", "Awake", 0, Awake));
}
