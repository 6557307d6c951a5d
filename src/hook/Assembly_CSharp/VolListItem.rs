use crate::core::interceptor::InterceptionRule;
use crate::core::{Error, Interceptor};
use crate::runtime::{Runtime, Value};

// Toggles every album on as the list builds itself. The items init in
// order, so the last one (custom songs) ends up selected.
fn Init(rt: &Runtime, this: &Value, _args: &[Value]) -> Result<(), Error> {
    let this = this.as_object()?;
    info!("Invoking on {} inside VolListItem.Init", this);
    this.invoke(rt, "Invoke", &[Value::Bool(true)])?;
    Ok(())
}

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    new_hook!(rt, interceptor, InterceptionRule::after("VolListItem", "Init", 1, Init));
}
