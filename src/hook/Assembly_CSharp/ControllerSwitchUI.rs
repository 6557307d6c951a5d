use crate::core::interceptor::{Flow, InterceptionRule};
use crate::core::{Error, Interceptor};
use crate::runtime::{Runtime, Value};

// The ready button only becomes interactable once a headset and both
// trackers report in. Force it on and press it before the pairing screen
// starts waiting for them.
fn Start(rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Flow, Error> {
    let this = this.as_object()?;

    let btn = this.get("readyBTN")?.as_object()?;
    btn.set("m_Interactable", Value::Bool(true))?;

    this.get("hintTextObj")?.as_object()?.invoke(rt, "SetActive", &[Value::Bool(false)])?;

    btn.get("onClick")?.as_object()?.invoke(rt, "Invoke", &[])?;

    Ok(Flow::Continue)
}

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    new_hook!(rt, interceptor, InterceptionRule::before("ControllerSwitchUI", "Start", 0, Start));
}
