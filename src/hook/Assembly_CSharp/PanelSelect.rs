use crate::core::interceptor::InterceptionRule;
use crate::core::{Error, Interceptor};
use crate::runtime::{Runtime, Value};

// The ost selection fires as a side effect of the album toggling in
// VolListItem.Init; chain straight into the play button.
fn OnSelectOst(rt: &Runtime, this: &Value, _args: &[Value]) -> Result<(), Error> {
    this.as_object()?.invoke(rt, "OnClickPlay", &[])?;
    Ok(())
}

// The original play flow, minus the player controller setup that needs
// lasers and trackers attached.
fn OnClickPlay(rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Value, Error> {
    info!("Inside replacement of PanelSelect.OnClickPlay");
    let this = this.as_object()?;

    let manager = rt.class("PlayerDataManager")?.get_static("Instance")?.as_object()?;
    manager.invoke(rt, "rtr", &[Value::Bool(true)])?;
    if manager.get("IsDRSMode")?.as_bool()? {
        rt.class("EventHandlerProxy")?.invoke_static(rt, "sck", &[Value::Str("DRSTriggerChange".to_owned())])?;
    }
    // PlayerController.instance.AllowLaserSwich / interactiveControlManagement
    // are left alone; there is no hardware for them to talk to.
    rt.class("SfxManager")?.invoke_static(rt, "tba", &[])?;
    rt.class("dhd")?.invoke_static(rt, "tab", &[])?;
    this.invoke(rt, "AddStatByMode", &[])?;
    rt.class("dhj")?.invoke_static(rt, "tcf", &[Value::Str("Play".to_owned())])?;

    Ok(Value::Unit)
}

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    new_hook!(rt, interceptor, InterceptionRule::after("PanelSelect", "OnSelectOst", 0, OnSelectOst));
    new_hook!(rt, interceptor, InterceptionRule::replace("PanelSelect", "OnClickPlay", 0, OnClickPlay));
}
