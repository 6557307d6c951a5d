//! End-to-end run against a stub of the game surface: attach once, then
//! play the startup events the way the host would fire them.

use std::sync::atomic::Ordering;

use dd_launch_helper::core::{Error, LaunchHelper};
use dd_launch_helper::runtime::{Class, Runtime, Value};

fn unit(_rt: &Runtime, _this: &Value, _args: &[Value]) -> Result<Value, Error> {
    Ok(Value::Unit)
}

fn event_invoke(_rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Value, Error> {
    let this = this.as_object()?;
    let fired = this.get("fired")?.as_int()?;
    this.set("fired", Value::Int(fired + 1))?;
    Ok(Value::Unit)
}

fn set_active(_rt: &Runtime, this: &Value, args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("activeSelf", args[0].clone())?;
    Ok(Value::Unit)
}

// The real Start begins polling for a headset and trackers.
fn controller_switch_start(_rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("started", Value::Bool(true))?;
    Ok(Value::Unit)
}

fn on_toggle_hp(_rt: &Runtime, this: &Value, args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("infiniteHp", args[0].clone())?;
    Ok(Value::Unit)
}

// Toggling an album selects its ost as a side effect.
fn vol_invoke(rt: &Runtime, this: &Value, args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("toggled", args[0].clone())?;
    let panel = rt.class("PanelSelect")?.get_static("Instance")?.as_object()?;
    panel.invoke(rt, "OnSelectOst", &[])?;
    Ok(Value::Unit)
}

// The stock play flow; it reaches for the player controller and must never
// run without hardware.
fn hardware_play_flow(_rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("hardwarePlayFlow", Value::Bool(true))?;
    Ok(Value::Unit)
}

fn add_stat_by_mode(_rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("statAdded", Value::Bool(true))?;
    Ok(Value::Unit)
}

fn device_poll(_rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("devicePollRan", Value::Bool(true))?;
    Ok(Value::Unit)
}

fn tracker_call(_rt: &Runtime, this: &Value, _args: &[Value]) -> Result<Value, Error> {
    this.as_object()?.set("trackerTouched", Value::Bool(true))?;
    Ok(Value::Unit)
}

fn sfx_tba(rt: &Runtime, _this: &Value, _args: &[Value]) -> Result<Value, Error> {
    rt.class("SfxManager")?.set_static("played", Value::Bool(true));
    Ok(Value::Unit)
}

fn dhd_tab(rt: &Runtime, _this: &Value, _args: &[Value]) -> Result<Value, Error> {
    rt.class("dhd")?.set_static("done", Value::Bool(true));
    Ok(Value::Unit)
}

fn analytics_track(rt: &Runtime, _this: &Value, _args: &[Value]) -> Result<Value, Error> {
    rt.class("dhj")?.set_static("tracked", Value::Bool(true));
    Ok(Value::Unit)
}

fn analytics_stat(rt: &Runtime, _this: &Value, args: &[Value]) -> Result<Value, Error> {
    rt.class("dhj")?.set_static("lastStat", args[0].clone());
    Ok(Value::Unit)
}

fn event_proxy_sck(rt: &Runtime, _this: &Value, args: &[Value]) -> Result<Value, Error> {
    rt.class("EventHandlerProxy")?.set_static("lastEvent", args[0].clone());
    Ok(Value::Unit)
}

#[test]
fn launch_without_hardware() {
    let rt = Runtime::new();

    let unity_event = rt.register(
        Class::new("UnityEvent")
            .field("fired", Value::Int(0))
            .method("Invoke", 0, event_invoke),
    );
    let game_object = rt.register(
        Class::new("GameObject")
            .field("activeSelf", Value::Bool(true))
            .method("SetActive", 1, set_active),
    );
    let button = rt.register(
        Class::new("Button")
            .field("m_Interactable", Value::Bool(false))
            .field("onClick", Value::Unit),
    );
    let ctrl_ui_class = rt.register(
        Class::new("ControllerSwitchUI")
            .field("readyBTN", Value::Unit)
            .field("hintTextObj", Value::Unit)
            .field("started", Value::Bool(false))
            .method("Start", 0, controller_switch_start),
    );
    let settings_class = rt.register(
        Class::new("PanelGameSetting")
            .field("infiniteHp", Value::Bool(false))
            .method("Awake", 0, unit)
            .method("OnToggleHpChange", 1, on_toggle_hp),
    );
    let vol_class = rt.register(
        Class::new("VolListItem")
            .field("toggled", Value::Bool(false))
            .method("Init", 1, unit)
            .method("Invoke", 1, vol_invoke),
    );
    let panel_class = rt.register(
        Class::new("PanelSelect")
            .field("hardwarePlayFlow", Value::Bool(false))
            .field("statAdded", Value::Bool(false))
            .method("OnSelectOst", 0, unit)
            .method("OnClickPlay", 0, hardware_play_flow)
            .method("AddStatByMode", 0, add_stat_by_mode),
    );
    let manager_class = rt.register(
        Class::new("PlayerDataManager")
            .field("bvxp", Value::Bool(false))
            .field("IsDRSMode", Value::Bool(true))
            .field("devicePollRan", Value::Bool(false))
            .method("rtr", 1, device_poll),
    );
    let controller_class = rt.register(
        Class::new("PlayerController")
            .field("trackerTouched", Value::Bool(false))
            .method("sze", 0, tracker_call)
            .method("syy", 1, tracker_call),
    );
    let sfx = rt.register(Class::new("SfxManager").method("tba", 0, sfx_tba));
    let dhd = rt.register(Class::new("dhd").method("tab", 0, dhd_tab));
    let dhj = rt.register(
        Class::new("dhj")
            .method("tcc", 2, analytics_track)
            .method("tcf", 1, analytics_stat),
    );
    let proxy = rt.register(Class::new("EventHandlerProxy").method("sck", 1, event_proxy_sck));

    let click_event = unity_event.instantiate();
    let hint = game_object.instantiate();
    let ready_btn = button.instantiate();
    ready_btn.set("onClick", Value::Obj(click_event.clone())).unwrap();

    let ctrl_ui = ctrl_ui_class.instantiate();
    ctrl_ui.set("readyBTN", Value::Obj(ready_btn.clone())).unwrap();
    ctrl_ui.set("hintTextObj", Value::Obj(hint.clone())).unwrap();

    let settings = settings_class.instantiate();
    let vol_item = vol_class.instantiate();
    let panel = panel_class.instantiate();
    panel_class.set_static("Instance", Value::Obj(panel.clone()));
    let manager = manager_class.instantiate();
    manager_class.set_static("Instance", Value::Obj(manager.clone()));
    let controller = controller_class.instantiate();

    sfx.set_static("played", Value::Bool(false));
    dhd.set_static("done", Value::Bool(false));
    dhj.set_static("tracked", Value::Bool(false));
    dhj.set_static("lastStat", Value::Unit);
    proxy.set_static("lastEvent", Value::Unit);

    assert!(dd_launch_helper::attach(rt));
    let helper = LaunchHelper::instance();
    assert!(helper.attach_completed.load(Ordering::Relaxed));
    let rt = &helper.runtime;

    // Installing the hooks must not touch anything by itself.
    assert!(!ready_btn.get("m_Interactable").unwrap().as_bool().unwrap());
    assert_eq!(click_event.get("fired").unwrap().as_int().unwrap(), 0);

    // The pairing screen comes up.
    ctrl_ui.invoke(rt, "Start", &[]).unwrap();
    assert!(ready_btn.get("m_Interactable").unwrap().as_bool().unwrap());
    assert!(!hint.get("activeSelf").unwrap().as_bool().unwrap());
    assert_eq!(click_event.get("fired").unwrap().as_int().unwrap(), 1);
    assert!(ctrl_ui.get("started").unwrap().as_bool().unwrap());

    // The settings panel wakes up.
    settings.invoke(rt, "Awake", &[]).unwrap();
    assert!(settings.get("infiniteHp").unwrap().as_bool().unwrap());

    // The album list builds; the toggle chain ends in the play flow.
    vol_item.invoke(rt, "Init", &[Value::Str("custom songs".to_owned())]).unwrap();
    assert!(vol_item.get("toggled").unwrap().as_bool().unwrap());
    assert!(!panel.get("hardwarePlayFlow").unwrap().as_bool().unwrap());
    assert!(panel.get("statAdded").unwrap().as_bool().unwrap());
    assert!(manager.get("bvxp").unwrap().as_bool().unwrap());
    assert!(!manager.get("devicePollRan").unwrap().as_bool().unwrap());
    assert!(sfx.get_static("played").unwrap().as_bool().unwrap());
    assert!(dhd.get_static("done").unwrap().as_bool().unwrap());
    assert_eq!(dhj.get_static("lastStat").unwrap().as_str().unwrap(), "Play");
    assert_eq!(proxy.get_static("lastEvent").unwrap().as_str().unwrap(), "DRSTriggerChange");

    // The hardware paths stay quiet.
    controller.invoke(rt, "sze", &[]).unwrap();
    controller.invoke(rt, "syy", &[Value::Int(0)]).unwrap();
    assert!(!controller.get("trackerTouched").unwrap().as_bool().unwrap());
    dhj.invoke_static(rt, "tcc", &[Value::Str("launch".to_owned()), Value::Unit]).unwrap();
    assert!(!dhj.get_static("tracked").unwrap().as_bool().unwrap());

    // A second attach is a logged no-op; nothing gets reinstalled.
    let installed = helper.interceptor.installed();
    assert!(dd_launch_helper::attach(Runtime::new()));
    assert_eq!(helper.interceptor.installed(), installed);
}
