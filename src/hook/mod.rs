#![allow(non_snake_case)]

macro_rules! new_hook {
    ($rt:expr, $interceptor:expr, $rule:expr) => (
        {
            let rule = $rule;
            let key = rule.key();
            if !crate::core::LaunchHelper::is_hook_disabled(&key) {
                info!("new_hook!: {}", key);
                if let Err(e) = $interceptor.register($rt, rule) {
                    error!("{}", e);
                }
            }
            else {
                info!("[DISABLED] new_hook!: {}", key);
            }
        }
    )
}

pub mod Assembly_CSharp;

use crate::core::Interceptor;
use crate::runtime::Runtime;

pub fn init(rt: &Runtime, interceptor: &Interceptor) {
    info!("Installing hooks");

    Assembly_CSharp::init(rt, interceptor);

    info!("Hooking finished, {} installed", interceptor.installed());
}
