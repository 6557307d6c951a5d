#[macro_use] extern crate log;

pub mod core;
pub mod runtime;
pub mod hook;

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic;

use crate::core::LaunchHelper;
use crate::runtime::Runtime;

/// Host attach entry point. The plugin host calls this once at startup with
/// the bound target surface; it never blocks and never unwinds past this
/// boundary.
pub fn attach(runtime: Runtime) -> bool {
    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        if !LaunchHelper::init(runtime) {
            return false;
        }

        let helper = LaunchHelper::instance();
        if helper.attach_completed.load(atomic::Ordering::Relaxed) {
            warn!("Attach called more than once");
            return true;
        }

        hook::init(&helper.runtime, &helper.interceptor);
        helper.attach_completed.store(true, atomic::Ordering::Relaxed);
        info!("Attach completed");
        true
    }));

    match res {
        Ok(ok) => ok,
        Err(_) => {
            error!("Attach aborted by panic");
            false
        }
    }
}
