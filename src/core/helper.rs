use std::{fs, path::Path, process, sync::{atomic::AtomicBool, Arc}};

use arc_swap::ArcSwap;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::runtime::Runtime;

use super::{Error, Interceptor};

const CONFIG_PATH: &str = "dd-launch-helper.json";

pub struct LaunchHelper {
    pub interceptor: Interceptor,
    pub runtime: Runtime,
    pub config: ArcSwap<Config>,
    pub attach_completed: AtomicBool,
}

static INSTANCE: OnceCell<Arc<LaunchHelper>> = OnceCell::new();

impl LaunchHelper {
    pub fn init(runtime: Runtime) -> bool {
        if INSTANCE.get().is_some() {
            warn!("LaunchHelper should be initialized only once");
            return true;
        }

        let instance = match Self::new(runtime) {
            Ok(v) => v,
            Err(e) => {
                super::log::init(false); // early init to log error
                error!("Init failed: {}", e);
                return false;
            }
        };

        super::log::init(instance.config.load().debug_mode);

        info!("dd-launch-helper {}", env!("CARGO_PKG_VERSION"));

        INSTANCE.set(Arc::new(instance)).is_ok()
    }

    pub fn instance() -> Arc<LaunchHelper> {
        INSTANCE.get().unwrap_or_else(|| {
            error!("FATAL: Attempted to get LaunchHelper instance before initialization");
            process::exit(1);
        }).clone()
    }

    fn new(runtime: Runtime) -> Result<LaunchHelper, Error> {
        let config = Config::load(Path::new(CONFIG_PATH))?;

        Ok(LaunchHelper {
            interceptor: Interceptor::default(),
            runtime,
            config: ArcSwap::new(Arc::new(config)),
            attach_completed: AtomicBool::new(false),
        })
    }

    /// Hooks named in the config are skipped at registration. Safe to call
    /// before init; nothing is disabled then.
    pub fn is_hook_disabled(name: &str) -> bool {
        INSTANCE.get()
            .map(|helper| helper.config.load().disabled_hooks.iter().any(|hook| hook == name))
            .unwrap_or(false)
    }
}

#[derive(Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub disabled_hooks: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Error> {
        if fs::metadata(path).is_ok() {
            let json = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&json)?)
        }
        else {
            Ok(Config::default())
        }
    }
}
