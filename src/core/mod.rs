pub mod helper;
pub use helper::LaunchHelper;

mod error;
pub use error::Error;

pub mod interceptor;
pub use interceptor::Interceptor;

pub mod log;
