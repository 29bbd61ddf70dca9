//! 浏览器 API 适配层
//!
//! Browser-side implementations of the client core's seams: token
//! storage, HTTP, notifications and log output. The router lives here too
//! since it is the only other module touching `window.history`.

mod console;
mod http;
pub mod router;
mod storage;
mod toast;

pub use console::init_logging;
pub use http::GlooHttpClient;
pub use storage::BrowserStorage;
pub use toast::{ToastNotifier, ToastStack};
