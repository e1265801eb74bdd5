pub mod api;
pub mod projection;
pub mod storage;
pub mod store;
pub mod ui;
pub mod url_sync;
