pub mod config;
pub mod logging;

pub mod delete_target;
pub mod expand;
pub mod fetch;
pub mod html;
pub mod list_file;
pub mod range;
pub mod record;
pub mod session;
pub mod timestamp;
pub mod url_model;

pub use record::UrlRecord;
