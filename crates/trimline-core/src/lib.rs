pub mod editor;
pub mod error;
pub mod media;
pub mod session;
pub mod store;
pub mod timeline;
