pub mod ask;
pub mod chat;
pub mod context;
pub mod location;
pub mod render;
