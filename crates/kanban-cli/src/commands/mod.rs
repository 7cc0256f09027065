pub mod board;
pub mod create;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod shared;
pub mod show;
