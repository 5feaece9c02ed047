pub mod api;
pub mod consts;
