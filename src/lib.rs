pub mod api;
pub mod config;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod optimizer;
pub mod scorer;
pub mod typing;
// cmd and reports are binary modules (see main.rs).
