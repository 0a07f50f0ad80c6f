//! Huashan Guide: the route table of the guide's single-page application,
//! the router that resolves locations against it, and the server that
//! answers history-mode URLs.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Navigator, Route, RouteTable, Router, View};
