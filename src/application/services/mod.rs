//! Services that assemble builders from configuration.

pub mod config_resolver;
pub mod link_factory;

pub use config_resolver::ConfigResolver;
pub use link_factory::LinkFactory;
