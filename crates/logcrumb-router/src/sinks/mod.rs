//! Concrete log sinks

pub mod breadcrumb;
pub mod console;
pub mod disk;

pub use breadcrumb::{BreadcrumbSink, BREADCRUMB_CAPACITY};
pub use console::ConsoleSink;
pub use disk::DiskSink;
