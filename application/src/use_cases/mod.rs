//! Application use cases

pub mod dispatch_task;
