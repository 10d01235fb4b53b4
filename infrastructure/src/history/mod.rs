//! Dispatch history persistence

pub mod json_recorder;

pub use json_recorder::JsonDispatchRecorder;
