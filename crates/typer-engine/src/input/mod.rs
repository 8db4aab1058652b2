pub mod key;
pub mod queue;
