pub mod package;
pub mod queues;
pub mod shared;
