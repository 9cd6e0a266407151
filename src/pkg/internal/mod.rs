pub mod adaptors;
pub mod forms;
pub mod seed;
pub mod store;
pub mod uploads;
