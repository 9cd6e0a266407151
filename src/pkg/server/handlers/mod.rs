pub mod items;
pub mod jobs;
pub mod probes;
