pub mod classifier;
pub mod indicator;
pub mod sampler;
pub mod telemetry;
