pub mod accel;
pub mod indicator;
pub mod link;
