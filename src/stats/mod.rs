pub mod correlate;
pub mod describe;
pub mod group;
pub mod rank;
