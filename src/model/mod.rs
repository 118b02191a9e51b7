pub mod analysis;
pub mod champion;
pub mod ids;
pub mod match_data;
