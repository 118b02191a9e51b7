pub mod analysis;
pub mod catalog;
pub mod data_manager;
pub mod gameapi;
pub mod lookup;
