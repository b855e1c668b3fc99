pub mod controls;
pub mod hover_info;
pub mod self_map;
pub mod shortcuts;
