pub mod project;
pub mod project_patch;
pub mod ttd_allow_list;
