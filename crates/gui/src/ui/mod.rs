pub mod dimension_dialog;
pub mod notice;
pub mod object_list;
pub mod status_bar;
pub mod toolbar;
