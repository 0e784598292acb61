pub mod menu_bar;
pub mod print_dialog;
pub mod status;
pub mod viewport;
