pub mod add;
pub mod init;
pub mod menu;
pub mod plot;
pub mod root;
pub mod view;
