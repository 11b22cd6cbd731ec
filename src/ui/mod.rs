pub mod alert;
pub mod window;
