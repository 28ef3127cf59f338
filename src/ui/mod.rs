pub mod components;
pub mod todos;
