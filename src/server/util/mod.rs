pub mod email;
pub mod json;
pub mod path;
pub mod phone;
