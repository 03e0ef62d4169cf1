pub mod html;
pub mod path;
