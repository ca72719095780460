pub mod depth;
pub mod console;
