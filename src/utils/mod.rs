pub mod bind;
pub mod colors;
pub mod path;
pub mod table;
