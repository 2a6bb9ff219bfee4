pub mod c_like;
pub mod clearsilver;
pub mod fortran;
pub mod generic;
pub mod html;
pub mod syntax_table;
pub mod xml;
