pub mod banner;
pub mod consts;
pub mod driver;
pub mod entity;
