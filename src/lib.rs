pub mod command;
pub mod config;
pub mod driver;
pub mod pixel;
pub mod strip;

pub mod prelude {
    pub use crate::{command::*, config::*, driver::*, pixel::*, strip::*};
}
