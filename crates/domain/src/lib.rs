#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod package;
mod summary;
mod workout;

pub use package::*;
pub use summary::*;
pub use workout::*;
