#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod constants;
pub mod environment;
pub mod errors;
pub mod export;
pub mod snapshot;
pub mod toggle;

pub use crate::constants::*;
pub use crate::environment::*;
pub use crate::errors::*;
pub use crate::export::*;
pub use crate::snapshot::*;
pub use crate::toggle::*;
