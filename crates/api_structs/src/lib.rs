mod availability;
mod feed;
mod slot;
mod status;

pub mod dtos {
    pub use crate::availability::dtos::*;
    pub use crate::slot::dtos::*;
}

pub use crate::availability::api::*;
pub use crate::feed::api::*;
pub use crate::status::api::*;
