pub mod builder;
pub mod command;
pub mod names;
pub mod render;

pub use crate::domain::model::{Parameters, Role, Topology};
pub use crate::domain::ports::{ParameterProvider, Renderer, Storage};
pub use crate::utils::error::Result;
