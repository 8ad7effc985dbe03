//! Layout contracts & the pavement grid engine

mod constraints;
mod pavement;

pub use constraints::*;
pub use pavement::*;

pub mod prelude {
    pub use crate::constraints::{Constraints, MeasureMode, MeasureSpec};
    pub use crate::pavement::{CellSpec, PavementConfig, PavementHost, PavementLayout};
}
