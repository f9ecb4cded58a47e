mod bindmap;
mod callbacks;
mod clientwin;
mod fields;
mod groupws;
mod marshal;
mod moveres;
mod settings;
mod state;
mod string_map;

pub use bindmap::*;
pub use callbacks::*;
pub use clientwin::*;
pub use groupws::*;
pub use moveres::*;
pub use settings::*;
pub use state::*;
pub use string_map::*;
