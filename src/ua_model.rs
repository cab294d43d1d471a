pub mod states;
pub use states::*;

pub mod compartments;
pub use compartments::*;

pub mod model_options;
pub use model_options::*;

pub mod coupled_model;
pub use coupled_model::*;

pub mod trajectory_writer;
pub use trajectory_writer::*;
