mod family;
mod laplace;
mod model;
mod normal;

pub use family::Family;
pub use laplace::Laplace;
pub use model::{Model, Winner};
pub use normal::Normal;
