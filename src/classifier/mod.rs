//! Nearest-profile language classifier
//!
//! Architecture: cleaned text → n-gram counts over a frozen vocabulary →
//! mean-normalized log weights → restricted Euclidean distance to every
//! language profile → arg-min.
//!
//! One [`Model`] exists per n-gram order. [`ModelSet`] groups the orders
//! trained together and [`ModelFile`] is what lands on disk.

mod model;
mod set;
pub mod store;
pub mod train;

pub use model::{restricted_distance, Model};
pub use set::{ModelSet, DEFAULT_ORDER};
pub use store::{default_model_path, ModelFile, MODEL_FILE_VERSION};
pub use train::{train, TrainConfig, TrainResult};
