//! One component per routed page.

mod admin;
mod crop_prediction;
mod crops;
mod dashboard;
mod not_found;
mod plant_disease;
mod settings;
mod soil;

pub use admin::Admin;
pub use crop_prediction::CropPrediction;
pub use crops::{filter_crops, Crops, SeasonFilter};
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use plant_disease::PlantDisease;
pub use settings::{Settings, APP_VERSION};
pub use soil::Soil;
