//! Mock backend for the agricultural portal.
//!
//! Everything here is literal fixture data. The two "remote" operations
//! (`disease::scan_plant_image` and `prediction::run_crop_prediction`) only
//! wait for a fixed delay before handing back a hard-coded result; nothing
//! touches the network.

pub mod admin;
pub mod alerts;
pub mod crops;
pub mod disease;
pub mod fields;
pub mod prediction;
pub mod timeline;

mod delay;
mod text;

pub use text::Bilingual;
