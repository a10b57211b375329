//! Video essence lookup and path parsing.
//!
//! Translates between the two ways the control plane refers to a video
//! output:
//!
//! - an [`EssenceLocator`] `(type, index)` key, and
//! - the dotted keyword path ("kwl") of the output node in the device model.
//!
//! # Modules
//!
//! - [`model`]: the subset of the device object graph that holds video outputs
//! - [`lookup`]: locator to output handle ([`get_video_essence`])
//! - [`parse`]: output handle or path back to a locator ([`parse_video_essence`])
//! - [`error`]: error types
//!
//! # Example
//!
//! ```
//! use video_essence::{get_video_essence, parse_video_essence, DeviceModel};
//! use essence_types::{EssenceLocator, EssenceType};
//!
//! let model = DeviceModel::from_json_str(r#"{
//!     "i_o_module": { "input": [
//!         { "sdi": { "output": { "video": { "raw": { "kwl": "i_o_module.input[0].sdi.output.video" } } } } }
//!     ] }
//! }"#)?;
//!
//! let sdi0 = EssenceLocator::new(EssenceType::Sdi, 0);
//! let essence = get_video_essence(&model, &sdi0)?;
//! assert_eq!(parse_video_essence(essence), sdi0);
//! # Ok::<(), video_essence::EssenceError>(())
//! ```
//!
//! Lookups are synchronous reads of caller-owned data. A missing essence is
//! `None`; only a missing subsystem is an error.

pub mod error;
pub mod lookup;
pub mod model;
pub mod parse;

pub use error::{EssenceError, EssenceResult};
pub use lookup::get_video_essence;
pub use model::{DeviceModel, Table, VideoEssence};
pub use parse::{essence_kwl, parse_kwl, parse_video_essence};

pub use essence_types::{EssenceLocator, EssenceType};
