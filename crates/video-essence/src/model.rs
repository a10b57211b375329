//! Shape of the device model read by essence lookups.
//!
//! The device model is owned by the caller and mirrors the control plane
//! object graph. Only the parts that lead to a video output are modelled
//! here; everything else in a snapshot is ignored on load.
//!
//! | Subsystem | Collection | Output |
//! |-----------|------------|--------|
//! | `video_mixer` | `instances` | `.output` |
//! | `r_t_p_receiver` | `video_receivers` | `.media_specific.output.video` |
//! | `video_signal_generator` | `instances` | `.output` |
//! | `re_play` | `video.players` | `.output.video` |
//! | `i_o_module` | `input` | `.sdi.output.video` |
//! | `color_correction` | `cc1d` | `.output` |

use essence_types::EssenceLocator;
use serde::{Deserialize, Serialize};

use crate::error::{EssenceError, EssenceResult};
use crate::lookup;

/// Raw control plane attributes of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raw {
    /// Dotted keyword path of the node (e.g. `video_mixer.instances[0].output`).
    pub kwl: String,
}

/// Handle to one video output port in the device model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEssence {
    pub raw: Raw,
}

impl VideoEssence {
    /// Creates a handle for the output at the given keyword path.
    pub fn new(kwl: impl Into<String>) -> Self {
        Self {
            raw: Raw { kwl: kwl.into() },
        }
    }

    /// Returns the keyword path of this output.
    pub fn kwl(&self) -> &str {
        &self.raw.kwl
    }
}

/// Output block that wraps the video essence one level deeper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOutput {
    pub video: VideoEssence,
}

impl VideoOutput {
    pub fn new(kwl: impl Into<String>) -> Self {
        Self {
            video: VideoEssence::new(kwl),
        }
    }
}

/// Ordered, possibly sparse collection of subsystem rows.
///
/// Serialized as a plain sequence with `null` for empty slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<T>(Vec<Option<T>>);

impl<T> Table<T> {
    pub fn new(rows: Vec<Option<T>>) -> Self {
        Self(rows)
    }

    /// Returns the row at `index`, or `None` for negative indices,
    /// indices past the end, and empty slots.
    pub fn row(&self, index: i64) -> Option<&T> {
        let index = usize::try_from(index).ok()?;
        self.0.get(index)?.as_ref()
    }

    /// Places a row at `index`, padding with empty slots as needed.
    pub fn insert(&mut self, index: usize, row: T) {
        if self.0.len() <= index {
            self.0.resize_with(index + 1, || None);
        }
        self.0[index] = Some(row);
    }

    /// Number of slots, populated or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates populated rows with their indices.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &T)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, row)| row.as_ref().map(|r| (i, r)))
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

/// `video_mixer` subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoMixer {
    pub instances: Table<MixerInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixerInstance {
    pub output: VideoEssence,
}

/// `r_t_p_receiver` subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtpReceiver {
    pub video_receivers: Table<RtpVideoReceiver>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpVideoReceiver {
    pub media_specific: RtpMediaSpecific,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpMediaSpecific {
    pub output: VideoOutput,
}

/// `video_signal_generator` subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSignalGenerator {
    pub instances: Table<SignalGeneratorInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalGeneratorInstance {
    pub output: VideoEssence,
}

/// `re_play` subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Replay {
    pub video: ReplayVideo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayVideo {
    pub players: Table<ReplayPlayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayPlayer {
    pub output: VideoOutput,
}

/// `i_o_module` subsystem. Its inputs carry the SDI essences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoModule {
    pub input: Table<IoInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoInput {
    pub sdi: SdiInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdiInput {
    pub output: VideoOutput,
}

/// `color_correction` subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorCorrection {
    pub cc1d: Table<Cc1d>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cc1d {
    pub output: VideoEssence,
}

/// Video-relevant subset of a device's object graph.
///
/// A `None` subsystem is not present on this device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceModel {
    pub video_mixer: Option<VideoMixer>,
    pub r_t_p_receiver: Option<RtpReceiver>,
    pub video_signal_generator: Option<VideoSignalGenerator>,
    pub re_play: Option<Replay>,
    pub i_o_module: Option<IoModule>,
    pub color_correction: Option<ColorCorrection>,
}

impl DeviceModel {
    /// Loads a model snapshot from JSON.
    pub fn from_json_str(s: &str) -> EssenceResult<Self> {
        serde_json::from_str(s).map_err(|e| EssenceError::snapshot("json", e.to_string()))
    }

    /// Loads a model snapshot from YAML.
    pub fn from_yaml_str(s: &str) -> EssenceResult<Self> {
        serde_yaml::from_str(s).map_err(|e| EssenceError::snapshot("yaml", e.to_string()))
    }

    /// Looks up the output for `locator`. See [`lookup::get_video_essence`].
    pub fn video_essence(&self, locator: &EssenceLocator) -> EssenceResult<Option<&VideoEssence>> {
        lookup::get_video_essence(self, locator)
    }
}
