//! Essence type tags and the (type, index) locator record.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of subsystem a video essence belongs to.
///
/// The serialized form is the output tag used by the rest of the
/// video-management stack (`video_mixer`, `sdi`, `N/A`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EssenceType {
    /// Video mixer instance output.
    #[serde(rename = "video_mixer")]
    VideoMixer,
    /// RTP video receiver output.
    #[serde(rename = "r_t_p_receiver")]
    RtpReceiver,
    /// Test signal generator output.
    #[serde(rename = "video_signal_generator")]
    VideoSignalGenerator,
    /// Replay player output.
    #[serde(rename = "re_play")]
    Replay,
    /// SDI input, addressed through the I/O module.
    #[serde(rename = "sdi")]
    Sdi,
    /// 1D colour correction output.
    #[serde(rename = "color_correction")]
    ColorCorrection,
    /// Raw I/O module tag. Never produced by path parsing, which
    /// normalizes it to [`EssenceType::Sdi`].
    #[serde(rename = "i_o_module")]
    IoModule,
    /// No essence.
    #[default]
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl EssenceType {
    /// Every essence type, in declaration order.
    pub const ALL: [EssenceType; 8] = [
        EssenceType::VideoMixer,
        EssenceType::RtpReceiver,
        EssenceType::VideoSignalGenerator,
        EssenceType::Replay,
        EssenceType::Sdi,
        EssenceType::ColorCorrection,
        EssenceType::IoModule,
        EssenceType::NotAvailable,
    ];

    /// Returns the output tag of this type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EssenceType::VideoMixer => "video_mixer",
            EssenceType::RtpReceiver => "r_t_p_receiver",
            EssenceType::VideoSignalGenerator => "video_signal_generator",
            EssenceType::Replay => "re_play",
            EssenceType::Sdi => "sdi",
            EssenceType::ColorCorrection => "color_correction",
            EssenceType::IoModule => "i_o_module",
            EssenceType::NotAvailable => "N/A",
        }
    }

    /// Maps the leading segment of a device path to an essence type.
    ///
    /// `i_o_module` paths describe SDI essences and map to
    /// [`EssenceType::Sdi`]. `sdi` itself is not a path segment.
    pub fn from_source_tag(tag: &str) -> Option<Self> {
        match tag {
            "video_mixer" => Some(EssenceType::VideoMixer),
            "r_t_p_receiver" => Some(EssenceType::RtpReceiver),
            "video_signal_generator" => Some(EssenceType::VideoSignalGenerator),
            "re_play" => Some(EssenceType::Replay),
            "i_o_module" => Some(EssenceType::Sdi),
            "color_correction" => Some(EssenceType::ColorCorrection),
            _ => None,
        }
    }

    /// Returns the device path segment that owns essences of this type.
    pub const fn source_tag(&self) -> Option<&'static str> {
        match self {
            EssenceType::VideoMixer => Some("video_mixer"),
            EssenceType::RtpReceiver => Some("r_t_p_receiver"),
            EssenceType::VideoSignalGenerator => Some("video_signal_generator"),
            EssenceType::Replay => Some("re_play"),
            EssenceType::Sdi => Some("i_o_module"),
            EssenceType::ColorCorrection => Some("color_correction"),
            EssenceType::IoModule | EssenceType::NotAvailable => None,
        }
    }

    /// Returns true if a device model lookup can dispatch on this type.
    pub const fn is_resolvable(&self) -> bool {
        self.source_tag().is_some()
    }
}

impl fmt::Display for EssenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EssenceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EssenceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownEssenceType(s.to_string()))
    }
}

/// Identifies one video essence by subsystem type and instance index.
///
/// An index of `-1` means the essence is unknown: either the type is
/// [`EssenceType::NotAvailable`] or no index could be read from the
/// source path.
///
/// # Examples
///
/// ```
/// use essence_types::{EssenceLocator, EssenceType};
///
/// let loc = EssenceLocator::new(EssenceType::Sdi, 3);
/// assert!(loc.is_available());
/// assert_eq!(loc.index(), Some(3));
/// assert_eq!(loc.to_string(), "sdi[3]");
///
/// assert!(!EssenceLocator::NOT_AVAILABLE.is_available());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssenceLocator {
    pub essence_type: EssenceType,
    pub essence_index: i64,
}

impl EssenceLocator {
    /// Index value meaning "no such essence".
    pub const UNRESOLVED_INDEX: i64 = -1;

    /// The `{N/A, -1}` sentinel.
    pub const NOT_AVAILABLE: EssenceLocator = EssenceLocator {
        essence_type: EssenceType::NotAvailable,
        essence_index: Self::UNRESOLVED_INDEX,
    };

    pub const fn new(essence_type: EssenceType, essence_index: i64) -> Self {
        EssenceLocator {
            essence_type,
            essence_index,
        }
    }

    /// A locator whose type is known but whose index could not be read.
    pub const fn unresolved(essence_type: EssenceType) -> Self {
        Self::new(essence_type, Self::UNRESOLVED_INDEX)
    }

    /// Returns true if this locator can name an essence at all.
    pub const fn is_available(&self) -> bool {
        !matches!(self.essence_type, EssenceType::NotAvailable) && self.essence_index >= 0
    }

    /// Returns the index as a row position, or `None` if it is negative.
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.essence_index).ok()
    }
}

impl Default for EssenceLocator {
    fn default() -> Self {
        Self::NOT_AVAILABLE
    }
}

impl fmt::Display for EssenceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.essence_type, self.essence_index)
    }
}

impl FromStr for EssenceLocator {
    type Err = ParseError;

    /// Parses the `type[index]` form produced by `Display`.
    ///
    /// The index is `-1` or a row position, and `N/A` only pairs with `-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, rest) = s
            .split_once('[')
            .ok_or_else(|| ParseError::InvalidLocator(s.to_string()))?;
        let index = rest
            .strip_suffix(']')
            .ok_or_else(|| ParseError::InvalidLocator(s.to_string()))?;

        let essence_type: EssenceType = tag.parse()?;
        let essence_index: i64 = index
            .parse()
            .map_err(|_| ParseError::InvalidEssenceIndex(index.to_string()))?;

        let unresolved = essence_index == Self::UNRESOLVED_INDEX;
        if essence_index < Self::UNRESOLVED_INDEX
            || (essence_type == EssenceType::NotAvailable && !unresolved)
        {
            return Err(ParseError::InvalidEssenceIndex(index.to_string()));
        }

        Ok(EssenceLocator::new(essence_type, essence_index))
    }
}
