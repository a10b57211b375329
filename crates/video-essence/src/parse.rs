//! Conversion between device keyword paths and essence locators.
//!
//! A keyword path ("kwl") is the dotted path of a node in the device
//! model, e.g. `r_t_p_receiver.video_receivers[2].media_specific.output.video`.
//! The leading segment names the subsystem and the rest carries the
//! instance index.

use essence_types::{EssenceLocator, EssenceType};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::model::VideoEssence;

/// Splits a path at its first dot. Neither side crosses a line terminator
/// (`\n`, `\r`, U+2028, U+2029): one before the first dot makes the whole
/// path unparseable, and one in the suffix ends it.
static KWL_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\n\r\x{2028}\x{2029}]*?)\.([^\n\r\x{2028}\x{2029}]*)")
        .expect("Invalid regex pattern")
});

/// First run of digits in a path suffix.
static DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)").expect("Invalid regex pattern"));

/// Bracketed 1D colour correction index.
static CC1D_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"cc1d\[([0-9]+)\][^\n\r\x{2028}\x{2029}]output").expect("Invalid regex pattern")
});

/// Returns the pattern whose first group holds the index for `essence_type`.
fn index_pattern(essence_type: EssenceType) -> Option<&'static Regex> {
    match essence_type {
        EssenceType::ColorCorrection => Some(&*CC1D_RE),
        EssenceType::VideoMixer
        | EssenceType::RtpReceiver
        | EssenceType::VideoSignalGenerator
        | EssenceType::Replay
        | EssenceType::Sdi => Some(&*DIGITS_RE),
        EssenceType::IoModule | EssenceType::NotAvailable => None,
    }
}

/// Parses a video essence handle back into its locator.
///
/// Returns `{N/A, -1}` when there is no essence.
pub fn parse_video_essence(essence: Option<&VideoEssence>) -> EssenceLocator {
    match essence {
        Some(essence) => parse_kwl(essence.kwl()),
        None => EssenceLocator::NOT_AVAILABLE,
    }
}

/// Parses a keyword path into a locator.
///
/// - no dot, or an unknown leading segment: `{N/A, -1}`
/// - `i_o_module.*` paths resolve to `sdi`
/// - no index in the suffix: `{type, -1}`
///
/// # Example
///
/// ```
/// use essence_types::{EssenceLocator, EssenceType};
/// use video_essence::parse_kwl;
///
/// assert_eq!(parse_kwl("i_o_module.3"), EssenceLocator::new(EssenceType::Sdi, 3));
/// assert_eq!(
///     parse_kwl("color_correction.cc1d[3].output"),
///     EssenceLocator::new(EssenceType::ColorCorrection, 3)
/// );
/// assert_eq!(parse_kwl("audio_mixer.1"), EssenceLocator::NOT_AVAILABLE);
/// ```
pub fn parse_kwl(kwl: &str) -> EssenceLocator {
    let Some(caps) = KWL_SPLIT_RE.captures(kwl) else {
        return EssenceLocator::NOT_AVAILABLE;
    };
    let (Some(tag), Some(suffix)) = (caps.get(1), caps.get(2)) else {
        return EssenceLocator::NOT_AVAILABLE;
    };

    let Some(essence_type) = EssenceType::from_source_tag(tag.as_str()) else {
        debug!("No video essence mapping for path type '{}'", tag.as_str());
        return EssenceLocator::NOT_AVAILABLE;
    };

    let index = index_pattern(essence_type)
        .and_then(|re| re.captures(suffix.as_str()))
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(EssenceLocator::UNRESOLVED_INDEX);

    EssenceLocator::new(essence_type, index)
}

/// Returns the canonical keyword path of the output `locator` names.
///
/// `None` for types with no subsystem and for negative indices. Parsing
/// the result with [`parse_kwl`] yields `locator` again.
pub fn essence_kwl(locator: &EssenceLocator) -> Option<String> {
    let i = locator.index()?;
    let kwl = match locator.essence_type {
        EssenceType::VideoMixer => format!("video_mixer.instances[{i}].output"),
        EssenceType::RtpReceiver => {
            format!("r_t_p_receiver.video_receivers[{i}].media_specific.output.video")
        }
        EssenceType::VideoSignalGenerator => {
            format!("video_signal_generator.instances[{i}].output")
        }
        EssenceType::Replay => format!("re_play.video.players[{i}].output.video"),
        EssenceType::Sdi => format!("i_o_module.input[{i}].sdi.output.video"),
        EssenceType::ColorCorrection => format!("color_correction.cc1d[{i}].output"),
        EssenceType::IoModule | EssenceType::NotAvailable => return None,
    };
    Some(kwl)
}
