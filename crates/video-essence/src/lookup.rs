//! Locator to output port lookup.

use essence_types::{EssenceLocator, EssenceType};
use tracing::{debug, trace, warn};

use crate::error::{EssenceError, EssenceResult};
use crate::model::{DeviceModel, VideoEssence};

/// Resolves `locator` to the video output it names in `model`.
///
/// Returns `Ok(None)` when the subsystem has no instance at the index,
/// and for types that name no subsystem (`i_o_module`, `N/A`).
///
/// # Errors
///
/// [`EssenceError::MissingSubsystem`] if the locator's subsystem is not
/// part of `model` at all.
pub fn get_video_essence<'m>(
    model: &'m DeviceModel,
    locator: &EssenceLocator,
) -> EssenceResult<Option<&'m VideoEssence>> {
    let index = locator.essence_index;
    let essence = match locator.essence_type {
        EssenceType::VideoMixer => mixer_essence(model, index)?,
        EssenceType::RtpReceiver => rtp_video_rx_essence(model, index)?,
        EssenceType::VideoSignalGenerator => signal_generator_essence(model, index)?,
        EssenceType::Replay => replay_essence(model, index)?,
        EssenceType::Sdi => sdi_output_essence(model, index)?,
        EssenceType::ColorCorrection => color_correction_essence(model, index)?,
        EssenceType::IoModule | EssenceType::NotAvailable => {
            debug!("No video essence lookup for type {}", locator.essence_type);
            return Ok(None);
        }
    };

    if essence.is_none() {
        trace!("No video essence at {}", locator);
    }
    Ok(essence)
}

fn require<'m, T>(subsystem: Option<&'m T>, name: &str) -> EssenceResult<&'m T> {
    subsystem.ok_or_else(|| {
        warn!("Device model has no {} subsystem", name);
        EssenceError::missing_subsystem(name)
    })
}

fn mixer_essence(model: &DeviceModel, index: i64) -> EssenceResult<Option<&VideoEssence>> {
    let mixer = require(model.video_mixer.as_ref(), "video_mixer")?;
    Ok(mixer.instances.row(index).map(|i| &i.output))
}

fn rtp_video_rx_essence(
    model: &DeviceModel,
    index: i64,
) -> EssenceResult<Option<&VideoEssence>> {
    let rtp_receiver = require(model.r_t_p_receiver.as_ref(), "r_t_p_receiver")?;
    Ok(rtp_receiver
        .video_receivers
        .row(index)
        .map(|rx| &rx.media_specific.output.video))
}

fn signal_generator_essence(
    model: &DeviceModel,
    index: i64,
) -> EssenceResult<Option<&VideoEssence>> {
    let generator = require(
        model.video_signal_generator.as_ref(),
        "video_signal_generator",
    )?;
    Ok(generator.instances.row(index).map(|i| &i.output))
}

fn replay_essence(model: &DeviceModel, index: i64) -> EssenceResult<Option<&VideoEssence>> {
    let re_play = require(model.re_play.as_ref(), "re_play")?;
    Ok(re_play.video.players.row(index).map(|p| &p.output.video))
}

fn sdi_output_essence(model: &DeviceModel, index: i64) -> EssenceResult<Option<&VideoEssence>> {
    let io_module = require(model.i_o_module.as_ref(), "i_o_module")?;
    Ok(io_module.input.row(index).map(|i| &i.sdi.output.video))
}

fn color_correction_essence(
    model: &DeviceModel,
    index: i64,
) -> EssenceResult<Option<&VideoEssence>> {
    let color_correction = require(model.color_correction.as_ref(), "color_correction")?;
    Ok(color_correction.cc1d.row(index).map(|cc| &cc.output))
}
