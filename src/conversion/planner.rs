//! Target bitrate calculation.

/// Calculate the target bitrate for a transcode.
///
/// The probed source bitrate is scaled by the reduction factor and floored
/// to whole Mbps. No lower bound is enforced; a very low source bitrate can
/// plan to 0 Mbps, which the encoder will reject at invocation time.
pub fn target_bitrate(original_mbps: f64, reduction_factor: f64) -> u64 {
    (original_mbps * reduction_factor).floor() as u64
}
