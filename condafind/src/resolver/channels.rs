//! Channel priority policy.

use tracing::debug;

/// Known distribution channels, in default priority order.
pub const DEFAULT_CHANNELS: [&str; 4] = ["conda-forge", "anaconda", "main", "auto"];

/// Builds the effective allowed channel set.
///
/// When `preferred` names a member of [`DEFAULT_CHANNELS`] it is
/// prepended to the default set. The resulting duplicate is intentional:
/// it only affects iteration order over candidates, not the membership
/// test, and de-duplicating would change which probe an engineer sees in
/// the logs. A preferred channel outside the default set is ignored.
pub fn priority_channels(preferred: Option<&str>) -> Vec<String> {
    let defaults = DEFAULT_CHANNELS.iter().map(|c| c.to_string());

    match preferred {
        Some(channel) if DEFAULT_CHANNELS.contains(&channel) => {
            std::iter::once(channel.to_string()).chain(defaults).collect()
        }
        Some(channel) => {
            debug!(channel, "preferred channel not in the known set, using defaults");
            defaults.collect()
        }
        None => defaults.collect(),
    }
}
