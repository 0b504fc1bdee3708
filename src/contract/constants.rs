//! On-chain deployment constants.

/// The hub proxy contract on the main deployment.
pub const HUB_PROXY_ADDRESS: &str = "0xDb46d1Dc155634FbC732f92E853b10B288AD5a1d";
