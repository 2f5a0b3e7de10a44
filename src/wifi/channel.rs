use crate::error::{WifiError, WifiResult};

/// 802.11 channel assignment for a center frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyChannelMap {
    pub band: &'static str,
    pub channel: u32,
    pub frequency_mhz: u32,
}

impl FrequencyChannelMap {
    pub const fn new(channel: u32, frequency_mhz: u32) -> Self {
        let band = if frequency_mhz > 5000 { "5GHz" } else { "2.4GHz" };
        Self {
            band,
            channel,
            frequency_mhz,
        }
    }
}

const fn ch(channel: u32, frequency_mhz: u32) -> FrequencyChannelMap {
    FrequencyChannelMap::new(channel, frequency_mhz)
}

static CHANNELS: [FrequencyChannelMap; 39] = [
    // 2.4 GHz
    ch(1, 2412),
    ch(2, 2417),
    ch(3, 2422),
    ch(4, 2427),
    ch(5, 2432),
    ch(6, 2437),
    ch(7, 2442),
    ch(8, 2447),
    ch(9, 2452),
    ch(10, 2457),
    ch(11, 2462),
    ch(12, 2467),
    ch(13, 2472),
    ch(14, 2484),
    // 5 GHz
    ch(36, 5180),
    ch(40, 5200),
    ch(44, 5220),
    ch(48, 5240),
    ch(52, 5260),
    ch(56, 5280),
    ch(60, 5300),
    ch(64, 5320),
    ch(100, 5500),
    ch(104, 5520),
    ch(108, 5540),
    ch(112, 5560),
    ch(116, 5580),
    ch(120, 5600),
    ch(124, 5620),
    ch(128, 5640),
    ch(132, 5660),
    ch(136, 5680),
    ch(140, 5700),
    ch(144, 5720),
    ch(149, 5745),
    ch(153, 5765),
    ch(157, 5785),
    ch(161, 5805),
    ch(165, 5825),
];

/// Look up the channel for a frequency reported in kHz.
/// The match is exact on whole MHz.
pub fn resolve(frequency_khz: u32) -> WifiResult<FrequencyChannelMap> {
    let mhz = frequency_khz / 1000;
    CHANNELS
        .iter()
        .find(|m| m.frequency_mhz == mhz)
        .copied()
        .ok_or(WifiError::UnknownFrequency { khz: frequency_khz })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_table_entry_resolves_to_itself() {
        for entry in &CHANNELS {
            assert_eq!(resolve(entry.frequency_mhz * 1000), Ok(*entry));
        }
    }

    #[test]
    fn channels_and_frequencies_are_unique() {
        let channels: HashSet<_> = CHANNELS.iter().map(|m| m.channel).collect();
        let freqs: HashSet<_> = CHANNELS.iter().map(|m| m.frequency_mhz).collect();
        assert_eq!(channels.len(), CHANNELS.len());
        assert_eq!(freqs.len(), CHANNELS.len());
    }

    #[test]
    fn band_is_five_ghz_only_above_5000_mhz() {
        for entry in &CHANNELS {
            let expected = if entry.frequency_mhz > 5000 { "5GHz" } else { "2.4GHz" };
            assert_eq!(entry.band, expected);
        }
        assert_eq!(FrequencyChannelMap::new(0, 5000).band, "2.4GHz");
        assert_eq!(FrequencyChannelMap::new(0, 5001).band, "5GHz");
    }

    #[test]
    fn known_channels() {
        let six = resolve(2_437_000).unwrap();
        assert_eq!((six.channel, six.band), (6, "2.4GHz"));
        let thirty_six = resolve(5_180_000).unwrap();
        assert_eq!((thirty_six.channel, thirty_six.band), (36, "5GHz"));
        assert_eq!(resolve(2_484_000).unwrap().channel, 14);
    }

    #[test]
    fn sub_mhz_remainder_is_truncated() {
        assert_eq!(resolve(2_437_999).unwrap().channel, 6);
    }

    #[test]
    fn unknown_frequencies_fail() {
        for khz in [0, 2_413_000, 5_000_000, 5_955_000, 60_480_000] {
            assert_eq!(resolve(khz), Err(WifiError::UnknownFrequency { khz }));
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        assert_eq!(resolve(5_745_000), resolve(5_745_000));
        assert_eq!(resolve(1), resolve(1));
    }
}
