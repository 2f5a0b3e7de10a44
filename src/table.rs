//! Tabular survey output

use crate::config;
use crate::wifi::SurveyedNetwork;

/// Order by frequency, then strongest first, then SSID
pub fn sort_networks(networks: &mut [SurveyedNetwork]) {
    networks.sort_by(|a, b| {
        let (a, b) = (&a.network, &b.network);
        a.frequency_khz
            .cmp(&b.frequency_khz)
            .then(b.signal_strength_dbm.cmp(&a.signal_strength_dbm))
            .then_with(|| a.ssid.cmp(&b.ssid))
    });
}

fn row(entry: &SurveyedNetwork) -> [String; 4] {
    let (band, channel) = match &entry.channel {
        Ok(map) => (map.band.to_string(), map.channel.to_string()),
        Err(_) => (
            config::UNKNOWN_CELL.to_string(),
            config::UNKNOWN_CELL.to_string(),
        ),
    };
    [
        band,
        channel,
        format!("{}dBm", entry.network.signal_strength_dbm),
        entry.network.ssid_lossy(),
    ]
}

/// Render the survey as left-aligned columns, each padded to its widest cell
pub fn render_table(networks: &[SurveyedNetwork]) -> String {
    let mut rows = vec![config::TABLE_HEADINGS.map(String::from)];
    rows.extend(networks.iter().map(row));

    let mut widths = [0usize; 4];
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for cells in &rows {
        for (width, cell) in widths.iter().zip(cells) {
            out.push_str(&format!(
                "{:<width$}",
                cell,
                width = width + config::COLUMN_PADDING
            ));
        }
        out.push('\n');
    }
    out
}
