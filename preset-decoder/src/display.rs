//! Display-value transforms
//!
//! Pure functions mapping raw knob integers to the strings the hardware
//! shows on its display. The decoded [`crate::program::Program`] always
//! stores the raw value; these transforms are applied at render time only,
//! and every one of them is independently callable by report generators.
//!
//! The piecewise maps are continuous at their shared edges, so the band
//! boundaries below can be non-overlapping without changing any output.

use crate::enums::{LfoMode, VoiceModeType};

/// Arpeggiator pattern bands for the VOICE MODE DEPTH knob.
const ARP_BANDS: [(u16, u16, &str); 13] = [
    (0, 78, "MANUAL 1"),
    (79, 156, "MANUAL 2"),
    (157, 234, "RISE 1"),
    (235, 312, "RISE 2"),
    (313, 390, "FALL 1"),
    (391, 468, "FALL 2"),
    (469, 546, "RISE FALL 1"),
    (547, 624, "RISE FALL 2"),
    (625, 702, "POLY 1"),
    (703, 780, "POLY 2"),
    (781, 858, "RANDOM 1"),
    (859, 936, "RANDOM 2"),
    (937, 1023, "RANDOM 3"),
];

/// Chord quality bands for the VOICE MODE DEPTH knob.
const CHORD_BANDS: [(u16, u16, &str); 14] = [
    (0, 73, "5th"),
    (74, 146, "sus2"),
    (147, 219, "m"),
    (220, 292, "Maj"),
    (293, 365, "sus4"),
    (366, 438, "m7"),
    (439, 511, "7"),
    (512, 585, "7sus4"),
    (586, 658, "Maj7"),
    (659, 731, "aug"),
    (732, 804, "dim"),
    (805, 877, "m7b5"),
    (878, 950, "mMaj7"),
    (951, 1023, "Maj7b5"),
];

/// Musical-fraction bands for the LFO RATE knob in BPM-sync mode.
const BPM_RATE_BANDS: [(u16, u16, &str); 16] = [
    (0, 63, "4"),
    (64, 127, "2"),
    (128, 191, "1"),
    (192, 255, "3/4"),
    (256, 319, "1/2"),
    (320, 383, "3/8"),
    (384, 447, "1/3"),
    (448, 511, "1/4"),
    (512, 575, "3/16"),
    (576, 639, "1/6"),
    (640, 703, "1/8"),
    (704, 767, "1/12"),
    (768, 831, "1/16"),
    (832, 895, "1/24"),
    (896, 959, "1/32"),
    (960, 1023, "1/36"),
];

fn band_label(bands: &'static [(u16, u16, &'static str)], value: u16) -> Option<&'static str> {
    bands
        .iter()
        .find(|&&(lo, hi, _)| lo <= value && value <= hi)
        .map(|&(_, _, label)| label)
}

/// Convert a 0-1023 pitch knob value to a signed cents display string.
///
/// Nine-segment piecewise-linear map: saturated at +/-1200C, flat around
/// center, fine 1C/step bands next to center, 2C/step beyond, and a coarse
/// 944/352 cents-per-step slope in the outer bands.
pub fn pitch_cents(value: u16) -> String {
    let v = i64::from(value);
    match v {
        0..=4 => "-1200C".to_string(),
        5..=356 => format!("{:.0}C", (v - 356) as f64 * 944.0 / 352.0 - 256.0),
        357..=476 => format!("{}C", (v - 476) * 2 - 16),
        477..=491 => format!("{}C", v - 492),
        492..=532 => "0C".to_string(),
        533..=548 => format!("{}C", v - 532),
        549..=668 => format!("{}C", (v - 548) * 2 + 16),
        669..=1019 => format!("{:.0}C", (v - 668) as f64 * 944.0 / 352.0 + 256.0),
        1020..=1023 => "1200C".to_string(),
        _ => format!("{}C", v),
    }
}

/// Convert a 0-1023 EG INT knob value to a percentage in [-100, 100].
///
/// Quadratic easing on each side of the flat center band, saturating at the
/// extremes. Monotonically non-decreasing over the whole knob range.
pub fn eg_int_percent(value: u16) -> f64 {
    let v = i64::from(value);
    match v {
        0..=11 => -100.0,
        12..=491 => -(((492 - v) * (492 - v) * 4641 * 100) as f64) / (0x4000_0000 as f64),
        492..=532 => 0.0,
        533..=1012 => (((v - 532) * (v - 532) * 4641 * 100) as f64) / (0x4000_0000 as f64),
        1013..=1023 => 100.0,
        _ => 0.0,
    }
}

/// Label the VOICE MODE DEPTH knob according to the active voice mode.
///
/// ARP and CHORD modes step through named bands, UNISON shows a detune in
/// cents, POLY switches to duophonic detune past the center; any other mode
/// shows the raw value.
pub fn voice_mode_depth_label(mode: VoiceModeType, value: u16) -> String {
    match mode {
        VoiceModeType::Arp => band_label(&ARP_BANDS, value)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        VoiceModeType::Chord => band_label(&CHORD_BANDS, value)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        VoiceModeType::Unison => {
            format!("{:.1} Cent", f64::from(value) * 50.0 / 1023.0)
        }
        VoiceModeType::Poly => {
            if value < 256 {
                "Poly".to_string()
            } else {
                format!("Duo {:.1}", f64::from(value) * 50.0 / 1023.0)
            }
        }
        _ => value.to_string(),
    }
}

/// Label the LFO RATE knob: a musical fraction in BPM-sync mode, the raw
/// value otherwise.
pub fn lfo_rate_label(value: u16, mode: LfoMode) -> String {
    if mode == LfoMode::Bpm {
        if let Some(label) = band_label(&BPM_RATE_BANDS, value) {
            return label.to_string();
        }
    }
    value.to_string()
}

/// Convert the 12-132 PROGRAM LEVEL value to a decibel string
/// (-18.0dB..+6.0dB, positive values carry an explicit sign).
pub fn program_level_db(value: u8) -> String {
    let db = (f64::from(value) - 12.0) / 5.0 - 18.0;
    let sign = if db > 0.0 { "+" } else { "" };
    format!("{}{:.1}dB", sign, db)
}

/// Convert a 0-200 bipolar control value to a -100%..+100% string.
/// Positive values carry an explicit sign, zero carries none.
pub fn bipolar_percent(value: u8) -> String {
    let percent = i32::from(value) - 100;
    let sign = if percent > 0 { "+" } else { "" };
    format!("{}{}%", sign, percent)
}

/// Oscillator octave footage label (0-3 = 16', 8', 4', 2').
pub fn octave_feet(value: u8) -> &'static str {
    match value {
        0 => "16'",
        1 => "8'",
        2 => "4'",
        3 => "2'",
        _ => "--",
    }
}

/// Three-step drive / keyboard-track label (0-2 = 0%, 50%, 100%).
pub fn percent_step(value: u8) -> &'static str {
    match value {
        0 => "0%",
        1 => "50%",
        2 => "100%",
        _ => "--",
    }
}

/// Panel-style On/Off label for switch fields.
pub fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}
