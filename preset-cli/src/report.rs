//! Report generation
//!
//! Renders a decoded program either as the panel-style text dump (one
//! `LABEL: value` line per control, knob values run through the display
//! transforms) or as pretty-printed JSON with stable field names.

use preset_decoder::display;
use preset_decoder::enums::MultiOscType;
use preset_decoder::Program;

/// Render the panel-style text report.
pub fn text_report(p: &Program) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(format!("PROGRAM NAME: {}", p.program_name));
    line(format!("OCTAVE: {}", i16::from(p.octave) - 2));
    line(format!("PORTAMENTO: {}", p.portamento));
    line(format!("KEY TRIG: {}", display::on_off(p.key_trig)));
    line(format!(
        "VOICE MODE DEPTH: {}",
        display::voice_mode_depth_label(p.voice_mode_type, p.voice_mode_depth)
    ));
    line(format!("VOICE MODE TYPE: {}", p.voice_mode_type));

    line(format!("VCO 1 WAVE: {}", p.vco1_wave));
    line(format!("VCO 1 OCTAVE: {}", display::octave_feet(p.vco1_octave)));
    line(format!("VCO 1 PITCH: {}", display::pitch_cents(p.vco1_pitch)));
    line(format!("VCO 1 SHAPE: {}", p.vco1_shape));

    line(format!("VCO 2 WAVE: {}", p.vco2_wave));
    line(format!("VCO 2 OCTAVE: {}", display::octave_feet(p.vco2_octave)));
    line(format!("VCO 2 PITCH: {}", display::pitch_cents(p.vco2_pitch)));
    line(format!("VCO 2 SHAPE: {}", p.vco2_shape));

    line(format!("SYNC: {}", display::on_off(p.oscillator_sync)));
    line(format!("RING: {}", display::on_off(p.ring_mod)));
    line(format!("CROSS MOD DEPTH: {}", p.cross_mod_depth));

    line(format!("MULTI TYPE: {}", p.multi_osc_type));
    match p.multi_osc_type {
        MultiOscType::Noise => {
            line(format!("SELECT NOISE: {}", p.selected_multi_osc_noise));
        }
        MultiOscType::Vpm => {
            line(format!("SELECT VPM: {}", p.selected_multi_osc_vpm));
        }
        MultiOscType::User => {
            line(format!("SELECT USER: USER{}", p.selected_multi_osc_user + 1));
        }
    }

    line(format!("VCO 1 LEVEL: {}", p.vco1_level));
    line(format!("VCO 2 LEVEL: {}", p.vco2_level));
    line(format!("MULTI LEVEL: {}", p.multi_level));

    line(format!("CUTOFF: {}", p.filter_cutoff));
    line(format!("RESONANCE: {}", p.filter_resonance));
    line(format!(
        "CUTOFF DRIVE: {}",
        display::percent_step(p.filter_cutoff_drive)
    ));
    line(format!(
        "CUTOFF KEYBOARD TRACK: {}",
        display::percent_step(p.filter_cutoff_keyboard_track)
    ));

    line(format!("AMP EG ATTACK: {}", p.amp_eg_attack));
    line(format!("AMP EG DECAY: {}", p.amp_eg_decay));
    line(format!("AMP EG SUSTAIN: {}", p.amp_eg_sustain));
    line(format!("AMP EG RELEASE: {}", p.amp_eg_release));

    line(format!("EG ATTACK: {}", p.eg_attack));
    line(format!("EG DECAY: {}", p.eg_decay));
    line(format!("EG INT: {:.1}%", display::eg_int_percent(p.eg_int)));
    line(format!("EG TARGET: {}", p.eg_target));

    line(format!("LFO WAVE: {}", p.lfo_wave));
    line(format!("LFO MODE: {}", p.lfo_mode));
    line(format!(
        "LFO RATE: {}",
        display::lfo_rate_label(p.lfo_rate, p.lfo_mode)
    ));
    line(format!("LFO INT: {}", p.lfo_int));
    line(format!("LFO TARGET: {}", p.lfo_target));

    line(format!("MOD FX ON OFF: {}", display::on_off(p.mod_fx_on_off)));
    line(format!("MOD FX TYPE: {}", p.mod_fx_type));
    line(format!("MOD FX TIME: {}", p.mod_fx_time));
    line(format!("MOD FX DEPTH: {}", p.mod_fx_depth));

    line(format!("DELAY FX ON OFF: {}", display::on_off(p.delay_on_off)));
    line(format!("DELAY SUB TYPE: {}", p.delay_sub_type));
    line(format!("DELAY TIME: {}", p.delay_time));
    line(format!("DELAY DEPTH: {}", p.delay_depth));

    line(format!("REVERB FX ON OFF: {}", display::on_off(p.reverb_on_off)));
    line(format!("REVERB SUB TYPE: {}", p.reverb_sub_type));
    line(format!("REVERB TIME: {}", p.reverb_time));
    line(format!("REVERB DEPTH: {}", p.reverb_depth));

    line(format!(
        "PROGRAM LEVEL: {}",
        display::program_level_db(p.program_level)
    ));

    out
}

/// Render the program as pretty-printed JSON.
pub fn json_report(p: &Program) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(p)
}
