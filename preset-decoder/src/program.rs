//! Decoded program record
//!
//! [`Program`] is the typed representation of one patch, produced once per
//! decode and immutable afterwards. Field names are stable and mirror the
//! device's parameter guide; serialization exposes every field under its
//! name so report renderers never have to reach into the binary layout.
//!
//! Continuous controls keep their raw integer domain (mostly 0-1023, with
//! 0-127 portamento/velocity controls and 0-200 bipolar percent controls);
//! the display transforms in [`crate::display`] are applied only at render
//! time.

use crate::enums::*;
use crate::layout;
use serde::Serialize;

/// One decoded synthesizer program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    /// Opening magic, `"PROG"` in a well-formed record.
    pub header: String,
    /// Program name, up to 12 ASCII characters.
    pub program_name: String,
    /// Keyboard octave, 0-4 (displayed -2..+2).
    pub octave: u8,
    pub portamento: u8,
    pub key_trig: bool,
    pub voice_mode_depth: u16,
    pub voice_mode_type: VoiceModeType,

    // VCO 1
    pub vco1_wave: VcoWave,
    /// 0-3 = 16', 8', 4', 2'
    pub vco1_octave: u8,
    pub vco1_pitch: u16,
    pub vco1_shape: u16,

    // VCO 2
    pub vco2_wave: VcoWave,
    /// 0-3 = 16', 8', 4', 2'
    pub vco2_octave: u8,
    pub vco2_pitch: u16,
    pub vco2_shape: u16,

    pub oscillator_sync: bool,
    pub ring_mod: bool,
    pub cross_mod_depth: u16,

    // Multi engine
    pub multi_osc_type: MultiOscType,
    pub selected_multi_osc_noise: MultiOscNoise,
    pub selected_multi_osc_vpm: MultiOscVpm,
    /// User oscillator slot, 0-15.
    pub selected_multi_osc_user: u8,
    pub shape_noise: u16,
    pub shape_vpm: u16,
    pub shape_user: u16,
    pub shift_shape_noise: u16,
    pub shift_shape_vpm: u16,
    pub shift_shape_user: u16,

    // Mixer
    pub vco1_level: u16,
    pub vco2_level: u16,
    pub multi_level: u16,

    // Filter
    pub filter_cutoff: u16,
    pub filter_resonance: u16,
    /// 0-2 = 0%, 50%, 100%
    pub filter_cutoff_drive: u8,
    /// 0-2 = 0%, 50%, 100%
    pub filter_cutoff_keyboard_track: u8,

    // Amp EG
    pub amp_eg_attack: u16,
    pub amp_eg_decay: u16,
    pub amp_eg_sustain: u16,
    pub amp_eg_release: u16,

    // EG
    pub eg_attack: u16,
    pub eg_decay: u16,
    pub eg_int: u16,
    pub eg_target: EgTarget,

    // LFO
    pub lfo_wave: VcoWave,
    pub lfo_mode: LfoMode,
    pub lfo_rate: u16,
    pub lfo_int: u16,
    pub lfo_target: LfoTarget,

    // Mod FX
    pub mod_fx_on_off: bool,
    pub mod_fx_type: ModFxType,
    pub mod_fx_chorus: ModFxChorus,
    pub mod_fx_ensemble: ModFxEnsemble,
    pub mod_fx_phaser: ModFxPhaser,
    pub mod_fx_flanger: ModFxFlanger,
    /// User mod FX slot, 0-15.
    pub mod_fx_user: u8,
    pub mod_fx_time: u16,
    pub mod_fx_depth: u16,

    // Delay FX
    pub delay_on_off: bool,
    pub delay_sub_type: DelaySubType,
    pub delay_time: u16,
    pub delay_depth: u16,

    // Reverb FX
    pub reverb_on_off: bool,
    pub reverb_sub_type: ReverbSubType,
    pub reverb_time: u16,
    pub reverb_depth: u16,

    // Bend & joystick
    pub bend_range_plus: u8,
    pub bend_range_minus: u8,
    pub joystick_assign_plus: AssignTarget,
    /// 0-200 = -100%..+100%
    pub joystick_range_plus: u8,
    pub joystick_assign_minus: AssignTarget,
    /// 0-200 = -100%..+100%
    pub joystick_range_minus: u8,

    // CV in
    pub cv_in_mode: CvInMode,
    pub cv_in1_assign: AssignTarget,
    /// 0-200 = -100%..+100%
    pub cv_in1_range: u8,
    pub cv_in2_assign: AssignTarget,
    /// 0-200 = -100%..+100%
    pub cv_in2_range: u8,

    // Tuning
    pub micro_tuning: MicroTuning,
    /// 0-24 = -12..+12 notes
    pub scale_key: u8,
    /// 0-100 = -50..+50 cents
    pub program_tuning: u8,

    // LFO advanced
    pub lfo_key_sync: bool,
    pub lfo_voice_sync: bool,
    pub lfo_target_osc: LfoTargetOsc,

    // Velocity modulation
    pub cutoff_velocity: u8,
    pub amp_velocity: u8,

    // Multi engine advanced
    /// 0-3 = 16', 8', 4', 2'
    pub multi_octave: u8,
    pub multi_routing: MultiRouting,

    pub eg_legato: bool,
    pub portamento_mode: PortamentoMode,
    pub portamento_bpm_sync: bool,

    /// 12-132 = -18.0dB..+6.0dB
    pub program_level: u8,

    // VPM parameters, 0-200 = -100%..+100%
    pub vpm_parameter1_feedback: u8,
    pub vpm_parameter2_noise_depth: u8,
    pub vpm_parameter3_shape_mod_int: u8,
    pub vpm_parameter4_mod_attack: u8,
    pub vpm_parameter5_mod_decay: u8,
    pub vpm_parameter6_mod_key_track: u8,

    // User parameters
    pub user_param1: u8,
    pub user_param2: u8,
    pub user_param3: u8,
    pub user_param4: u8,
    pub user_param5: u8,
    pub user_param6: u8,

    /// Raw packed type byte for user params 5-6 (selectors in bits 0-3).
    pub user_param56_type: u8,
    /// Raw packed type byte for user params 1-4 (selectors in bits 0-7).
    pub user_param1234_type: u8,

    pub user_param1_type: UserParamType,
    pub user_param2_type: UserParamType,
    pub user_param3_type: UserParamType,
    pub user_param4_type: UserParamType,
    pub user_param5_type: UserParamType,
    pub user_param6_type: UserParamType,

    /// 1-25 = -12..+12 notes.
    pub program_transpose: u8,

    // Trailing optional fields; absent in exports that stop short of them.
    pub delay_dry_wet: Option<u16>,
    pub reverb_dry_wet: Option<u16>,
    pub midi_after_touch_assign: Option<AssignTarget>,

    /// Closing magic, `"PRED"` in a well-formed record.
    pub program_end_marker: String,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            header: String::new(),
            program_name: String::new(),
            octave: 0,
            portamento: 0,
            key_trig: false,
            voice_mode_depth: 0,
            voice_mode_type: VoiceModeType::default(),
            vco1_wave: VcoWave::default(),
            vco1_octave: 0,
            vco1_pitch: 0,
            vco1_shape: 0,
            vco2_wave: VcoWave::default(),
            vco2_octave: 0,
            vco2_pitch: 0,
            vco2_shape: 0,
            oscillator_sync: false,
            ring_mod: false,
            cross_mod_depth: 0,
            multi_osc_type: MultiOscType::default(),
            selected_multi_osc_noise: MultiOscNoise::default(),
            selected_multi_osc_vpm: MultiOscVpm::default(),
            selected_multi_osc_user: 0,
            shape_noise: 0,
            shape_vpm: 0,
            shape_user: 0,
            shift_shape_noise: 0,
            shift_shape_vpm: 0,
            shift_shape_user: 0,
            vco1_level: 0,
            vco2_level: 0,
            multi_level: 0,
            filter_cutoff: 0,
            filter_resonance: 0,
            filter_cutoff_drive: 0,
            filter_cutoff_keyboard_track: 0,
            amp_eg_attack: 0,
            amp_eg_decay: 0,
            amp_eg_sustain: 0,
            amp_eg_release: 0,
            eg_attack: 0,
            eg_decay: 0,
            eg_int: 0,
            eg_target: EgTarget::default(),
            lfo_wave: VcoWave::default(),
            lfo_mode: LfoMode::default(),
            lfo_rate: 0,
            lfo_int: 0,
            lfo_target: LfoTarget::default(),
            mod_fx_on_off: false,
            mod_fx_type: ModFxType::default(),
            mod_fx_chorus: ModFxChorus::default(),
            mod_fx_ensemble: ModFxEnsemble::default(),
            mod_fx_phaser: ModFxPhaser::default(),
            mod_fx_flanger: ModFxFlanger::default(),
            mod_fx_user: 0,
            mod_fx_time: 0,
            mod_fx_depth: 0,
            delay_on_off: false,
            delay_sub_type: DelaySubType::default(),
            delay_time: 0,
            delay_depth: 0,
            reverb_on_off: false,
            reverb_sub_type: ReverbSubType::default(),
            reverb_time: 0,
            reverb_depth: 0,
            bend_range_plus: 0,
            bend_range_minus: 0,
            joystick_assign_plus: AssignTarget::default(),
            joystick_range_plus: 0,
            joystick_assign_minus: AssignTarget::default(),
            joystick_range_minus: 0,
            cv_in_mode: CvInMode::default(),
            cv_in1_assign: AssignTarget::default(),
            cv_in1_range: 0,
            cv_in2_assign: AssignTarget::default(),
            cv_in2_range: 0,
            micro_tuning: MicroTuning::default(),
            scale_key: 0,
            program_tuning: 0,
            lfo_key_sync: false,
            lfo_voice_sync: false,
            lfo_target_osc: LfoTargetOsc::default(),
            cutoff_velocity: 0,
            amp_velocity: 0,
            multi_octave: 0,
            multi_routing: MultiRouting::default(),
            eg_legato: false,
            portamento_mode: PortamentoMode::default(),
            portamento_bpm_sync: false,
            // Device init-program values.
            program_level: 72,
            vpm_parameter1_feedback: 100,
            vpm_parameter2_noise_depth: 100,
            vpm_parameter3_shape_mod_int: 100,
            vpm_parameter4_mod_attack: 100,
            vpm_parameter5_mod_decay: 100,
            vpm_parameter6_mod_key_track: 100,
            user_param1: 0,
            user_param2: 0,
            user_param3: 0,
            user_param4: 0,
            user_param5: 0,
            user_param6: 0,
            user_param56_type: 0,
            user_param1234_type: 0,
            user_param1_type: UserParamType::default(),
            user_param2_type: UserParamType::default(),
            user_param3_type: UserParamType::default(),
            user_param4_type: UserParamType::default(),
            user_param5_type: UserParamType::default(),
            user_param6_type: UserParamType::default(),
            program_transpose: 13,
            delay_dry_wet: None,
            reverb_dry_wet: None,
            midi_after_touch_assign: None,
            program_end_marker: String::new(),
        }
    }
}

impl Program {
    /// True when both magic markers carry their expected values.
    ///
    /// The decoder rejects a bad header but reads the end marker leniently,
    /// so this is the place to ask for the strict interpretation of both.
    pub fn is_well_formed(&self) -> bool {
        self.header.as_bytes() == layout::HEADER_MAGIC
            && self.program_end_marker.as_bytes() == layout::END_MARKER
    }
}
