//! Program record decoder
//!
//! Decodes the fixed-layout binary record into a [`Program`] in one linear
//! pass. The primary window is strict: a short buffer, a bad header magic or
//! an out-of-domain code in a strict enumerated field fails the whole
//! decode, and no partial record is ever returned. The dry/wet and
//! after-touch trailer is opportunistic: those fields may legitimately be
//! absent in shorter firmware exports, so they decode to `None` instead of
//! failing.

use crate::enums::*;
use crate::layout::{self, Cursor};
use crate::program::Program;
use crate::types::{DecodeError, Result};

/// Decode one raw program record.
///
/// # Errors
/// * [`DecodeError::TooShort`] when `data` is under 160 bytes
/// * [`DecodeError::MalformedLayout`] when the fixed window cannot be
///   consumed (bad header magic, non-ASCII string field)
/// * [`DecodeError::UnknownEnumValue`] when a strict enumerated field holds
///   a code outside its domain
pub fn decode(data: &[u8]) -> Result<Program> {
    if data.len() < layout::PROGRAM_SIZE {
        return Err(DecodeError::TooShort {
            len: data.len(),
            min: layout::PROGRAM_SIZE,
        });
    }

    let mut cur = Cursor::new(data);
    let mut p = Program::default();

    let magic = cur.bytes(layout::HEADER_MAGIC.len())?;
    if magic != layout::HEADER_MAGIC {
        return Err(DecodeError::MalformedLayout(format!(
            "bad header magic {:02X?}, expected \"PROG\"",
            magic
        )));
    }
    p.header = String::from_utf8_lossy(magic).into_owned();

    p.program_name = cur.ascii(layout::NAME_LEN)?;
    p.octave = cur.u8()?;
    p.portamento = cur.u8()?;
    p.key_trig = cur.bool()?;
    p.voice_mode_depth = cur.u16_le()?;
    p.voice_mode_type = enum_field("voice_mode_type", cur.u8()?, VoiceModeType::from_raw)?;

    // VCO 1
    p.vco1_wave = enum_field("vco1_wave", cur.u8()?, VcoWave::from_raw)?;
    p.vco1_octave = cur.u8()?;
    p.vco1_pitch = cur.u16_le()?;
    p.vco1_shape = cur.u16_le()?;

    // VCO 2
    p.vco2_wave = enum_field("vco2_wave", cur.u8()?, VcoWave::from_raw)?;
    p.vco2_octave = cur.u8()?;
    p.vco2_pitch = cur.u16_le()?;
    p.vco2_shape = cur.u16_le()?;

    p.oscillator_sync = cur.bool()?;
    p.ring_mod = cur.bool()?;
    p.cross_mod_depth = cur.u16_le()?;

    // Multi engine
    p.multi_osc_type = enum_field("multi_osc_type", cur.u8()?, MultiOscType::from_raw)?;
    p.selected_multi_osc_noise = enum_field(
        "selected_multi_osc_noise",
        cur.u8()?,
        MultiOscNoise::from_raw,
    )?;
    p.selected_multi_osc_vpm =
        enum_field("selected_multi_osc_vpm", cur.u8()?, MultiOscVpm::from_raw)?;
    p.selected_multi_osc_user = cur.u8()?;
    p.shape_noise = cur.u16_le()?;
    p.shape_vpm = cur.u16_le()?;
    p.shape_user = cur.u16_le()?;
    p.shift_shape_noise = cur.u16_le()?;
    p.shift_shape_vpm = cur.u16_le()?;
    p.shift_shape_user = cur.u16_le()?;

    // Mixer
    p.vco1_level = cur.u16_le()?;
    p.vco2_level = cur.u16_le()?;
    p.multi_level = cur.u16_le()?;

    // Filter
    p.filter_cutoff = cur.u16_le()?;
    p.filter_resonance = cur.u16_le()?;
    p.filter_cutoff_drive = cur.u8()?;
    p.filter_cutoff_keyboard_track = cur.u8()?;

    // Amp EG
    p.amp_eg_attack = cur.u16_le()?;
    p.amp_eg_decay = cur.u16_le()?;
    p.amp_eg_sustain = cur.u16_le()?;
    p.amp_eg_release = cur.u16_le()?;

    // EG
    p.eg_attack = cur.u16_le()?;
    p.eg_decay = cur.u16_le()?;
    p.eg_int = cur.u16_le()?;
    p.eg_target = enum_field("eg_target", cur.u8()?, EgTarget::from_raw)?;

    // LFO
    p.lfo_wave = enum_field("lfo_wave", cur.u8()?, VcoWave::from_raw)?;
    p.lfo_mode = enum_field("lfo_mode", cur.u8()?, LfoMode::from_raw)?;
    p.lfo_rate = cur.u16_le()?;
    p.lfo_int = cur.u16_le()?;
    p.lfo_target = enum_field("lfo_target", cur.u8()?, LfoTarget::from_raw)?;

    // Mod FX
    p.mod_fx_on_off = cur.bool()?;
    p.mod_fx_type = enum_field("mod_fx_type", cur.u8()?, ModFxType::from_raw)?;
    p.mod_fx_chorus = enum_field("mod_fx_chorus", cur.u8()?, ModFxChorus::from_raw)?;
    p.mod_fx_ensemble = enum_field("mod_fx_ensemble", cur.u8()?, ModFxEnsemble::from_raw)?;
    p.mod_fx_phaser = enum_field("mod_fx_phaser", cur.u8()?, ModFxPhaser::from_raw)?;
    p.mod_fx_flanger = enum_field("mod_fx_flanger", cur.u8()?, ModFxFlanger::from_raw)?;
    p.mod_fx_user = cur.u8()?;
    p.mod_fx_time = cur.u16_le()?;
    p.mod_fx_depth = cur.u16_le()?;

    // Delay FX
    p.delay_on_off = cur.bool()?;
    p.delay_sub_type = enum_field("delay_sub_type", cur.u8()?, DelaySubType::from_raw)?;
    p.delay_time = cur.u16_le()?;
    p.delay_depth = cur.u16_le()?;

    // Reverb FX
    p.reverb_on_off = cur.bool()?;
    p.reverb_sub_type = enum_field("reverb_sub_type", cur.u8()?, ReverbSubType::from_raw)?;
    p.reverb_time = cur.u16_le()?;
    p.reverb_depth = cur.u16_le()?;

    // Bend & joystick. Assignment targets decode best-effort: firmware
    // revisions extend the target list, so raw codes are preserved.
    p.bend_range_plus = cur.u8()?;
    p.bend_range_minus = cur.u8()?;
    p.joystick_assign_plus = AssignTarget::from_raw(cur.u8()?);
    p.joystick_range_plus = cur.u8()?;
    p.joystick_assign_minus = AssignTarget::from_raw(cur.u8()?);
    p.joystick_range_minus = cur.u8()?;

    // CV in
    p.cv_in_mode = CvInMode::from_raw(cur.u8()?);
    p.cv_in1_assign = AssignTarget::from_raw(cur.u8()?);
    p.cv_in1_range = cur.u8()?;
    p.cv_in2_assign = AssignTarget::from_raw(cur.u8()?);
    p.cv_in2_range = cur.u8()?;

    // Tuning & advanced
    p.micro_tuning = enum_field("micro_tuning", cur.u8()?, MicroTuning::from_raw)?;
    p.scale_key = cur.u8()?;
    p.program_tuning = cur.u8()?;
    p.lfo_key_sync = cur.bool()?;
    p.lfo_voice_sync = cur.bool()?;
    p.lfo_target_osc = enum_field("lfo_target_osc", cur.u8()?, LfoTargetOsc::from_raw)?;
    p.cutoff_velocity = cur.u8()?;
    p.amp_velocity = cur.u8()?;
    p.multi_octave = cur.u8()?;
    p.multi_routing = enum_field("multi_routing", cur.u8()?, MultiRouting::from_raw)?;
    p.eg_legato = cur.bool()?;
    p.portamento_mode = enum_field("portamento_mode", cur.u8()?, PortamentoMode::from_raw)?;
    p.portamento_bpm_sync = cur.bool()?;
    p.program_level = cur.u8()?;

    // VPM parameters
    p.vpm_parameter1_feedback = cur.u8()?;
    p.vpm_parameter2_noise_depth = cur.u8()?;
    p.vpm_parameter3_shape_mod_int = cur.u8()?;
    p.vpm_parameter4_mod_attack = cur.u8()?;
    p.vpm_parameter5_mod_decay = cur.u8()?;
    p.vpm_parameter6_mod_key_track = cur.u8()?;

    // User parameters
    p.user_param1 = cur.u8()?;
    p.user_param2 = cur.u8()?;
    p.user_param3 = cur.u8()?;
    p.user_param4 = cur.u8()?;
    p.user_param5 = cur.u8()?;
    p.user_param6 = cur.u8()?;
    debug_assert_eq!(cur.position(), layout::USER_PARAM56_TYPE_OFFSET);

    // Packed type selectors for user params 5-6 (bits 0-3) and 1-4 (bits
    // 0-7), one byte each.
    let packed56 = cur.u8()?;
    p.user_param56_type = packed56;
    p.user_param5_type = UserParamType::from_packed(packed56, 0);
    p.user_param6_type = UserParamType::from_packed(packed56, 2);

    let packed = cur.u8()?;
    p.user_param1234_type = packed;
    p.user_param1_type = UserParamType::from_packed(packed, 0);
    p.user_param2_type = UserParamType::from_packed(packed, 2);
    p.user_param3_type = UserParamType::from_packed(packed, 4);
    p.user_param4_type = UserParamType::from_packed(packed, 6);

    p.program_transpose = cur.u8()?;
    debug_assert_eq!(cur.position(), layout::DELAY_DRY_WET_OFFSET);

    // Opportunistic trailing fields. Populated only when the slice reads
    // succeed; absence is not an error.
    p.delay_dry_wet = layout::read_u16_le_at(data, layout::DELAY_DRY_WET_OFFSET);
    p.reverb_dry_wet = layout::read_u16_le_at(data, layout::REVERB_DRY_WET_OFFSET);
    p.midi_after_touch_assign = layout::read_u8_at(data, layout::AFTER_TOUCH_ASSIGN_OFFSET)
        .map(AssignTarget::from_raw);

    // End marker, read leniently: it is preserved as decoded and checked by
    // Program::is_well_formed rather than rejected here.
    let marker = data
        .get(layout::END_MARKER_OFFSET..layout::END_MARKER_OFFSET + layout::END_MARKER.len())
        .unwrap_or(&[]);
    p.program_end_marker = String::from_utf8_lossy(layout::trim_nul(marker)).into_owned();

    if !p.is_well_formed() {
        log::debug!(
            "program '{}' decoded with end marker {:?} (expected \"PRED\")",
            p.program_name,
            p.program_end_marker
        );
    }

    Ok(p)
}

fn enum_field<T>(field: &'static str, raw: u8, from_raw: fn(u8) -> Option<T>) -> Result<T> {
    from_raw(raw).ok_or(DecodeError::UnknownEnumValue { field, raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_record() -> Vec<u8> {
        let mut data = vec![0u8; layout::PROGRAM_SIZE];
        data[..4].copy_from_slice(layout::HEADER_MAGIC);
        data[layout::END_MARKER_OFFSET..].copy_from_slice(layout::END_MARKER);
        data
    }

    #[test]
    fn too_short_fails_regardless_of_content() {
        let mut data = b"PROG".to_vec();
        data.resize(54, 0);
        match decode(&data) {
            Err(DecodeError::TooShort { len, min }) => {
                assert_eq!(len, 54);
                assert_eq!(min, 160);
            }
            other => panic!("expected TooShort, got {:?}", other),
        }
        assert!(matches!(
            decode(&[0xff; 159]),
            Err(DecodeError::TooShort { .. })
        ));
    }

    #[test]
    fn wrong_magic_is_malformed_layout() {
        let mut data = vec![0u8; 167];
        data[..7].copy_from_slice(b"INVALID");
        assert!(matches!(
            decode(&data),
            Err(DecodeError::MalformedLayout(_))
        ));
    }

    #[test]
    fn blank_record_decodes_with_defaults() {
        let p = decode(&blank_record()).unwrap();
        assert_eq!(p.header, "PROG");
        assert_eq!(p.program_name, "");
        assert_eq!(p.program_end_marker, "PRED");
        assert!(p.is_well_formed());
        assert_eq!(p.voice_mode_type, VoiceModeType::None);
        assert_eq!(p.mod_fx_type, ModFxType::None);
        assert_eq!(p.delay_dry_wet, Some(0));
        assert_eq!(p.reverb_dry_wet, Some(0));
        assert_eq!(p.midi_after_touch_assign, Some(AssignTarget::GateTime));
    }

    #[test]
    fn strict_enum_out_of_domain_fails_closed() {
        let mut data = blank_record();
        data[21] = 5; // voice_mode_type domain is 0-4
        match decode(&data) {
            Err(DecodeError::UnknownEnumValue { field, raw }) => {
                assert_eq!(field, "voice_mode_type");
                assert_eq!(raw, 5);
            }
            other => panic!("expected UnknownEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn micro_tuning_gap_fails_closed() {
        let mut data = blank_record();
        data[122] = 57;
        assert!(matches!(
            decode(&data),
            Err(DecodeError::UnknownEnumValue {
                field: "micro_tuning",
                raw: 57
            })
        ));
    }

    #[test]
    fn mod_fx_type_zero_maps_to_none() {
        let mut data = blank_record();
        data[89] = 0;
        assert_eq!(decode(&data).unwrap().mod_fx_type, ModFxType::None);
        data[89] = 3;
        assert_eq!(decode(&data).unwrap().mod_fx_type, ModFxType::Phaser);
        data[89] = 6;
        assert!(matches!(
            decode(&data),
            Err(DecodeError::UnknownEnumValue {
                field: "mod_fx_type",
                ..
            })
        ));
    }

    #[test]
    fn assign_targets_decode_best_effort() {
        let mut data = blank_record();
        data[113] = 42; // joystick_assign_plus, beyond the documented 0-28
        data[117] = 9; // cv_in_mode, beyond 0-2
        let p = decode(&data).unwrap();
        assert_eq!(p.joystick_assign_plus, AssignTarget::Other(42));
        assert_eq!(p.joystick_assign_plus.code(), 42);
        assert_eq!(p.cv_in_mode, CvInMode::Other(9));
    }

    #[test]
    fn packed_user_param_types_unpack_in_field_order() {
        let mut data = blank_record();
        data[layout::USER_PARAM1234_TYPE_OFFSET] = 0b1110_0100; // 0,1,2,3
        data[layout::USER_PARAM56_TYPE_OFFSET] = 0b0000_0110; // 2,1
        let p = decode(&data).unwrap();
        assert_eq!(p.user_param1_type, UserParamType::PercentType);
        assert_eq!(p.user_param2_type, UserParamType::PercentBipolar);
        assert_eq!(p.user_param3_type, UserParamType::Select);
        assert_eq!(p.user_param4_type, UserParamType::Count);
        assert_eq!(p.user_param5_type, UserParamType::Select);
        assert_eq!(p.user_param6_type, UserParamType::PercentBipolar);
        assert_eq!(p.user_param1234_type, 0b1110_0100);
        assert_eq!(p.user_param56_type, 0b0000_0110);
    }

    #[test]
    fn transpose_decodes_from_the_fixed_walk() {
        let mut data = blank_record();
        data[layout::PROGRAM_TRANSPOSE_OFFSET] = 25;
        let p = decode(&data).unwrap();
        assert_eq!(p.program_transpose, 25);
    }

    #[test]
    fn bad_end_marker_is_lenient() {
        let mut data = blank_record();
        data[layout::END_MARKER_OFFSET..].copy_from_slice(b"XXXX");
        let p = decode(&data).unwrap();
        assert_eq!(p.program_end_marker, "XXXX");
        assert!(!p.is_well_formed());
    }

    #[test]
    fn trailing_bytes_beyond_window_are_ignored() {
        let mut data = blank_record();
        data[4..8].copy_from_slice(b"Long");
        data.extend_from_slice(&[0xAB; 100]);
        let p = decode(&data).unwrap();
        assert_eq!(p.program_name, "Long");
        assert_eq!(p.program_end_marker, "PRED");
    }

    #[test]
    fn nonzero_bytes_decode_as_true_booleans() {
        let mut data = blank_record();
        data[18] = 1; // key_trig
        data[34] = 0x7f; // oscillator_sync, any nonzero is true
        let p = decode(&data).unwrap();
        assert!(p.key_trig);
        assert!(p.oscillator_sync);
        assert!(!p.ring_mod);
    }

    #[test]
    fn decode_is_deterministic() {
        let mut data = blank_record();
        data[4..9].copy_from_slice(b"Deter");
        data[16] = 3;
        data[21] = 2;
        let a = decode(&data).unwrap();
        let b = decode(&data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_ascii_program_name_is_malformed_layout() {
        let mut data = blank_record();
        data[4] = 0xC3;
        data[5] = 0xA9;
        assert!(matches!(
            decode(&data),
            Err(DecodeError::MalformedLayout(_))
        ));
    }
}
