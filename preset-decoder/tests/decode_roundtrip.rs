//! End-to-end decode tests over synthetic program records
//!
//! The builder below writes fields in declaration order, mirroring the
//! record layout, so the expected offsets are never hand-computed here.

use preset_decoder::enums::*;
use preset_decoder::layout;
use preset_decoder::parser::decode;
use preset_decoder::types::DecodeError;

/// Sequential record writer, the mirror image of the decoder's cursor.
struct RecordBuilder {
    buf: Vec<u8>,
}

impl RecordBuilder {
    fn new() -> Self {
        let mut buf = Vec::with_capacity(layout::PROGRAM_SIZE);
        buf.extend_from_slice(layout::HEADER_MAGIC);
        Self { buf }
    }

    fn u8(mut self, v: u8) -> Self {
        self.buf.push(v);
        self
    }

    fn u16(mut self, v: u16) -> Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    fn name(mut self, name: &str) -> Self {
        assert!(name.len() <= layout::NAME_LEN);
        self.buf.extend_from_slice(name.as_bytes());
        self.buf.resize(self.buf.len() + layout::NAME_LEN - name.len(), 0);
        self
    }

    fn finish(mut self) -> Vec<u8> {
        assert_eq!(self.buf.len(), layout::END_MARKER_OFFSET);
        self.buf.extend_from_slice(layout::END_MARKER);
        self.buf
    }
}

/// A fully populated record with every field set to a distinct in-domain
/// value.
fn acid_bass_record() -> Vec<u8> {
    RecordBuilder::new()
        .name("AcidBass2")
        .u8(3) // octave
        .u8(25) // portamento
        .u8(1) // key_trig
        .u16(620) // voice_mode_depth
        .u8(3) // voice_mode_type: UNISON
        .u8(2) // vco1_wave: SAW
        .u8(1) // vco1_octave
        .u16(532) // vco1_pitch
        .u16(780) // vco1_shape
        .u8(1) // vco2_wave: TRI
        .u8(2) // vco2_octave
        .u16(268) // vco2_pitch
        .u16(100) // vco2_shape
        .u8(1) // oscillator_sync
        .u8(0) // ring_mod
        .u16(333) // cross_mod_depth
        .u8(1) // multi_osc_type: VPM
        .u8(2) // selected noise: PEAK
        .u8(7) // selected vpm: SQU2
        .u8(5) // selected user slot
        .u16(10) // shape_noise
        .u16(900) // shape_vpm
        .u16(1023) // shape_user
        .u16(1) // shift_shape_noise
        .u16(2) // shift_shape_vpm
        .u16(3) // shift_shape_user
        .u16(1023) // vco1_level
        .u16(512) // vco2_level
        .u16(200) // multi_level
        .u16(700) // filter_cutoff
        .u16(150) // filter_resonance
        .u8(2) // drive: 100%
        .u8(1) // keyboard track: 50%
        .u16(0) // amp_eg_attack
        .u16(400) // amp_eg_decay
        .u16(1023) // amp_eg_sustain
        .u16(120) // amp_eg_release
        .u16(64) // eg_attack
        .u16(500) // eg_decay
        .u16(900) // eg_int
        .u8(2) // eg_target: PITCH
        .u8(1) // lfo_wave: TRI
        .u8(2) // lfo_mode: BPM
        .u16(445) // lfo_rate
        .u16(712) // lfo_int
        .u8(1) // lfo_target: SHAPE
        .u8(1) // mod_fx_on_off
        .u8(4) // mod_fx_type: FLANGER
        .u8(2) // chorus variant: DEEP
        .u8(1) // ensemble variant: LIGHT
        .u8(4) // phaser variant: SMALL_RESO
        .u8(3) // flanger variant: HIGH_SWEEP
        .u8(9) // mod fx user slot
        .u16(123) // mod_fx_time
        .u16(456) // mod_fx_depth
        .u8(1) // delay_on_off
        .u8(6) // delay_sub_type: STEREO_BPM
        .u16(222) // delay_time
        .u16(333) // delay_depth
        .u8(0) // reverb_on_off
        .u8(3) // reverb_sub_type: PLATE
        .u16(444) // reverb_time
        .u16(555) // reverb_depth
        .u8(12) // bend_range_plus
        .u8(2) // bend_range_minus
        .u8(4) // joystick_assign_plus: VCO1_SHAPE
        .u8(150) // joystick_range_plus
        .u8(1) // joystick_assign_minus: PORTAMENTO
        .u8(50) // joystick_range_minus
        .u8(2) // cv_in_mode: CV_GATE_MINUS
        .u8(3) // cv_in1_assign: VCO1_PITCH
        .u8(100) // cv_in1_range
        .u8(12) // cv_in2_assign: FILTER_CUTOFF
        .u8(200) // cv_in2_range
        .u8(130) // micro_tuning: USER_SCALE3
        .u8(12) // scale_key
        .u8(50) // program_tuning
        .u8(1) // lfo_key_sync
        .u8(0) // lfo_voice_sync
        .u8(3) // lfo_target_osc: MULTI
        .u8(64) // cutoff_velocity
        .u8(127) // amp_velocity
        .u8(2) // multi_octave
        .u8(1) // multi_routing: POST_VCF
        .u8(1) // eg_legato
        .u8(1) // portamento_mode: ON
        .u8(0) // portamento_bpm_sync
        .u8(102) // program_level
        .u8(0) // vpm feedback
        .u8(50) // vpm noise depth
        .u8(100) // vpm shape mod int
        .u8(150) // vpm mod attack
        .u8(200) // vpm mod decay
        .u8(77) // vpm mod key track
        .u8(10) // user_param1
        .u8(20) // user_param2
        .u8(30) // user_param3
        .u8(40) // user_param4
        .u8(50) // user_param5
        .u8(60) // user_param6
        .u8(0b0000_0111) // param 5-6 types: COUNT, PERCENT_BIPOLAR
        .u8(0b1001_0011) // param 1-4 types: COUNT, PERCENT_TYPE, PERCENT_BIPOLAR, SELECT
        .u8(13) // program_transpose
        .u16(300) // delay_dry_wet
        .u16(700) // reverb_dry_wet
        .u8(2) // midi_after_touch_assign: VM_DEPTH
        .finish()
}

#[test]
fn builder_produces_a_full_record() {
    assert_eq!(acid_bass_record().len(), layout::PROGRAM_SIZE);
}

#[test]
fn every_field_round_trips() {
    let p = decode(&acid_bass_record()).unwrap();

    assert_eq!(p.header, "PROG");
    assert_eq!(p.program_name, "AcidBass2");
    assert_eq!(p.octave, 3);
    assert_eq!(p.portamento, 25);
    assert!(p.key_trig);
    assert_eq!(p.voice_mode_depth, 620);
    assert_eq!(p.voice_mode_type, VoiceModeType::Unison);

    assert_eq!(p.vco1_wave, VcoWave::Saw);
    assert_eq!(p.vco1_octave, 1);
    assert_eq!(p.vco1_pitch, 532);
    assert_eq!(p.vco1_shape, 780);
    assert_eq!(p.vco2_wave, VcoWave::Tri);
    assert_eq!(p.vco2_octave, 2);
    assert_eq!(p.vco2_pitch, 268);
    assert_eq!(p.vco2_shape, 100);
    assert!(p.oscillator_sync);
    assert!(!p.ring_mod);
    assert_eq!(p.cross_mod_depth, 333);

    assert_eq!(p.multi_osc_type, MultiOscType::Vpm);
    assert_eq!(p.selected_multi_osc_noise, MultiOscNoise::Peak);
    assert_eq!(p.selected_multi_osc_vpm, MultiOscVpm::Squ2);
    assert_eq!(p.selected_multi_osc_user, 5);
    assert_eq!(p.shape_noise, 10);
    assert_eq!(p.shape_vpm, 900);
    assert_eq!(p.shape_user, 1023);
    assert_eq!(p.shift_shape_noise, 1);
    assert_eq!(p.shift_shape_vpm, 2);
    assert_eq!(p.shift_shape_user, 3);

    assert_eq!(p.vco1_level, 1023);
    assert_eq!(p.vco2_level, 512);
    assert_eq!(p.multi_level, 200);

    assert_eq!(p.filter_cutoff, 700);
    assert_eq!(p.filter_resonance, 150);
    assert_eq!(p.filter_cutoff_drive, 2);
    assert_eq!(p.filter_cutoff_keyboard_track, 1);

    assert_eq!(p.amp_eg_attack, 0);
    assert_eq!(p.amp_eg_decay, 400);
    assert_eq!(p.amp_eg_sustain, 1023);
    assert_eq!(p.amp_eg_release, 120);

    assert_eq!(p.eg_attack, 64);
    assert_eq!(p.eg_decay, 500);
    assert_eq!(p.eg_int, 900);
    assert_eq!(p.eg_target, EgTarget::Pitch);

    assert_eq!(p.lfo_wave, VcoWave::Tri);
    assert_eq!(p.lfo_mode, LfoMode::Bpm);
    assert_eq!(p.lfo_rate, 445);
    assert_eq!(p.lfo_int, 712);
    assert_eq!(p.lfo_target, LfoTarget::Shape);

    assert!(p.mod_fx_on_off);
    assert_eq!(p.mod_fx_type, ModFxType::Flanger);
    assert_eq!(p.mod_fx_chorus, ModFxChorus::Deep);
    assert_eq!(p.mod_fx_ensemble, ModFxEnsemble::Light);
    assert_eq!(p.mod_fx_phaser, ModFxPhaser::SmallReso);
    assert_eq!(p.mod_fx_flanger, ModFxFlanger::HighSweep);
    assert_eq!(p.mod_fx_user, 9);
    assert_eq!(p.mod_fx_time, 123);
    assert_eq!(p.mod_fx_depth, 456);

    assert!(p.delay_on_off);
    assert_eq!(p.delay_sub_type, DelaySubType::StereoBpm);
    assert_eq!(p.delay_time, 222);
    assert_eq!(p.delay_depth, 333);

    assert!(!p.reverb_on_off);
    assert_eq!(p.reverb_sub_type, ReverbSubType::Plate);
    assert_eq!(p.reverb_time, 444);
    assert_eq!(p.reverb_depth, 555);

    assert_eq!(p.bend_range_plus, 12);
    assert_eq!(p.bend_range_minus, 2);
    assert_eq!(p.joystick_assign_plus, AssignTarget::Vco1Shape);
    assert_eq!(p.joystick_range_plus, 150);
    assert_eq!(p.joystick_assign_minus, AssignTarget::Portamento);
    assert_eq!(p.joystick_range_minus, 50);

    assert_eq!(p.cv_in_mode, CvInMode::CvGateMinus);
    assert_eq!(p.cv_in1_assign, AssignTarget::Vco1Pitch);
    assert_eq!(p.cv_in1_range, 100);
    assert_eq!(p.cv_in2_assign, AssignTarget::FilterCutoff);
    assert_eq!(p.cv_in2_range, 200);

    assert_eq!(p.micro_tuning, MicroTuning::UserScale3);
    assert_eq!(p.scale_key, 12);
    assert_eq!(p.program_tuning, 50);
    assert!(p.lfo_key_sync);
    assert!(!p.lfo_voice_sync);
    assert_eq!(p.lfo_target_osc, LfoTargetOsc::Multi);
    assert_eq!(p.cutoff_velocity, 64);
    assert_eq!(p.amp_velocity, 127);
    assert_eq!(p.multi_octave, 2);
    assert_eq!(p.multi_routing, MultiRouting::PostVcf);
    assert!(p.eg_legato);
    assert_eq!(p.portamento_mode, PortamentoMode::On);
    assert!(!p.portamento_bpm_sync);
    assert_eq!(p.program_level, 102);

    assert_eq!(p.vpm_parameter1_feedback, 0);
    assert_eq!(p.vpm_parameter2_noise_depth, 50);
    assert_eq!(p.vpm_parameter3_shape_mod_int, 100);
    assert_eq!(p.vpm_parameter4_mod_attack, 150);
    assert_eq!(p.vpm_parameter5_mod_decay, 200);
    assert_eq!(p.vpm_parameter6_mod_key_track, 77);

    assert_eq!(p.user_param1, 10);
    assert_eq!(p.user_param2, 20);
    assert_eq!(p.user_param3, 30);
    assert_eq!(p.user_param4, 40);
    assert_eq!(p.user_param5, 50);
    assert_eq!(p.user_param6, 60);

    assert_eq!(p.user_param1_type, UserParamType::Count);
    assert_eq!(p.user_param2_type, UserParamType::PercentType);
    assert_eq!(p.user_param3_type, UserParamType::PercentBipolar);
    assert_eq!(p.user_param4_type, UserParamType::Select);
    assert_eq!(p.user_param5_type, UserParamType::Count);
    assert_eq!(p.user_param6_type, UserParamType::PercentBipolar);

    assert_eq!(p.program_transpose, 13);
    assert_eq!(p.delay_dry_wet, Some(300));
    assert_eq!(p.reverb_dry_wet, Some(700));
    assert_eq!(p.midi_after_touch_assign, Some(AssignTarget::VmDepth));
    assert_eq!(p.program_end_marker, "PRED");
    assert!(p.is_well_formed());
}

#[test]
fn every_short_length_is_too_short() {
    let record = acid_bass_record();
    for len in 0..layout::PROGRAM_SIZE {
        match decode(&record[..len]) {
            Err(DecodeError::TooShort { len: got, min }) => {
                assert_eq!(got, len);
                assert_eq!(min, layout::PROGRAM_SIZE);
            }
            other => panic!("len {}: expected TooShort, got {:?}", len, other),
        }
    }
}

#[test]
fn wrong_magic_fails_even_with_valid_body() {
    let mut record = acid_bass_record();
    record[0] = b'X';
    assert!(matches!(
        decode(&record),
        Err(DecodeError::MalformedLayout(_))
    ));
}

#[test]
fn longer_buffer_decodes_identically() {
    let record = acid_bass_record();
    let mut padded = record.clone();
    padded.extend_from_slice(&[0x5A; 64]);
    assert_eq!(decode(&record).unwrap(), decode(&padded).unwrap());
}

#[test]
fn decoded_program_serializes_with_stable_names() {
    let p = decode(&acid_bass_record()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&p).unwrap();
    assert_eq!(json["program_name"], "AcidBass2");
    assert_eq!(json["voice_mode_type"], "UNISON");
    assert_eq!(json["mod_fx_type"], "FLANGER");
    assert_eq!(json["micro_tuning"], "USER_SCALE3");
    assert_eq!(json["filter_cutoff"], 700);
    assert_eq!(json["delay_dry_wet"], 300);
    assert_eq!(json["user_param5_type"], "COUNT");
}

#[test]
fn unwrap_then_decode_from_archive() {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let record = acid_bass_record();
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let opts =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("Prog_000.prog_bin", opts).unwrap();
    writer.write_all(&record).unwrap();
    let archive = writer.finish().unwrap().into_inner();

    let bytes = preset_decoder::unwrap_upload(&archive).unwrap();
    assert_eq!(bytes, record);
    let p = decode(&bytes).unwrap();
    assert_eq!(p.program_name, "AcidBass2");
}
