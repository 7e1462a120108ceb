//! Enumerated domains used by the program record
//!
//! Every switch-style field in the binary layout stores a small integer code.
//! Each code set is modelled as a closed enum with a fallible `from_raw`
//! conversion; the decoder fails with `UnknownEnumValue` when a strict field
//! holds a code outside its domain.
//!
//! Two domains are deliberately open: [`AssignTarget`] and [`CvInMode`] are
//! extended by firmware revisions, so their `from_raw` is infallible and
//! preserves unrecognized codes in an `Other` variant instead of failing.

use serde::Serialize;
use std::fmt;

/// Voice mode selector (panel VOICE MODE TYPE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceModeType {
    #[default]
    None = 0,
    Arp = 1,
    Chord = 2,
    Unison = 3,
    Poly = 4,
}

impl VoiceModeType {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Arp),
            2 => Some(Self::Chord),
            3 => Some(Self::Unison),
            4 => Some(Self::Poly),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for VoiceModeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "NONE",
            Self::Arp => "ARP",
            Self::Chord => "CHORD",
            Self::Unison => "UNISON",
            Self::Poly => "POLY",
        };
        write!(f, "{}", s)
    }
}

/// Oscillator waveform (VCO1 WAVE, VCO2 WAVE, LFO WAVE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VcoWave {
    #[default]
    Sqr = 0,
    Tri = 1,
    Saw = 2,
}

impl VcoWave {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Sqr),
            1 => Some(Self::Tri),
            2 => Some(Self::Saw),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for VcoWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sqr => "SQR",
            Self::Tri => "TRI",
            Self::Saw => "SAW",
        };
        write!(f, "{}", s)
    }
}

/// Multi engine oscillator family (MULTI OSC TYPE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiOscType {
    #[default]
    Noise = 0,
    Vpm = 1,
    User = 2,
}

impl MultiOscType {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Noise),
            1 => Some(Self::Vpm),
            2 => Some(Self::User),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MultiOscType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Noise => "NOISE",
            Self::Vpm => "VPM",
            Self::User => "USER",
        };
        write!(f, "{}", s)
    }
}

/// Noise oscillator variant (SELECT NOISE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiOscNoise {
    #[default]
    High = 0,
    Low = 1,
    Peak = 2,
    Decim = 3,
}

impl MultiOscNoise {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::High),
            1 => Some(Self::Low),
            2 => Some(Self::Peak),
            3 => Some(Self::Decim),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MultiOscNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
            Self::Peak => "PEAK",
            Self::Decim => "DECIM",
        };
        write!(f, "{}", s)
    }
}

/// VPM oscillator variant (SELECT VPM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiOscVpm {
    #[default]
    Sin1 = 0,
    Sin2 = 1,
    Sin3 = 2,
    Sin4 = 3,
    Saw1 = 4,
    Saw2 = 5,
    Squ1 = 6,
    Squ2 = 7,
    Fat1 = 8,
    Fat2 = 9,
    Air1 = 10,
    Air2 = 11,
    Decay1 = 12,
    Decay2 = 13,
    Creep = 14,
    Throat = 15,
}

impl MultiOscVpm {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Sin1),
            1 => Some(Self::Sin2),
            2 => Some(Self::Sin3),
            3 => Some(Self::Sin4),
            4 => Some(Self::Saw1),
            5 => Some(Self::Saw2),
            6 => Some(Self::Squ1),
            7 => Some(Self::Squ2),
            8 => Some(Self::Fat1),
            9 => Some(Self::Fat2),
            10 => Some(Self::Air1),
            11 => Some(Self::Air2),
            12 => Some(Self::Decay1),
            13 => Some(Self::Decay2),
            14 => Some(Self::Creep),
            15 => Some(Self::Throat),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MultiOscVpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sin1 => "SIN1",
            Self::Sin2 => "SIN2",
            Self::Sin3 => "SIN3",
            Self::Sin4 => "SIN4",
            Self::Saw1 => "SAW1",
            Self::Saw2 => "SAW2",
            Self::Squ1 => "SQU1",
            Self::Squ2 => "SQU2",
            Self::Fat1 => "FAT1",
            Self::Fat2 => "FAT2",
            Self::Air1 => "AIR1",
            Self::Air2 => "AIR2",
            Self::Decay1 => "DECAY1",
            Self::Decay2 => "DECAY2",
            Self::Creep => "CREEP",
            Self::Throat => "THROAT",
        };
        write!(f, "{}", s)
    }
}

/// Modulation envelope routing (EG TARGET)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EgTarget {
    #[default]
    Cutoff = 0,
    Pitch2 = 1,
    Pitch = 2,
}

impl EgTarget {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Cutoff),
            1 => Some(Self::Pitch2),
            2 => Some(Self::Pitch),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for EgTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Cutoff => "CUTOFF",
            Self::Pitch2 => "PITCH2",
            Self::Pitch => "PITCH",
        };
        write!(f, "{}", s)
    }
}

/// LFO retrigger/sync behavior (LFO MODE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LfoMode {
    OneShot = 0,
    #[default]
    Normal = 1,
    Bpm = 2,
}

impl LfoMode {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::OneShot),
            1 => Some(Self::Normal),
            2 => Some(Self::Bpm),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LfoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OneShot => "ONE_SHOT",
            Self::Normal => "NORMAL",
            Self::Bpm => "BPM",
        };
        write!(f, "{}", s)
    }
}

/// LFO modulation destination (LFO TARGET)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LfoTarget {
    #[default]
    Cutoff = 0,
    Shape = 1,
    Pitch = 2,
}

impl LfoTarget {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Cutoff),
            1 => Some(Self::Shape),
            2 => Some(Self::Pitch),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LfoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Cutoff => "CUTOFF",
            Self::Shape => "SHAPE",
            Self::Pitch => "PITCH",
        };
        write!(f, "{}", s)
    }
}

/// Which oscillators the LFO modulates (LFO TARGET OSC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LfoTargetOsc {
    #[default]
    All = 0,
    Vco1And2 = 1,
    Vco2 = 2,
    Multi = 3,
}

impl LfoTargetOsc {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::All),
            1 => Some(Self::Vco1And2),
            2 => Some(Self::Vco2),
            3 => Some(Self::Multi),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LfoTargetOsc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "ALL",
            Self::Vco1And2 => "VCO1_AND_2",
            Self::Vco2 => "VCO2",
            Self::Multi => "MULTI",
        };
        write!(f, "{}", s)
    }
}

/// Modulation effect family (MOD FX TYPE)
///
/// Raw code zero means the effect slot is unassigned; the decoder substitutes
/// [`ModFxType::None`] rather than failing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModFxType {
    #[default]
    None = 0,
    Chorus = 1,
    Ensemble = 2,
    Phaser = 3,
    Flanger = 4,
    User = 5,
}

impl ModFxType {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Chorus),
            2 => Some(Self::Ensemble),
            3 => Some(Self::Phaser),
            4 => Some(Self::Flanger),
            5 => Some(Self::User),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ModFxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "NONE",
            Self::Chorus => "CHORUS",
            Self::Ensemble => "ENSEMBLE",
            Self::Phaser => "PHASER",
            Self::Flanger => "FLANGER",
            Self::User => "USER",
        };
        write!(f, "{}", s)
    }
}

/// Chorus variant (MOD FX CHORUS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModFxChorus {
    #[default]
    Stereo = 0,
    Light = 1,
    Deep = 2,
    Triphase = 3,
    Harmonic = 4,
    Mono = 5,
    Feedback = 6,
    Vibrato = 7,
}

impl ModFxChorus {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Stereo),
            1 => Some(Self::Light),
            2 => Some(Self::Deep),
            3 => Some(Self::Triphase),
            4 => Some(Self::Harmonic),
            5 => Some(Self::Mono),
            6 => Some(Self::Feedback),
            7 => Some(Self::Vibrato),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ModFxChorus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stereo => "STEREO",
            Self::Light => "LIGHT",
            Self::Deep => "DEEP",
            Self::Triphase => "TRIPHASE",
            Self::Harmonic => "HARMONIC",
            Self::Mono => "MONO",
            Self::Feedback => "FEEDBACK",
            Self::Vibrato => "VIBRATO",
        };
        write!(f, "{}", s)
    }
}

/// Ensemble variant (MOD FX ENSEMBLE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModFxEnsemble {
    #[default]
    Stereo = 0,
    Light = 1,
    Mono = 2,
}

impl ModFxEnsemble {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Stereo),
            1 => Some(Self::Light),
            2 => Some(Self::Mono),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ModFxEnsemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stereo => "STEREO",
            Self::Light => "LIGHT",
            Self::Mono => "MONO",
        };
        write!(f, "{}", s)
    }
}

/// Phaser variant (MOD FX PHASER)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModFxPhaser {
    #[default]
    Stereo = 0,
    Fast = 1,
    Orange = 2,
    Small = 3,
    SmallReso = 4,
    Black = 5,
    Formant = 6,
    Twinkle = 7,
}

impl ModFxPhaser {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Stereo),
            1 => Some(Self::Fast),
            2 => Some(Self::Orange),
            3 => Some(Self::Small),
            4 => Some(Self::SmallReso),
            5 => Some(Self::Black),
            6 => Some(Self::Formant),
            7 => Some(Self::Twinkle),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ModFxPhaser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stereo => "STEREO",
            Self::Fast => "FAST",
            Self::Orange => "ORANGE",
            Self::Small => "SMALL",
            Self::SmallReso => "SMALL_RESO",
            Self::Black => "BLACK",
            Self::Formant => "FORMANT",
            Self::Twinkle => "TWINKLE",
        };
        write!(f, "{}", s)
    }
}

/// Flanger variant (MOD FX FLANGER)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModFxFlanger {
    #[default]
    Stereo = 0,
    Light = 1,
    Mono = 2,
    HighSweep = 3,
    MidSweep = 4,
    PanSweep = 5,
    MonoSweep = 6,
    Triphase = 7,
}

impl ModFxFlanger {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Stereo),
            1 => Some(Self::Light),
            2 => Some(Self::Mono),
            3 => Some(Self::HighSweep),
            4 => Some(Self::MidSweep),
            5 => Some(Self::PanSweep),
            6 => Some(Self::MonoSweep),
            7 => Some(Self::Triphase),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ModFxFlanger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stereo => "STEREO",
            Self::Light => "LIGHT",
            Self::Mono => "MONO",
            Self::HighSweep => "HIGH_SWEEP",
            Self::MidSweep => "MID_SWEEP",
            Self::PanSweep => "PAN_SWEEP",
            Self::MonoSweep => "MONO_SWEEP",
            Self::Triphase => "TRIPHASE",
        };
        write!(f, "{}", s)
    }
}

/// Delay algorithm (DELAY SUB TYPE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelaySubType {
    #[default]
    Stereo = 0,
    Mono = 1,
    PingPong = 2,
    Hipass = 3,
    Tape = 4,
    OneTap = 5,
    StereoBpm = 6,
    MonoBpm = 7,
    PingBpm = 8,
    HipassBpm = 9,
    TapeBpm = 10,
    Doubling = 11,
    User1 = 12,
    User2 = 13,
    User3 = 14,
    User4 = 15,
    User5 = 16,
    User6 = 17,
    User7 = 18,
    User8 = 19,
}

impl DelaySubType {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Stereo),
            1 => Some(Self::Mono),
            2 => Some(Self::PingPong),
            3 => Some(Self::Hipass),
            4 => Some(Self::Tape),
            5 => Some(Self::OneTap),
            6 => Some(Self::StereoBpm),
            7 => Some(Self::MonoBpm),
            8 => Some(Self::PingBpm),
            9 => Some(Self::HipassBpm),
            10 => Some(Self::TapeBpm),
            11 => Some(Self::Doubling),
            12 => Some(Self::User1),
            13 => Some(Self::User2),
            14 => Some(Self::User3),
            15 => Some(Self::User4),
            16 => Some(Self::User5),
            17 => Some(Self::User6),
            18 => Some(Self::User7),
            19 => Some(Self::User8),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DelaySubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stereo => "STEREO",
            Self::Mono => "MONO",
            Self::PingPong => "PING_PONG",
            Self::Hipass => "HIPASS",
            Self::Tape => "TAPE",
            Self::OneTap => "ONE_TAP",
            Self::StereoBpm => "STEREO_BPM",
            Self::MonoBpm => "MONO_BPM",
            Self::PingBpm => "PING_BPM",
            Self::HipassBpm => "HIPASS_BPM",
            Self::TapeBpm => "TAPE_BPM",
            Self::Doubling => "DOUBLING",
            Self::User1 => "USER1",
            Self::User2 => "USER2",
            Self::User3 => "USER3",
            Self::User4 => "USER4",
            Self::User5 => "USER5",
            Self::User6 => "USER6",
            Self::User7 => "USER7",
            Self::User8 => "USER8",
        };
        write!(f, "{}", s)
    }
}

/// Reverb algorithm (REVERB SUB TYPE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReverbSubType {
    #[default]
    Hall = 0,
    Smooth = 1,
    Arena = 2,
    Plate = 3,
    Room = 4,
    EarlyRef = 5,
    Space = 6,
    Riser = 7,
    Submarine = 8,
    Horror = 9,
    User1 = 10,
    User2 = 11,
    User3 = 12,
    User4 = 13,
    User5 = 14,
    User6 = 15,
    User7 = 16,
    User8 = 17,
}

impl ReverbSubType {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Hall),
            1 => Some(Self::Smooth),
            2 => Some(Self::Arena),
            3 => Some(Self::Plate),
            4 => Some(Self::Room),
            5 => Some(Self::EarlyRef),
            6 => Some(Self::Space),
            7 => Some(Self::Riser),
            8 => Some(Self::Submarine),
            9 => Some(Self::Horror),
            10 => Some(Self::User1),
            11 => Some(Self::User2),
            12 => Some(Self::User3),
            13 => Some(Self::User4),
            14 => Some(Self::User5),
            15 => Some(Self::User6),
            16 => Some(Self::User7),
            17 => Some(Self::User8),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ReverbSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hall => "HALL",
            Self::Smooth => "SMOOTH",
            Self::Arena => "ARENA",
            Self::Plate => "PLATE",
            Self::Room => "ROOM",
            Self::EarlyRef => "EARLY_REF",
            Self::Space => "SPACE",
            Self::Riser => "RISER",
            Self::Submarine => "SUBMARINE",
            Self::Horror => "HORROR",
            Self::User1 => "USER1",
            Self::User2 => "USER2",
            Self::User3 => "USER3",
            Self::User4 => "USER4",
            Self::User5 => "USER5",
            Self::User6 => "USER6",
            Self::User7 => "USER7",
            Self::User8 => "USER8",
        };
        write!(f, "{}", s)
    }
}

/// Modulation destination for joystick, CV inputs and MIDI after touch
///
/// Firmware revisions extend this list, so decoding is best-effort: codes
/// beyond the documented range are preserved in [`AssignTarget::Other`]
/// instead of failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignTarget {
    GateTime,
    Portamento,
    VmDepth,
    Vco1Pitch,
    Vco1Shape,
    Vco2Pitch,
    Vco2Shape,
    CrossMod,
    MultiShape,
    Vco1Level,
    Vco2Level,
    MultiLevel,
    FilterCutoff,
    FilterResonance,
    AmpEgAttack,
    AmpEgDecay,
    AmpEgSustain,
    AmpEgRelease,
    EgAttack,
    EgDecay,
    EgInt,
    LfoRate,
    LfoInt,
    ModFxSpeed,
    ModFxDepth,
    ReverbTime,
    ReverbDepth,
    DelayTime,
    DelayDepth,
    Other(u8),
}

impl Default for AssignTarget {
    fn default() -> Self {
        Self::GateTime
    }
}

impl AssignTarget {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::GateTime,
            1 => Self::Portamento,
            2 => Self::VmDepth,
            3 => Self::Vco1Pitch,
            4 => Self::Vco1Shape,
            5 => Self::Vco2Pitch,
            6 => Self::Vco2Shape,
            7 => Self::CrossMod,
            8 => Self::MultiShape,
            9 => Self::Vco1Level,
            10 => Self::Vco2Level,
            11 => Self::MultiLevel,
            12 => Self::FilterCutoff,
            13 => Self::FilterResonance,
            14 => Self::AmpEgAttack,
            15 => Self::AmpEgDecay,
            16 => Self::AmpEgSustain,
            17 => Self::AmpEgRelease,
            18 => Self::EgAttack,
            19 => Self::EgDecay,
            20 => Self::EgInt,
            21 => Self::LfoRate,
            22 => Self::LfoInt,
            23 => Self::ModFxSpeed,
            24 => Self::ModFxDepth,
            25 => Self::ReverbTime,
            26 => Self::ReverbDepth,
            27 => Self::DelayTime,
            28 => Self::DelayDepth,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::GateTime => 0,
            Self::Portamento => 1,
            Self::VmDepth => 2,
            Self::Vco1Pitch => 3,
            Self::Vco1Shape => 4,
            Self::Vco2Pitch => 5,
            Self::Vco2Shape => 6,
            Self::CrossMod => 7,
            Self::MultiShape => 8,
            Self::Vco1Level => 9,
            Self::Vco2Level => 10,
            Self::MultiLevel => 11,
            Self::FilterCutoff => 12,
            Self::FilterResonance => 13,
            Self::AmpEgAttack => 14,
            Self::AmpEgDecay => 15,
            Self::AmpEgSustain => 16,
            Self::AmpEgRelease => 17,
            Self::EgAttack => 18,
            Self::EgDecay => 19,
            Self::EgInt => 20,
            Self::LfoRate => 21,
            Self::LfoInt => 22,
            Self::ModFxSpeed => 23,
            Self::ModFxDepth => 24,
            Self::ReverbTime => 25,
            Self::ReverbDepth => 26,
            Self::DelayTime => 27,
            Self::DelayDepth => 28,
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for AssignTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GateTime => write!(f, "GATE_TIME"),
            Self::Portamento => write!(f, "PORTAMENTO"),
            Self::VmDepth => write!(f, "VM_DEPTH"),
            Self::Vco1Pitch => write!(f, "VCO1_PITCH"),
            Self::Vco1Shape => write!(f, "VCO1_SHAPE"),
            Self::Vco2Pitch => write!(f, "VCO2_PITCH"),
            Self::Vco2Shape => write!(f, "VCO2_SHAPE"),
            Self::CrossMod => write!(f, "CROSS_MOD"),
            Self::MultiShape => write!(f, "MULTI_SHAPE"),
            Self::Vco1Level => write!(f, "VCO1_LEVEL"),
            Self::Vco2Level => write!(f, "VCO2_LEVEL"),
            Self::MultiLevel => write!(f, "MULTI_LEVEL"),
            Self::FilterCutoff => write!(f, "FILTER_CUTOFF"),
            Self::FilterResonance => write!(f, "FILTER_RESONANCE"),
            Self::AmpEgAttack => write!(f, "AMP_EG_ATTACK"),
            Self::AmpEgDecay => write!(f, "AMP_EG_DECAY"),
            Self::AmpEgSustain => write!(f, "AMP_EG_SUSTAIN"),
            Self::AmpEgRelease => write!(f, "AMP_EG_RELEASE"),
            Self::EgAttack => write!(f, "EG_ATTACK"),
            Self::EgDecay => write!(f, "EG_DECAY"),
            Self::EgInt => write!(f, "EG_INT"),
            Self::LfoRate => write!(f, "LFO_RATE"),
            Self::LfoInt => write!(f, "LFO_INT"),
            Self::ModFxSpeed => write!(f, "MOD_FX_SPEED"),
            Self::ModFxDepth => write!(f, "MOD_FX_DEPTH"),
            Self::ReverbTime => write!(f, "REVERB_TIME"),
            Self::ReverbDepth => write!(f, "REVERB_DEPTH"),
            Self::DelayTime => write!(f, "DELAY_TIME"),
            Self::DelayDepth => write!(f, "DELAY_DEPTH"),
            Self::Other(raw) => write!(f, "OTHER({})", raw),
        }
    }
}

/// CV input interpretation (CV IN MODE)
///
/// Best-effort like [`AssignTarget`]: unknown codes are preserved, not
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CvInMode {
    Modulation,
    CvGatePlus,
    CvGateMinus,
    Other(u8),
}

impl Default for CvInMode {
    fn default() -> Self {
        Self::Modulation
    }
}

impl CvInMode {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Modulation,
            1 => Self::CvGatePlus,
            2 => Self::CvGateMinus,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Modulation => 0,
            Self::CvGatePlus => 1,
            Self::CvGateMinus => 2,
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for CvInMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modulation => write!(f, "MODULATION"),
            Self::CvGatePlus => write!(f, "CV_GATE_PLUS"),
            Self::CvGateMinus => write!(f, "CV_GATE_MINUS"),
            Self::Other(raw) => write!(f, "OTHER({})", raw),
        }
    }
}

/// Tuning table (MICRO TUNING)
///
/// The code space is sparse: 0-22 are factory tables, 128-139 are user
/// scale/octave slots. Everything else is out of domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MicroTuning {
    #[default]
    EqualTemp = 0,
    PureMajor = 1,
    PureMinor = 2,
    Pythagorean = 3,
    Werckmeister = 4,
    Kirnburger = 5,
    Slendro = 6,
    Pelog = 7,
    Ionian = 8,
    Dorian = 9,
    Aeolian = 10,
    MajorPenta = 11,
    MinorPenta = 12,
    Reverse = 13,
    Afx001 = 14,
    Afx002 = 15,
    Afx003 = 16,
    Afx004 = 17,
    Afx005 = 18,
    Afx006 = 19,
    Dc001 = 20,
    Dc002 = 21,
    Dc003 = 22,
    UserScale1 = 128,
    UserScale2 = 129,
    UserScale3 = 130,
    UserScale4 = 131,
    UserScale5 = 132,
    UserScale6 = 133,
    UserOctave1 = 134,
    UserOctave2 = 135,
    UserOctave3 = 136,
    UserOctave4 = 137,
    UserOctave5 = 138,
    UserOctave6 = 139,
}

impl MicroTuning {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::EqualTemp),
            1 => Some(Self::PureMajor),
            2 => Some(Self::PureMinor),
            3 => Some(Self::Pythagorean),
            4 => Some(Self::Werckmeister),
            5 => Some(Self::Kirnburger),
            6 => Some(Self::Slendro),
            7 => Some(Self::Pelog),
            8 => Some(Self::Ionian),
            9 => Some(Self::Dorian),
            10 => Some(Self::Aeolian),
            11 => Some(Self::MajorPenta),
            12 => Some(Self::MinorPenta),
            13 => Some(Self::Reverse),
            14 => Some(Self::Afx001),
            15 => Some(Self::Afx002),
            16 => Some(Self::Afx003),
            17 => Some(Self::Afx004),
            18 => Some(Self::Afx005),
            19 => Some(Self::Afx006),
            20 => Some(Self::Dc001),
            21 => Some(Self::Dc002),
            22 => Some(Self::Dc003),
            128 => Some(Self::UserScale1),
            129 => Some(Self::UserScale2),
            130 => Some(Self::UserScale3),
            131 => Some(Self::UserScale4),
            132 => Some(Self::UserScale5),
            133 => Some(Self::UserScale6),
            134 => Some(Self::UserOctave1),
            135 => Some(Self::UserOctave2),
            136 => Some(Self::UserOctave3),
            137 => Some(Self::UserOctave4),
            138 => Some(Self::UserOctave5),
            139 => Some(Self::UserOctave6),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MicroTuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EqualTemp => "EQUAL_TEMP",
            Self::PureMajor => "PURE_MAJOR",
            Self::PureMinor => "PURE_MINOR",
            Self::Pythagorean => "PYTHAGOREAN",
            Self::Werckmeister => "WERCKMEISTER",
            Self::Kirnburger => "KIRNBURGER",
            Self::Slendro => "SLENDRO",
            Self::Pelog => "PELOG",
            Self::Ionian => "IONIAN",
            Self::Dorian => "DORIAN",
            Self::Aeolian => "AEOLIAN",
            Self::MajorPenta => "MAJOR_PENTA",
            Self::MinorPenta => "MINOR_PENTA",
            Self::Reverse => "REVERSE",
            Self::Afx001 => "AFX001",
            Self::Afx002 => "AFX002",
            Self::Afx003 => "AFX003",
            Self::Afx004 => "AFX004",
            Self::Afx005 => "AFX005",
            Self::Afx006 => "AFX006",
            Self::Dc001 => "DC001",
            Self::Dc002 => "DC002",
            Self::Dc003 => "DC003",
            Self::UserScale1 => "USER_SCALE1",
            Self::UserScale2 => "USER_SCALE2",
            Self::UserScale3 => "USER_SCALE3",
            Self::UserScale4 => "USER_SCALE4",
            Self::UserScale5 => "USER_SCALE5",
            Self::UserScale6 => "USER_SCALE6",
            Self::UserOctave1 => "USER_OCTAVE1",
            Self::UserOctave2 => "USER_OCTAVE2",
            Self::UserOctave3 => "USER_OCTAVE3",
            Self::UserOctave4 => "USER_OCTAVE4",
            Self::UserOctave5 => "USER_OCTAVE5",
            Self::UserOctave6 => "USER_OCTAVE6",
        };
        write!(f, "{}", s)
    }
}

/// Multi engine signal routing (MULTI ROUTING)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiRouting {
    #[default]
    PreVcf = 0,
    PostVcf = 1,
}

impl MultiRouting {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::PreVcf),
            1 => Some(Self::PostVcf),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MultiRouting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PreVcf => "PRE_VCF",
            Self::PostVcf => "POST_VCF",
        };
        write!(f, "{}", s)
    }
}

/// Portamento trigger behavior (PORTAMENTO MODE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortamentoMode {
    #[default]
    Auto = 0,
    On = 1,
}

impl PortamentoMode {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Auto),
            1 => Some(Self::On),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PortamentoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Auto => "AUTO",
            Self::On => "ON",
        };
        write!(f, "{}", s)
    }
}

/// User parameter value interpretation (USER PARAM TYPE)
///
/// Stored as 2-bit selectors packed four (params 1-4) or two (params 5-6)
/// to a byte, so every raw selector is in domain by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserParamType {
    #[default]
    PercentType = 0,
    PercentBipolar = 1,
    Select = 2,
    Count = 3,
}

impl UserParamType {
    /// Extract one 2-bit selector from a packed type byte.
    pub fn from_packed(byte: u8, shift: u8) -> Self {
        match (byte >> shift) & 0b11 {
            0 => Self::PercentType,
            1 => Self::PercentBipolar,
            2 => Self::Select,
            _ => Self::Count,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for UserParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PercentType => "PERCENT_TYPE",
            Self::PercentBipolar => "PERCENT_BIPOLAR",
            Self::Select => "SELECT",
            Self::Count => "COUNT",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_domains_reject_out_of_range_codes() {
        assert_eq!(VoiceModeType::from_raw(5), None);
        assert_eq!(VcoWave::from_raw(3), None);
        assert_eq!(MultiOscVpm::from_raw(16), None);
        assert_eq!(ModFxType::from_raw(6), None);
        assert_eq!(DelaySubType::from_raw(20), None);
        assert_eq!(ReverbSubType::from_raw(18), None);
        assert_eq!(LfoMode::from_raw(3), None);
    }

    #[test]
    fn micro_tuning_domain_is_sparse() {
        assert_eq!(MicroTuning::from_raw(22), Some(MicroTuning::Dc003));
        assert_eq!(MicroTuning::from_raw(23), None);
        assert_eq!(MicroTuning::from_raw(127), None);
        assert_eq!(MicroTuning::from_raw(128), Some(MicroTuning::UserScale1));
        assert_eq!(MicroTuning::from_raw(139), Some(MicroTuning::UserOctave6));
        assert_eq!(MicroTuning::from_raw(140), None);
    }

    #[test]
    fn assign_target_preserves_unknown_codes() {
        assert_eq!(AssignTarget::from_raw(28), AssignTarget::DelayDepth);
        assert_eq!(AssignTarget::from_raw(29), AssignTarget::Other(29));
        assert_eq!(AssignTarget::from_raw(29).code(), 29);
        assert_eq!(CvInMode::from_raw(3), CvInMode::Other(3));
        assert_eq!(CvInMode::from_raw(3).code(), 3);
    }

    #[test]
    fn round_trip_codes() {
        for raw in 0..=4 {
            assert_eq!(VoiceModeType::from_raw(raw).unwrap().code(), raw);
        }
        for raw in 0..=19 {
            assert_eq!(DelaySubType::from_raw(raw).unwrap().code(), raw);
        }
        for raw in 0..=28 {
            assert_eq!(AssignTarget::from_raw(raw).code(), raw);
        }
    }

    #[test]
    fn packed_selector_extraction() {
        // 0b11100100: params 1..4 = 0, 1, 2, 3
        let byte = 0b1110_0100;
        assert_eq!(UserParamType::from_packed(byte, 0), UserParamType::PercentType);
        assert_eq!(UserParamType::from_packed(byte, 2), UserParamType::PercentBipolar);
        assert_eq!(UserParamType::from_packed(byte, 4), UserParamType::Select);
        assert_eq!(UserParamType::from_packed(byte, 6), UserParamType::Count);
    }

    #[test]
    fn display_names_match_panel_labels() {
        assert_eq!(VcoWave::Saw.to_string(), "SAW");
        assert_eq!(DelaySubType::PingPong.to_string(), "PING_PONG");
        assert_eq!(AssignTarget::Other(31).to_string(), "OTHER(31)");
        assert_eq!(MicroTuning::UserOctave3.to_string(), "USER_OCTAVE3");
    }
}
