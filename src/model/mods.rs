use std::{fmt, str::FromStr};

use serde::{ser::SerializeSeq, Deserialize, Serialize, Serializer};
use thiserror::Error;

use super::mode::GameMode;

/// A two-letter mod identifier like `DT` or `HR`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Acronym([u8; 2]);

impl Acronym {
    /// The acronym as a string slice.
    pub fn as_str(&self) -> &str {
        // Construction only allows ASCII
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl FromStr for Acronym {
    type Err = ParseModsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [a, b] if a.is_ascii_alphanumeric() && b.is_ascii_alphanumeric() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(ParseModsError::InvalidAcronym(s.to_owned())),
        }
    }
}

impl fmt::Debug for Acronym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Acronym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode bitmasks for mod legality.
const ALL_MODES: u8 = 0b1111;
const NOT_KEYS: u8 = 0b0111;
const ONLY_TAP: u8 = 0b0001;

struct ModInfo {
    acronym: &'static str,
    /// Legacy bitflag representation, `0` for lazer-only mods.
    bits: u32,
    modes: u8,
    clock_rate: Option<f64>,
}

/// Every mod the calculators care about.
///
/// `NC`/`DC` are listed before `DT`/`HT` so that bit decoding picks the more
/// specific mod when both flags are set.
const KNOWN_MODS: &[ModInfo] = &[
    ModInfo {
        acronym: "NF",
        bits: 1 << 0,
        modes: ALL_MODES,
        clock_rate: None,
    },
    ModInfo {
        acronym: "EZ",
        bits: 1 << 1,
        modes: ALL_MODES,
        clock_rate: None,
    },
    ModInfo {
        acronym: "HD",
        bits: 1 << 3,
        modes: ALL_MODES,
        clock_rate: None,
    },
    ModInfo {
        acronym: "HR",
        bits: 1 << 4,
        modes: NOT_KEYS,
        clock_rate: None,
    },
    ModInfo {
        acronym: "NC",
        bits: (1 << 6) | (1 << 9),
        modes: ALL_MODES,
        clock_rate: Some(1.5),
    },
    ModInfo {
        acronym: "DT",
        bits: 1 << 6,
        modes: ALL_MODES,
        clock_rate: Some(1.5),
    },
    ModInfo {
        acronym: "DC",
        bits: 0,
        modes: ALL_MODES,
        clock_rate: Some(0.75),
    },
    ModInfo {
        acronym: "HT",
        bits: 1 << 8,
        modes: ALL_MODES,
        clock_rate: Some(0.75),
    },
    ModInfo {
        acronym: "FL",
        bits: 1 << 10,
        modes: ALL_MODES,
        clock_rate: None,
    },
    ModInfo {
        acronym: "SO",
        bits: 1 << 12,
        modes: ONLY_TAP,
        clock_rate: None,
    },
];

fn mod_info(acronym: Acronym) -> Option<&'static ModInfo> {
    KNOWN_MODS
        .iter()
        .find(|info| info.acronym == acronym.as_str())
}

const fn mode_mask(mode: GameMode) -> u8 {
    1 << mode as u8
}

/// A single mod with its settings.
#[derive(Clone, Debug, PartialEq)]
pub struct GameMod {
    pub acronym: Acronym,
    pub settings: ModSettings,
}

impl GameMod {
    /// Create a mod without settings.
    pub const fn new(acronym: Acronym) -> Self {
        Self {
            acronym,
            settings: ModSettings { speed_change: None },
        }
    }
}

/// Numeric mod settings.
///
/// Unknown settings are dropped (or rejected, depending on strictness) while
/// decoding so only settings the calculators use are kept.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModSettings {
    /// Custom clock rate multiplier of rate-changing mods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_change: Option<f64>,
}

#[derive(Serialize, Deserialize)]
struct ModWire {
    acronym: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    settings: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Collection of mods scoped to a [`GameMode`].
///
/// Can be created empty, from legacy bitflags, from acronyms, or from the
/// JSON representation `[{ "acronym": "DT", "settings": { "speed_change": 1.4 } }]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameMods {
    mode: GameMode,
    mods: Vec<GameMod>,
}

impl GameMods {
    /// Create an empty mod collection for the given mode.
    pub const fn new(mode: GameMode) -> Self {
        Self {
            mode,
            mods: Vec::new(),
        }
    }

    /// The mode the mods are scoped to.
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Decode legacy bitflags.
    ///
    /// Flags without a matching mod and mods that are not legal for the mode
    /// are ignored, making this a lossy roundtrip for collections that
    /// contain lazer-only mods.
    pub fn from_bits(bits: u32, mode: GameMode) -> Self {
        let mut mods = Self::new(mode);
        let mut remaining = bits;

        for info in KNOWN_MODS {
            if info.bits == 0 || remaining & info.bits != info.bits {
                continue;
            }

            if info.modes & mode_mask(mode) == 0 {
                continue;
            }

            if let Ok(acronym) = info.acronym.parse() {
                mods.insert(GameMod::new(acronym));
                // NC's flags cover DT's so consume them to keep DT out
                remaining &= !info.bits;
            }
        }

        mods
    }

    /// Parse a list of acronyms, rejecting anything unrecognized or not
    /// legal for the mode.
    pub fn from_acronyms(acronyms: &[&str], mode: GameMode) -> Result<Self, ParseModsError> {
        let mut mods = Self::new(mode);

        for acronym in acronyms {
            mods.try_insert(GameMod::new(acronym.parse()?))?;
        }

        Ok(mods)
    }

    /// Parse the JSON representation, silently dropping unrecognized mods
    /// and settings.
    pub fn from_json(json: &str, mode: GameMode) -> Result<Self, ParseModsError> {
        Self::from_wires(serde_json::from_str(json)?, mode, false)
    }

    /// Parse the JSON representation, rejecting unrecognized mods and
    /// settings.
    pub fn from_json_strict(json: &str, mode: GameMode) -> Result<Self, ParseModsError> {
        Self::from_wires(serde_json::from_str(json)?, mode, true)
    }

    fn from_wires(
        wires: Vec<ModWire>,
        mode: GameMode,
        strict: bool,
    ) -> Result<Self, ParseModsError> {
        let mut mods = Self::new(mode);

        for wire in wires {
            let Ok(acronym) = wire.acronym.parse::<Acronym>() else {
                if strict {
                    return Err(ParseModsError::InvalidAcronym(wire.acronym));
                }

                log_dropped(&wire.acronym);

                continue;
            };

            let legal = mod_info(acronym)
                .is_some_and(|info| info.modes & mode_mask(mode) != 0);

            if !legal {
                if strict {
                    return Err(ParseModsError::UnknownMod(wire.acronym));
                }

                log_dropped(&wire.acronym);

                continue;
            }

            let mut game_mod = GameMod::new(acronym);

            if let Some(settings) = wire.settings {
                for (key, value) in settings {
                    match (key.as_str(), value.as_f64()) {
                        ("speed_change", Some(rate)) => {
                            game_mod.settings.speed_change = Some(rate);
                        }
                        _ if strict => return Err(ParseModsError::UnknownSetting(key)),
                        _ => log_dropped(&key),
                    }
                }
            }

            mods.insert(game_mod);
        }

        Ok(mods)
    }

    /// Insert a mod without validating it, replacing a previous entry of the
    /// same acronym.
    ///
    /// Use [`try_insert`] to validate the mod against the collection's mode
    /// or [`remove_unknown`] to clean up afterwards.
    ///
    /// [`try_insert`]: Self::try_insert
    /// [`remove_unknown`]: Self::remove_unknown
    pub fn insert(&mut self, game_mod: GameMod) {
        if let Some(entry) = self
            .mods
            .iter_mut()
            .find(|entry| entry.acronym == game_mod.acronym)
        {
            *entry = game_mod;
        } else {
            self.mods.push(game_mod);
        }
    }

    /// Insert a mod, validating that it is recognized and legal for the
    /// collection's mode.
    pub fn try_insert(&mut self, game_mod: GameMod) -> Result<(), ParseModsError> {
        let info = mod_info(game_mod.acronym)
            .ok_or_else(|| ParseModsError::UnknownMod(game_mod.acronym.as_str().to_owned()))?;

        if info.modes & mode_mask(self.mode) == 0 {
            return Err(ParseModsError::InvalidMode {
                acronym: game_mod.acronym.as_str().to_owned(),
                mode: self.mode,
            });
        }

        self.insert(game_mod);

        Ok(())
    }

    /// Whether the collection contains the given acronym.
    pub fn contains(&self, acronym: &str) -> bool {
        acronym
            .parse::<Acronym>()
            .is_ok_and(|acronym| self.mods.iter().any(|m| m.acronym == acronym))
    }

    /// Remove the mod with the given acronym.
    ///
    /// Returns whether a mod was removed.
    pub fn remove(&mut self, acronym: &str) -> bool {
        let Ok(acronym) = acronym.parse::<Acronym>() else {
            return false;
        };

        let len = self.mods.len();
        self.mods.retain(|m| m.acronym != acronym);

        self.mods.len() != len
    }

    /// Remove all mods.
    pub fn clear(&mut self) {
        self.mods.clear();
    }

    /// Remove all mods that are unrecognized or not legal for the
    /// collection's mode.
    pub fn remove_unknown(&mut self) {
        let mode = self.mode;

        self.mods.retain(|m| {
            let keep = mod_info(m.acronym).is_some_and(|info| info.modes & mode_mask(mode) != 0);

            if !keep {
                log_dropped(m.acronym.as_str());
            }

            keep
        });
    }

    /// The amount of mods in the collection.
    pub fn len(&self) -> usize {
        self.mods.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    /// Iterate over the contained mods.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &GameMod> {
        self.mods.iter()
    }

    /// The legacy bitflag representation.
    ///
    /// Lossy: lazer-only mods and custom settings have no flags.
    pub fn bits(&self) -> u32 {
        self.mods
            .iter()
            .filter_map(|m| mod_info(m.acronym))
            .fold(0, |bits, info| bits | info.bits)
    }

    /// The lossless JSON representation.
    pub fn json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The clock rate multiplier of the contained rate-changing mod.
    ///
    /// Returns `None` if no rate-changing mod is present; callers are
    /// expected to fall back to `1.0`.
    pub fn clock_rate(&self) -> Option<f64> {
        self.mods.iter().find_map(|m| {
            let default = mod_info(m.acronym)?.clock_rate?;

            Some(m.settings.speed_change.unwrap_or(default))
        })
    }

    /// Resolve redundant and mutually exclusive mods to a canonical set.
    ///
    /// Only the last inserted rate-changing mod is kept and `EZ` is dropped
    /// when `HR` is present.
    pub fn sanitize(&mut self) {
        let rate_mods = self
            .mods
            .iter()
            .filter(|m| mod_info(m.acronym).is_some_and(|info| info.clock_rate.is_some()))
            .count();

        if rate_mods > 1 {
            let mut seen = 0;

            // iterate back to front so the last inserted rate mod survives
            for i in (0..self.mods.len()).rev() {
                let is_rate =
                    mod_info(self.mods[i].acronym).is_some_and(|info| info.clock_rate.is_some());

                if is_rate {
                    seen += 1;

                    if seen > 1 {
                        self.mods.remove(i);
                    }
                }
            }
        }

        if self.contains("HR") {
            self.remove("EZ");
        }
    }

    pub(crate) fn nf(&self) -> bool {
        self.contains("NF")
    }

    pub(crate) fn ez(&self) -> bool {
        self.contains("EZ")
    }

    pub(crate) fn hd(&self) -> bool {
        self.contains("HD")
    }

    pub(crate) fn hr(&self) -> bool {
        self.contains("HR")
    }

    pub(crate) fn fl(&self) -> bool {
        self.contains("FL")
    }

    pub(crate) fn so(&self) -> bool {
        self.contains("SO")
    }

    pub(crate) fn od_ar_hp_multiplier(&self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    pub(crate) fn hardrock_offsets(&self) -> bool {
        self.hr()
    }
}

impl Serialize for GameMods {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.mods.len()))?;

        for m in &self.mods {
            let settings = m.settings.speed_change.map(|rate| {
                let mut map = serde_json::Map::new();
                map.insert("speed_change".to_owned(), rate.into());

                map
            });

            seq.serialize_element(&ModWire {
                acronym: m.acronym.as_str().to_owned(),
                settings,
            })?;
        }

        seq.end()
    }
}

/// Error while parsing mods.
#[derive(Debug, Error)]
pub enum ParseModsError {
    /// The acronym is not two alphanumeric characters.
    #[error("invalid acronym `{0}`")]
    InvalidAcronym(String),
    /// The acronym does not belong to a recognized mod.
    #[error("unknown mod `{0}`")]
    UnknownMod(String),
    /// The mod is recognized but not legal for the mode.
    #[error("mod `{acronym}` is not valid for {mode:?}")]
    InvalidMode { acronym: String, mode: GameMode },
    /// A mod carried a setting the calculators don't recognize.
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    /// The JSON document itself was malformed.
    #[error("failed to parse mods")]
    Json(#[from] serde_json::Error),
}

fn log_dropped(what: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!("dropping unrecognized mod data `{what}`");

    #[cfg(not(feature = "tracing"))]
    let _ = what;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_clock_rate() {
        let mods = GameMods::new(GameMode::Tap);
        assert_eq!(mods.clock_rate(), None);
    }

    #[test]
    fn double_time_is_exactly_one_point_five() {
        let mods = GameMods::from_acronyms(&["DT"], GameMode::Tap).unwrap();
        assert_eq!(mods.clock_rate(), Some(1.5));
    }

    #[test]
    fn custom_speed_change_overrides_default() {
        let json = r#"[{ "acronym": "DT", "settings": { "speed_change": 1.25 } }]"#;
        let mods = GameMods::from_json(json, GameMode::Tap).unwrap();
        assert_eq!(mods.clock_rate(), Some(1.25));
    }

    #[test]
    fn json_roundtrip() {
        let json = r#"[{"acronym":"HD"},{"acronym":"DT","settings":{"speed_change":1.4}}]"#;
        let mods = GameMods::from_json_strict(json, GameMode::Tap).unwrap();
        let reparsed = GameMods::from_json_strict(&mods.json().unwrap(), GameMode::Tap).unwrap();
        assert_eq!(mods, reparsed);
    }

    #[test]
    fn strict_rejects_unknown() {
        let json = r#"[{ "acronym": "XY" }]"#;
        assert!(GameMods::from_json_strict(json, GameMode::Tap).is_err());
        let lenient = GameMods::from_json(json, GameMode::Tap).unwrap();
        assert!(lenient.is_empty());
    }

    #[test]
    fn strict_rejects_unknown_setting() {
        let json = r#"[{ "acronym": "DT", "settings": { "adjust_pitch": true } }]"#;
        assert!(GameMods::from_json_strict(json, GameMode::Tap).is_err());
        let lenient = GameMods::from_json(json, GameMode::Tap).unwrap();
        assert_eq!(lenient.len(), 1);
        assert_eq!(lenient.clock_rate(), Some(1.5));
    }

    #[test]
    fn bits_roundtrip_for_legacy_mods() {
        let bits = (1 << 3) | (1 << 4) | (1 << 6);
        let mods = GameMods::from_bits(bits, GameMode::Tap);
        assert!(mods.contains("HD") && mods.contains("HR") && mods.contains("DT"));
        assert_eq!(mods.bits(), bits);
    }

    #[test]
    fn nightcore_bits_decode_to_single_mod() {
        let mods = GameMods::from_bits((1 << 6) | (1 << 9), GameMode::Tap);
        assert_eq!(mods.len(), 1);
        assert!(mods.contains("NC") && !mods.contains("DT"));
        assert_eq!(mods.clock_rate(), Some(1.5));
        assert_eq!(mods.bits(), (1 << 6) | (1 << 9));
    }

    #[test]
    fn daycore_has_no_bits() {
        let mods = GameMods::from_acronyms(&["DC"], GameMode::Keys).unwrap();
        assert_eq!(mods.bits(), 0);
        assert_eq!(mods.clock_rate(), Some(0.75));
    }

    #[test]
    fn sanitize_collapses_rate_mods() {
        let mut mods = GameMods::new(GameMode::Tap);
        mods.insert(GameMod::new("DT".parse().unwrap()));
        mods.insert(GameMod::new("HT".parse().unwrap()));
        mods.sanitize();
        assert_eq!(mods.len(), 1);
        assert!(mods.contains("HT"));
    }

    #[test]
    fn mode_scoped_validation() {
        let mut mods = GameMods::new(GameMode::Keys);
        let hr = GameMod::new("HR".parse().unwrap());
        assert!(mods.try_insert(hr.clone()).is_err());

        mods.insert(hr);
        assert_eq!(mods.len(), 1);
        mods.remove_unknown();
        assert!(mods.is_empty());
    }
}
