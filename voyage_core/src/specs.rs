//! # Vessel Speed & Consumption Parser
//!
//! Turns a free-form vessel "speed and consumption" description into four
//! numeric fields plus a fuel-type tag. The descriptions are human-authored
//! and inconsistently spaced/punctuated, e.g.
//!
//! ```text
//! 14. 0kts ( b ) / 13. 5kts ( l ) on 24. 0 mt ( b ) / 26. 0 mt ( l ) vlsfo
//! ```
//!
//! Two interchangeable extraction strategies share one output contract:
//!
//! - [`PatternExtractor`] - deterministic, regex-level extraction
//! - [`AiExtractor`] - delegates to a language model through the
//!   [`TextCompletion`] seam, with a strict-JSON reply contract
//!
//! Select a strategy at the call boundary via the
//! [`SpeedConsumptionExtractor`] trait; never branch on strategy identity
//! downstream.
//!
//! ## Validation policy (single source of truth)
//!
//! A zero or missing value in any of the four numeric fields is equivalent
//! to a failed extraction - never silently defaulted. On failure the parser
//! reports [`VoyageError::ManualInputRequired`] carrying the instruction
//! text and the logical names of the fields to re-supply. Once a caller
//! holds a successful [`Extraction`], that result is final for the session;
//! re-deriving the same figures is the orchestrator's mistake, not this
//! module's job.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{VoyageError, VoyageResult};

// ============================================================================
// Fuel Type
// ============================================================================

/// Bunker fuel grades recognized in speed/consumption descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuelType {
    /// Very low sulphur fuel oil (the default when no token is found)
    #[default]
    Vlsfo,
    /// Low sulphur fuel oil
    Lsfo,
    /// High sulphur fuel oil
    Hsfo,
    /// Low sulphur marine gas oil
    Lsmgo,
    /// Marine gas oil
    Mgo,
}

impl FuelType {
    /// Recognized fuel tokens, lower-case
    pub const TOKENS: [(&'static str, FuelType); 5] = [
        ("vlsfo", FuelType::Vlsfo),
        ("lsfo", FuelType::Lsfo),
        ("hsfo", FuelType::Hsfo),
        ("lsmgo", FuelType::Lsmgo),
        ("mgo", FuelType::Mgo),
    ];

    /// Parse a fuel token, case-insensitive. Returns `None` for unknown tokens.
    pub fn from_token(token: &str) -> Option<FuelType> {
        let lowered = token.trim().to_ascii_lowercase();
        Self::TOKENS
            .iter()
            .find(|(t, _)| *t == lowered)
            .map(|(_, f)| *f)
    }

    /// Canonical upper-case name ("VLSFO", "MGO", ...)
    pub fn code(&self) -> &'static str {
        match self {
            FuelType::Vlsfo => "VLSFO",
            FuelType::Lsfo => "LSFO",
            FuelType::Hsfo => "HSFO",
            FuelType::Lsmgo => "LSMGO",
            FuelType::Mgo => "MGO",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Vessel Speed & Consumption
// ============================================================================

/// The four numeric figures a voyage estimate needs from a vessel
/// description, plus the fuel grade they refer to.
///
/// Invariant: all four numeric fields must be finite and positive before
/// being used downstream. A zero or absent value is not a valid terminal
/// state and is escalated via [`VoyageError::ManualInputRequired`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "ballast_speed_knots": 14.0,
///   "laden_speed_knots": 13.5,
///   "ballast_consumption_mt_per_day": 24.0,
///   "laden_consumption_mt_per_day": 26.0,
///   "fuel_type": "Vlsfo"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselSpeedConsumption {
    /// Ballast (unladen) speed in knots
    pub ballast_speed_knots: f64,

    /// Laden speed in knots
    pub laden_speed_knots: f64,

    /// Ballast-leg bunker consumption in MT/day
    pub ballast_consumption_mt_per_day: f64,

    /// Laden-leg bunker consumption in MT/day
    pub laden_consumption_mt_per_day: f64,

    /// Fuel grade the consumption figures refer to
    pub fuel_type: FuelType,
}

/// Logical field names the caller must supply after a failed extraction.
/// The order matches the instruction text.
const MANUAL_FIELDS: [(&str, &str); 4] = [
    ("manual_ballast_speed", "Ballast Speed (knots)"),
    ("manual_laden_speed", "Laden Speed (knots)"),
    ("manual_ballast_consumption", "Ballast Consumption (MT/day)"),
    ("manual_laden_consumption", "Laden Consumption (MT/day)"),
];

const MANUAL_FUEL_FIELD: (&str, &str) = ("manual_fuel_type", "Fuel Type (e.g., VLSFO, MGO)");

impl VesselSpeedConsumption {
    /// Indices into [`MANUAL_FIELDS`] of the fields that are zero, negative
    /// or non-finite.
    fn invalid_field_indices(&self) -> Vec<usize> {
        let values = [
            self.ballast_speed_knots,
            self.laden_speed_knots,
            self.ballast_consumption_mt_per_day,
            self.laden_consumption_mt_per_day,
        ];
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_finite() || **v <= 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Enforce the all-fields-positive invariant.
    ///
    /// # Errors
    ///
    /// `ManualInputRequired` listing exactly the invalid fields.
    pub fn validate(&self) -> VoyageResult<()> {
        let invalid = self.invalid_field_indices();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(manual_input_error(&invalid))
        }
    }
}

/// Build the ManualInputRequired error for a set of invalid field indices.
/// An empty or full set asks for everything, fuel type included.
fn manual_input_error(invalid: &[usize]) -> VoyageError {
    let indices: Vec<usize> = if invalid.is_empty() {
        (0..MANUAL_FIELDS.len()).collect()
    } else {
        invalid.to_vec()
    };
    let all = indices.len() == MANUAL_FIELDS.len();

    let mut message = String::from(
        "Unable to extract vessel speed & bunker consumption automatically.\n\
         Please enter the following manually:\n",
    );
    let mut required = Vec::new();
    for &i in &indices {
        let (name, label) = MANUAL_FIELDS[i];
        message.push_str("- ");
        message.push_str(label);
        message.push('\n');
        required.push(name.to_string());
    }
    if all {
        let (name, label) = MANUAL_FUEL_FIELD;
        message.push_str("- ");
        message.push_str(label);
        message.push('\n');
        required.push(name.to_string());
    }

    VoyageError::manual_input_required(message.trim_end().to_string(), required)
}

// ============================================================================
// Extraction Contract
// ============================================================================

/// Which strategy produced an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Deterministic regex extraction
    Pattern,
    /// Language-model extraction through [`TextCompletion`]
    Ai,
    /// Caller-supplied values after a ManualInputRequired round trip
    Manual,
}

/// A successful extraction: the validated figures plus the mode that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// The four validated figures and fuel grade
    pub specs: VesselSpeedConsumption,
    /// Strategy that produced them
    pub mode: ExtractionMode,
}

/// One output contract for all extraction strategies.
///
/// Callers pick an implementation at the boundary and treat the result
/// uniformly; nothing downstream may branch on which strategy ran.
pub trait SpeedConsumptionExtractor {
    /// Extract the four figures and fuel type from a raw description.
    ///
    /// # Errors
    ///
    /// `ManualInputRequired` on pattern mismatch, AI failure, or any
    /// extracted field ≤ 0.
    fn extract(&self, raw: &str) -> VoyageResult<Extraction>;
}

/// Accept caller-supplied values after a `ManualInputRequired` round trip.
///
/// Applies the same positivity validation as the automatic strategies; the
/// fuel type defaults to VLSFO when the caller leaves it out.
pub fn manual_entry(
    ballast_speed_knots: f64,
    laden_speed_knots: f64,
    ballast_consumption_mt_per_day: f64,
    laden_consumption_mt_per_day: f64,
    fuel_type: Option<FuelType>,
) -> VoyageResult<Extraction> {
    let specs = VesselSpeedConsumption {
        ballast_speed_knots,
        laden_speed_knots,
        ballast_consumption_mt_per_day,
        laden_consumption_mt_per_day,
        fuel_type: fuel_type.unwrap_or_default(),
    };
    specs.validate()?;
    Ok(Extraction {
        specs,
        mode: ExtractionMode::Manual,
    })
}

// ============================================================================
// Normalization
// ============================================================================

static BROKEN_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)\s*\.\s*(\d)").expect("broken-decimal pattern"));

/// Collapse broken decimal notation: any `<digit> . <digit>` with stray
/// whitespace around the decimal point becomes `<digit>.<digit>`, so
/// "14. 0kts" reads as "14.0kts". Idempotent: normalizing an already
/// normalized string is a no-op.
pub fn normalize_decimals(raw: &str) -> String {
    BROKEN_DECIMAL.replace_all(raw, "$1.$2").into_owned()
}

// ============================================================================
// Pattern Extractor
// ============================================================================

static SPEED_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+\.?\d*)\s*kts\s*\(\s*b\s*\)\s*/\s*(\d+\.?\d*)\s*kts\s*\(\s*l\s*\)")
        .expect("speed-pair pattern")
});

static CONSUMPTION_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)on\s*(\d+\.?\d*)\s*mt\s*\(.*?b.*?\)\s*/\s*(\d+\.?\d*)\s*mt\s*\(.*?l.*?\)")
        .expect("consumption-pair pattern")
});

// Leftmost match wins, so an embedded token ("lsfo" inside "vlsfo",
// "mgo" inside "lsmgo") never shadows the full token starting earlier.
static FUEL_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(vlsfo|lsfo|hsfo|lsmgo|mgo)").expect("fuel-token pattern"));

/// Deterministic regex-level extraction.
///
/// Takes the first ballast/laden speed pair (`14.0kts ( b ) / 13.5kts ( l )`)
/// and the first ballast/laden consumption pair
/// (`on 24.0 mt ( b ) / 26.0 mt ( l )`), tolerant of internal whitespace,
/// and a fuel token from the fixed vocabulary, defaulting VLSFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl SpeedConsumptionExtractor for PatternExtractor {
    fn extract(&self, raw: &str) -> VoyageResult<Extraction> {
        let normalized = normalize_decimals(raw);

        let speeds = SPEED_PAIR.captures(&normalized);
        let consumptions = CONSUMPTION_PAIR.captures(&normalized);

        let (speeds, consumptions) = match (speeds, consumptions) {
            (Some(s), Some(c)) => (s, c),
            (s, c) => {
                debug!(
                    "pattern extraction failed: speeds={} consumptions={}",
                    s.is_some(),
                    c.is_some()
                );
                return Err(manual_input_error(&[]));
            }
        };

        // Capture groups are digit-only by construction, so parse cannot fail.
        let parse = |m: &regex::Captures, i: usize| -> f64 {
            m.get(i).map_or(0.0, |g| g.as_str().parse().unwrap_or(0.0))
        };

        let fuel_type = FUEL_TOKEN
            .find(&normalized)
            .and_then(|m| FuelType::from_token(m.as_str()))
            .unwrap_or_default();

        let specs = VesselSpeedConsumption {
            ballast_speed_knots: parse(&speeds, 1),
            laden_speed_knots: parse(&speeds, 2),
            ballast_consumption_mt_per_day: parse(&consumptions, 1),
            laden_consumption_mt_per_day: parse(&consumptions, 2),
            fuel_type,
        };
        specs.validate()?;

        Ok(Extraction {
            specs,
            mode: ExtractionMode::Pattern,
        })
    }
}

// ============================================================================
// AI-Assisted Extractor
// ============================================================================

/// Seam to the external text-completion service.
///
/// Implementations own all transport, timeout and retry concerns; any
/// service-specific failure must be translated into a [`VoyageError`]
/// before it reaches this crate's callers.
pub trait TextCompletion {
    /// Complete a prompt, returning the raw model reply.
    fn complete(&self, prompt: &str) -> VoyageResult<String>;
}

/// Strict-JSON reply contract for the AI extractor: exactly these five
/// fields, each nullable.
#[derive(Debug, Clone, Deserialize)]
struct AiReply {
    ballast_speed: Option<f64>,
    laden_speed: Option<f64>,
    ballast_consumption: Option<f64>,
    laden_consumption: Option<f64>,
    fuel_type: Option<String>,
}

/// Language-model extraction with a strict-JSON output contract.
///
/// The prompt documents the normalization rules the model must apply: fix
/// malformed decimals, broadcast a single speed/consumption value to both
/// ballast and laden when only one is present, and return all fields null
/// when nothing is found. The broadcast rule is also applied here so a
/// half-filled reply still yields a usable pair.
///
/// Any completion failure or unparseable reply is an extraction failure
/// (`ManualInputRequired`), never a fatal error.
#[derive(Debug, Clone)]
pub struct AiExtractor<C: TextCompletion> {
    client: C,
}

impl<C: TextCompletion> AiExtractor<C> {
    pub fn new(client: C) -> Self {
        AiExtractor { client }
    }

    fn prompt(raw: &str) -> String {
        format!(
            "You are a maritime technical data parser.\n\
             \n\
             Extract and normalize this vessel data:\n\
             \n\
             INPUT:\n\
             {raw}\n\
             \n\
             Return STRICT JSON:\n\
             \n\
             {{\n\
             \x20 \"ballast_speed\": float | null,\n\
             \x20 \"laden_speed\": float | null,\n\
             \x20 \"ballast_consumption\": float | null,\n\
             \x20 \"laden_consumption\": float | null,\n\
             \x20 \"fuel_type\": string | null\n\
             }}\n\
             \n\
             Rules:\n\
             - Fix broken decimals like \"11, 80\" -> 11.8\n\
             - If only one speed -> use it for both\n\
             - If only one consumption -> use it for both\n\
             - If nothing found -> return all fields as null"
        )
    }

    /// Broadcast a lone value to both legs of a pair.
    fn broadcast(a: Option<f64>, b: Option<f64>) -> (Option<f64>, Option<f64>) {
        match (a, b) {
            (Some(x), None) => (Some(x), Some(x)),
            (None, Some(y)) => (Some(y), Some(y)),
            other => other,
        }
    }
}

impl<C: TextCompletion> SpeedConsumptionExtractor for AiExtractor<C> {
    fn extract(&self, raw: &str) -> VoyageResult<Extraction> {
        let reply = match self.client.complete(&Self::prompt(raw)) {
            Ok(text) => text,
            Err(err) => {
                warn!("completion service failed, falling back to manual: {err}");
                return Err(manual_input_error(&[]));
            }
        };

        let parsed: AiReply = match serde_json::from_str(reply.trim()) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("AI reply was not strict JSON, falling back to manual: {err}");
                return Err(manual_input_error(&[]));
            }
        };

        let (ballast_speed, laden_speed) =
            Self::broadcast(parsed.ballast_speed, parsed.laden_speed);
        let (ballast_consumption, laden_consumption) =
            Self::broadcast(parsed.ballast_consumption, parsed.laden_consumption);

        let fuel_type = match parsed.fuel_type.as_deref() {
            Some(token) => FuelType::from_token(token).unwrap_or_else(|| {
                warn!("unrecognized fuel token {token:?}, defaulting to VLSFO");
                FuelType::default()
            }),
            None => FuelType::default(),
        };

        let specs = VesselSpeedConsumption {
            ballast_speed_knots: ballast_speed.unwrap_or(0.0),
            laden_speed_knots: laden_speed.unwrap_or(0.0),
            ballast_consumption_mt_per_day: ballast_consumption.unwrap_or(0.0),
            laden_consumption_mt_per_day: laden_consumption.unwrap_or(0.0),
            fuel_type,
        };
        specs.validate()?;

        Ok(Extraction {
            specs,
            mode: ExtractionMode::Ai,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOISY: &str =
        "14. 0kts ( b ) / 13. 5kts ( l ) on 24. 0 mt ( b ) / 26. 0 mt ( l ) vlsfo";

    #[test]
    fn test_normalize_broken_decimals() {
        assert_eq!(normalize_decimals("14. 0kts"), "14.0kts");
        assert_eq!(normalize_decimals("24 . 0 mt"), "24.0 mt");
        assert_eq!(normalize_decimals("13.5kts"), "13.5kts");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_decimals(NOISY);
        let twice = normalize_decimals(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pattern_extracts_noisy_string() {
        let extraction = PatternExtractor.extract(NOISY).unwrap();
        assert_eq!(extraction.mode, ExtractionMode::Pattern);

        let specs = extraction.specs;
        assert_eq!(specs.ballast_speed_knots, 14.0);
        assert_eq!(specs.laden_speed_knots, 13.5);
        assert_eq!(specs.ballast_consumption_mt_per_day, 24.0);
        assert_eq!(specs.laden_consumption_mt_per_day, 26.0);
        assert_eq!(specs.fuel_type, FuelType::Vlsfo);
    }

    #[test]
    fn test_pattern_extracts_clean_string() {
        let clean = "14.0kts ( b ) / 13.5kts ( l ) on 24.0 mt ( b ) / 26.0 mt ( l ) vlsfo";
        let specs = PatternExtractor.extract(clean).unwrap().specs;
        assert_eq!(specs.ballast_speed_knots, 14.0);
        assert_eq!(specs.laden_speed_knots, 13.5);
        assert_eq!(specs.fuel_type.code(), "VLSFO");
    }

    #[test]
    fn test_pattern_takes_first_pair() {
        // Eco figures after the main figures must be ignored
        let with_eco = "14.0kts ( b ) / 13.5kts ( l ) on 24.0 mt ( b ) / 26.0 mt ( l ) vlsfo \
                        eco ( wog ) : 12.5kts ( b ) / 12.0kts ( l ) on 18.5 mt ( b ) / 20.0 mt ( l ) vlsfo";
        let specs = PatternExtractor.extract(with_eco).unwrap().specs;
        assert_eq!(specs.ballast_speed_knots, 14.0);
        assert_eq!(specs.ballast_consumption_mt_per_day, 24.0);
    }

    #[test]
    fn test_pattern_mismatch_requires_manual_input() {
        let err = PatternExtractor.extract("gearless, grabs fitted").unwrap_err();
        match err {
            VoyageError::ManualInputRequired {
                required_inputs, ..
            } => {
                assert_eq!(
                    required_inputs,
                    vec![
                        "manual_ballast_speed",
                        "manual_laden_speed",
                        "manual_ballast_consumption",
                        "manual_laden_consumption",
                        "manual_fuel_type",
                    ]
                );
            }
            other => panic!("expected ManualInputRequired, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_field_is_never_defaulted() {
        // A zero laden speed parses fine but must still be escalated
        let zero_speed = "14.0kts ( b ) / 0kts ( l ) on 24.0 mt ( b ) / 26.0 mt ( l ) vlsfo";
        let err = PatternExtractor.extract(zero_speed).unwrap_err();
        match err {
            VoyageError::ManualInputRequired {
                required_inputs,
                message,
            } => {
                assert_eq!(required_inputs, vec!["manual_laden_speed"]);
                assert!(message.contains("Laden Speed"));
                assert!(!message.contains("Ballast Speed"));
            }
            other => panic!("expected ManualInputRequired, got {other:?}"),
        }
    }

    #[test]
    fn test_fuel_defaults_to_vlsfo() {
        let no_fuel = "14.0kts ( b ) / 13.5kts ( l ) on 24.0 mt ( b ) / 26.0 mt ( l )";
        let specs = PatternExtractor.extract(no_fuel).unwrap().specs;
        assert_eq!(specs.fuel_type, FuelType::Vlsfo);
    }

    #[test]
    fn test_fuel_token_lookup() {
        assert_eq!(FuelType::from_token("VLSFO"), Some(FuelType::Vlsfo));
        assert_eq!(FuelType::from_token("lsmgo"), Some(FuelType::Lsmgo));
        assert_eq!(FuelType::from_token("diesel"), None);
    }

    #[test]
    fn test_manual_entry_validates() {
        let ok = manual_entry(14.0, 13.5, 24.0, 26.0, Some(FuelType::Hsfo)).unwrap();
        assert_eq!(ok.mode, ExtractionMode::Manual);
        assert_eq!(ok.specs.fuel_type, FuelType::Hsfo);

        let err = manual_entry(14.0, 13.5, 0.0, 26.0, None).unwrap_err();
        assert!(err.is_recoverable());
    }

    // --- AI extractor, with a stubbed completion service ---

    struct CannedReply(&'static str);

    impl TextCompletion for CannedReply {
        fn complete(&self, _prompt: &str) -> VoyageResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingService;

    impl TextCompletion for FailingService {
        fn complete(&self, _prompt: &str) -> VoyageResult<String> {
            Err(VoyageError::calculation_failed(
                "completion",
                "service unavailable",
            ))
        }
    }

    #[test]
    fn test_ai_extracts_strict_json() {
        let extractor = AiExtractor::new(CannedReply(
            r#"{"ballast_speed": 14.0, "laden_speed": 13.5,
                "ballast_consumption": 24.0, "laden_consumption": 26.0,
                "fuel_type": "vlsfo"}"#,
        ));
        let extraction = extractor.extract(NOISY).unwrap();
        assert_eq!(extraction.mode, ExtractionMode::Ai);
        assert_eq!(extraction.specs.laden_consumption_mt_per_day, 26.0);
    }

    #[test]
    fn test_ai_broadcasts_single_values() {
        let extractor = AiExtractor::new(CannedReply(
            r#"{"ballast_speed": 13.0, "laden_speed": null,
                "ballast_consumption": null, "laden_consumption": 25.0,
                "fuel_type": null}"#,
        ));
        let specs = extractor.extract("13 kts on 25 mt").unwrap().specs;
        assert_eq!(specs.ballast_speed_knots, 13.0);
        assert_eq!(specs.laden_speed_knots, 13.0);
        assert_eq!(specs.ballast_consumption_mt_per_day, 25.0);
        assert_eq!(specs.laden_consumption_mt_per_day, 25.0);
        assert_eq!(specs.fuel_type, FuelType::Vlsfo);
    }

    #[test]
    fn test_ai_all_null_requires_manual_input() {
        let extractor = AiExtractor::new(CannedReply(
            r#"{"ballast_speed": null, "laden_speed": null,
                "ballast_consumption": null, "laden_consumption": null,
                "fuel_type": null}"#,
        ));
        let err = extractor.extract("no figures here").unwrap_err();
        assert_eq!(err.error_code(), "MANUAL_INPUT_REQUIRED");
    }

    #[test]
    fn test_ai_garbage_reply_requires_manual_input() {
        let extractor = AiExtractor::new(CannedReply("Sure! The speeds are 14 and 13.5 kts."));
        let err = extractor.extract(NOISY).unwrap_err();
        assert_eq!(err.error_code(), "MANUAL_INPUT_REQUIRED");
    }

    #[test]
    fn test_ai_service_failure_requires_manual_input() {
        let extractor = AiExtractor::new(FailingService);
        let err = extractor.extract(NOISY).unwrap_err();
        assert_eq!(err.error_code(), "MANUAL_INPUT_REQUIRED");
    }

    #[test]
    fn test_strategies_share_one_contract() {
        // Both strategies go through the trait object the same way
        let strategies: Vec<Box<dyn SpeedConsumptionExtractor>> = vec![
            Box::new(PatternExtractor),
            Box::new(AiExtractor::new(CannedReply(
                r#"{"ballast_speed": 14.0, "laden_speed": 13.5,
                    "ballast_consumption": 24.0, "laden_consumption": 26.0,
                    "fuel_type": "vlsfo"}"#,
            ))),
        ];
        for strategy in &strategies {
            let specs = strategy.extract(NOISY).unwrap().specs;
            assert_eq!(specs.ballast_speed_knots, 14.0);
            assert_eq!(specs.laden_speed_knots, 13.5);
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let extraction = Extraction {
            specs: VesselSpeedConsumption {
                ballast_speed_knots: 14.0,
                laden_speed_knots: 13.5,
                ballast_consumption_mt_per_day: 24.0,
                laden_consumption_mt_per_day: 26.0,
                fuel_type: FuelType::Vlsfo,
            },
            mode: ExtractionMode::Pattern,
        };
        let json = serde_json::to_string(&extraction).unwrap();
        let roundtrip: Extraction = serde_json::from_str(&json).unwrap();
        assert_eq!(extraction, roundtrip);
    }
}
