//! crates/logging/src/levels.rs
//! Ordered severity scale with name lookup.

use ::core::str::FromStr;
use std::fmt;

use thiserror::Error;

/// Severity of a log event, ordered from least to most urgent.
///
/// The eight real severities match RFC 5424. [`Severity::None`] is a
/// threshold ceiling: it outranks every real severity, so a threshold of
/// `None` is never met and the corresponding behaviour (emission or flush)
/// is disabled. No log event ever carries `None` itself.
///
/// Comparisons use the declaration order, so threshold checks are plain
/// `>=` on the enum:
///
/// ```
/// use logging::Severity;
///
/// assert!(Severity::Error > Severity::Warning);
/// assert!(Severity::None > Severity::Emergency);
/// ```
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Debug-level messages.
    Debug,
    /// Informational messages.
    Info,
    /// Normal but significant condition.
    Notice,
    /// Warning conditions.
    Warning,
    /// Error conditions.
    Error,
    /// Critical conditions.
    Critical,
    /// Action must be taken immediately.
    Alert,
    /// System is unusable.
    Emergency,
    /// Threshold value meaning "never"; ranks above every real severity.
    None,
}

/// Error returned when parsing a [`Severity`] from an unrecognised name fails.
///
/// Surfaced from configuration paths only; an unknown level name must abort
/// logger construction rather than silently resolve to a default.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level name {name:?}")]
pub struct LevelParseError {
    name: String,
}

impl LevelParseError {
    /// Returns the name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Severity {
    /// All severities accepted by [`from_name`](Self::from_name), in rank order.
    pub const ALL: [Self; 9] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
        Self::None,
    ];

    /// Parses a severity name into the corresponding value.
    ///
    /// Recognised names are the eight RFC 5424 severities plus `none`,
    /// matched ASCII case-insensitively. Anything else fails with
    /// [`LevelParseError`]; there is no fallback default.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::from_name("warning"), Ok(Severity::Warning));
    /// assert_eq!(Severity::from_name("NONE"), Ok(Severity::None));
    /// assert!(Severity::from_name("verbose").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, LevelParseError> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "alert" => Ok(Self::Alert),
            "emergency" => Ok(Self::Emergency),
            "none" => Ok(Self::None),
            _ => Err(LevelParseError {
                name: name.to_owned(),
            }),
        }
    }

    /// Returns the canonical lowercase name, round-tripping with
    /// [`from_name`](Self::from_name).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Alert => "alert",
            Self::Emergency => "emergency",
            Self::None => "none",
        }
    }

    /// Returns the uppercase tag used in rendered log lines.
    ///
    /// `None` is a threshold value, never an event severity, so its tag
    /// never appears in output.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Alert => "ALERT",
            Self::Emergency => "EMERGENCY",
            Self::None => "NONE",
        }
    }

    /// Returns the integer rank used for ordering.
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl FromStr for Severity {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- ordering tests ---

    #[test]
    fn severities_are_totally_ordered() {
        for window in Severity::ALL.windows(2) {
            assert!(
                window[0] < window[1],
                "expected {} < {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn none_outranks_every_real_severity() {
        for severity in &Severity::ALL[..8] {
            assert!(Severity::None > *severity);
        }
    }

    #[test]
    fn rank_matches_declaration_order() {
        assert_eq!(Severity::Debug.rank(), 0);
        assert_eq!(Severity::Emergency.rank(), 7);
        assert_eq!(Severity::None.rank(), 8);
    }

    // --- from_name tests ---

    #[test]
    fn from_name_recognises_all_levels() {
        let cases = [
            ("debug", Severity::Debug),
            ("info", Severity::Info),
            ("notice", Severity::Notice),
            ("warning", Severity::Warning),
            ("error", Severity::Error),
            ("critical", Severity::Critical),
            ("alert", Severity::Alert),
            ("emergency", Severity::Emergency),
            ("none", Severity::None),
        ];

        for (name, expected) in &cases {
            assert_eq!(
                Severity::from_name(name),
                Ok(*expected),
                "failed for level name '{name}'"
            );
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Severity::from_name("INFO"), Ok(Severity::Info));
        assert_eq!(Severity::from_name("Warning"), Ok(Severity::Warning));
        assert_eq!(Severity::from_name("NoNe"), Ok(Severity::None));
    }

    #[test]
    fn from_name_rejects_unknown() {
        let err = Severity::from_name("verbose").expect_err("must not resolve");
        assert_eq!(err.name(), "verbose");

        assert!(Severity::from_name("").is_err());
        assert!(Severity::from_name("warn").is_err());
        assert!(Severity::from_name("err").is_err());
        assert!(Severity::from_name("info ").is_err());
    }

    #[test]
    fn from_str_delegates_to_from_name() {
        assert_eq!("critical".parse(), Ok(Severity::Critical));
        assert!("trace".parse::<Severity>().is_err());
    }

    // --- name round-trip tests ---

    #[test]
    fn as_str_round_trips_with_from_name() {
        for severity in Severity::ALL {
            let name = severity.as_str();
            assert_eq!(
                Severity::from_name(name),
                Ok(severity),
                "round-trip failed for {severity:?} (name={name})"
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::None), "none");
    }

    #[test]
    fn tag_is_uppercase_name() {
        for severity in Severity::ALL {
            assert_eq!(severity.tag(), severity.as_str().to_ascii_uppercase());
        }
    }

    // --- error tests ---

    #[test]
    fn parse_error_display_names_the_input() {
        let err = Severity::from_name("verbose").expect_err("must not resolve");
        assert_eq!(err.to_string(), "unrecognised log level name \"verbose\"");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn severity_serialises_as_lowercase_name() {
            let json = serde_json::to_string(&Severity::Warning).expect("serialise");
            assert_eq!(json, "\"warning\"");
        }

        #[test]
        fn severity_round_trips_through_json() {
            for severity in Severity::ALL {
                let json = serde_json::to_string(&severity).expect("serialise");
                let decoded: Severity = serde_json::from_str(&json).expect("deserialise");
                assert_eq!(severity, decoded);
            }
        }
    }
}
