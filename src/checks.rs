//! The fixed sequence of text-presence checks run against the dashboard,
//! expressed as data, plus the selector and report-line rendering for them.

/// How a query string is compared against on-page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Matches any element whose rendered text contains the query.
    Substring,
    /// Matches only elements whose rendered text equals the query.
    Exact,
}

/// One text-presence probe and the label used in its report lines.
#[derive(Debug, Clone, Copy)]
pub struct PresenceCheck {
    pub label: &'static str,
    pub text: &'static str,
    pub mode: MatchMode,
}

impl PresenceCheck {
    pub const fn substring(text: &'static str) -> Self {
        Self {
            label: text,
            text,
            mode: MatchMode::Substring,
        }
    }

    pub const fn exact(text: &'static str) -> Self {
        Self {
            label: text,
            text,
            mode: MatchMode::Exact,
        }
    }

    /// Playwright text selector for this check.
    ///
    /// The unquoted `text=` form is the engine's containment match; quoting
    /// switches it to exact matching, so the query is escaped before being
    /// quoted.
    pub fn selector(&self) -> String {
        match self.mode {
            MatchMode::Substring => format!("text={}", self.text),
            MatchMode::Exact => {
                let escaped = self.text.replace('"', "\\\"");
                format!("text=\"{}\"", escaped)
            }
        }
    }
}

/// A page section reached by scrolling: an exact-match anchor that gates a
/// set of nested checks which are reported only when found.
#[derive(Debug, Clone)]
pub struct SectionProbe {
    pub anchor: PresenceCheck,
    pub nested: Vec<PresenceCheck>,
}

/// The ordered check sequence for one pass. Top-level checks always report
/// both outcomes and never short-circuit each other; the stress-test section
/// is probed afterwards.
#[derive(Debug, Clone)]
pub struct VerifyPlan {
    pub top_level: Vec<PresenceCheck>,
    pub stress_test: SectionProbe,
}

impl Default for VerifyPlan {
    fn default() -> Self {
        Self {
            top_level: vec![
                PresenceCheck::substring("Profil Investisseur"),
                PresenceCheck::substring("Faisabilité Bancaire"),
                PresenceCheck::substring("Dossier Solide"),
                PresenceCheck::substring("Trajectoire 20 ans"),
                PresenceCheck::substring("Structure Fiscale"),
            ],
            // "Stress Test" must not match headings like "Stress Test
            // Results", hence the exact anchor.
            stress_test: SectionProbe {
                anchor: PresenceCheck::exact("Stress Test"),
                nested: vec![
                    PresenceCheck::substring("Vacance Élevée"),
                    PresenceCheck::substring("Baisse Loyers"),
                    PresenceCheck::substring("Hausse Charges"),
                ],
            },
        }
    }
}

/// Report line for a check, in the observed console format.
pub fn outcome_line(label: &str, found: bool) -> String {
    if found {
        format!("{} found.", label)
    } else {
        format!("{} NOT found.", label)
    }
}
