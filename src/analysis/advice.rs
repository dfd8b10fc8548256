//! Caregiver advice selection
//!
//! Maps a classified cause plus two caregiver-entered facts (hours since
//! the last feed, diaper state) to a canned action plan. The texts are
//! fixed SOPs, not generated content, so callers can rely on them being
//! stable across runs.

use std::str::FromStr;

use serde::Serialize;

use crate::analysis::result::CryCause;

/// Feeds within this many hours count as "recent" for the hunger advice
const FEED_RECENT_HOURS: f32 = 1.5;

/// Diaper state reported by the caregiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiaperState {
    /// Dry and clean
    Clean,
    /// Wet or dirty
    Soiled,
}

impl FromStr for DiaperState {
    type Err = String;

    /// Accepts `clean`, `soiled`, `dirty`, or `wet` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clean" => Ok(DiaperState::Clean),
            "soiled" | "dirty" | "wet" => Ok(DiaperState::Soiled),
            other => Err(format!(
                "unknown diaper state '{}' (expected clean, soiled, dirty, or wet)",
                other
            )),
        }
    }
}

/// Caregiver-supplied context for advice selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareContext {
    /// Hours since the last feed
    pub hours_since_feed: f32,

    /// Current diaper state
    pub diaper: DiaperState,
}

impl Default for CareContext {
    /// Mid-interval defaults: 2.5 hours since feeding, clean diaper
    fn default() -> Self {
        Self {
            hours_since_feed: 2.5,
            diaper: DiaperState::Clean,
        }
    }
}

/// Structured action plan for a classified cry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    /// One-line summary of the situation
    pub headline: &'static str,

    /// Ordered action steps
    pub steps: &'static [&'static str],

    /// Escalation note, when one applies
    pub caution: Option<&'static str>,
}

impl Advice {
    /// Render the plan as a small Markdown block
    pub fn to_markdown(&self) -> String {
        let mut out = format!("**{}**\n", self.headline);
        for (i, step) in self.steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
        if let Some(caution) = self.caution {
            out.push_str(&format!("> **Note**: {}\n", caution));
        }
        out
    }
}

/// Select the action plan for a cause and caregiver context
///
/// Hunger advice switches on whether the last feed was less than 1.5 hours
/// ago (strict comparison; exactly 1.5 hours counts as due for a feed).
/// Discomfort and attention-seeking share the diaper-first branch.
///
/// # Example
///
/// ```
/// use bawl_dsp::analysis::advice::{advise, CareContext};
/// use bawl_dsp::analysis::result::CryCause;
///
/// let advice = advise(CryCause::Tired, &CareContext::default());
/// assert!(advice.headline.contains("Over-tired"));
/// ```
pub fn advise(cause: CryCause, context: &CareContext) -> Advice {
    match cause {
        CryCause::Pain => Advice {
            headline: "Urgent checks, in order",
            steps: &[
                "Check for external injury, especially a hair tourniquet around a finger or toe.",
                "Take the baby's temperature to rule out fever.",
                "Feel the abdomen: if it is tight, suspect colic and try an airplane hold or a gentle tummy massage.",
            ],
            caution: Some(
                "If the high-pitched screaming continues after soothing, consult a doctor.",
            ),
        },
        CryCause::Hunger => {
            if context.hours_since_feed < FEED_RECENT_HOURS {
                Advice {
                    headline: "Fed recently, so this is probably not real hunger",
                    steps: &[
                        "Burp the baby first in case of trapped wind.",
                        "Offer a pacifier; this may be comfort sucking.",
                    ],
                    caution: None,
                }
            } else {
                Advice {
                    headline: "Body clock and cry signature both point to hunger",
                    steps: &["Prepare a feed right away."],
                    caution: None,
                }
            }
        }
        CryCause::Tired => Advice {
            headline: "Over-tired: lower the stimulation before settling",
            steps: &[
                "Dim the lights and turn off noisy devices.",
                "Play white noise and swaddle the baby to help them fall asleep.",
            ],
            caution: None,
        },
        CryCause::Discomfort | CryCause::Attention => {
            if context.diaper == DiaperState::Soiled {
                Advice {
                    headline: "Change the diaper first",
                    steps: &[
                        "Put on a fresh diaper.",
                        "Check the skin for diaper rash during the change.",
                    ],
                    caution: None,
                }
            } else {
                Advice {
                    headline: "Physical needs look met",
                    steps: &[
                        "Switch holding positions; this may simply be boredom.",
                        "Feel the back of the neck to check for overheating or chill.",
                        "Talk or sing to the baby for a while.",
                    ],
                    caution: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pain_advice_carries_caution() {
        let advice = advise(CryCause::Pain, &CareContext::default());
        assert_eq!(advice.steps.len(), 3);
        assert!(advice.caution.is_some());
        assert!(advice.steps[0].contains("hair tourniquet"));
    }

    #[test]
    fn test_hunger_advice_switches_on_feed_time() {
        let recent = CareContext {
            hours_since_feed: 0.5,
            diaper: DiaperState::Clean,
        };
        let advice = advise(CryCause::Hunger, &recent);
        assert!(advice.headline.contains("not real hunger"));

        let due = CareContext {
            hours_since_feed: 3.0,
            diaper: DiaperState::Clean,
        };
        let advice = advise(CryCause::Hunger, &due);
        assert!(advice.headline.contains("point to hunger"));
    }

    #[test]
    fn test_feed_boundary_counts_as_due() {
        // Exactly 1.5 hours is not "recent" (strict <)
        let boundary = CareContext {
            hours_since_feed: 1.5,
            diaper: DiaperState::Clean,
        };
        let advice = advise(CryCause::Hunger, &boundary);
        assert!(advice.headline.contains("point to hunger"));
    }

    #[test]
    fn test_soiled_diaper_takes_priority_for_fussing() {
        let soiled = CareContext {
            hours_since_feed: 2.5,
            diaper: DiaperState::Soiled,
        };

        for cause in [CryCause::Discomfort, CryCause::Attention] {
            let advice = advise(cause, &soiled);
            assert_eq!(advice.headline, "Change the diaper first");
        }
    }

    #[test]
    fn test_clean_diaper_suggests_interaction() {
        let advice = advise(CryCause::Attention, &CareContext::default());
        assert_eq!(advice.headline, "Physical needs look met");
        assert!(advice.steps.iter().any(|s| s.contains("back of the neck")));
    }

    #[test]
    fn test_markdown_rendering() {
        let advice = advise(CryCause::Pain, &CareContext::default());
        let md = advice.to_markdown();

        assert!(md.starts_with("**Urgent checks"));
        assert!(md.contains("1. Check for external injury"));
        assert!(md.contains("3. Feel the abdomen"));
        assert!(md.contains("> **Note**:"));
    }

    #[test]
    fn test_diaper_state_parsing() {
        assert_eq!("clean".parse::<DiaperState>(), Ok(DiaperState::Clean));
        assert_eq!("Clean".parse::<DiaperState>(), Ok(DiaperState::Clean));
        assert_eq!("dirty".parse::<DiaperState>(), Ok(DiaperState::Soiled));
        assert_eq!("WET".parse::<DiaperState>(), Ok(DiaperState::Soiled));
        assert_eq!("soiled".parse::<DiaperState>(), Ok(DiaperState::Soiled));
        assert!("damp".parse::<DiaperState>().is_err());
    }

    #[test]
    fn test_default_context() {
        let context = CareContext::default();
        assert!((context.hours_since_feed - 2.5).abs() < f32::EPSILON);
        assert_eq!(context.diaper, DiaperState::Clean);
    }
}
