//! Treatment selection, descriptive records, and the milestone
//! timeline.
//!
//! All clinical-sounding values here are illustrative constants, not
//! computed measurements. The selector maps a discrete treatment
//! choice to the info-panel sentence and a structured record; the
//! timeline's checkpoint completion is recomputed fresh from current
//! progress on every update rather than mutated in place.

use web_time::{Duration, SystemTime};

use crate::scene::MisalignmentVariant;

/// Seconds in one timeline week.
const WEEK_SECS: u64 = 7 * 24 * 60 * 60;
/// Seconds in one synthetic 30-day month.
const MONTH_SECS: u64 = 30 * 24 * 60 * 60;
/// Aligner course length in synthetic months.
const COURSE_MONTHS: u64 = 18;
/// Fixed estimate shown for the aligner course.
const COURSE_ESTIMATE: &str = "18-24 months";

/// Label and offset-from-start of each aligner milestone.
const MILESTONES: [(&str, u64); 6] = [
    ("Initial", 0),
    ("Aligner 1", 2 * WEEK_SECS),
    ("Aligner 5", 10 * WEEK_SECS),
    ("Aligner 10", 20 * WEEK_SECS),
    ("Aligner 20", 40 * WEEK_SECS),
    ("Final", COURSE_MONTHS * MONTH_SECS),
];

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Veneer finish styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VeneerStyle {
    /// Bright white, highly reflective finish.
    Hollywood,
    /// Natural finish with elongated central incisors.
    Dominant,
    /// Translucent finish matched to the natural tooth color.
    Porcelain,
}

impl VeneerStyle {
    /// Every style, in sidebar order.
    pub const ALL: [Self; 3] =
        [Self::Hollywood, Self::Dominant, Self::Porcelain];

    /// Capitalized display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hollywood => "Hollywood",
            Self::Dominant => "Dominant",
            Self::Porcelain => "Porcelain",
        }
    }
}

/// Active treatment choice. One selection at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreatmentSelection {
    /// No treatment selected.
    #[default]
    None,
    /// The draggable clear-aligner course.
    Invisalign,
    /// A veneer placement in the given style.
    Veneer(VeneerStyle),
}

impl TreatmentSelection {
    /// Apply toggle semantics: picking the already-active selection
    /// clears it, anything else replaces it.
    #[must_use]
    pub fn toggle(self, pick: Self) -> Self {
        if self == pick {
            Self::None
        } else {
            pick
        }
    }

    /// Whether this is the aligner selection.
    #[must_use]
    pub fn is_invisalign(self) -> bool {
        self == Self::Invisalign
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A labeled, dated milestone in the aligner timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Display label ("Aligner 5").
    pub label: &'static str,
    /// Scheduled date.
    pub date: SystemTime,
    /// Whether current progress has reached this milestone.
    pub complete: bool,
}

/// Structured data behind the measurements and timeline panels.
#[derive(Debug, Clone, PartialEq)]
pub enum TreatmentRecord {
    /// Aligner course with a dated milestone timeline.
    Aligner {
        /// Course start, seeded when the record is created.
        start_date: SystemTime,
        /// Projected course end, 18 synthetic months out.
        end_date: SystemTime,
        /// Ordered milestones; the first is pre-marked complete.
        checkpoints: Vec<Checkpoint>,
    },
    /// Veneer placement described by fixed per-style constants.
    Veneer {
        /// Chosen finish style.
        style: VeneerStyle,
        /// Facet thickness range.
        thickness: &'static str,
        /// Expected lifespan range.
        lifespan: &'static str,
        /// Number of visits for the procedure.
        procedure_duration: &'static str,
        /// Aftercare note.
        maintenance: &'static str,
    },
}

/// Descriptive output of the selector: the info-panel sentence plus
/// the structured record, when one applies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreatmentInfo {
    /// Info-panel sentence; empty when nothing is selected.
    pub info_text: String,
    /// Structured record for the measurements/timeline panels.
    pub record: Option<TreatmentRecord>,
}

/// One labeled row for the measurements panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Row label.
    pub label: &'static str,
    /// Row value.
    pub value: &'static str,
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Describe a treatment selection for display.
///
/// `variant` names the bite being treated in the aligner sentence; an
/// absent variant reads as an already-aligned bite. `now` seeds the
/// aligner timeline dates.
#[must_use]
pub fn describe(
    selection: TreatmentSelection,
    variant: Option<MisalignmentVariant>,
    now: SystemTime,
) -> TreatmentInfo {
    match selection {
        TreatmentSelection::None => TreatmentInfo::default(),
        TreatmentSelection::Invisalign => {
            let bite =
                variant.map_or("an aligned bite", MisalignmentVariant::label);
            TreatmentInfo {
                info_text: format!(
                    "Invisalign treatment for {bite}. \
                     Estimated time: {COURSE_ESTIMATE}."
                ),
                record: Some(aligner_plan(now)),
            }
        }
        TreatmentSelection::Veneer(style) => TreatmentInfo {
            info_text: veneer_info_text(style).to_owned(),
            record: Some(veneer_record(style)),
        },
    }
}

/// Seed the aligner course record with its six dated milestones.
#[must_use]
pub fn aligner_plan(now: SystemTime) -> TreatmentRecord {
    let checkpoints = MILESTONES
        .iter()
        .enumerate()
        .map(|(i, &(label, offset_secs))| Checkpoint {
            label,
            date: now + Duration::from_secs(offset_secs),
            complete: i == 0,
        })
        .collect();
    TreatmentRecord::Aligner {
        start_date: now,
        end_date: now + Duration::from_secs(COURSE_MONTHS * MONTH_SECS),
        checkpoints,
    }
}

fn veneer_info_text(style: VeneerStyle) -> &'static str {
    match style {
        VeneerStyle::Hollywood => {
            "Hollywood Veneers: Bright white, highly reflective porcelain \
             for a dramatic smile makeover. Typically lasts 10-15 years."
        }
        VeneerStyle::Dominant => {
            "Dominant Veneers: Natural-looking with slightly elongated \
             central incisors for a confident smile. Provides a balanced, \
             harmonious appearance."
        }
        VeneerStyle::Porcelain => {
            "Porcelain Veneers: Custom-matched to your natural tooth color \
             with translucent properties. Most natural-looking option with \
             excellent durability."
        }
    }
}

fn veneer_record(style: VeneerStyle) -> TreatmentRecord {
    let (thickness, lifespan, maintenance) = match style {
        VeneerStyle::Hollywood => (
            "0.5-0.7mm",
            "10-15 years",
            "Regular polishing, avoid staining foods",
        ),
        VeneerStyle::Dominant => (
            "0.4-0.6mm",
            "10-20 years",
            "Regular dental checkups, gentle brushing",
        ),
        VeneerStyle::Porcelain => (
            "0.3-0.5mm",
            "15-20 years",
            "Avoid biting hard objects, night guard recommended",
        ),
    };
    TreatmentRecord::Veneer {
        style,
        thickness,
        lifespan,
        procedure_duration: "2-3 visits",
        maintenance,
    }
}

// ---------------------------------------------------------------------------
// Checkpoint completion
// ---------------------------------------------------------------------------

/// Recompute which checkpoints current progress has reached.
///
/// Checkpoint `i` of `n` is complete iff `progress >= i/(n-1) * 100`.
/// Returns a fresh list; the stored checkpoints are never mutated in
/// place, so repeated recomputes cannot drift.
#[must_use]
pub fn completion_applied(
    checkpoints: &[Checkpoint],
    progress: u8,
) -> Vec<Checkpoint> {
    let n = checkpoints.len();
    checkpoints
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let threshold = if n <= 1 {
                0.0
            } else {
                i as f64 / (n - 1) as f64 * 100.0
            };
            Checkpoint {
                complete: f64::from(progress) >= threshold,
                ..c.clone()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

/// Rows for the measurements panel, derived from a record.
#[must_use]
pub fn measurements(record: &TreatmentRecord) -> Vec<Measurement> {
    match record {
        TreatmentRecord::Aligner { .. } => vec![
            Measurement {
                label: "Treatment Duration",
                value: COURSE_ESTIMATE,
            },
            Measurement {
                label: "Number of Aligners",
                value: "20-30 sets",
            },
            Measurement {
                label: "Wear Time",
                value: "22 hours/day",
            },
            Measurement {
                label: "Change Frequency",
                value: "1-2 weeks",
            },
            Measurement {
                label: "Check-ups",
                value: "Every 6-8 weeks",
            },
        ],
        TreatmentRecord::Veneer {
            style,
            thickness,
            lifespan,
            procedure_duration,
            ..
        } => vec![
            Measurement {
                label: "Veneer Type",
                value: style.label(),
            },
            Measurement {
                label: "Thickness",
                value: thickness,
            },
            Measurement {
                label: "Material",
                value: "Porcelain",
            },
            Measurement {
                label: "Lifespan",
                value: lifespan,
            },
            Measurement {
                label: "Procedure Time",
                value: procedure_duration,
            },
        ],
    }
}
