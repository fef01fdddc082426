use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    CalendarDay,
    range::{Bounds, Color, DateRange, PreviewRange, Span, normalize},
};

/// Selection semantics of a calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// A single selected date.
    Date,
    /// One or more named ranges, with an optional preview.
    #[default]
    DateRange,
}

/// How one day relates to one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Segment {
    /// The day is unrelated to the range.
    None,
    /// Strictly between the start and end days.
    InRange,
    StartEdge,
    EndEdge,
    /// Start and end fall on this same day; both edges are drawn.
    SingleDay,
}

impl Segment {
    /// Places `day` against already normalized bounds.
    pub fn of(day: CalendarDay, bounds: &Bounds) -> Self {
        // A range with no endpoints would otherwise cover every day.
        if bounds.is_unbounded() {
            return Self::None;
        }
        if bounds.contains_strictly(day) {
            return Self::InRange;
        }
        match (bounds.is_start_edge(day), bounds.is_end_edge(day)) {
            (true, true) => Self::SingleDay,
            (true, false) => Self::StartEdge,
            (false, true) => Self::EndEdge,
            (false, false) => Self::None,
        }
    }

    pub const fn is_in_range(self) -> bool {
        matches!(self, Self::InRange)
    }

    pub const fn is_start_edge(self) -> bool {
        matches!(self, Self::StartEdge | Self::SingleDay)
    }

    pub const fn is_end_edge(self) -> bool {
        matches!(self, Self::EndEdge | Self::SingleDay)
    }

    /// True unless the day is unrelated to the range.
    pub const fn touches(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Normalizes `span` and places `day` against it.
pub fn segment_of<S: Span + ?Sized>(day: CalendarDay, span: &S) -> Segment {
    Segment::of(day, &normalize(span))
}

/// Everything the classifier needs to know about the calendar being drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Reference date for [`DisplayMode::Date`].
    #[serde(default)]
    pub date:         Option<CalendarDay>,
    #[serde(default)]
    pub ranges:       Vec<DateRange>,
    #[serde(default)]
    pub preview:      Option<PreviewRange>,
    /// Fallback for ranges without their own color, and the selected-date color.
    pub color:        Color,
}

impl CalendarView {
    pub fn classify(&self, day: CalendarDay) -> Classification<'_> {
        classify(day, self)
    }
}

/// A committed range that touches the classified day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeMark<'a> {
    pub key:     &'a str,
    pub segment: Segment,
    pub color:   &'a Color,
}

/// The preview range's placement, drawn above every [`RangeMark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewMark<'a> {
    pub segment: Segment,
    pub color:   &'a Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum Classification<'a> {
    Date {
        selected: bool,
        color:    &'a Color,
    },
    DateRange {
        ranges:  Vec<RangeMark<'a>>,
        preview: Option<PreviewMark<'a>>,
    },
}

impl<'a> Classification<'a> {
    /// True if the day is the selected date, or touches any range or the preview.
    pub fn is_marked(&self) -> bool {
        match self {
            Self::Date { selected, .. } => *selected,
            Self::DateRange { ranges, preview } => {
                !ranges.is_empty() || preview.is_some_and(|mark| mark.segment.touches())
            },
        }
    }

    pub fn ranges(&self) -> &[RangeMark<'a>] {
        match self {
            Self::Date { .. } => &[],
            Self::DateRange { ranges, .. } => ranges,
        }
    }

    pub const fn preview(&self) -> Option<PreviewMark<'a>> {
        match self {
            Self::Date { .. } => None,
            Self::DateRange { preview, .. } => *preview,
        }
    }
}

/// Classifies one day of `view`.
///
/// In [`DisplayMode::Date`] only the reference date matters. In
/// [`DisplayMode::DateRange`] every range touching the day is reported in the
/// order given, followed separately by the preview when one is present.
pub fn classify(day: CalendarDay, view: &CalendarView) -> Classification<'_> {
    match view.display_mode {
        DisplayMode::Date => {
            let selected = view.date == Some(day);
            trace!(%day, selected, "classified day in date mode");
            Classification::Date {
                selected,
                color: &view.color,
            }
        },
        DisplayMode::DateRange => {
            let ranges: Vec<RangeMark<'_>> = view
                .ranges
                .iter()
                .filter_map(|range| {
                    let segment = segment_of(day, range);
                    segment.touches().then(|| RangeMark {
                        key: &range.key,
                        segment,
                        color: range.color.as_ref().unwrap_or(&view.color),
                    })
                })
                .collect();

            let preview = view.preview.as_ref().map(|preview| PreviewMark {
                segment: segment_of(day, preview),
                color:   &preview.color,
            });

            trace!(%day, ranges = ranges.len(), has_preview = preview.is_some(), "classified day in range mode");
            Classification::DateRange { ranges, preview }
        },
    }
}
