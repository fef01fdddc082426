use serde::{Deserialize, Serialize};

use crate::{CalendarDay, Moment, prelude::*};

/// Opaque display color ("#3d91ff", "rgb(...)", a theme token, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Read access to the two endpoints of a span of days.
///
/// Either endpoint may be absent (unbounded on that side), and the two may be
/// in either chronological order.
pub trait Span {
    fn start_date(&self) -> Option<CalendarDay>;
    fn end_date(&self) -> Option<CalendarDay>;
}

/// A named, committed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub key:        String,
    #[serde(default)]
    pub start_date: Option<CalendarDay>,
    #[serde(default)]
    pub end_date:   Option<CalendarDay>,
    #[serde(default)]
    pub color:      Option<Color>,
}

impl DateRange {
    pub fn new(key: impl Into<String>, start_date: Option<CalendarDay>, end_date: Option<CalendarDay>) -> Self {
        Self {
            key: key.into(),
            start_date,
            end_date,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Span for DateRange {
    fn start_date(&self) -> Option<CalendarDay> {
        self.start_date
    }

    fn end_date(&self) -> Option<CalendarDay> {
        self.end_date
    }
}

/// An uncommitted selection shown while hovering or dragging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRange {
    #[serde(default)]
    pub start_date: Option<CalendarDay>,
    #[serde(default)]
    pub end_date:   Option<CalendarDay>,
    pub color:      Color,
}

impl PreviewRange {
    pub fn new(start_date: Option<CalendarDay>, end_date: Option<CalendarDay>, color: impl Into<Color>) -> Self {
        Self {
            start_date,
            end_date,
            color: color.into(),
        }
    }
}

impl Span for PreviewRange {
    fn start_date(&self) -> Option<CalendarDay> {
        self.start_date
    }

    fn end_date(&self) -> Option<CalendarDay> {
        self.end_date
    }
}

/// Chronologically ordered endpoints of a span, with day-aligned boundaries.
///
/// The lower boundary is the end of the start day and the upper boundary is the
/// start of the end day, so neither edge day counts as strictly inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    start: Option<CalendarDay>,
    end:   Option<CalendarDay>,
}

impl Bounds {
    /// Orders `start` and `end` when both are present. Open sides stay open.
    pub fn new(start: Option<CalendarDay>, end: Option<CalendarDay>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) if e < s => Self {
                start: Some(e),
                end:   Some(s),
            },
            _ => Self { start, end },
        }
    }

    /// Effective (earlier) start day.
    pub const fn start(&self) -> Option<CalendarDay> {
        self.start
    }

    /// Effective (later) end day.
    pub const fn end(&self) -> Option<CalendarDay> {
        self.end
    }

    /// End of the effective start day.
    pub fn lower(&self) -> Option<Moment> {
        self.start.map(CalendarDay::end_of_day)
    }

    /// Start of the effective end day.
    pub fn upper(&self) -> Option<Moment> {
        self.end.map(CalendarDay::start_of_day)
    }

    /// `(lower, upper)` boundary pair.
    pub fn boundaries(&self) -> (Option<Moment>, Option<Moment>) {
        (self.lower(), self.upper())
    }

    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True if `day` lies strictly between the boundaries.
    pub fn contains_strictly(&self, day: CalendarDay) -> bool {
        self.lower().is_none_or(|lower| day.is_after(lower)) && self.upper().is_none_or(|upper| day.is_before(upper))
    }

    pub fn is_start_edge(&self, day: CalendarDay) -> bool {
        self.lower().is_some_and(|lower| day.is_same_day(lower))
    }

    pub fn is_end_edge(&self, day: CalendarDay) -> bool {
        self.upper().is_some_and(|upper| day.is_same_day(upper))
    }
}

impl Span for Bounds {
    fn start_date(&self) -> Option<CalendarDay> {
        self.start
    }

    fn end_date(&self) -> Option<CalendarDay> {
        self.end
    }
}

/// Orders a span's endpoints without touching the span itself.
pub fn normalize<S: Span + ?Sized>(span: &S) -> Bounds {
    Bounds::new(span.start_date(), span.end_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, range};

    #[test]
    fn test_normalize_orders_reversed_endpoints() {
        let reversed = range("a", Some(day(2024, 1, 5)), Some(day(2024, 1, 3)));
        let forward = range("a", Some(day(2024, 1, 3)), Some(day(2024, 1, 5)));

        let bounds = normalize(&reversed);
        assert_eq!(bounds, normalize(&forward));
        assert_eq!(bounds.start(), Some(day(2024, 1, 3)));
        assert_eq!(bounds.end(), Some(day(2024, 1, 5)));

        // Source range is left as given
        assert_eq!(reversed.start_date, Some(day(2024, 1, 5)));
        assert_eq!(reversed.end_date, Some(day(2024, 1, 3)));
    }

    #[test]
    fn test_boundaries_are_day_aligned() {
        let bounds = normalize(&range("a", Some(day(2024, 1, 3)), Some(day(2024, 1, 5))));
        assert_eq!(
            bounds.boundaries(),
            (Some(day(2024, 1, 3).end_of_day()), Some(day(2024, 1, 5).start_of_day()))
        );
    }

    #[test]
    fn test_open_sides_are_kept() {
        struct TestCase {
            start:       Option<CalendarDay>,
            end:         Option<CalendarDay>,
            lower:       Option<Moment>,
            upper:       Option<Moment>,
            description: &'static str,
        }

        let d = day(2024, 6, 1);
        let cases = [
            TestCase {
                start:       Some(d),
                end:         None,
                lower:       Some(d.end_of_day()),
                upper:       None,
                description: "open end",
            },
            TestCase {
                start:       None,
                end:         Some(d),
                lower:       None,
                upper:       Some(d.start_of_day()),
                description: "open start",
            },
            TestCase {
                start:       None,
                end:         None,
                lower:       None,
                upper:       None,
                description: "fully open",
            },
        ];

        for case in &cases {
            let bounds = Bounds::new(case.start, case.end);
            assert_eq!(bounds.boundaries(), (case.lower, case.upper), "{}", case.description);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let spans = [
            (Some(day(2024, 1, 5)), Some(day(2024, 1, 3))),
            (Some(day(2024, 1, 3)), Some(day(2024, 1, 5))),
            (Some(day(2024, 1, 3)), Some(day(2024, 1, 3))),
            (None, Some(day(2024, 1, 3))),
            (Some(day(2024, 1, 3)), None),
            (None, None),
        ];

        for (start, end) in spans {
            let source = range("a", start, end);
            let once = normalize(&source);
            assert_eq!(normalize(&once), once);
            assert_eq!(normalize(&source), once);
        }
    }

    #[test]
    fn test_contains_strictly_excludes_edges() {
        let bounds = Bounds::new(Some(day(2024, 1, 3)), Some(day(2024, 1, 5)));
        assert!(!bounds.contains_strictly(day(2024, 1, 3)));
        assert!(bounds.contains_strictly(day(2024, 1, 4)));
        assert!(!bounds.contains_strictly(day(2024, 1, 5)));
        assert!(bounds.is_start_edge(day(2024, 1, 3)));
        assert!(bounds.is_end_edge(day(2024, 1, 5)));
        assert!(!bounds.is_start_edge(day(2024, 1, 4)));
    }

    #[test]
    fn test_absent_endpoint_is_never_an_edge() {
        let bounds = Bounds::new(None, Some(day(2024, 1, 5)));
        assert!(!bounds.is_start_edge(day(2024, 1, 5)));
        assert!(!bounds.is_start_edge(day(1, 1, 1)));

        let bounds = Bounds::new(Some(day(2024, 1, 5)), None);
        assert!(!bounds.is_end_edge(day(2024, 1, 5)));
        assert!(!bounds.is_end_edge(day(9999, 12, 31)));
    }

    #[test]
    fn test_range_serde_shape() {
        let r = range("selection", Some(day(2024, 1, 3)), None).with_color("#ff0000");
        let json = serde_json::to_value(&r).expect("failed to serialize range");
        assert_eq!(
            json,
            serde_json::json!({
                "key": "selection",
                "startDate": "2024-01-03",
                "endDate": null,
                "color": "#ff0000",
            })
        );

        let parsed: DateRange =
            serde_json::from_str(r#"{"key":"selection","startDate":"2024-01-03"}"#).expect("failed to parse range");
        assert_eq!(parsed, range("selection", Some(day(2024, 1, 3)), None));
    }

    #[test]
    fn test_preview_serde_requires_color() {
        let result: Result<PreviewRange, _> = serde_json::from_str(r#"{"startDate":"2024-01-03"}"#);
        assert!(result.is_err());

        let parsed: PreviewRange = serde_json::from_str(r##"{"startDate":"2024-01-03","color":"#000"}"##)
            .expect("failed to parse preview");
        assert_eq!(parsed.color.as_str(), "#000");
        assert_eq!(parsed.end_date, None);
    }
}
