//! Pointer and focus handling for a single day cell.
//!
//! [`Interaction`] is an immutable value; every event produces a new one via
//! [`Interaction::apply`]. The preview handed to the classifier is derived from
//! the current phase, never stored separately.

use tracing::debug;

use crate::{
    CalendarDay,
    range::{Color, DateRange, PreviewRange},
};

/// Pointer or focus event delivered to a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellEvent {
    Enter(CalendarDay),
    Leave,
    Focus(CalendarDay),
    Blur,
    Press(CalendarDay),
    Release(CalendarDay),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    Hovering {
        day: CalendarDay,
    },
    Dragging {
        anchor:  CalendarDay,
        current: CalendarDay,
    },
}

/// A finished drag, in gesture order (`start` may be after `end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commit {
    pub start: CalendarDay,
    pub end:   CalendarDay,
}

impl Commit {
    pub fn into_range(self, key: impl Into<String>, color: Option<Color>) -> DateRange {
        DateRange {
            key:        key.into(),
            start_date: Some(self.start),
            end_date:   Some(self.end),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interaction {
    phase:   Phase,
    hovered: bool,
    active:  bool,
}

/// Result of [`Interaction::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state:  Interaction,
    pub commit: Option<Commit>,
}

impl Transition {
    const fn stay(state: Interaction) -> Self {
        Self { state, commit: None }
    }
}

impl Interaction {
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Applies `event` to the cell. `disabled` marks an event on a disabled day,
    /// which drops any hover or drag and so clears the preview.
    pub fn apply(self, event: CellEvent, disabled: bool) -> Transition {
        if disabled {
            debug!(?event, "ignoring event on disabled day");
            return Transition::stay(Self {
                phase: Phase::Idle,
                ..self
            });
        }

        let next = match (self.phase, event) {
            (Phase::Dragging { anchor, .. }, CellEvent::Enter(day)) => Self {
                phase: Phase::Dragging { anchor, current: day },
                hovered: true,
                ..self
            },
            (_, CellEvent::Enter(day)) => Self {
                phase: Phase::Hovering { day },
                hovered: true,
                ..self
            },
            (Phase::Dragging { anchor, .. }, CellEvent::Focus(day)) => Self {
                phase: Phase::Dragging { anchor, current: day },
                ..self
            },
            (_, CellEvent::Focus(day)) => Self {
                phase: Phase::Hovering { day },
                ..self
            },
            (Phase::Hovering { .. }, CellEvent::Leave | CellEvent::Blur) => Self {
                phase: Phase::Idle,
                hovered: false,
                ..self
            },
            (_, CellEvent::Leave | CellEvent::Blur) => Self { hovered: false, ..self },
            (_, CellEvent::Press(day)) => Self {
                phase: Phase::Dragging {
                    anchor:  day,
                    current: day,
                },
                active: true,
                ..self
            },
            (Phase::Dragging { anchor, .. }, CellEvent::Release(day)) => {
                let commit = Commit { start: anchor, end: day };
                debug!(start = %commit.start, end = %commit.end, "drag committed");
                return Transition {
                    state:  Self {
                        phase: Phase::Idle,
                        active: false,
                        ..self
                    },
                    commit: Some(commit),
                };
            },
            (_, CellEvent::Release(_)) => Self { active: false, ..self },
        };

        if next.phase != self.phase {
            debug!(from = ?self.phase, to = ?next.phase, "interaction phase changed");
        }
        Transition::stay(next)
    }

    /// Preview implied by the current phase, painted with `color`.
    pub fn preview(&self, color: &Color) -> Option<PreviewRange> {
        match self.phase {
            Phase::Idle => None,
            Phase::Hovering { day } => Some(PreviewRange::new(Some(day), Some(day), color.clone())),
            Phase::Dragging { anchor, current } => Some(PreviewRange::new(Some(anchor), Some(current), color.clone())),
        }
    }
}

/// Folds a sequence of events, collecting every commit along the way.
pub fn replay<I>(events: I, disabled: impl Fn(&CellEvent) -> bool) -> (Interaction, Vec<Commit>)
where
    I: IntoIterator<Item = CellEvent>,
{
    events
        .into_iter()
        .fold((Interaction::default(), Vec::new()), |(state, mut commits), event| {
            let transition = state.apply(event, disabled(&event));
            commits.extend(transition.commit);
            (transition.state, commits)
        })
}
