use serde::{Deserialize, Serialize};

use crate::{CalendarDay, CalendarView, CellEvent, Classification, Interaction, Transition};

/// Facts about a day that the surrounding grid computes (month layout,
/// weekends, availability). They are carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayTraits {
    /// Day belongs to the previous or next month shown for padding.
    pub passive:        bool,
    pub disabled:       bool,
    pub today:          bool,
    pub weekend:        bool,
    pub start_of_week:  bool,
    pub end_of_week:    bool,
    pub start_of_month: bool,
    pub end_of_month:   bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    day:    CalendarDay,
    traits: DayTraits,
}

/// Everything a presentation layer needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSnapshot<'a> {
    pub day:            CalendarDay,
    pub label:          String,
    pub traits:         DayTraits,
    pub hovered:        bool,
    pub active:         bool,
    pub classification: Classification<'a>,
}

impl DayCell {
    pub const fn new(day: CalendarDay, traits: DayTraits) -> Self {
        Self { day, traits }
    }

    pub const fn day(&self) -> CalendarDay {
        self.day
    }

    pub const fn traits(&self) -> DayTraits {
        self.traits
    }

    /// Feeds `event` to `state`, flagging it as disabled when this cell is.
    pub fn handle(&self, state: Interaction, event: CellEvent) -> Transition {
        state.apply(event, self.traits.disabled)
    }

    pub fn snapshot<'a>(&self, view: &'a CalendarView, interaction: &Interaction) -> CellSnapshot<'a> {
        CellSnapshot {
            day:            self.day,
            label:          self.day.label(),
            traits:         self.traits,
            hovered:        interaction.is_hovered(),
            active:         interaction.is_active(),
            classification: view.classify(self.day),
        }
    }
}
