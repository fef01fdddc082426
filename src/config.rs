use serde::{Deserialize, Serialize};

use crate::{
    CalendarDay, CalendarView, DEFAULT_COLOR, DateError, DisplayMode, Interaction,
    range::{Color, DateRange},
};

/// Error type for loading a calendar configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong shape.
    #[error("Invalid calendar configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A date field failed validation.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Preview color was set to an empty string.
    #[error("Preview color must not be empty")]
    EmptyPreviewColor,
}

/// Static settings of a calendar: selection mode and colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    pub display_mode:  DisplayMode,
    /// Fallback range color, also used for the selected date.
    pub color:         Color,
    /// Color of the hover/drag preview; falls back to `color`.
    pub preview_color: Option<Color>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            display_mode:  DisplayMode::default(),
            color:         Color::from(DEFAULT_COLOR),
            preview_color: None,
        }
    }
}

impl CalendarConfig {
    /// Parses a JSON configuration; missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` for malformed input and
    /// `ConfigError::EmptyPreviewColor` for an empty preview color.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        if config.preview_color.as_ref().is_some_and(|color| color.is_empty()) {
            return Err(ConfigError::EmptyPreviewColor);
        }
        Ok(config)
    }

    pub fn preview_color(&self) -> &Color {
        self.preview_color.as_ref().unwrap_or(&self.color)
    }

    /// Builds the view for one render pass. The preview comes from `interaction`.
    pub fn view(&self, date: Option<CalendarDay>, ranges: Vec<DateRange>, interaction: &Interaction) -> CalendarView {
        CalendarView {
            display_mode: self.display_mode,
            date,
            ranges,
            preview: interaction.preview(self.preview_color()),
            color: self.color.clone(),
        }
    }

    /// Like [`CalendarConfig::view`], parsing the single-mode reference date.
    ///
    /// # Errors
    /// Returns `ConfigError::Date` if `date` is not a valid `YYYY-MM-DD` day.
    pub fn view_for_date(&self, date: &str, interaction: &Interaction) -> Result<CalendarView, ConfigError> {
        let date = date.parse::<CalendarDay>()?;
        Ok(self.view(Some(date), Vec::new(), interaction))
    }
}
