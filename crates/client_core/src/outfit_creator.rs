//! "AI Creator" view: collect three choices, then pretend to build an outfit.

use std::{fmt, time::Duration};

use thiserror::Error;
use tokio::runtime::Handle;
use tracing::info;

use crate::tasks::{OperationToken, ViewTasks};

pub const OUTFIT_CREATION_DELAY: Duration = Duration::from_millis(2000);
pub const CREATION_CONFIRMATION: &str = "Outfit created successfully! Check your saved outfits.";
pub const NOT_SELECTED: &str = "Not selected";

pub const WEATHER_OPTIONS: [&str; 5] = ["Sunny", "Rainy", "Cold", "Hot", "Windy"];
pub const STYLE_OPTIONS: [&str; 5] = ["Casual", "Formal", "Business", "Sport", "Party"];
pub const GARMENT_OPTIONS: [&str; 4] = ["Top & Bottom", "Dress", "Full Set", "Accessories"];

const VIEW: &str = "outfit_creator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    Weather,
    Style,
    GarmentType,
}

impl PreferenceField {
    pub const ALL: [PreferenceField; 3] = [
        PreferenceField::Weather,
        PreferenceField::Style,
        PreferenceField::GarmentType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PreferenceField::Weather => "Weather",
            PreferenceField::Style => "Style",
            PreferenceField::GarmentType => "Type",
        }
    }

    /// Suggested values shown as buttons; any non-blank value is accepted.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            PreferenceField::Weather => &WEATHER_OPTIONS,
            PreferenceField::Style => &STYLE_OPTIONS,
            PreferenceField::GarmentType => &GARMENT_OPTIONS,
        }
    }
}

impl fmt::Display for PreferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSelection {
    pub weather: Option<String>,
    pub style: Option<String>,
    pub garment_type: Option<String>,
}

impl PreferenceSelection {
    /// Blank values read as unset.
    pub fn get(&self, field: PreferenceField) -> Option<&str> {
        let value = match field {
            PreferenceField::Weather => &self.weather,
            PreferenceField::Style => &self.style,
            PreferenceField::GarmentType => &self.garment_type,
        };
        value.as_deref().filter(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, field: PreferenceField, value: impl Into<String>) {
        let slot = match field {
            PreferenceField::Weather => &mut self.weather,
            PreferenceField::Style => &mut self.style,
            PreferenceField::GarmentType => &mut self.garment_type,
        };
        *slot = Some(value.into());
    }

    pub fn missing(&self) -> Vec<PreferenceField> {
        PreferenceField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateRejected {
    #[error("select {} before creating an outfit", join_fields(.missing))]
    Incomplete { missing: Vec<PreferenceField> },
    #[error("an outfit is already being created")]
    AlreadyCreating,
}

fn join_fields(fields: &[PreferenceField]) -> String {
    fields
        .iter()
        .map(|field| field.label().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

enum CreatorEvent {
    CreationElapsed,
}

pub struct OutfitCreator {
    tasks: ViewTasks<CreatorEvent>,
    preferences: PreferenceSelection,
    creating: Option<OperationToken>,
    notification: Option<String>,
}

impl OutfitCreator {
    pub fn new(runtime: Handle) -> Self {
        Self {
            tasks: ViewTasks::new(runtime),
            preferences: PreferenceSelection::default(),
            creating: None,
            notification: None,
        }
    }

    pub fn preferences(&self) -> &PreferenceSelection {
        &self.preferences
    }

    pub fn set_preference(&mut self, field: PreferenceField, value: impl Into<String>) {
        self.preferences.set(field, value);
    }

    pub fn is_valid(&self) -> bool {
        self.preferences.is_complete()
    }

    pub fn is_creating(&self) -> bool {
        self.creating.is_some()
    }

    pub fn can_create(&self) -> bool {
        self.is_valid() && !self.is_creating()
    }

    /// Each field with its value, or "Not selected".
    pub fn summary(&self) -> Vec<(PreferenceField, &str)> {
        PreferenceField::ALL
            .into_iter()
            .map(|field| (field, self.preferences.get(field).unwrap_or(NOT_SELECTED)))
            .collect()
    }

    pub fn create(&mut self) -> Result<(), CreateRejected> {
        if self.is_creating() {
            return Err(CreateRejected::AlreadyCreating);
        }
        let missing = self.preferences.missing();
        if !missing.is_empty() {
            return Err(CreateRejected::Incomplete { missing });
        }

        info!(
            view = VIEW,
            weather = self.preferences.get(PreferenceField::Weather).unwrap_or_default(),
            style = self.preferences.get(PreferenceField::Style).unwrap_or_default(),
            garment_type = self.preferences.get(PreferenceField::GarmentType).unwrap_or_default(),
            "creating outfit"
        );
        let token = self.tasks.schedule_after(
            "create_outfit",
            OUTFIT_CREATION_DELAY,
            CreatorEvent::CreationElapsed,
        );
        self.creating = Some(token);
        Ok(())
    }

    /// The confirmation is handed out once.
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }

    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some((token, event)) = self.tasks.try_next() {
            self.apply(token, event);
            applied += 1;
        }
        applied
    }

    pub async fn next_event(&mut self) -> bool {
        match self.tasks.next().await {
            Some((token, event)) => {
                self.apply(token, event);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, token: OperationToken, event: CreatorEvent) {
        match event {
            CreatorEvent::CreationElapsed if self.creating == Some(token) => {
                self.creating = None;
                self.notification = Some(CREATION_CONFIRMATION.to_string());
                info!(view = VIEW, "outfit creation finished");
            }
            CreatorEvent::CreationElapsed => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/outfit_creator_tests.rs"]
mod tests;
