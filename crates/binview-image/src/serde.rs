#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::status::{Status, ViewStatus};

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Status", 7)?;

        state.serialize_field("name", &self.name)?;
        state.serialize_field("elements", &self.elements)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("byte_width", &self.byte_width())?;
        state.serialize_field("alignment", &self.alignment)?;
        state.serialize_field("view", &self.view)?;
        state.serialize_field("message", &self.to_string())?;

        state.end()
    }
}

impl Serialize for ViewStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        match self {
            ViewStatus::Empty => serializer.serialize_unit_variant("ViewStatus", 0, "empty"),
            ViewStatus::Frame {
                width,
                height,
                mode,
                offset
            } => {
                let mut state = serializer.serialize_struct("Frame", 4)?;

                state.serialize_field("width", width)?;
                state.serialize_field("height", height)?;
                state.serialize_field("mode", mode)?;
                state.serialize_field("offset", offset)?;

                state.end()
            }
            ViewStatus::NotEnoughData => {
                serializer.serialize_unit_variant("ViewStatus", 2, "not_enough_data")
            }
        }
    }
}
