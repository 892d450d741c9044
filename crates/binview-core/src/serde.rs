#![cfg(feature = "serde")]

use serde::ser::*;

use crate::alignment::ByteAlignment;
use crate::color_mode::ColorMode;
use crate::numeric_kind::NumericKind;

impl Serialize for NumericKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // kinds serialize as their picker name, e.g `uint16`
        serializer.serialize_str(self.name())
    }
}

impl Serialize for ColorMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for ByteAlignment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_u8(self.get())
    }
}
