//! Modelos neutrales (valores, filas, parámetros, argumentos ligados).

pub mod bound;
pub mod enums;
pub mod row;
pub mod slot;
pub mod value;

pub use bound::{BoundArguments, RepetitionInfo};
pub use enums::{ArgumentEnum, EnumDefinition, EnumRegistry};
pub use row::{ArgumentRow, Arguments};
pub use slot::{ParameterSlot, SlotKind, TargetType, ACCESSOR_TYPE_NAME};
pub use value::{ArgValue, EnumMember, Opaque};
