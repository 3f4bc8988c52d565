use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Only the settings layer can fail. The decision engine and the mask compositor are total,
/// and a bad layout table is rejected by a const assertion when it is built.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display("Unknown setting key")]
    UnknownSettingKey,

    #[display("Setting `{key}` has the wrong value type")]
    SettingTypeMismatch { key: &'static str },

    #[display("Setting `{key}` is out of range")]
    SettingOutOfRange { key: &'static str },

    #[display("Settings store is full")]
    SettingsStoreFull,
}
