use crate::domain::errors::ConfigReadResult;

/// Port for obtaining the raw agent config document.
///
/// Absence is not an error: implementations return `Ok(None)` when there is
/// nothing to validate, and reserve `Err` for documents that exist but cannot
/// be read.
pub trait ConfigSource {
    /// Human-readable name of the document, used in status messages.
    ///
    /// For file-backed sources this is the file name, not the full path.
    fn describe(&self) -> String;

    /// Read the whole document.
    ///
    /// # Returns
    /// * `Ok(Some(text))` - the document exists and was read
    /// * `Ok(None)` - there is no document
    /// * `Err(ConfigReadError)` - the document exists but could not be read
    fn read(&self) -> ConfigReadResult<Option<String>>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read(&self) -> ConfigReadResult<Option<String>> {
        (**self).read()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read(&self) -> ConfigReadResult<Option<String>> {
        (**self).read()
    }
}
