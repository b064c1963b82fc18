use std::collections::HashMap;

/// Name of the retention threshold parameter, in days.
pub const MAX_AGE_DAYS: &str = "max-age-days";

/// Name of the target directory parameter.
pub const DIRECTORY: &str = "directory";

/// Where a run gets its raw inputs from.
///
/// Values are looked up by a stable name and returned unvalidated; the
/// configuration resolver owns all checking.
pub trait ParameterSource {
    fn parameter(&self, name: &str) -> Option<String>;
}

impl ParameterSource for HashMap<String, String> {
    fn parameter(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn parameter(&self, name: &str) -> Option<String> {
        (**self).parameter(name)
    }
}
