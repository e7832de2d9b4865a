/// A configuration option, with a name and bounds for external surfaces.
#[derive(Clone)]
pub struct ConfigOption<T> {
    /// The name of the option, as shown on the CLI.
    pub name: &'static str,

    /// The minimum value of the option.
    pub min: T,

    /// The maximum value of the option.
    pub max: T,

    /// The current value of the option.
    pub value: T,
}

impl<T: Copy> ConfigOption<T> {
    /// The (min, max) pair of the option.
    pub fn min_max(&self) -> (T, T) {
        (self.min, self.max)
    }
}
