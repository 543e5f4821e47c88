//! Deferred configuration options
//!
//! Builders in this crate accept an ordered list of options. Each option is a
//! single deferred mutation over the builder's document; construction applies
//! defaults first, then caller options, strictly left to right. Overrides need
//! no priority system: a later option simply writes over an earlier one.

/// A single deferred mutation over a builder target.
///
/// Options are applied for side effect only and cannot fail. An option holds
/// nothing but the parameters captured at construction time.
pub struct ConfigOption<T> {
    mutate: Box<dyn FnOnce(&mut T)>,
}

impl<T> ConfigOption<T> {
    /// Wrap a mutation closure as an option.
    pub fn new(mutate: impl FnOnce(&mut T) + 'static) -> Self {
        Self {
            mutate: Box::new(mutate),
        }
    }

    /// Apply the option to the target, consuming it.
    pub fn apply(self, target: &mut T) {
        (self.mutate)(target);
    }
}

/// Apply `defaults`, then `overrides`, strictly in order.
///
/// Every option sees the cumulative effect of all options before it. None are
/// skipped, reordered, or deduplicated: scalar-setting options later in the
/// sequence win, and list-appending options accumulate once per application.
pub fn apply_all<T>(target: &mut T, defaults: Vec<ConfigOption<T>>, overrides: Vec<ConfigOption<T>>) {
    for option in defaults.into_iter().chain(overrides) {
        option.apply(target);
    }
}
