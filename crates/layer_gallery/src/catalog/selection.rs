//! Host-side selection state: the chosen example plus its live control values.
use crate::catalog::controls::{ControlPolicy, ControlValues};
use crate::catalog::descriptor::ExampleDescriptor;
use crate::catalog::prop::Props;
use crate::catalog::registry::Catalog;
use crate::error::Result;

/// The example a gallery host currently shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    category: String,
    example: String,
    controls: ControlValues,
}

impl Selection {
    /// Selects `(category, example)` and seeds its control values.
    pub fn new(catalog: &Catalog, category: &str, example: &str) -> Result<Self> {
        let descriptor = catalog.get_descriptor(category, example)?;
        Ok(Self {
            category: category.to_owned(),
            example: example.to_owned(),
            controls: descriptor.initial_control_values(),
        })
    }

    /// Selects the first example of the first category.
    pub fn first(catalog: &Catalog) -> Option<Self> {
        let (category, example, descriptor) = catalog.iter().next()?;
        Some(Self {
            category: category.to_owned(),
            example: example.to_owned(),
            controls: descriptor.initial_control_values(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn controls(&self) -> &ControlValues {
        &self.controls
    }

    pub fn descriptor<'a>(&self, catalog: &'a Catalog) -> Result<&'a ExampleDescriptor> {
        catalog.get_descriptor(&self.category, &self.example)
    }

    pub fn set_control(&mut self, name: &str, value: f64, policy: ControlPolicy) -> Result<f64> {
        self.controls.set(name, value, policy)
    }

    /// Advances an animated control by one step.
    pub fn tick(&mut self, name: &str) -> Result<f64> {
        self.controls.step_forward(name)
    }

    /// Properties to hand to the renderer for the current frame.
    pub fn props(&self, catalog: &Catalog) -> Result<Props> {
        Ok(self.descriptor(catalog)?.props_with_controls(&self.controls))
    }
}
