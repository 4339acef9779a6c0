use eyre::{Result, bail};
use protojson_core::GeneratedFile;
use protojson_ir::{GenerationOptions, SchemaUnit};
use tracing::{info, warn};

use crate::{
    files::JsonGoFile,
    lint::{Diagnostic, Lint, default_lints},
    naming::eligible_types,
};

/// Go JSON method generator for a single schema unit.
pub struct Generator<'a> {
    unit: &'a SchemaUnit,
    options: &'a GenerationOptions,
    lints: Vec<Box<dyn Lint>>,
}

/// A generated file together with everything the lints reported.
#[derive(Debug)]
pub struct Generated {
    pub file: JsonGoFile,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Generator<'a> {
    pub fn new(unit: &'a SchemaUnit, options: &'a GenerationOptions) -> Self {
        Self {
            unit,
            options,
            lints: default_lints(),
        }
    }

    /// Run no lints at all.
    pub fn without_lints(mut self) -> Self {
        self.lints.clear();
        self
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Filter, name and lint the unit's types and build the output file.
    ///
    /// Warnings are logged and returned; an error diagnostic aborts the run.
    pub fn generate(&self) -> Result<Generated> {
        let types = eligible_types(self.unit);

        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(self.unit, &types, &mut diagnostics);
        }
        for diag in diagnostics.iter().filter(|d| d.severity.is_warning()) {
            warn!(unit = %self.unit.name, "{}", diag);
        }

        let errors = diagnostics.iter().filter(|d| d.severity.is_error()).count();
        if errors > 0 {
            bail!(
                "generation of '{}' failed with {} error(s)",
                self.unit.name,
                errors
            );
        }

        let file = JsonGoFile::new(self.unit, types, self.options.clone());
        info!(
            unit = %self.unit.name,
            output = %file.name(),
            types = file.types().len(),
            "generated file"
        );

        Ok(Generated { file, diagnostics })
    }
}

/// Render the Go source for `unit` with the default lints.
///
/// Two calls with equal inputs return byte-identical strings.
pub fn render_unit(unit: &SchemaUnit, options: &GenerationOptions) -> Result<String> {
    Ok(Generator::new(unit, options).generate()?.file.render())
}
