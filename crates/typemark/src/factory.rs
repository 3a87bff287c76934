//! Type factory - builds sealed tables and registers their labels

use std::sync::Arc;

use typemark_core::{Label, LabelInput, Mode, TypemarkError, TypemarkResult};
use typemark_registry::LabelRegistry;

use crate::{FactoryConfig, ReadCheck, TypeTable};

/// Creates type tables against a label registry
#[derive(Clone, Debug)]
pub struct TypeFactory {
    config: FactoryConfig,
    registry: Arc<LabelRegistry>,
}

impl TypeFactory {
    pub fn new(config: FactoryConfig, registry: Arc<LabelRegistry>) -> Self {
        TypeFactory { config, registry }
    }

    /// Factory over the process-wide registry
    pub fn global(config: FactoryConfig) -> Self {
        TypeFactory::new(config, LabelRegistry::global())
    }

    /// Factory over a fresh registry of its own
    pub fn isolated(config: FactoryConfig) -> Self {
        TypeFactory::new(config, LabelRegistry::shared())
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<LabelRegistry> {
        &self.registry
    }

    /// Empty this factory's registry
    pub fn clear_registry(&self) {
        self.registry.clear();
    }

    /// Create a type table.
    ///
    /// The mode is resolved once per call. In strict mode every input is
    /// validated in order before the registry changes; the first offending
    /// input decides the error and a failed call registers nothing. In relaxed
    /// mode nothing is validated; non-text inputs become stringified table keys
    /// and only textual inputs are registered.
    pub fn create<I>(&self, labels: I) -> TypemarkResult<TypeTable>
    where
        I: IntoIterator,
        I::Item: Into<LabelInput>,
    {
        let mode = self.config.mode.resolve();
        let inputs: Vec<LabelInput> = labels.into_iter().map(Into::into).collect();

        let labels = match mode {
            Mode::Strict => self.register_strict(inputs)?,
            Mode::Relaxed => self.register_relaxed(inputs),
        };

        let reads = if mode.is_strict() && self.config.intercept_reads {
            ReadCheck::Checked
        } else {
            ReadCheck::Plain
        };

        tracing::debug!(labels = labels.len(), %mode, ?reads, "type table created");
        Ok(TypeTable::new(labels, mode, reads))
    }

    fn register_strict(&self, inputs: Vec<LabelInput>) -> TypemarkResult<Vec<Label>> {
        if inputs.is_empty() {
            return Err(TypemarkError::EmptyInput);
        }

        let mut batch = self.registry.begin();
        let mut labels = Vec::with_capacity(inputs.len());

        for input in inputs {
            let label = input.into_label()?;
            batch.check(&label)?;
            batch.stage(label.clone());
            labels.push(label);
        }

        batch.commit();
        Ok(labels)
    }

    fn register_relaxed(&self, inputs: Vec<LabelInput>) -> Vec<Label> {
        let mut batch = self.registry.begin();
        let mut labels = Vec::with_capacity(inputs.len());

        for input in inputs {
            // Only text is registered; a stringified `42` must not claim "42"
            let is_text = input.is_text();
            let label = input.into_label_lossy();
            if is_text {
                batch.stage(label.clone());
            }
            labels.push(label);
        }

        batch.commit();
        labels
    }
}

impl Default for TypeFactory {
    fn default() -> Self {
        TypeFactory::global(FactoryConfig::default())
    }
}
