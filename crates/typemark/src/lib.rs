//! Typemark - Immutable, self-validating action type tables
//!
//! A type table maps each label to itself and is sealed once created:
//!
//! ```rust
//! use typemark::{FactoryConfig, TypeFactory};
//!
//! let factory = TypeFactory::isolated(FactoryConfig::strict());
//! let types = factory.create(["ADD_TODO", "REMOVE_TODO"]).unwrap();
//!
//! assert_eq!(types.get("ADD_TODO").unwrap(), Some("ADD_TODO"));
//! assert!(types.get("ADD_TODOS").is_err());
//! assert!(types.set("TOGGLE_TODO", "TOGGLE_TODO").is_err());
//! ```
//!
//! The free functions [`create_types()`] and [`clear_registry`] work against the
//! process-wide registry and pick the mode from the `APP_ENV` variable on every
//! call.

pub mod config;
pub mod factory;
pub mod table;

pub use config::*;
pub use factory::*;
pub use table::*;

pub use typemark_core::{
    Label, LabelInput, Mode, ModePolicy, TypemarkError, TypemarkResult, DEFAULT_MODE_VAR,
    PRODUCTION,
};
pub use typemark_registry::LabelRegistry;

/// Create a type table against the process-wide registry.
///
/// Uses [`FactoryConfig::default`], so the mode follows `APP_ENV` at call time.
pub fn create_types<I>(labels: I) -> TypemarkResult<TypeTable>
where
    I: IntoIterator,
    I::Item: Into<LabelInput>,
{
    TypeFactory::global(FactoryConfig::default()).create(labels)
}

/// Empty the process-wide label registry
pub fn clear_registry() {
    LabelRegistry::global().clear();
}

/// Alias of [`clear_registry`]
pub fn clear_global_cache() {
    clear_registry();
}

/// Variadic form of [`create_types()`].
///
/// ```rust
/// let types = typemark::create_types!("DOC_MACRO_OPEN", "DOC_MACRO_CLOSE").unwrap();
/// assert_eq!(types.len(), 2);
/// ```
#[macro_export]
macro_rules! create_types {
    ($($label:expr),* $(,)?) => {{
        let labels: ::std::vec::Vec<$crate::LabelInput> =
            ::std::vec![$($crate::LabelInput::from($label)),*];
        $crate::create_types(labels)
    }};
}
