//! Parser registry keyed by target type

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;

use crate::BoxError;

/// Type-erased form every registered parser is stored as.
pub type ParserFn<T> = Box<dyn Fn(&str) -> Result<T, BoxError> + Send + Sync>;

struct Entry {
    type_name: &'static str,
    // Always a `ParserFn<T>` for the `T` of the key.
    parser: Box<dyn Any + Send + Sync>,
}

/// Mapping from a target type to the parser producing it.
///
/// At most one parser is registered per type; registering again for the same
/// type replaces the previous parser.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: HashMap<TypeId, Entry>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fallible parser for `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is itself the boxed error type.
    pub fn register<T, E, F>(&mut self, parser: F)
    where
        T: 'static,
        E: Into<BoxError>,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        assert_not_error_type::<T>();

        let boxed: ParserFn<T> = Box::new(move |value: &str| parser(value).map_err(Into::into));
        let replaced = self
            .parsers
            .insert(
                TypeId::of::<T>(),
                Entry {
                    type_name: type_name::<T>(),
                    parser: Box::new(boxed),
                },
            )
            .is_some();

        tracing::debug!(target_type = type_name::<T>(), replaced, "registered parser");
    }

    /// Register a parser for `T` that cannot fail.
    ///
    /// # Panics
    ///
    /// Panics if `T` is itself the boxed error type.
    pub fn register_infallible<T, F>(&mut self, parser: F)
    where
        T: 'static,
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        self.register(move |value| Ok::<T, Infallible>(parser(value)));
    }

    /// Look up the parser registered for `T`.
    pub fn get<T: 'static>(&self) -> Option<&ParserFn<T>> {
        self.parsers
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.parser.downcast_ref::<ParserFn<T>>())
    }

    /// Whether a parser is registered for `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.parsers.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Whether no parser is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.parsers.values().map(|e| e.type_name).collect();
        types.sort_unstable();
        f.debug_struct("ParserRegistry")
            .field("types", &types)
            .finish()
    }
}

fn assert_not_error_type<T: 'static>() {
    let id = TypeId::of::<T>();
    if id == TypeId::of::<BoxError>()
        || id == TypeId::of::<Box<dyn StdError>>()
        || id == TypeId::of::<Box<dyn StdError + Send>>()
        || id == TypeId::of::<Box<dyn StdError + Sync>>()
    {
        panic!(
            "parser functions must return either T, or Result<T, E>, where T can be any type but an error ({})",
            type_name::<T>()
        );
    }
}
