//! Registry of deserializers keyed by target type.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ion_parse::StreamingParser;
use ion_tree::{Element, Timestamp};

use crate::error::{DatabindError, DatabindErrorKind, Result};
use crate::{ElementDeserializer, TimestampDeserializer};

/// Produces a `T` from the parser's current token.
///
/// Implementations must not advance the parser.
pub trait ValueDeserializer<T>: Send + Sync {
    fn deserialize(&self, parser: &dyn StreamingParser) -> Result<T>;
}

/// A bundle of deserializers registered together.
pub trait Module {
    /// Unique name; a module is only set up once per registry.
    fn name(&self) -> &str;

    /// Register this module's deserializers.
    fn setup(&self, registry: &mut DeserializerRegistry);
}

/// Registers the element and timestamp deserializers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementModule;

impl Module for ElementModule {
    fn name(&self) -> &str {
        "ion-element"
    }

    fn setup(&self, registry: &mut DeserializerRegistry) {
        registry.register::<Arc<Element>, _>(ElementDeserializer);
        registry.register::<Timestamp, _>(TimestampDeserializer);
    }
}

/// Maps target types to the deserializer that produces them.
#[derive(Default)]
pub struct DeserializerRegistry {
    /// Each value is a `Box<dyn ValueDeserializer<T>>` for the keyed `T`.
    deserializers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    modules: Vec<String>,
}

impl DeserializerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with [`ElementModule`] set up.
    pub fn ion() -> Self {
        Self::new().with_module(&ElementModule)
    }

    /// Set up `module` and return the registry.
    pub fn with_module(mut self, module: &dyn Module) -> Self {
        self.register_module(module);
        self
    }

    /// Set up `module` unless a module with the same name already was.
    pub fn register_module(&mut self, module: &dyn Module) -> &mut Self {
        if self.modules.iter().any(|m| m == module.name()) {
            crate::trace!(module = module.name(), "module already registered");
            return self;
        }
        self.modules.push(module.name().to_string());
        module.setup(self);
        self
    }

    /// Names of the modules set up so far, in registration order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Register `deserializer` for `T`, replacing any previous one.
    pub fn register<T, D>(&mut self, deserializer: D) -> &mut Self
    where
        T: 'static,
        D: ValueDeserializer<T> + 'static,
    {
        let boxed: Box<dyn ValueDeserializer<T>> = Box::new(deserializer);
        self.deserializers.insert(TypeId::of::<T>(), Box::new(boxed));
        self
    }

    /// Whether a deserializer for `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.deserializers.contains_key(&TypeId::of::<T>())
    }

    /// The deserializer registered for `T`.
    pub fn find<T: 'static>(&self) -> Option<&dyn ValueDeserializer<T>> {
        self.deserializers
            .get(&TypeId::of::<T>())?
            .downcast_ref::<Box<dyn ValueDeserializer<T>>>()
            .map(|d| &**d)
    }

    /// Deserialize a `T` from the parser's current token.
    pub fn deserialize<T: 'static>(&self, parser: &dyn StreamingParser) -> Result<T> {
        match self.find::<T>() {
            Some(deserializer) => deserializer.deserialize(parser),
            None => Err(DatabindError::at(
                DatabindErrorKind::NoDeserializer {
                    target: type_name::<T>(),
                },
                parser,
            )),
        }
    }
}

impl fmt::Debug for DeserializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializerRegistry")
            .field("deserializers", &self.deserializers.len())
            .field("modules", &self.modules)
            .finish()
    }
}
