//! Named builder operations registered at runtime.

use crate::domain::link_builder::LinkBuilder;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A reusable transformation of a builder.
pub type LinkOperation = Arc<dyn Fn(LinkBuilder) -> LinkBuilder + Send + Sync>;

/// Registry of named operations applied with [`LinkBuilder::apply`].
///
/// Lets callers package recurring link recipes ("booking confirmation email",
/// "partner banner") under a name without extending the builder type.
/// Cloning is cheap; registering on a clone does not affect the original.
#[derive(Clone, Default)]
pub struct OperationRegistry {
    operations: Arc<HashMap<String, LinkOperation>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `operation` under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, operation: F)
    where
        F: Fn(LinkBuilder) -> LinkBuilder + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.operations).insert(name.into(), Arc::new(operation));
    }

    pub fn get(&self, name: &str) -> Option<LinkOperation> {
        self.operations.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.names())
            .finish()
    }
}
