//! Template catalog backed by a [`TemplateStore`].

use crate::builtin::DEFAULT_TEMPLATE_NAME;
use crate::error::LoadResult;
use crate::registry::TemplateRegistry;
use crate::store::TemplateStore;
use crate::Template;
use futures::future::join_all;

/// Identifiers of the documents a store is expected to hold.
pub const DEFAULT_TEMPLATE_IDS: &[&str] = &["basic", "card", "form"];

/// Loads templates from a store and assembles them with fresh ids.
pub struct TemplateCatalog<S> {
    store: S,
    identifiers: Vec<String>,
    default_name: String,
}

impl<S: TemplateStore> TemplateCatalog<S> {
    /// Create a catalog over `store` with the default identifiers.
    pub fn new(store: S) -> Self {
        Self {
            store,
            identifiers: DEFAULT_TEMPLATE_IDS.iter().map(|s| s.to_string()).collect(),
            default_name: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }

    /// Replace the list of known identifiers.
    pub fn with_identifiers<I, T>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.identifiers = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the name of the template [`Self::default_code`] looks for.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// The known identifiers.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load one template. Failures are returned to the caller.
    pub async fn load_template(&self, identifier: &str) -> LoadResult<Template> {
        let definition = self.store.fetch(identifier).await?;
        Ok(Template::from(definition))
    }

    /// Load every known template concurrently, in identifier order.
    pub async fn load_all(&self) -> Vec<LoadResult<Template>> {
        join_all(self.identifiers.iter().map(|id| self.load_template(id))).await
    }

    /// Load every known template into a registry, skipping failures.
    pub async fn load_registry(&self) -> TemplateRegistry {
        let templates = self
            .load_all()
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(template) => Some(template),
                Err(err) => {
                    tracing::warn!(
                        identifier = err.identifier(),
                        store = %self.store.location(),
                        %err,
                        "skipping template"
                    );
                    None
                }
            })
            .collect();
        TemplateRegistry::new(templates)
    }

    /// The code of the default template, or an empty string when it is
    /// missing or could not be loaded.
    pub async fn default_code(&self) -> String {
        let registry = self.load_registry().await;
        match registry.find_by_name(&self.default_name) {
            Some(template) => template.code.clone(),
            None => {
                tracing::warn!(name = %self.default_name, "default template unavailable");
                String::new()
            }
        }
    }
}
