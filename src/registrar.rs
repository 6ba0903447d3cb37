// Copyright 2025 Cowboy AI, LLC.

//! Event registrars
//!
//! Each feature module contributes its event through an [`EventRegistrar`].
//! [`Registrars`] is the bootstrap list: it runs every registrar exactly once
//! against one builder and freezes the result.

use crate::builder::{CaseConfigBuilder, ConfigBuilder};
use crate::case_type::CaseType;
use crate::config::CaseConfig;
use crate::errors::ConfigResult;
use crate::policy::RegistrationPolicy;
use tracing::{debug, info};

/// Capability of a feature module to declare its events
pub trait EventRegistrar<C: CaseType>: Send + Sync {
    /// Add this module's event(s) to the builder
    fn configure(&self, builder: &mut CaseConfigBuilder<C>) -> ConfigResult<()>;

    /// Name used in logs
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Ordered set of registrars for a case type
pub struct Registrars<C: CaseType> {
    registrars: Vec<Box<dyn EventRegistrar<C>>>,
}

impl<C: CaseType> Default for Registrars<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CaseType> Registrars<C> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            registrars: Vec::new(),
        }
    }

    /// Add a registrar
    pub fn register(&mut self, registrar: Box<dyn EventRegistrar<C>>) {
        self.registrars.push(registrar);
    }

    /// Add a registrar, builder style
    pub fn with(mut self, registrar: impl EventRegistrar<C> + 'static) -> Self {
        self.register(Box::new(registrar));
        self
    }

    /// Number of registrars
    pub fn len(&self) -> usize {
        self.registrars.len()
    }

    /// Whether there are no registrars
    pub fn is_empty(&self) -> bool {
        self.registrars.is_empty()
    }

    /// Run every registrar once, in order, against `builder`
    ///
    /// Stops at the first registrar that fails.
    pub fn configure(&self, builder: &mut CaseConfigBuilder<C>) -> ConfigResult<()> {
        for registrar in &self.registrars {
            let before = builder.len();
            registrar.configure(builder)?;
            debug!(
                registrar = registrar.name(),
                added = builder.len().saturating_sub(before),
                "registrar configured"
            );
        }
        Ok(())
    }

    /// Run a full configuration pass for `C` and freeze the result
    pub fn build_config(
        &self,
        policy: RegistrationPolicy,
    ) -> ConfigResult<CaseConfig<C::State, C::Role>> {
        let mut builder = ConfigBuilder::for_case_type::<C>().with_policy(policy);
        self.configure(&mut builder)?;
        info!(
            case_type = C::case_type_id(),
            jurisdiction = C::jurisdiction(),
            registrars = self.registrars.len(),
            "configuration pass complete"
        );
        builder.build()
    }
}
