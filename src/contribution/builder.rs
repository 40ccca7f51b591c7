/*!
Builder for the crypto contribution item.

This module provides a builder pattern for wiring a contribution to its
registry, type translator and host services.
*/

use std::sync::Arc;

use crate::config_err;
use crate::contribution::item::CryptoContribution;
use crate::core::{
    algorithm::{DefaultTypeTranslator, TypeTranslator},
    config::MenuConfig,
    dispatch::DispatchEngine,
    error::Result,
    registry::{AlgorithmRegistry, DefaultRegistry},
    services::{
        CommandService, EmptyContextService, ErrorSink, HandlerService, LogErrorSink,
        OperationListener, PreStepHandler,
    },
};

/// Builder for [`CryptoContribution`]
pub struct ContributionBuilder {
    /// Entry source; defaults to the process-wide registry
    registry: Arc<dyn AlgorithmRegistry>,

    /// Type label lookup
    translator: Arc<dyn TypeTranslator>,

    /// Context snapshots; defaults to an empty context
    handler_service: Arc<dyn HandlerService>,

    /// Required shared pre-step
    pre_step: Option<Arc<dyn PreStepHandler>>,

    /// Required command resolution
    command_service: Option<Arc<dyn CommandService>>,

    error_sink: Arc<dyn ErrorSink>,

    listeners: Vec<Arc<dyn OperationListener>>,

    config: MenuConfig,
}

impl Default for ContributionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            registry: Arc::new(DefaultRegistry),
            translator: Arc::new(DefaultTypeTranslator),
            handler_service: Arc::new(EmptyContextService),
            pre_step: None,
            command_service: None,
            error_sink: Arc::new(LogErrorSink),
            listeners: Vec::new(),
            config: MenuConfig::default(),
        }
    }

    pub fn with_registry(mut self, registry: Arc<dyn AlgorithmRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn TypeTranslator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_handler_service(mut self, service: Arc<dyn HandlerService>) -> Self {
        self.handler_service = service;
        self
    }

    pub fn with_pre_step(mut self, pre_step: Arc<dyn PreStepHandler>) -> Self {
        self.pre_step = Some(pre_step);
        self
    }

    pub fn with_command_service(mut self, service: Arc<dyn CommandService>) -> Self {
        self.command_service = Some(service);
        self
    }

    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = sink;
        self
    }

    pub fn with_listener(mut self, listener: Arc<dyn OperationListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn with_config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and assemble the contribution
    pub fn build(self) -> Result<CryptoContribution> {
        self.config.validate()?;

        let Some(pre_step) = self.pre_step else {
            return config_err!("a pre-step handler is required");
        };
        let Some(command_service) = self.command_service else {
            return config_err!("a command service is required");
        };

        let mut engine = DispatchEngine::new(self.handler_service, pre_step, command_service)
            .with_error_sink(self.error_sink)
            .with_log_source(self.config.log_source.clone());
        for listener in self.listeners {
            engine.add_listener(listener);
        }

        Ok(CryptoContribution {
            registry: self.registry,
            translator: self.translator,
            engine,
            config: self.config,
        })
    }
}
