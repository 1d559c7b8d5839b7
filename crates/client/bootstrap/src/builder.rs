//! Builds the runtime from the on-disk dataset for front-ends.
use anyhow::{Context, Result};
use quiz_content::ContentFactory;
use quiz_core::{QuizConfig, QuizMode};
use runtime::{Runtime, RuntimeConfig};

use crate::config::BootstrapConfig;

/// Builder that loads content and assembles a runtime for one quiz mode.
pub struct RuntimeBuilder {
    config: BootstrapConfig,
    mode: QuizMode,
}

impl RuntimeBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            mode: QuizMode::default(),
        }
    }

    pub fn mode(mut self, mode: QuizMode) -> Self {
        self.mode = mode;
        self
    }

    /// The content factory this builder reads from.
    pub fn content_factory(&self) -> ContentFactory {
        let factory = ContentFactory::new(&self.config.data_dir);
        match &self.config.atlas_path {
            Some(path) => factory.with_atlas_path(path),
            None => factory,
        }
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let factory = self.content_factory();

        let atlas = factory.load_atlas().with_context(|| {
            format!(
                "failed to load world topology from {}",
                factory.atlas_path().display()
            )
        })?;
        let quiz = factory
            .load_config()
            .with_context(|| format!("failed to load config from {}", factory.data_dir().display()))?;

        tracing::info!(
            mode = %self.mode,
            seed = self.config.seed,
            regions = atlas.len(),
            "building quiz runtime"
        );

        let runtime_config = RuntimeConfig {
            quiz: quiz.clone(),
            event_buffer_size: self.config.channels.event_buffer,
            command_buffer_size: self.config.channels.command_buffer,
            seed: self.config.seed,
        };

        let runtime = Runtime::builder()
            .config(runtime_config)
            .atlas(atlas)
            .mode(self.mode)
            .build()
            .await?;

        Ok(RuntimeSetup {
            config: self.config,
            quiz,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: BootstrapConfig,
    pub quiz: QuizConfig,
    pub runtime: Runtime,
}
