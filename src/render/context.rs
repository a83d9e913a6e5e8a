use tera::Context;

use crate::config::Config;

/// Variables available to the skeleton templates.
pub fn build_context(config: &Config) -> Context {
    let mut context = Context::new();
    context.insert("app", &config.app);
    context.insert("module", &config.module);
    context
}
