//! Example URLs shown on the help pages.

use std::collections::BTreeMap;

/// Usage examples grouped by module.
///
/// Filled once at startup and shared read-only between handlers.
#[derive(Debug, Default, Clone)]
pub struct Usage {
    modules: BTreeMap<&'static str, Vec<&'static str>>,
}

impl Usage {
    pub fn register(&mut self, module: &'static str, examples: &[&'static str]) {
        self.modules
            .entry(module)
            .or_default()
            .extend_from_slice(examples);
    }

    /// Sorted examples of one module.
    pub fn module(&self, module: &str) -> Vec<&'static str> {
        let mut examples = self.modules.get(module).cloned().unwrap_or_default();
        examples.sort_unstable();
        examples
    }

    /// Sorted examples of every module.
    pub fn all(&self) -> Vec<&'static str> {
        let mut examples: Vec<_> = self.modules.values().flatten().copied().collect();
        examples.sort_unstable();
        examples
    }
}

/// "Examples:" followed by one bullet per line.
pub fn examples_text(examples: &[&str]) -> String {
    let mut output = String::from("Examples:\n");
    for line in examples {
        output.push_str(&format!("- {line}\n"));
    }
    output
}
