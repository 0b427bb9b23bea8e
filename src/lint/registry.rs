//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the rules for a run and provides methods for
//! registering, disabling, retrieving, and running them.

use std::collections::HashMap;

use super::diagnostic::{sort_diagnostics, LintDiagnostic};
use super::rule::{LintRule, RuleId};
use super::rules::{AbsoluteCommandPathRule, CommandExistsRule, CronSyntaxRule};
use crate::crontab::CrontabFile;
use crate::scripts::CommandChecker;

/// Registry of lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with the syntax rules.
    ///
    /// Rules that touch the filesystem need a [`CommandChecker`] and are
    /// added by [`with_script_checks`](Self::with_script_checks).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CronSyntaxRule));
        registry
    }

    /// Add the command existence rules.
    pub fn with_script_checks(mut self, checker: CommandChecker) -> Self {
        self.register(Box::new(CommandExistsRule::new(checker.clone())));
        self.register(Box::new(AbsoluteCommandPathRule::new(checker)));
        self
    }

    /// Every built-in rule, for listing and schema generation.
    pub fn catalog() -> Self {
        Self::with_builtins().with_script_checks(CommandChecker::new(".", Vec::new()))
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Remove a rule. Returns whether it was registered.
    pub fn disable(&mut self, id: &RuleId) -> bool {
        self.rules.remove(id).is_some()
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules, ordered by ID.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        let mut rules: Vec<_> = self.rules.iter().collect();
        rules.sort_by(|a, b| a.0.cmp(b.0));
        rules.into_iter().map(|(_, r)| r.as_ref())
    }

    /// Run every rule and return the diagnostics in file order.
    pub fn run(&self, crontab: &CrontabFile) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        for rule in self.iter() {
            let found = rule.check(crontab);
            tracing::debug!(rule = %rule.id(), count = found.len(), "Rule finished");
            diagnostics.extend(found);
        }
        sort_diagnostics(&mut diagnostics);
        diagnostics
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
