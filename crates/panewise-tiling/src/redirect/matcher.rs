use panewise_common::{ForegroundProcess, PanewiseError};
use panewise_config::schema::{MatchKind, MatchRule, ProcessScope, RedirectConfig};
use regex::{Regex, RegexBuilder};
use tracing::trace;

#[derive(Clone)]
enum Test {
    Exact(String),
    Pattern(Regex),
}

impl Test {
    fn matches(&self, command: &str) -> bool {
        match self {
            Test::Exact(value) => command == value,
            Test::Pattern(re) => re.is_match(command),
        }
    }
}

#[derive(Clone)]
struct CompiledRule {
    scope: ProcessScope,
    test: Test,
}

/// A rule hit: which rule fired and on which foreground process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessMatch {
    pub rule: usize,
    pub process: usize,
    pub command: String,
}

/// Ordered redirect rules, compiled once per request.
#[derive(Clone)]
pub struct ProcessMatcher {
    rules: Vec<MatchRule>,
    compiled: Vec<CompiledRule>,
}

impl ProcessMatcher {
    pub fn from_rules(rules: &[MatchRule]) -> Result<Self, PanewiseError> {
        let compiled = rules.iter().map(compile).collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rules: rules.to_vec(),
            compiled,
        })
    }

    pub fn from_config(config: &RedirectConfig) -> Result<Self, PanewiseError> {
        Self::from_rules(&config.rules)
    }

    /// Applies a per-request editor pattern.
    ///
    /// Replaces the value of every pattern rule, or appends a pattern rule
    /// over all processes when there is none. `None` keeps the rules as
    /// they are.
    pub fn with_editor_pattern(self, pattern: Option<&str>) -> Result<Self, PanewiseError> {
        let Some(pattern) = pattern else {
            return Ok(self);
        };

        let mut rules = self.rules;
        let mut replaced = false;
        for rule in rules.iter_mut().filter(|r| r.kind == MatchKind::Pattern) {
            rule.value = pattern.to_string();
            replaced = true;
        }
        if !replaced {
            rules.push(MatchRule::pattern(pattern, ProcessScope::Any));
        }
        Self::from_rules(&rules)
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// First rule, in list order, that matches `processes`.
    ///
    /// `processes` is ordered most specific first. A foremost-scoped rule
    /// only looks at the first entry; an any-scoped rule takes the first
    /// process that matches.
    pub fn find_match(&self, processes: &[ForegroundProcess]) -> Option<ProcessMatch> {
        self.compiled
            .iter()
            .enumerate()
            .find_map(|(rule, compiled)| {
                let candidates = match compiled.scope {
                    ProcessScope::Foremost => processes.get(..1).unwrap_or_default(),
                    ProcessScope::Any => processes,
                };
                candidates
                    .iter()
                    .position(|p| compiled.test.matches(p.command_name()))
                    .map(|process| ProcessMatch {
                        rule,
                        process,
                        command: processes[process].command_name().to_string(),
                    })
            })
            .inspect(|hit| trace!(?hit, "redirect rule matched"))
    }
}

fn compile(rule: &MatchRule) -> Result<CompiledRule, PanewiseError> {
    let test = match rule.kind {
        MatchKind::Exact => Test::Exact(rule.value.clone()),
        MatchKind::Pattern => Test::Pattern(
            RegexBuilder::new(&rule.value)
                .case_insensitive(true)
                .build()
                .map_err(|e| PanewiseError::InvalidPattern(format!("{}: {e}", rule.value)))?,
        ),
    };
    Ok(CompiledRule {
        scope: rule.scope,
        test,
    })
}
