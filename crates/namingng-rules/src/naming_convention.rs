//! Rule checking symbol names against the configured naming patterns.
//!
//! # Checked categories
//!
//! | Symbol | Config key | Label |
//! |--------|------------|-------|
//! | file basename | `RE_FILE` | `File name` |
//! | global variable | `RE_GLOBAL_VARNAME` | `Global variable` |
//! | local variable, argument | `RE_VARNAME` | `Variable` |
//! | public member | `RE_PUBLIC_MEMBER_VARIABLE` | `Public member variable` |
//! | private member | `RE_PRIVATE_MEMBER_VARIABLE` | `Private member variable` |
//! | function | `RE_FUNCTIONNAME` | `Function` |
//! | constructor | `RE_FUNCTIONNAME` | `Class Constructor` |
//! | class | `RE_CLASS_NAME` | `Class` |
//! | namespace | `RE_NAMESPACE` | `Namespace` |
//!
//! Variable scopes without their own rule fall back to `RE_VARNAME`.
//! Variables and functions are also checked against `var_prefixes` and
//! `function_prefixes`, keyed on the declared or return type.

use namingng_core::{
    CheckContext, Function, Location, PrefixTable, Rule, RuleKey, ScopeKind, Severity, SourceFile,
    Symbol, ValidatedConfig, Variable, Violation,
};
use tracing::debug;

/// Rule id for naming violations.
pub const CODE: &str = "namingng-namingConvention";

/// Rule name for naming-convention.
pub const NAME: &str = "naming-convention";

/// Checks files, variables, functions, classes and namespaces against the
/// configured patterns and type prefixes.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingConvention {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Style,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NamingConvention {
    fn name(&self) -> &'static str {
        NAME
    }

    fn rule_ids(&self) -> &'static [&'static str] {
        &[CODE]
    }

    fn description(&self) -> &'static str {
        "Checks symbol and file names against configured patterns and type prefixes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
        let mut walker = SymbolWalker::new(ctx.config, self.severity);
        for symbol in ctx.model.symbols() {
            walker.visit(symbol);
        }
        debug!("{NAME}: {} violation(s)", walker.violations.len());
        walker.violations
    }
}

fn variable_label(scope: ScopeKind) -> &'static str {
    match scope {
        ScopeKind::Global => "Global variable",
        ScopeKind::Local => "Variable",
        ScopeKind::PublicMember => "Public member variable",
        ScopeKind::PrivateMember => "Private member variable",
    }
}

fn variable_rule(scope: ScopeKind) -> RuleKey {
    match scope {
        ScopeKind::Global => RuleKey::GlobalVarName,
        ScopeKind::Local => RuleKey::VarName,
        ScopeKind::PublicMember => RuleKey::PublicMemberVariable,
        ScopeKind::PrivateMember => RuleKey::PrivateMemberVariable,
    }
}

/// Visits symbols one by one and collects violations.
struct SymbolWalker<'a> {
    config: &'a ValidatedConfig,
    severity: Severity,
    violations: Vec<Violation>,
}

impl<'a> SymbolWalker<'a> {
    fn new(config: &'a ValidatedConfig, severity: Severity) -> Self {
        Self {
            config,
            severity,
            violations: Vec::new(),
        }
    }

    fn visit(&mut self, symbol: Symbol<'_>) {
        match symbol {
            Symbol::File(file) => self.visit_file(file),
            Symbol::Variable(var) => self.visit_variable(var),
            Symbol::Function(func) => self.visit_function(func),
            Symbol::Class(class) => {
                self.check_pattern(RuleKey::ClassName, "Class", &class.name, &class.location);
            }
            Symbol::Namespace(ns) => {
                self.check_pattern(RuleKey::Namespace, "Namespace", &ns.name, &ns.location);
            }
        }
    }

    fn visit_file(&mut self, file: &SourceFile) {
        let location = Location::whole_file(file.path.clone());
        self.check_pattern(RuleKey::File, "File name", &file.basename(), &location);
    }

    fn visit_variable(&mut self, var: &Variable) {
        let config = self.config;
        let label = variable_label(var.scope);
        self.check_prefix(
            config.var_prefixes(),
            &var.declared_type,
            label,
            &var.name,
            &var.location,
        );

        if config.skip_one_char_variables() && var.name.chars().count() == 1 {
            return;
        }
        let key = variable_rule(var.scope);
        let key = if config.rule(key).is_some() {
            key
        } else {
            RuleKey::VarName
        };
        self.check_pattern(key, label, &var.name, &var.location);
    }

    fn visit_function(&mut self, func: &Function) {
        let label = if func.is_constructor {
            "Class Constructor"
        } else {
            "Function"
        };
        if !func.is_constructor && !func.return_type.is_empty() {
            let config = self.config;
            self.check_prefix(
                config.function_prefixes(),
                &func.return_type,
                label,
                &func.name,
                &func.location,
            );
        }
        self.check_pattern(RuleKey::FunctionName, label, &func.name, &func.location);
    }

    fn check_prefix(
        &mut self,
        table: &PrefixTable,
        type_spelling: &str,
        label: &str,
        name: &str,
        location: &Location,
    ) {
        if let Some(prefix) = table.missing_prefix(type_spelling, name) {
            debug!("{name}: type {type_spelling} requires prefix {prefix}");
            self.report(location, format!("{label} {name} violates naming convention"));
        }
    }

    fn check_pattern(&mut self, key: RuleKey, label: &str, name: &str, location: &Location) {
        let config = self.config;
        let Some(spec) = config.rule(key) else {
            return;
        };
        for entry in spec.violations(name) {
            let message = match &entry.message {
                Some(custom) => format!("{label} {name} violates naming convention: {custom}"),
                None => format!("{label} {name} violates naming convention"),
            };
            self.report(location, message);
        }
    }

    fn report(&mut self, location: &Location, message: String) {
        self.violations
            .push(Violation::new(CODE, self.severity, location.clone(), message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namingng_core::{NamePattern, PatternEntry, RuleSpec, TranslationUnit};

    const VARNAME: &str = r"[a-z][a-z0-9_]*[a-z0-9]\Z";

    fn spec(pattern: &str) -> RuleSpec {
        RuleSpec::from_patterns([pattern]).unwrap()
    }

    fn check(config: &ValidatedConfig, dump: &str) -> Vec<String> {
        let unit = TranslationUnit::parse(dump).unwrap();
        NamingConvention::new()
            .check(&CheckContext::new(config, &unit))
            .into_iter()
            .map(|v| v.message)
            .collect()
    }

    fn local(name: &str, ty: &str) -> String {
        format!(
            r#"{{"name": "{name}", "type": "{ty}", "scope": "local",
                "location": {{"file": "test_.c", "line": 1, "column": 1}}}}"#
        )
    }

    #[test]
    fn local_variables_use_varname() {
        let config = ValidatedConfig::new().with_rule(RuleKey::VarName, spec(VARNAME));
        let dump = format!(
            r#"{{"variables": [{}, {}, {}]}}"#,
            local("_invalid_arg", "int"),
            local("invalid_arg_", "int"),
            local("valid_arg32", "int"),
        );
        assert_eq!(
            check(&config, &dump),
            vec![
                "Variable _invalid_arg violates naming convention",
                "Variable invalid_arg_ violates naming convention",
            ]
        );
    }

    #[test]
    fn prefix_violation_is_separate_from_regex() {
        let config = ValidatedConfig::new()
            .with_rule(RuleKey::VarName, spec(VARNAME))
            .with_var_prefixes([("uint32_t", "ui32")].into_iter().collect());
        let dump = format!(
            r#"{{"variables": [{}, {}, {}]}}"#,
            local("invalid_arg32", "uint32_t"),
            local("ui32_valid_arg", "uint32_t"),
            local("_Bad", "uint32_t"),
        );
        assert_eq!(
            check(&config, &dump),
            vec![
                "Variable invalid_arg32 violates naming convention",
                "Variable _Bad violates naming convention",
                "Variable _Bad violates naming convention",
            ]
        );
    }

    #[test]
    fn pointer_types_are_matched_canonically() {
        let config = ValidatedConfig::new()
            .with_var_prefixes([("char**", "pp")].into_iter().collect());
        let dump = format!(r#"{{"variables": [{}]}}"#, local("names", "char * *"));
        assert_eq!(check(&config, &dump), vec!["Variable names violates naming convention"]);
    }

    #[test]
    fn scoped_rules_fall_back_to_varname() {
        let config = ValidatedConfig::new().with_rule(RuleKey::VarName, spec(VARNAME));
        let dump = r#"{"variables": [
            {"name": "_g", "type": "int", "scope": "global", "location": {"file": "a.c", "line": 1}},
            {"name": "_pub", "type": "int", "scope": "public_member", "location": {"file": "a.c", "line": 2}},
            {"name": "_priv", "type": "int", "scope": "private_member", "location": {"file": "a.c", "line": 3}}
        ]}"#;
        assert_eq!(
            check(&config, dump),
            vec![
                "Global variable _g violates naming convention",
                "Public member variable _pub violates naming convention",
                "Private member variable _priv violates naming convention",
            ]
        );
    }

    #[test]
    fn dict_rules_append_custom_messages() {
        let private = RuleSpec::new(vec![
            PatternEntry::with_outcome(
                NamePattern::new(r".*_tmp\Z").unwrap(),
                false,
                Some("illegal suffix _tmp".into()),
            ),
            PatternEntry::with_outcome(
                NamePattern::new(r"priv_.*\Z").unwrap(),
                true,
                Some("required prefix priv_ missing".into()),
            ),
        ]);
        let config = ValidatedConfig::new()
            .with_rule(RuleKey::VarName, spec(VARNAME))
            .with_rule(RuleKey::PrivateMemberVariable, private);
        let dump = r#"{"variables": [
            {"name": "_invalid_private", "type": "char", "scope": "private_member", "location": {"file": "a.c"}},
            {"name": "priv_good", "type": "int", "scope": "private_member", "location": {"file": "a.c"}},
            {"name": "priv_bad_tmp", "type": "int", "scope": "private_member", "location": {"file": "a.c"}}
        ]}"#;
        assert_eq!(
            check(&config, dump),
            vec![
                "Private member variable _invalid_private violates naming convention: \
                 required prefix priv_ missing",
                "Private member variable priv_bad_tmp violates naming convention: \
                 illegal suffix _tmp",
            ]
        );
    }

    #[test]
    fn skip_one_char_variables_keeps_prefix_check() {
        let config = ValidatedConfig::new()
            .with_rule(RuleKey::VarName, spec(VARNAME))
            .with_var_prefixes([("uint32_t", "ui32")].into_iter().collect())
            .with_skip_one_char_variables(true);
        let dump = format!(
            r#"{{"variables": [{}, {}]}}"#,
            local("i", "int"),
            local("x", "uint32_t")
        );
        assert_eq!(check(&config, &dump), vec!["Variable x violates naming convention"]);
    }

    #[test]
    fn functions_and_constructors() {
        let config = ValidatedConfig::new()
            .with_rule(RuleKey::FunctionName, spec(VARNAME))
            .with_function_prefixes([("uint16_t", "ui16")].into_iter().collect());
        let dump = r#"{"functions": [
            {"name": "invalid_function7", "return_type": "uint16_t", "location": {"file": "a.c", "line": 12, "column": 10}},
            {"name": "ui16_valid_function8", "return_type": "uint16_t", "location": {"file": "a.c", "line": 13, "column": 10}},
            {"name": "_clz", "constructor": true, "location": {"file": "a.c", "line": 20, "column": 5}},
            {"name": "InvalidFunction", "return_type": "void", "location": {"file": "a.h", "line": 5, "column": 6}}
        ]}"#;
        assert_eq!(
            check(&config, dump),
            vec![
                "Function invalid_function7 violates naming convention",
                "Class Constructor _clz violates naming convention",
                "Function InvalidFunction violates naming convention",
            ]
        );
    }

    #[test]
    fn files_classes_namespaces() {
        let config = ValidatedConfig::new()
            .with_rule(RuleKey::File, spec(r"[^/]*[a-z][a-z0-9_]*[a-z0-9]\.c\Z"))
            .with_rule(RuleKey::ClassName, spec(VARNAME))
            .with_rule(RuleKey::Namespace, spec(VARNAME));
        let dump = r#"{
            "files": [{"path": "/tmp/x/test_.c"}, {"path": "/tmp/x/good.c"}],
            "classes": [{"name": "_clz", "location": {"file": "/tmp/x/test_.c", "line": 18, "column": 7}}],
            "namespaces": [{"name": "_invalid_namespace", "location": {"file": "/tmp/x/test_.c", "line": 28, "column": 11}}]
        }"#;
        let unit = TranslationUnit::parse(dump).unwrap();
        let violations = NamingConvention::new().check(&CheckContext::new(&config, &unit));
        let rendered: Vec<String> = violations.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "/tmp/x/test_.c:0:0: style: File name test_.c violates naming convention \
                 [namingng-namingConvention]",
                "/tmp/x/test_.c:18:7: style: Class _clz violates naming convention \
                 [namingng-namingConvention]",
                "/tmp/x/test_.c:28:11: style: Namespace _invalid_namespace violates naming \
                 convention [namingng-namingConvention]",
            ]
        );
    }

    #[test]
    fn empty_config_checks_nothing() {
        let config = ValidatedConfig::new();
        let dump = format!(r#"{{"files": [{{"path": "X.c"}}], "variables": [{}]}}"#, local("_x", "int"));
        assert!(check(&config, &dump).is_empty());
    }

    #[test]
    fn custom_severity() {
        let rule = NamingConvention::new().severity(Severity::Error);
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.rule_ids(), &[CODE]);
    }
}
