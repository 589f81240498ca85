//! Read-only symbol model consumed by naming rules, plus the JSON dump adapter.

use crate::error::LoadError;
use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a variable is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    /// File or namespace scope.
    Global,
    /// Block scope or function argument.
    #[serde(alias = "argument")]
    Local,
    /// Public class member.
    PublicMember,
    /// Private class member.
    PrivateMember,
}

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name.
    pub name: String,
    /// Canonical type spelling (e.g. `uint32_t*`).
    #[serde(rename = "type", default)]
    pub declared_type: String,
    /// Declaration scope.
    pub scope: ScopeKind,
    /// Location of the name token.
    pub location: Location,
}

/// A declared function or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Function name.
    pub name: String,
    /// Canonical return type spelling; empty for constructors.
    #[serde(default)]
    pub return_type: String,
    /// Whether this is a class constructor.
    #[serde(rename = "constructor", default)]
    pub is_constructor: bool,
    /// Location of the name token.
    pub location: Location,
}

/// A declared class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Class name.
    pub name: String,
    /// Location of the name token.
    pub location: Location,
}

/// A declared namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Namespace name.
    pub name: String,
    /// Location of the name token.
    pub location: Location,
}

/// A file that took part in the translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path as reported by the front end.
    pub path: PathBuf,
    /// Source lines, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<String>>,
}

impl SourceFile {
    /// Creates a file entry with known contents.
    #[must_use]
    pub fn with_lines<I, S>(path: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            lines: Some(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// The file name without directories.
    #[must_use]
    pub fn basename(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map_or_else(|| self.path.to_string_lossy(), |n| n.to_string_lossy())
    }

    /// Source lines; empty when the contents are unknown.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        self.lines.as_deref().unwrap_or_default()
    }
}

/// A borrowed view of one symbol in a model.
#[derive(Debug, Clone, Copy)]
pub enum Symbol<'a> {
    /// A source file.
    File(&'a SourceFile),
    /// A variable.
    Variable(&'a Variable),
    /// A function or constructor.
    Function(&'a Function),
    /// A class.
    Class(&'a Class),
    /// A namespace.
    Namespace(&'a Namespace),
}

impl<'a> Symbol<'a> {
    /// The name checked against naming rules (the basename for files).
    #[must_use]
    pub fn name(&self) -> Cow<'a, str> {
        match *self {
            Self::File(f) => f.basename(),
            Self::Variable(v) => Cow::Borrowed(&v.name),
            Self::Function(f) => Cow::Borrowed(&f.name),
            Self::Class(c) => Cow::Borrowed(&c.name),
            Self::Namespace(n) => Cow::Borrowed(&n.name),
        }
    }
}

/// Read access to the declarations of one translation unit.
///
/// Rules only read the model; the order of each list is the order in which
/// violations are reported.
pub trait SymbolModel {
    /// Files of the unit, the main file first.
    fn files(&self) -> &[SourceFile];

    /// Declared variables.
    fn variables(&self) -> &[Variable];

    /// Declared functions and constructors.
    fn functions(&self) -> &[Function];

    /// Declared classes.
    fn classes(&self) -> &[Class];

    /// Declared namespaces.
    fn namespaces(&self) -> &[Namespace];

    /// Every symbol: files, variables, functions, classes, then namespaces.
    fn symbols(&self) -> Vec<Symbol<'_>> {
        let files = self.files().iter().map(Symbol::File);
        let variables = self.variables().iter().map(Symbol::Variable);
        let functions = self.functions().iter().map(Symbol::Function);
        let classes = self.classes().iter().map(Symbol::Class);
        let namespaces = self.namespaces().iter().map(Symbol::Namespace);
        files
            .chain(variables)
            .chain(functions)
            .chain(classes)
            .chain(namespaces)
            .collect()
    }
}

/// Normalises a type spelling: whitespace-separated tokens joined by one
/// space, with `*` and `&` attached to the preceding token.
///
/// ```
/// use namingng_core::canonical_type;
///
/// assert_eq!(canonical_type("uint32_t * *"), "uint32_t**");
/// assert_eq!(canonical_type("const  char *"), "const char*");
/// ```
#[must_use]
pub fn canonical_type(spelling: &str) -> String {
    let mut out = String::with_capacity(spelling.len());
    for token in spelling.split_whitespace() {
        if !out.is_empty() && !token.starts_with(['*', '&']) {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// A JSON symbol dump for one translation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationUnit {
    /// Files of the unit.
    #[serde(default)]
    pub files: Vec<SourceFile>,
    /// Declared variables.
    #[serde(default)]
    pub variables: Vec<Variable>,
    /// Declared functions.
    #[serde(default)]
    pub functions: Vec<Function>,
    /// Declared classes.
    #[serde(default)]
    pub classes: Vec<Class>,
    /// Declared namespaces.
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
}

impl TranslationUnit {
    /// Parses a dump and canonicalises its type spellings.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not fit the dump model.
    pub fn parse(json: &str) -> Result<Self, LoadError> {
        let mut unit: Self = serde_json::from_str(json)?;
        unit.canonicalize_types();
        Ok(unit)
    }

    /// Loads a dump from disk. Files without `lines` are read from disk,
    /// relative paths being resolved against the dump's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the dump cannot be read or parsed. Unreadable
    /// source files are logged and left without contents.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut unit = Self::parse(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        unit.load_missing_lines(base);
        debug!(
            "Loaded {}: {} file(s), {} symbol(s)",
            path.display(),
            unit.files.len(),
            unit.symbols().len() - unit.files.len()
        );
        Ok(unit)
    }

    /// Rewrites every declared and return type into canonical spelling.
    pub fn canonicalize_types(&mut self) {
        for v in &mut self.variables {
            v.declared_type = canonical_type(&v.declared_type);
        }
        for f in &mut self.functions {
            f.return_type = canonical_type(&f.return_type);
        }
    }

    /// Reads the contents of files whose `lines` are absent.
    pub fn load_missing_lines(&mut self, base: &Path) {
        for file in self.files.iter_mut().filter(|f| f.lines.is_none()) {
            let resolved = if file.path.is_absolute() {
                file.path.clone()
            } else {
                base.join(&file.path)
            };
            match std::fs::read_to_string(&resolved) {
                Ok(text) => file.lines = Some(text.lines().map(str::to_string).collect()),
                Err(e) => warn!("Cannot read source {}: {}", resolved.display(), e),
            }
        }
    }
}

impl SymbolModel for TranslationUnit {
    fn files(&self) -> &[SourceFile] {
        &self.files
    }

    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn functions(&self) -> &[Function] {
        &self.functions
    }

    fn classes(&self) -> &[Class] {
        &self.classes
    }

    fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }
}
