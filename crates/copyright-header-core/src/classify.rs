//! Generated-file detection.
//!
//! Files produced by tooling are exempt from the header requirement. A file
//! counts as generated when its name follows a generator naming convention,
//! when its leading comments carry an `<auto-generated>` marker, or when its
//! path matches one of the user-supplied glob patterns.

use crate::header::{CommentLine, CommentSyntax, SourceUnit, leading_trivia, parse_auto_generated_tag};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// User-configured glob patterns for files that should be treated as
/// generated.
#[derive(Debug, Clone)]
pub struct GeneratedPatterns {
    patterns: Vec<String>,
    set: GlobSet,
}

impl Default for GeneratedPatterns {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }
}

impl GeneratedPatterns {
    /// Compiles the given glob patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            set: builder.build()?,
            patterns,
        })
    }

    /// Returns the source patterns.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns true if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if the path matches any pattern.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        !self.is_empty() && self.set.is_match(path)
    }
}

/// Returns true if the file name follows a generated-code naming convention.
///
/// The final extension is ignored. The remaining stem matches when it ends
/// in `.designer`, `.g` or `.g.i` (ASCII case-insensitive), or when its last
/// dot-separated segment starts with `AssemblyInfo` (case-sensitive).
pub fn is_generated_file_name(file_name: &str) -> bool {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = match base.rsplit_once('.') {
        Some((stem, _extension)) if !stem.is_empty() => stem,
        _ => base,
    };

    let mut segments = stem.rsplit('.');
    let last = segments.next().unwrap_or(stem);
    let previous = segments.next();

    if last.starts_with("AssemblyInfo") {
        return true;
    }
    // A bare `Designer.cs` is authored code; only suffixed names count.
    let Some(previous) = previous else {
        return false;
    };
    if last.eq_ignore_ascii_case("designer") || last.eq_ignore_ascii_case("g") {
        return true;
    }
    last.eq_ignore_ascii_case("i") && previous.eq_ignore_ascii_case("g")
}

/// Returns true if any leading comment carries an auto-generated marker.
pub fn has_auto_generated_marker(trivia: &[CommentLine]) -> bool {
    trivia
        .iter()
        .any(|comment| parse_auto_generated_tag(&comment.text).is_ok())
}

/// Decides whether `unit` is generated and therefore exempt.
pub fn is_generated(
    unit: &SourceUnit,
    syntax: &dyn CommentSyntax,
    patterns: &GeneratedPatterns,
) -> bool {
    if is_generated_file_name(&unit.file_name) {
        debug!("{}: generated by file name", unit.file_name);
        return true;
    }

    if patterns.is_match(&unit.file_name) {
        debug!("{}: generated by configured pattern", unit.file_name);
        return true;
    }

    if has_auto_generated_marker(&leading_trivia(unit, syntax)) {
        debug!("{}: auto-generated marker in leading comments", unit.file_name);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::CSharpSyntax;

    #[test]
    fn designer_and_g_suffixes_are_case_agnostic() {
        assert!(is_generated_file_name("Foo.Designer.cs"));
        assert!(is_generated_file_name("Foo.designer.cs"));
        assert!(is_generated_file_name("Foo.DESIGNER.cs"));
        assert!(is_generated_file_name("Foo.g.cs"));
        assert!(is_generated_file_name("Foo.G.cs"));
        assert!(is_generated_file_name("Blah.Designer.cs"));
    }

    #[test]
    fn g_i_suffix() {
        assert!(is_generated_file_name("MainWindow.g.i.cs"));
        assert!(!is_generated_file_name("Foo.i.cs"));
    }

    #[test]
    fn assembly_info_is_case_sensitive() {
        assert!(is_generated_file_name("AssemblyInfo.cs"));
        assert!(is_generated_file_name("Foo.AssemblyInfo.cs"));
        assert!(is_generated_file_name("Properties/AssemblyInfo.cs"));
        assert!(!is_generated_file_name("assemblyinfo.cs"));
    }

    #[test]
    fn authored_names_are_not_generated() {
        assert!(!is_generated_file_name("Test0.cs"));
        assert!(!is_generated_file_name("Designer.cs"));
        assert!(!is_generated_file_name("Foo.Designers.cs"));
        assert!(!is_generated_file_name("src/g.rs"));
        assert!(!is_generated_file_name("blah.cs"));
    }

    #[test]
    fn windows_separators_are_handled() {
        assert!(is_generated_file_name("src\\Forms\\Main.Designer.cs"));
    }

    #[test]
    fn marker_detection() {
        let trivia = vec![
            CommentLine::new(1, "------"),
            CommentLine::new(2, "<auto-generated>"),
        ];
        assert!(has_auto_generated_marker(&trivia));
        assert!(!has_auto_generated_marker(&[CommentLine::new(1, "© Acme 2021")]));
        assert!(!has_auto_generated_marker(&[]));
    }

    #[test]
    fn marker_after_code_is_ignored() {
        let unit = SourceUnit::new("blah.cs", "using System;\n// <auto-generated />\n");
        assert!(!is_generated(&unit, &CSharpSyntax, &GeneratedPatterns::default()));
    }

    #[test]
    fn marker_in_leading_trivia() {
        let unit = SourceUnit::new("blah.cs", "// <autogenerated />\nusing System;\n");
        assert!(is_generated(&unit, &CSharpSyntax, &GeneratedPatterns::default()));
    }

    #[test]
    fn configured_patterns() {
        let patterns = GeneratedPatterns::new(["**/generated/**", "*.pb.cs"]).unwrap();
        assert_eq!(patterns.patterns().len(), 2);
        assert!(patterns.is_match("src/generated/Model.cs"));
        assert!(patterns.is_match("Messages.pb.cs"));
        assert!(!patterns.is_match("src/Model.cs"));

        let unit = SourceUnit::new("src/generated/Model.cs", "class Model {}\n");
        assert!(is_generated(&unit, &CSharpSyntax, &patterns));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(GeneratedPatterns::new(["src/[unclosed"]).is_err());
    }

    #[test]
    fn empty_patterns_match_nothing() {
        let patterns = GeneratedPatterns::default();
        assert!(patterns.is_empty());
        assert!(!patterns.is_match("anything.cs"));
    }
}
