//! Random source file generation for benchmarking and testing.
//!
//! Produces C# files with a weighted mix of header shapes, each tagged with
//! the outcome the copyright check is expected to report for it.

use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Write as _;

/// Company name used in generated headers.
pub const DEFAULT_COMPANY: &str = "Acme Corp.";

/// Configuration for generating source files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of files to generate.
    pub num_files: usize,
    /// Number of code lines following the header of each file.
    pub body_lines: usize,
    /// Company name written into compliant headers.
    pub company_name: String,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_files: 100,
            body_lines: 40,
            company_name: DEFAULT_COMPANY.to_string(),
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config generating the given number of files.
    pub fn new(num_files: usize) -> Self {
        Self {
            num_files,
            ..Default::default()
        }
    }

    /// Small fixture (~10 files).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 files).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 files).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k files).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of code lines per file.
    pub fn with_body_lines(mut self, lines: usize) -> Self {
        self.body_lines = lines;
        self
    }

    /// Set the company name written into headers.
    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = name.into();
        self
    }
}

/// The header shape of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// `// © Company Year`
    CompliantComment,
    /// `#region © Company Year`
    CompliantRegionTitle,
    /// `#region Header` with the notice in its body.
    CompliantRegionBody,
    /// Comment header lacking one token.
    IncompleteComment,
    /// Region header lacking one token.
    IncompleteRegion,
    /// No header at all.
    Missing,
    /// Auto-generated banner instead of a header.
    AutoGenerated,
    /// A `.Designer.cs` file without a header.
    DesignerFile,
}

impl HeaderKind {
    /// Returns true if the copyright check should accept this file.
    pub fn passes(&self) -> bool {
        !matches!(
            self,
            HeaderKind::IncompleteComment | HeaderKind::IncompleteRegion | HeaderKind::Missing
        )
    }
}

/// Header kind distribution weights (sum to 100).
const KIND_WEIGHTS: &[(HeaderKind, u32)] = &[
    (HeaderKind::CompliantComment, 35),
    (HeaderKind::CompliantRegionTitle, 15),
    (HeaderKind::CompliantRegionBody, 15),
    (HeaderKind::IncompleteComment, 10),
    (HeaderKind::IncompleteRegion, 5),
    (HeaderKind::Missing, 10),
    (HeaderKind::AutoGenerated, 5),
    (HeaderKind::DesignerFile, 5),
];

/// Vocabulary for generating realistic file names and code.
mod vocabulary {
    pub const NAMESPACES: &[&str] = &["Core", "Services", "Data", "Web", "Tools", "Tests"];
    pub const NOUNS: &[&str] = &[
        "Order", "Customer", "Invoice", "Report", "Session", "Device", "Scanner", "Config",
    ];
    pub const SUFFIXES: &[&str] = &["Service", "Repository", "Controller", "Handler", "Model", ""];
    pub const STATEMENTS: &[&str] = &[
        "var result = Compute(input);",
        "if (value == null) { return; }",
        "_logger.LogInformation(\"processing\");",
        "count++;",
        "items.Add(item);",
        "return total;",
    ];
}

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Repository-relative path.
    pub path: String,
    /// File content.
    pub content: String,
    /// Header shape the file was generated with.
    pub kind: HeaderKind,
}

fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn pick_kind(rng: &mut StdRng) -> HeaderKind {
    let mut roll = rng.random_range(0..100);
    for (kind, weight) in KIND_WEIGHTS {
        if roll < *weight {
            return *kind;
        }
        roll -= weight;
    }
    HeaderKind::CompliantComment
}

/// Writes a header of the given kind.
fn write_header(out: &mut String, kind: HeaderKind, company: &str, year: u32, rng: &mut StdRng) {
    // Writing into a String cannot fail.
    let _ = match kind {
        HeaderKind::CompliantComment => writeln!(out, "// © {} {}", company, year),
        HeaderKind::CompliantRegionTitle => {
            writeln!(out, "#region © {} {}\n#endregion", company, year)
        }
        HeaderKind::CompliantRegionBody => writeln!(
            out,
            "#region Header\n//\n// Copyright {} {}\n//\n#endregion",
            company, year
        ),
        HeaderKind::IncompleteComment => match rng.random_range(0..3) {
            0 => writeln!(out, "// {} {}", company, year),
            1 => writeln!(out, "// © {}", year),
            _ => writeln!(out, "// © {}", company),
        },
        HeaderKind::IncompleteRegion => {
            writeln!(out, "#region Header\n// © {}\n#endregion", company)
        }
        HeaderKind::AutoGenerated => writeln!(
            out,
            "// ------------------------------------------------------------------------------\n\
             // <auto-generated>\n\
             //     This code was generated by a tool.\n\
             // </auto-generated>\n\
             // ------------------------------------------------------------------------------"
        ),
        HeaderKind::Missing | HeaderKind::DesignerFile => Ok(()),
    };
}

fn generate_file(index: usize, config: &GeneratorConfig, rng: &mut StdRng) -> GeneratedFile {
    use vocabulary::*;

    let kind = pick_kind(rng);
    let namespace = pick(rng, NAMESPACES);
    let class = format!("{}{}{}", pick(rng, NOUNS), pick(rng, SUFFIXES), index);
    let year = rng.random_range(2015..=2025);

    let path = match kind {
        HeaderKind::DesignerFile => format!("src/{}/{}.Designer.cs", namespace, class),
        _ => format!("src/{}/{}.cs", namespace, class),
    };

    let mut content = String::with_capacity(64 * (config.body_lines + 8));
    write_header(&mut content, kind, &config.company_name, year, rng);
    let _ = writeln!(content, "using System;\n\nnamespace Acme.{}\n{{", namespace);
    let _ = writeln!(content, "    public class {}\n    {{", class);
    let _ = writeln!(content, "        public void Run()\n        {{");
    for _ in 0..config.body_lines {
        let _ = writeln!(content, "            {}", pick(rng, STATEMENTS));
    }
    let _ = writeln!(content, "        }}\n    }}\n}}");

    GeneratedFile {
        path,
        content,
        kind,
    }
}

/// Generates source files based on configuration.
pub fn generate(config: &GeneratorConfig) -> Vec<GeneratedFile> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.num_files)
        .map(|index| generate_file(index, config, &mut rng))
        .collect()
}
