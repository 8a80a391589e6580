//! LaTeX document assembly
//!
//! Just enough structure to wrap generated figures into a compilable
//! document: document class, package list, environments, commands, and
//! paragraphs.

/// A `\usepackage` entry
#[derive(Debug, Clone)]
struct Package {
    name: String,
    argument: Option<String>,
}

impl Package {
    fn render(&self) -> String {
        match &self.argument {
            Some(argument) => format!("\\usepackage[{argument}]{{{}}}", self.name),
            None => format!("\\usepackage{{{}}}", self.name),
        }
    }
}

/// One piece of document content
#[derive(Debug, Clone)]
enum LatexNode {
    Environment(Environment),
    Command { name: String, argument: Option<String> },
    Paragraph(String),
    Raw(String),
}

impl LatexNode {
    fn render(&self) -> String {
        match self {
            Self::Environment(environment) => environment.render(),
            Self::Command { name, argument } => match argument {
                Some(argument) => format!("\\{name}{{{argument}}}"),
                None => format!("\\{name}"),
            },
            Self::Paragraph(text) => text.clone(),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

/// A `\begin`/`\end` block with optional comment label
#[derive(Debug, Clone, Default)]
pub struct Environment {
    label: Option<String>,
    begin: Option<String>,
    content: Vec<LatexNode>,
}

impl Environment {
    /// Create an environment for the given `\begin` tag
    pub fn new(tag: &str) -> Self {
        Self {
            label: None,
            begin: Some(tag.to_string()),
            content: Vec::new(),
        }
    }

    /// Attach a comment label emitted above the block
    #[must_use]
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Append a command
    #[must_use]
    pub fn command(mut self, name: &str, argument: Option<&str>) -> Self {
        self.content.push(LatexNode::Command {
            name: name.to_string(),
            argument: argument.map(ToString::to_string),
        });
        self
    }

    /// Append a paragraph of text
    #[must_use]
    pub fn paragraph(mut self, text: &str) -> Self {
        self.content.push(LatexNode::Paragraph(text.to_string()));
        self
    }

    /// Append pre-rendered markup, such as a TikZ figure
    #[must_use]
    pub fn raw(mut self, raw: &str) -> Self {
        self.content.push(LatexNode::Raw(raw.to_string()));
        self
    }

    /// Append a nested environment
    #[must_use]
    pub fn environment(mut self, environment: Self) -> Self {
        self.content.push(LatexNode::Environment(environment));
        self
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(label) = &self.label {
            out.push_str(&format!("%{label} \n"));
        }
        if let Some(tag) = &self.begin {
            out.push_str(&format!("\\begin{{{tag}}}\n"));
        }
        for node in &self.content {
            out.push_str(&node.render());
        }
        if let Some(tag) = &self.begin {
            out.push_str(&format!("\\end{{{tag}}}\n"));
        }
        out
    }
}

/// A full LaTeX document
#[derive(Debug, Clone)]
pub struct LatexDoc {
    document_class: String,
    packages: Vec<Package>,
    content: Vec<LatexNode>,
}

impl LatexDoc {
    /// Create a document with the given class
    pub fn new(document_class: &str) -> Self {
        Self {
            document_class: document_class.to_string(),
            packages: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Register a package with an optional option argument
    #[must_use]
    pub fn package(mut self, name: &str, argument: Option<&str>) -> Self {
        self.packages.push(Package {
            name: name.to_string(),
            argument: argument.map(ToString::to_string),
        });
        self
    }

    /// Register the baseline package set
    #[must_use]
    pub fn default_packages(self) -> Self {
        self.package("inputenc", Some("utf8"))
    }

    /// Append a top-level command
    #[must_use]
    pub fn command(mut self, name: &str, argument: Option<&str>) -> Self {
        self.content.push(LatexNode::Command {
            name: name.to_string(),
            argument: argument.map(ToString::to_string),
        });
        self
    }

    /// Append a top-level environment
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.content.push(LatexNode::Environment(environment));
        self
    }

    /// Preamble: document class plus packages
    pub fn front_matter(&self) -> String {
        let mut out = format!("\\documentclass{{{}}}\n", self.document_class);
        for package in &self.packages {
            out.push_str(&package.render());
            out.push('\n');
        }
        out
    }

    /// Serialize the full document
    pub fn render(&self) -> String {
        let mut out = self.front_matter();
        for node in &self.content {
            out.push_str(&node.render());
            out.push('\n');
        }
        out
    }
}

/// Wrap a rendered figure into a standalone article document
pub fn knot_document(figure: &str) -> LatexDoc {
    LatexDoc::new("article")
        .default_packages()
        .package("tikz", None)
        .environment(
            Environment::new("document")
                .label("generated knot")
                .raw(figure),
        )
}
