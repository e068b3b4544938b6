// fluent composer for changelog documents

/// builds changelog text line by line for tests
#[derive(Debug, Clone, Default)]
pub struct ChangelogBuilder {
    lines: Vec<String>,
}

impl ChangelogBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// append a `# title` heading
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.lines.push(format!("# {}", text.into()));
        self.lines.push(String::new());
        self
    }

    /// append an `## [Unreleased]` heading
    pub fn unreleased(mut self) -> Self {
        self.lines.push("## [Unreleased]".to_string());
        self.lines.push(String::new());
        self
    }

    /// append a dated `## [version] - date` heading
    pub fn release(mut self, version: &str, date: &str) -> Self {
        self.lines.push(format!("## [{}] - {}", version, date));
        self.lines.push(String::new());
        self
    }

    /// append an undated `## [version]` heading
    pub fn release_undated(mut self, version: &str) -> Self {
        self.lines.push(format!("## [{}]", version));
        self.lines.push(String::new());
        self
    }

    /// append a `### category` heading
    pub fn category(mut self, name: &str) -> Self {
        self.lines.push(format!("### {}", name));
        self
    }

    /// append a `- entry` bullet
    pub fn bullet(mut self, text: &str) -> Self {
        self.lines.push(format!("- {}", text));
        self
    }

    /// append a line verbatim
    pub fn raw_line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// append an empty line
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// render the document
    pub fn build(self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}
