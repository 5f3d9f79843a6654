//! Indentation-aware line accumulator with speculative rollback.

use gridcfg_core::Database;

use super::{
    ConflictPolicy, DataSource, DataSourceRegistry, EmitError, Indent, ReferenceRegistry, Result,
};

/// Everything a speculative block may touch, captured when it begins.
#[derive(Debug, Clone)]
struct Checkpoint {
    line_count: usize,
    /// Length of the last line, so text appended to an unfinished line is
    /// discarded as well.
    last_line_len: Option<usize>,
    depth: usize,
    at_line_start: bool,
    pending_blank: bool,
    references: ReferenceRegistry,
    data_sources: DataSourceRegistry,
}

/// Ordered sequence of output lines built up by a generation routine.
///
/// Besides plain lines the emitter tracks block nesting, owes at most one
/// blank line between sections, keeps the reference (import) and data-source
/// registries of the pass, and can checkpoint its state so a tentative
/// section can be thrown away without leaving anything behind.
///
/// # Example
///
/// ```
/// use gridcfg_codegen::{ConflictPolicy, Emitter};
///
/// let mut out = Emitter::java(ConflictPolicy::Fail);
/// out.open_block("class Foo {");
/// out.line("int x;");
/// out.close_block("}").unwrap();
///
/// assert_eq!(out.build(), "class Foo {\n    int x;\n}");
/// ```
///
/// Abandoning a section that turned out to be empty:
///
/// ```
/// use gridcfg_codegen::Emitter;
///
/// let mut out = Emitter::xml();
/// out.line("<beans>");
/// let kept = out
///     .speculative(|out| {
///         out.open_block("<property name=\"transactionConfiguration\">");
///         // ... no non-default field found
///         Ok::<_, gridcfg_codegen::EmitError>(false)
///     })
///     .unwrap();
///
/// assert!(!kept);
/// assert_eq!(out.depth(), 0);
/// assert_eq!(out.build(), "<beans>");
/// ```
#[derive(Debug, Clone)]
pub struct Emitter {
    indent: Indent,
    lines: Vec<String>,
    depth: usize,
    at_line_start: bool,
    pending_blank: bool,
    references: ReferenceRegistry,
    data_sources: DataSourceRegistry,
    checkpoint: Option<Checkpoint>,
}

impl Emitter {
    /// Create an empty emitter with a lenient Java reference registry.
    pub fn new(indent: Indent) -> Self {
        Self::with_references(indent, ReferenceRegistry::default())
    }

    /// Create an empty emitter whose blocks start `depth` levels deep.
    pub fn with_depth(indent: Indent, depth: usize) -> Self {
        let mut emitter = Self::new(indent);
        emitter.depth = depth;
        emitter
    }

    /// Create an empty emitter that resolves references through `references`.
    pub fn with_references(indent: Indent, references: ReferenceRegistry) -> Self {
        Self {
            indent,
            lines: Vec::new(),
            depth: 0,
            at_line_start: true,
            pending_blank: false,
            references,
            data_sources: DataSourceRegistry::new(),
            checkpoint: None,
        }
    }

    /// Emitter for Java sources: 4-space indent, Java import syntax.
    pub fn java(policy: ConflictPolicy) -> Self {
        Self::with_references(Indent::FOUR_SPACES, ReferenceRegistry::java(policy))
    }

    /// Emitter for XML documents: 4-space indent.
    pub fn xml() -> Self {
        Self::new(Indent::FOUR_SPACES)
    }

    // =========================================================================
    // Lines and blocks
    // =========================================================================

    /// Append `text` to the current line, starting a new indented line first
    /// if the previous one was closed. Empty text is ignored.
    pub fn append(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }

        match self.lines.last_mut() {
            Some(last) if !self.at_line_start => last.push_str(text),
            _ => {
                let mut line = self.indent.prefix(self.depth);
                line.push_str(text);
                self.lines.push(line);
            }
        }
        self.at_line_start = false;
        self
    }

    /// Emit `text` and close the logical line.
    ///
    /// At the start of a line a pending blank line is materialized before
    /// non-empty text, and an empty `text` drops it. When the current line is
    /// unfinished, `text` completes it and the blank line stays pending for
    /// the next fresh line.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if self.at_line_start {
            if self.pending_blank && !text.is_empty() {
                self.lines.push(String::new());
            }
            self.pending_blank = false;
        }
        self.append(text);
        self.at_line_start = true;
        self
    }

    /// Emit `header` like [`line`](Self::line), then indent.
    pub fn open_block(&mut self, header: &str) -> &mut Self {
        self.line(header);
        self.depth += 1;
        self
    }

    /// Dedent, then emit `footer` (if non-empty) at the shallower depth.
    ///
    /// A pending blank line is left pending: footers stay attached to the
    /// content above them.
    pub fn close_block(&mut self, footer: &str) -> Result<&mut Self> {
        if self.depth == 0 {
            return Err(EmitError::UnbalancedBlock);
        }

        self.depth -= 1;
        self.append(footer);
        self.at_line_start = true;
        Ok(self)
    }

    /// Owe a blank line before the next non-empty line. Repeated requests
    /// collapse into one.
    pub fn request_blank_line(&mut self) -> &mut Self {
        self.pending_blank = true;
        self
    }

    /// Materialize an owed blank line right away.
    pub fn blank_line_if_needed(&mut self) -> &mut Self {
        if self.pending_blank {
            self.lines.push(String::new());
            self.at_line_start = true;
            self.pending_blank = false;
        }
        self
    }

    /// Append the lines of another emitter verbatim, honouring a pending
    /// blank line. Registries of `other` are not merged.
    pub fn splice(&mut self, other: Emitter) -> &mut Self {
        if other.lines.is_empty() {
            return self;
        }

        if self.pending_blank && self.at_line_start {
            self.lines.push(String::new());
        }
        self.lines.extend(other.lines);
        self.at_line_start = true;
        self.pending_blank = false;
        self
    }

    // =========================================================================
    // Registries
    // =========================================================================

    /// Register a fully-qualified name and return the text to reference it by.
    ///
    /// See [`ReferenceRegistry::register`].
    pub fn register_reference(&mut self, full_name: &str) -> Result<String> {
        self.references.register(full_name)
    }

    /// Record a data source the output depends on.
    pub fn register_data_source(&mut self, bean_id: &str, database: Database) -> Result<()> {
        self.data_sources.register(bean_id, database)
    }

    /// The import section for every registered reference.
    pub fn render_imports(&self) -> String {
        self.references.render()
    }

    // =========================================================================
    // Speculative blocks
    // =========================================================================

    /// Checkpoint the current state. Speculative blocks do not nest.
    pub fn begin_speculative(&mut self) -> Result<()> {
        if let Some(checkpoint) = &self.checkpoint {
            return Err(EmitError::NestedSpeculative {
                started_at: checkpoint.line_count,
            });
        }

        self.checkpoint = Some(Checkpoint {
            line_count: self.lines.len(),
            last_line_len: self.lines.last().map(String::len),
            depth: self.depth,
            at_line_start: self.at_line_start,
            pending_blank: self.pending_blank,
            references: self.references.clone(),
            data_sources: self.data_sources.clone(),
        });
        Ok(())
    }

    /// Discard everything emitted or registered since the checkpoint.
    ///
    /// Without an open speculative block this is a no-op returning `false`.
    pub fn rollback_speculative(&mut self) -> bool {
        let Some(checkpoint) = self.checkpoint.take() else {
            tracing::debug!("rollback requested without an open speculative block");
            return false;
        };

        let discarded = self.lines.len().saturating_sub(checkpoint.line_count);
        self.lines.truncate(checkpoint.line_count);
        if let (Some(len), Some(last)) = (checkpoint.last_line_len, self.lines.last_mut()) {
            last.truncate(len);
        }
        self.depth = checkpoint.depth;
        self.at_line_start = checkpoint.at_line_start;
        self.pending_blank = checkpoint.pending_blank;
        self.references = checkpoint.references;
        self.data_sources = checkpoint.data_sources;

        tracing::trace!(discarded, "rolled back speculative block");
        true
    }

    /// Keep everything emitted since the checkpoint and drop the checkpoint.
    ///
    /// Without an open speculative block this is a no-op returning `false`.
    pub fn commit_speculative(&mut self) -> bool {
        self.checkpoint.take().is_some()
    }

    /// Run `f` inside a speculative block.
    ///
    /// The block is committed when `f` returns `Ok(true)` and rolled back when
    /// it returns `Ok(false)` or an error.
    pub fn speculative<F, E>(&mut self, f: F) -> std::result::Result<bool, E>
    where
        F: FnOnce(&mut Self) -> std::result::Result<bool, E>,
        E: From<EmitError>,
    {
        self.begin_speculative()?;

        match f(self) {
            Ok(true) => {
                self.commit_speculative();
                Ok(true)
            }
            Ok(false) => {
                self.rollback_speculative();
                Ok(false)
            }
            Err(err) => {
                self.rollback_speculative();
                Err(err)
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn pending_blank_line(&self) -> bool {
        self.pending_blank
    }

    pub fn references(&self) -> &ReferenceRegistry {
        &self.references
    }

    pub fn data_sources(&self) -> impl Iterator<Item = DataSource> + '_ {
        self.data_sources.iter()
    }

    pub fn is_speculative(&self) -> bool {
        self.checkpoint.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The accumulated text so far, lines joined with `\n`.
    pub fn as_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Consume the emitter and return its text.
    pub fn build(self) -> String {
        self.as_text()
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
