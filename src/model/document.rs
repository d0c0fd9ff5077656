//! Document Tree
//!
//! Pure data representation of a parsed document. No validation logic here —
//! validators receive shared references into this tree and may never mutate it.

/// The minimal text unit validators inspect.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Sentence text content.
    pub content: String,
    /// Document-relative line number (1-based), used for error localization.
    pub position: usize,
}

impl Sentence {
    pub fn new(content: impl Into<String>, position: usize) -> Self {
        Self {
            content: content.into(),
            position,
        }
    }
}

/// A contiguous run of sentences without an intervening heading.
///
/// May be empty — zero sentences is itself a condition some validators flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sentence(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// A heading-delimited region of a document, possibly nested.
///
/// Level 0 marks the synthetic root section a parser creates for content that
/// precedes the first real heading; such sections are structural placeholders
/// and content checks skip them.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    level: usize,
    header: Vec<String>,
    paragraphs: Vec<Paragraph>,
    subsections: Vec<Section>,
}

impl Section {
    pub fn new(level: usize, header: Vec<String>) -> Self {
        Self {
            level,
            header,
            paragraphs: Vec::new(),
            subsections: Vec::new(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Header tokens joined with single spaces, for display and error keys.
    pub fn joined_header(&self) -> String {
        self.header.join(" ")
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn subsections(&self) -> &[Section] {
        &self.subsections
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn add_subsection(&mut self, section: Section) {
        self.subsections.push(section);
    }
}

/// Root of the tree: an ordered sequence of top-level sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All sections in pre-order: parent before children, siblings in
    /// document order.
    pub fn sections_preorder(&self) -> Vec<&Section> {
        let mut out = Vec::new();
        for section in &self.sections {
            collect_preorder(section, &mut out);
        }
        out
    }

    /// All sentences in document order across the whole tree.
    pub fn sentences(&self) -> Vec<&Sentence> {
        self.sections_preorder()
            .into_iter()
            .flat_map(|s| s.paragraphs())
            .flat_map(|p| p.sentences())
            .collect()
    }
}

fn collect_preorder<'a>(section: &'a Section, out: &mut Vec<&'a Section>) {
    out.push(section);
    for child in section.subsections() {
        collect_preorder(child, out);
    }
}

/// Incremental construction of a `Document`, nesting sections by level.
///
/// `add_section` closes any open section whose level is greater than or equal
/// to the new one, so heading sequences nest the way they read on the page.
/// Sentences added before any section land in a synthetic level-0 root; that
/// root never closes on a real heading, so later sections nest under it.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    roots: Vec<Section>,
    stack: Vec<Section>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self, level: usize, header: Vec<String>) -> &mut Self {
        while self
            .stack
            .last()
            .is_some_and(|open| open.level() >= level && level > 0)
        {
            self.close_top();
        }
        self.stack.push(Section::new(level, header));
        self
    }

    /// Start a new, initially empty paragraph in the current section.
    pub fn add_paragraph(&mut self) -> &mut Self {
        self.ensure_section();
        if let Some(section) = self.stack.last_mut() {
            section.add_paragraph(Paragraph::new());
        }
        self
    }

    /// Append a sentence to the current paragraph, creating one if needed.
    pub fn add_sentence(&mut self, content: impl Into<String>, position: usize) -> &mut Self {
        self.ensure_section();
        if let Some(section) = self.stack.last_mut() {
            if section.paragraphs.is_empty() {
                section.add_paragraph(Paragraph::new());
            }
            if let Some(paragraph) = section.paragraphs.last_mut() {
                paragraph.add_sentence(Sentence::new(content, position));
            }
        }
        self
    }

    pub fn build(mut self) -> Document {
        while !self.stack.is_empty() {
            self.close_top();
        }
        Document::new(self.roots)
    }

    fn ensure_section(&mut self) {
        if self.stack.is_empty() {
            self.stack.push(Section::new(0, Vec::new()));
        }
    }

    fn close_top(&mut self) {
        let closed = match self.stack.pop() {
            Some(section) => section,
            None => return,
        };
        match self.stack.last_mut() {
            Some(parent) => parent.add_subsection(closed),
            None => self.roots.push(closed),
        }
    }
}
