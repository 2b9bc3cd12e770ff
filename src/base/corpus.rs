use std::path::{Path, PathBuf};

/// One line of corpus text.
///
/// `position` is the 0-based index of the line in the concatenated corpus,
/// not within its originating file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub position: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// The line with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// A contiguous range of corpus lines contributed by one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    pub path: PathBuf,
    /// Position of the file's first line in the corpus.
    pub start: usize,
    pub len: usize,
}

impl CorpusFile {
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position < self.start + self.len
    }
}

/// Ordered sequence of lines from one or more concatenated module texts.
///
/// The file table is bookkeeping for diagnostics only; the pipeline reads
/// [`Corpus::lines`] and nothing else.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    lines: Vec<SourceLine>,
    files: Vec<CorpusFile>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from a single block of text.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Build a corpus from an ordered iterator of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(position, text)| SourceLine::new(position, text))
            .collect();
        Self {
            lines,
            files: Vec::new(),
        }
    }

    /// Append one file's lines; positions continue the global numbering.
    pub fn push_file<I, S>(&mut self, path: impl Into<PathBuf>, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.lines.len();
        for text in lines {
            let position = self.lines.len();
            self.lines.push(SourceLine::new(position, text));
        }
        self.files.push(CorpusFile {
            path: path.into(),
            start,
            len: self.lines.len() - start,
        });
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    pub fn files(&self) -> &[CorpusFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// File and 1-based line number a corpus position came from.
    ///
    /// The pipeline itself only carries positions; this is for callers that
    /// report declarations back against their files.
    pub fn origin(&self, position: usize) -> Option<(&Path, usize)> {
        self.files
            .iter()
            .find(|file| file.contains(position))
            .map(|file| (file.path.as_path(), position - file.start + 1))
    }
}
