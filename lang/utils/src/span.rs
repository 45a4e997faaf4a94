use std::{
    fmt::{Debug, Display},
    ops::Range,
    path::{Path, PathBuf},
};

/// Byte offset into a source buffer.
pub type Cursor1 = usize;

/// Line index over one source buffer.
#[derive(Clone, Debug)]
pub struct FileInfo<'src> {
    source: &'src str,
    /// byte offset at which every line begins; always starts with 0
    line_starts: Vec<Cursor1>,
    path: Option<PathBuf>,
}

impl<'src> FileInfo<'src> {
    pub fn new(source: &'src str, path: Option<PathBuf>) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        FileInfo { source, line_starts, path }
    }
    /// Translate a byte offset into a 1-based line and character column.
    /// Offsets past the end are clamped to the end of the source.
    pub fn position(&self, offset: Cursor1) -> Cursor2 {
        let offset = offset.min(self.source.len());
        // [s0 <= offset, s1 <= offset, (s2 > offset), ..]
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = match self.source.get(start..offset) {
            | Some(prefix) => prefix.chars().count(),
            | None => offset - start,
        };
        Cursor2 { line, column: column + 1 }
    }
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
    pub fn source(&self) -> &'src str {
        self.source
    }
}

/// Half-open byte range `[start, end)` into a source buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
    start: Cursor1,
    end: Cursor1,
}

impl Span {
    pub fn new(start: Cursor1, end: Cursor1) -> Span {
        debug_assert!(start <= end, "span {start}..{end} is reversed");
        Span { start, end }
    }
    pub fn dummy() -> Span {
        Span::new(0, 0)
    }
    pub fn get_cursor1(&self) -> (Cursor1, Cursor1) {
        (self.start, self.end)
    }
    pub fn start(&self) -> Cursor1 {
        self.start
    }
    pub fn end(&self) -> Cursor1 {
        self.end
    }
    pub fn len(&self) -> usize {
        self.end - self.start
    }
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
    pub fn range(&self) -> Range<Cursor1> {
        self.start..self.end
    }
    pub fn get_cursor2(&self, info: &FileInfo) -> (Cursor2, Cursor2) {
        (info.position(self.start), info.position(self.end))
    }
}

impl From<Range<Cursor1>> for Span {
    fn from(range: Range<Cursor1>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span { start, end } = self;
        write!(f, "{start}..{end}")
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Line and column, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor2 {
    pub line: usize,
    pub column: usize,
}
impl Display for Cursor2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Cursor2 { line, column } = self;
        write!(f, "{line}:{column}",)
    }
}
