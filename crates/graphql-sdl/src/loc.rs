use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes an optional path to the file the position refers to.
///
/// Synthetic nodes (built in code rather than parsed from a document) carry
/// no [`SourceLocation`] at all.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourceLocation {
    pub column: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl SourceLocation {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            column: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(path) => write!(f, "{}:{}:{}", path.display(), self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}
