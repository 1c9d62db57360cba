use std::{collections::VecDeque, fs, path::Path};

use rustyline::{error::ReadlineError, Editor};
use tracing::debug;

use crate::error::Result;

pub(crate) trait Input {
    /// Reads one line, `None` once nothing more can be read.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub(crate) struct EditorInput(Editor<()>);

impl EditorInput {
    pub(crate) fn new() -> Self {
        Self(Editor::<()>::new())
    }
}

impl Input for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.0.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Answers prompts from a prepared list of lines, then hands over to the
/// fallback input, if any.
pub(crate) struct ScriptInput {
    lines: VecDeque<String>,
    fallback: Option<Box<dyn Input>>,
}

impl ScriptInput {
    pub(crate) fn new(script: &str) -> Self {
        Self {
            lines: script.lines().map(String::from).collect(),
            fallback: None,
        }
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let script = Self::new(&fs::read_to_string(path)?);
        debug!(path = %path.display(), lines = script.lines.len(), "Loaded init script");
        Ok(script)
    }

    pub(crate) fn then(self, fallback: impl Input + 'static) -> Self {
        Self {
            fallback: Some(Box::new(fallback)),
            ..self
        }
    }
}

impl Input for ScriptInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if let Some(line) = self.lines.pop_front() {
            return Ok(Some(line));
        }

        match &mut self.fallback {
            Some(input) => input.read_line(prompt),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_script_runs_out() -> std::result::Result<(), ShellError> {
        let mut input = ScriptInput::new("first\n\nthird");

        assert_eq!(input.read_line("> ")?.as_deref(), Some("first"));
        assert_eq!(input.read_line("> ")?.as_deref(), Some(""));
        assert_eq!(input.read_line("> ")?.as_deref(), Some("third"));
        assert_eq!(input.read_line("> ")?, None);

        Ok(())
    }

    #[test]
    fn test_script_fallback() -> std::result::Result<(), ShellError> {
        let mut input = ScriptInput::new("first").then(ScriptInput::new("second"));

        assert_eq!(input.read_line("> ")?.as_deref(), Some("first"));
        assert_eq!(input.read_line("> ")?.as_deref(), Some("second"));
        assert_eq!(input.read_line("> ")?, None);

        Ok(())
    }

    #[test]
    fn test_script_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "1")?;
        writeln!(file, "6")?;

        let mut input = ScriptInput::from_file(file.path())?;

        assert_eq!(input.read_line("> ")?.as_deref(), Some("1"));
        assert_eq!(input.read_line("> ")?.as_deref(), Some("6"));
        assert_eq!(input.read_line("> ")?, None);

        Ok(())
    }

    #[test]
    fn test_missing_script_file() {
        let result = ScriptInput::from_file(Path::new("/nonexistent/roster-init"));
        assert!(matches!(result, Err(ShellError::Io(_))));
    }
}
