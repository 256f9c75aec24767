//! The line-oriented input abstraction the evaluator consumes (§1 "The
//! core consumes ... a line-oriented input provider"). Console presentation
//! and encoding detection are the driver's job, not the evaluator's.

/// Supplies one line per call. `None` signals end of input.
pub trait LineInput {
    fn read_line(&mut self) -> Option<String>;
}

/// Adapts any [`std::io::BufRead`] (stdin, a file, a test fixture) into a
/// [`LineInput`].
pub struct BufReadInput<R> {
    reader: R,
}

impl<R: std::io::BufRead> BufReadInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: std::io::BufRead> LineInput for BufReadInput<R> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(_) => None,
        }
    }
}

/// A fixed sequence of lines, for tests (§8 scenario 4's defensive-read
/// scenario).
pub struct FixedInput {
    lines: std::collections::VecDeque<String>,
}

impl FixedInput {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl LineInput for FixedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}
