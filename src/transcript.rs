use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Ordered output lines of one demonstration.
///
/// Cloning yields another handle onto the same lines, so collaborators that
/// "print" as a side effect (trains, devices, visitors) can share it with the
/// driver that created them.
#[derive(Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    pub fn blank(&self) {
        self.line("");
    }

    pub fn extend<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines
            .borrow_mut()
            .extend(lines.into_iter().map(Into::into));
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Number of lines exactly equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.lines.borrow().iter().filter(|l| l.as_str() == line).count()
    }

    /// Position of the first line exactly equal to `line`.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines.borrow().iter().position(|l| l == line)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines.borrow().iter() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lines.borrow().iter()).finish()
    }
}
