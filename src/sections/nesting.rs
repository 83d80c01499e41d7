//! Section nesting state machine and the content buffer it writes into

use super::StructureError;

/// How a heading relates to the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First heading of the document
    First,
    /// One level deeper than the previous heading
    Deeper,
    /// Same level as the previous heading
    Sibling,
    /// Shallower than the previous heading by the given number of levels
    Shallower(usize),
}

/// Outcome of feeding one heading to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub transition: Transition,
    /// Sections to close before the heading's own section opens
    pub closes: usize,
}

/// Depth of the currently open section, `None` before the first heading
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NestingState {
    level: Option<usize>,
    previous: Option<u8>,
}

impl NestingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth
    pub fn level(&self) -> Option<usize> {
        self.level
    }

    /// Advance past a heading of the given rank
    ///
    /// Headings may go one level deeper at a time, and may never climb
    /// above the depth of the first heading.
    pub fn advance(&mut self, heading_level: u8) -> Result<Step, StructureError> {
        let (Some(level), Some(previous)) = (self.level, self.previous) else {
            self.level = Some(0);
            self.previous = Some(heading_level);
            return Ok(Step { transition: Transition::First, closes: 0 });
        };

        let diff = i16::from(heading_level) - i16::from(previous);
        let step = match diff {
            1 => {
                self.level = Some(level + 1);
                Step { transition: Transition::Deeper, closes: 0 }
            }
            0 => Step { transition: Transition::Sibling, closes: 1 },
            d if d < 0 => {
                let steps = usize::from(d.unsigned_abs());
                let new_level = level.checked_sub(steps).ok_or(StructureError::DecreaseBelowRoot {
                    from: previous,
                    to: heading_level,
                })?;
                self.level = Some(new_level);
                Step { transition: Transition::Shallower(steps), closes: steps + 1 }
            }
            _ => {
                return Err(StructureError::LevelSkip {
                    from: previous,
                    to: heading_level,
                })
            }
        };

        self.previous = Some(heading_level);
        Ok(step)
    }

    /// Close everything still open, returning how many sections that takes
    pub fn unwind(&mut self) -> usize {
        let open = self.level.map_or(0, |level| level + 1);
        self.level = None;
        self.previous = None;
        open
    }
}

/// Output buffer that splices markers into the original content
///
/// Markers are addressed by offsets into the original content and must
/// arrive in non-decreasing offset order. The running insertion offset maps
/// an original offset to its place in the output; everything between two
/// markers is copied through untouched.
#[derive(Debug)]
pub struct ContentBuffer<'a> {
    original: &'a str,
    out: String,
    /// Total bytes of markup inserted so far
    inserted: usize,
}

impl<'a> ContentBuffer<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            out: String::with_capacity(original.len() + original.len() / 4),
            inserted: 0,
        }
    }

    /// Bytes of the original copied so far
    fn copied(&self) -> usize {
        self.out.len() - self.inserted
    }

    /// Insert a marker before the byte at `offset` in the original content,
    /// returning where the marker starts in the output
    pub fn insert(&mut self, offset: usize, marker: &str) -> usize {
        let copied = self.copied();
        debug_assert!(offset >= copied, "insertions must not move backwards");
        debug_assert!(offset <= self.original.len());

        self.out.push_str(&self.original[copied..offset]);
        let at = self.translate(offset);
        debug_assert_eq!(at, self.out.len());

        self.out.push_str(marker);
        self.inserted += marker.len();
        at
    }

    /// Insert a marker after all remaining content
    pub fn append(&mut self, marker: &str) -> usize {
        self.insert(self.original.len(), marker)
    }

    /// Position in the output that an original offset has moved to
    pub fn translate(&self, offset: usize) -> usize {
        offset + self.inserted
    }

    /// Total bytes of markup inserted so far
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Copy the rest of the original and return the rewritten content
    pub fn finish(mut self) -> String {
        let copied = self.copied();
        self.out.push_str(&self.original[copied..]);
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(levels: &[u8]) -> Result<Vec<Step>, StructureError> {
        let mut state = NestingState::new();
        levels.iter().map(|&l| state.advance(l)).collect()
    }

    #[test]
    fn test_transitions() {
        let steps = run(&[2, 3, 3, 4, 2]).unwrap();
        let transitions: Vec<Transition> = steps.iter().map(|s| s.transition).collect();
        assert_eq!(
            transitions,
            vec![
                Transition::First,
                Transition::Deeper,
                Transition::Sibling,
                Transition::Deeper,
                Transition::Shallower(2),
            ]
        );
        let closes: Vec<usize> = steps.iter().map(|s| s.closes).collect();
        assert_eq!(closes, vec![0, 0, 1, 0, 3]);
    }

    #[test]
    fn test_level_tracking_and_unwind() {
        let mut state = NestingState::new();
        assert_eq!(state.level(), None);
        state.advance(1).unwrap();
        state.advance(2).unwrap();
        state.advance(3).unwrap();
        assert_eq!(state.level(), Some(2));
        state.advance(2).unwrap();
        assert_eq!(state.level(), Some(1));
        assert_eq!(state.unwind(), 2);
        assert_eq!(state.level(), None);
        assert_eq!(NestingState::new().unwind(), 0);
    }

    #[test]
    fn test_skip_is_error() {
        assert_eq!(run(&[2, 4]), Err(StructureError::LevelSkip { from: 2, to: 4 }));
    }

    #[test]
    fn test_decrease_below_root_is_error() {
        assert_eq!(run(&[3, 1]), Err(StructureError::DecreaseBelowRoot { from: 3, to: 1 }));
        assert_eq!(run(&[2, 1, 3]), Err(StructureError::DecreaseBelowRoot { from: 2, to: 1 }));
    }

    #[test]
    fn test_return_to_root_level_is_fine() {
        let steps = run(&[2, 3, 4, 2]).unwrap();
        assert_eq!(steps[3], Step { transition: Transition::Shallower(2), closes: 3 });
    }

    #[test]
    fn test_buffer_inserts_in_order() {
        let original = "<h1>A</h1>x<h2>B</h2>y";
        let mut buffer = ContentBuffer::new(original);

        assert_eq!(buffer.insert(0, "[1]"), 0);
        assert_eq!(buffer.translate(11), 14);
        assert_eq!(buffer.insert(11, "[2]"), 14);
        assert_eq!(buffer.append("[/2]"), 28);
        buffer.append("[/1]");
        assert_eq!(buffer.inserted(), 14);
        assert_eq!(buffer.finish(), "[1]<h1>A</h1>x[2]<h2>B</h2>y[/2][/1]");
    }

    #[test]
    fn test_buffer_without_insertions() {
        let buffer = ContentBuffer::new("untouched");
        assert_eq!(buffer.finish(), "untouched");
    }
}
