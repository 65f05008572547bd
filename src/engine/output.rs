#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub enum OutputBlock {
    Title(String),
    Text(String),
}

impl OutputBlock {
    pub fn as_str(&self) -> &str {
        match self {
            OutputBlock::Title(s) | OutputBlock::Text(s) => s.as_str(),
        }
    }
}

/// Lines produced by one command, in order. Handlers push here and never print.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    /// Pushes `s` even when blank; for lines whose position is part of the layout.
    pub fn line(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Text(s.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(OutputBlock::as_str)
    }
}
