//! Decorative scrolling code behind the main panel.
//!
//! Purely cosmetic. Nothing here reads or writes any other shell state.

/// Snippet repeated to fill the background.
pub const BACKGROUND_TEMPLATE: &str = r#"
function greet(name) {
  console.log("Hello, " + name + "!");
}

greet("World");

const fetchData = async () => {
  try {
    const response = await fetch("https://api.example.com/data");
    const data = await response.json();
    console.log(data);
  } catch (error) {
    console.error("Error fetching data:", error);
  }
};
fetchData();
"#;

/// Default number of template repetitions.
pub const DEFAULT_REPEAT: usize = 50;

/// Generated background text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundText {
    text: String,
    repeat: usize,
    generation: u64,
}

impl BackgroundText {
    /// Builds the background from the template repeated `repeat` times.
    pub fn generate(repeat: usize) -> Self {
        Self {
            text: BACKGROUND_TEMPLATE.repeat(repeat),
            repeat,
            generation: 0,
        }
    }

    /// Rebuilds the text and bumps the generation counter.
    pub fn regenerate(&mut self) {
        self.text = BACKGROUND_TEMPLATE.repeat(self.repeat);
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the text has been regenerated.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Returns `rows` lines starting at `offset`, wrapping around the end.
    pub fn window(&self, offset: usize, rows: usize) -> String {
        let lines: Vec<&str> = self.text.lines().collect();
        if lines.is_empty() {
            return String::new();
        }

        let start = offset % lines.len();
        lines
            .iter()
            .cycle()
            .skip(start)
            .take(rows)
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Empty until the first `regenerate`, so a default is free to build.
impl Default for BackgroundText {
    fn default() -> Self {
        Self {
            text: String::new(),
            repeat: DEFAULT_REPEAT,
            generation: 0,
        }
    }
}
