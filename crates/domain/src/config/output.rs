/// Width of the `-` rule that frames every report block
pub const SEPARATOR_WIDTH: usize = 30;

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub separator_width: usize,
}

impl OutputConfig {
    pub fn separator(&self) -> String {
        "-".repeat(self.separator_width)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator_width: SEPARATOR_WIDTH,
        }
    }
}
