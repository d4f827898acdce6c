/// Side-panel text fields written by the hover handler.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Address,
    Bbl,
    LandUse,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Address, Field::Bbl, Field::LandUse];

    /// DOM element id of the field.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::Bbl => "bbl",
            Field::LandUse => "landuse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    MissingElement(String),
    Dom(String),
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayError::MissingElement(selector) => {
                write!(f, "display element not found: {selector}")
            }
            DisplayError::Dom(msg) => write!(f, "display update failed: {msg}"),
        }
    }
}

impl std::error::Error for DisplayError {}

/// Text and fragment output outside the map canvas.
pub trait DisplaySink {
    /// Replaces the text content of `field`.
    fn set_text(&mut self, field: Field, text: &str) -> Result<(), DisplayError>;

    /// Appends an HTML fragment to the element matching `container`.
    fn append_fragment(&mut self, container: &str, html: &str) -> Result<(), DisplayError>;
}
