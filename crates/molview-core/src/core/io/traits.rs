use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Defines the interface for reading molecular structure file formats.
///
/// Readers turn a whole document into format-specific raw records. The document is always read in
/// full before parsing starts; there is no streaming mode.
pub trait StructureFile {
    /// The raw records produced by the reader.
    type Records;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Parses a complete document held in memory.
    ///
    /// # Arguments
    ///
    /// * `text` - The full document text.
    ///
    /// # Return
    ///
    /// Returns the records extracted from the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the format-specific parse fails.
    fn parse_str(&self, text: &str) -> Result<Self::Records, Self::Error>;

    /// Reads a complete document from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the records extracted from the document.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails (including invalid UTF-8) or parsing fails.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Records, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse_str(&text)
    }

    /// Reads a complete document from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns the records extracted from the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Self::Records, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
