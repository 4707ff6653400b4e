//! Named and indexed collections of colors with JSON file persistence.
//!
//! Palettes store the canonical channels of their colors and hand values
//! out through the format they were created with. On disk a palette is a
//! small JSON document of lower case `#`-prefixed hex strings; the alpha
//! byte leads and only shows up when some color is not fully opaque, so
//! fully opaque palettes stay in the familiar 6 digit form.

use std::path::Path;

use serde_json::{Map, Value};

use crate::systems::{AlphaPosition, ColorSystem, Hex, HexFlags, HexParams};
use crate::{Color, ColorFormat, ColorLike, PaletteError, Rgba};

/// The on-disk layout: lower case, hashed, alpha byte leading.
fn file_params(with_alpha: bool) -> HexParams {
    let mut params = HexParams::new(AlphaPosition::Leading);
    if with_alpha {
        params.flags |= HexFlags::ALPHA;
    }
    params
}

fn render(rgba: Rgba, with_alpha: bool) -> String {
    Hex::from_canonical(rgba, &file_params(with_alpha)).to_string()
}

fn parse(value: &str) -> Result<Rgba, PaletteError> {
    Ok(Hex::new(value, file_params(false))?.to_canonical())
}

/// A collection of named colors, kept in insertion order.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<(String, Rgba)>,
    format: ColorFormat,
}

impl Palette {
    /// Create an empty palette whose colors come out through `format`.
    pub fn new(format: ColorFormat) -> Self {
        Self {
            entries: Vec::new(),
            format,
        }
    }

    /// Load a palette from a JSON object of `name: hex string` pairs.
    pub fn load(path: impl AsRef<Path>, format: ColorFormat) -> Result<Self, PaletteError> {
        let text = std::fs::read_to_string(path)?;
        let object: Map<String, Value> = serde_json::from_str(&text)?;

        let mut entries = Vec::with_capacity(object.len());
        for (name, value) in object {
            let Value::String(hex) = value else {
                return Err(PaletteError::BadEntry(value.to_string()));
            };
            entries.push((name, parse(&hex)?));
        }

        Ok(Self { entries, format })
    }

    /// Save the palette as a JSON object, keeping insertion order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PaletteError> {
        let with_alpha = self.entries.iter().any(|(_, rgba)| !rgba.is_opaque());

        let object: Map<String, Value> = self
            .entries
            .iter()
            .map(|(name, rgba)| (name.clone(), Value::String(render(*rgba, with_alpha))))
            .collect();

        std::fs::write(path, serde_json::to_string_pretty(&Value::Object(object))?)?;
        Ok(())
    }

    /// Bind a name to a color-like value.
    ///
    /// Re-adding a name with an equal color (after canonical rounding) is a
    /// no-op; re-adding it with a different color is an error, so palettes
    /// never silently repaint an existing name.
    pub fn add(&mut self, name: impl Into<String>, color: impl Into<ColorLike>) -> Result<(), PaletteError> {
        let name = name.into();
        let rgba = self.format.format(color)?.to_canonical();

        if let Some((_, existing)) = self.entries.iter().find(|(n, _)| *n == name) {
            if *existing == rgba {
                return Ok(());
            }
            return Err(PaletteError::NameClash(name));
        }

        self.entries.push((name, rgba));
        Ok(())
    }

    /// Remove a named color.
    pub fn remove(&mut self, name: &str) -> Result<(), PaletteError> {
        match self.entries.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.entries.remove(index);
                Ok(())
            }
            None => Err(PaletteError::MissingName(name.to_string())),
        }
    }

    /// The color bound to `name`, expressed through the palette's format.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rgba)| self.format.from_canonical(*rgba))
    }

    /// The names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The colors in insertion order, expressed through the palette's
    /// format.
    pub fn colors(&self) -> Vec<Color> {
        self.entries
            .iter()
            .map(|(_, rgba)| self.format.from_canonical(*rgba))
            .collect()
    }

    /// How many colors the palette holds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A collection of colors addressed by position instead of name.
#[derive(Clone, Debug)]
pub struct StackPalette {
    colors: Vec<Rgba>,
    format: ColorFormat,
}

impl StackPalette {
    /// Create an empty stack palette whose colors come out through
    /// `format`.
    pub fn new(format: ColorFormat) -> Self {
        Self {
            colors: Vec::new(),
            format,
        }
    }

    /// Load a stack palette from a JSON array of hex strings.
    pub fn load(path: impl AsRef<Path>, format: ColorFormat) -> Result<Self, PaletteError> {
        let text = std::fs::read_to_string(path)?;
        let values: Vec<Value> = serde_json::from_str(&text)?;

        let mut colors = Vec::with_capacity(values.len());
        for value in values {
            let Value::String(hex) = value else {
                return Err(PaletteError::BadEntry(value.to_string()));
            };
            colors.push(parse(&hex)?);
        }

        Ok(Self { colors, format })
    }

    /// Save the stack palette as a JSON array.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PaletteError> {
        let with_alpha = self.colors.iter().any(|rgba| !rgba.is_opaque());

        let values: Vec<Value> = self
            .colors
            .iter()
            .map(|rgba| Value::String(render(*rgba, with_alpha)))
            .collect();

        std::fs::write(path, serde_json::to_string_pretty(&Value::Array(values))?)?;
        Ok(())
    }

    /// Push a color-like value onto the stack.
    pub fn push(&mut self, color: impl Into<ColorLike>) -> Result<(), PaletteError> {
        let rgba = self.format.format(color)?.to_canonical();
        self.colors.push(rgba);
        Ok(())
    }

    /// The color at `index`, expressed through the palette's format.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors
            .get(index)
            .map(|rgba| self.format.from_canonical(*rgba))
    }

    /// The colors in stack order, expressed through the palette's format.
    pub fn colors(&self) -> Vec<Color> {
        self.colors
            .iter()
            .map(|rgba| self.format.from_canonical(*rgba))
            .collect()
    }

    /// How many colors the palette holds.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format() -> ColorFormat {
        ColorFormat::rgb255()
    }

    #[test]
    fn equal_re_adds_are_no_ops_and_clashes_fail() {
        let mut palette = Palette::new(format());
        palette.add("red", "#ff0000").unwrap();

        // The same canonical color through a different shape.
        palette.add("red", [255.0, 0.0, 0.0]).unwrap();
        assert_eq!(palette.len(), 1);

        assert!(matches!(
            palette.add("red", "#00ff00"),
            Err(PaletteError::NameClash(_))
        ));
    }

    #[test]
    fn lookups_come_out_through_the_palette_format() {
        let mut palette = Palette::new(format());
        palette.add("teal", "#008080").unwrap();
        assert_eq!(palette.get("teal").unwrap().to_string(), "rgb(0, 128, 128)");
        assert!(palette.get("coral").is_none());
    }

    #[test]
    fn removing_a_missing_name_fails() {
        let mut palette = Palette::new(format());
        palette.add("red", "#ff0000").unwrap();
        palette.remove("red").unwrap();
        assert!(palette.is_empty());
        assert!(matches!(
            palette.remove("red"),
            Err(PaletteError::MissingName(_))
        ));
    }

    #[test]
    fn opaque_palettes_round_trip_through_6_digit_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warm.json");

        let mut palette = Palette::new(format());
        palette.add("red", "#ff0000").unwrap();
        palette.add("orange", "#ff8000").unwrap();
        palette.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"#ff0000\""));

        let loaded = Palette::load(&path, format()).unwrap();
        assert_eq!(loaded.names().collect::<Vec<_>>(), ["red", "orange"]);
        assert_eq!(loaded.get("red"), palette.get("red"));
    }

    #[test]
    fn translucent_entries_switch_the_file_to_leading_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glass.json");

        let mut palette = StackPalette::new(ColorFormat::web());
        palette.push("#ff000080").unwrap();
        palette.push("#00ff00ff").unwrap();
        palette.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"#80ff0000\""));
        assert!(text.contains("\"#ff00ff00\""));

        let loaded = StackPalette::load(&path, ColorFormat::web()).unwrap();
        assert_eq!(loaded.get(0).unwrap().to_canonical().rounded(), [255, 0, 0, 128]);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn non_string_entries_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"red": 255}"#).unwrap();

        assert!(matches!(
            Palette::load(&path, format()),
            Err(PaletteError::BadEntry(_))
        ));
    }
}
