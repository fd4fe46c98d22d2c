use std::fmt::Display;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use log::info;
use rusttype::{Font, Scale};

use crate::models::PersonRecord;
use crate::utils::PassError;

/// Legacy artifact location; the CLI keeps writing here unless told otherwise.
pub const DEFAULT_PASS_PATH: &str = "visiting_pass.png";

const PASS_WIDTH: u32 = 600;
const PASS_HEIGHT: u32 = 400;
const MARGIN_LEFT: i32 = 50;
const LINE_OFFSETS: [i32; 3] = [50, 100, 150];
const FONT_SCALE: f32 = 30.0;
const FONT_DATA: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

pub struct PassRenderer;

impl PassRenderer {
    /// Render the visitor pass and write it to `output`, overwriting any
    /// previous artifact at that path. Rendering the same record twice
    /// produces byte-identical files.
    pub fn render_pass(record: &PersonRecord, output: &Path) -> Result<PathBuf, PassError> {
        let font = Font::try_from_bytes(FONT_DATA)
            .ok_or_else(|| PassError::RenderError("Embedded font failed to load".to_string()))?;
        let scale = Scale::uniform(FONT_SCALE);

        let mut pass = RgbImage::from_pixel(PASS_WIDTH, PASS_HEIGHT, Rgb([255, 255, 255]));

        let lines = [
            Self::field_line("Name", record.name.as_ref()),
            Self::field_line("Date of Birth", record.birth_date.as_ref()),
            Self::field_line("Age", record.age.as_ref()),
        ];
        for (line, y) in lines.iter().zip(LINE_OFFSETS) {
            draw_text_mut(&mut pass, Rgb([0, 0, 0]), MARGIN_LEFT, y, scale, &font, line);
        }

        pass.save(output).map_err(|e| {
            PassError::RenderError(format!("Failed to write pass to {}: {}", output.display(), e))
        })?;

        info!("Visiting pass written to {}", output.display());
        Ok(output.to_path_buf())
    }

    // Absent fields print as the literal "None", same as the legacy pass
    fn field_line<T: Display>(label: &str, value: Option<&T>) -> String {
        match value {
            Some(value) => format!("{}: {}", label, value),
            None => format!("{}: None", label),
        }
    }
}
