use crate::application::view::{AppView, SheetView};
use crate::domain::app_state::Screen;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per view.
    Json,
}

/// Renders [`AppView`] snapshots to a writer.
pub struct ViewWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ViewWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_view(&mut self, view: &AppView) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, view)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Text => self.write_text(view)?,
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_text(&mut self, view: &AppView) -> Result<()> {
        let w = &mut self.writer;
        match view.screen {
            Screen::Finished => {
                writeln!(w, "== finished ==")?;
                writeln!(
                    w,
                    "paid with {} ({} left)",
                    view.selected.as_deref().unwrap_or("-"),
                    view.countdown
                )?;
            }
            Screen::Main => {
                writeln!(w, "== main ==")?;
                writeln!(w, "time left: {}", view.countdown)?;
                writeln!(w, "payment: {}", view.selected.as_deref().unwrap_or("none"))?;
                if view.finish_enabled {
                    writeln!(w, "actions: [open] [finish]")?;
                } else {
                    writeln!(w, "actions: [open]")?;
                }
                if let Some(sheet) = &view.sheet {
                    write_sheet(w, sheet)?;
                }
            }
        }
        Ok(())
    }
}

fn write_sheet<W: Write>(w: &mut W, sheet: &SheetView) -> Result<()> {
    writeln!(w, "== payment sheet ==")?;
    if sheet.loading {
        writeln!(w, "search: {:?} (loading...)", sheet.query)?;
    } else {
        writeln!(w, "search: {:?}", sheet.query)?;
    }
    for row in &sheet.rows {
        let mark = if row.checked { 'x' } else { ' ' };
        writeln!(w, "  [{mark}] {} {}", row.id, row.name)?;
    }
    if sheet.done_enabled {
        writeln!(w, "actions: [refresh] [close] [done]")?;
    } else {
        writeln!(w, "actions: [refresh] [close]")?;
    }
    Ok(())
}
