use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use tagsphere::Projection;

/// Items at or above this scale are drawn bold
const NEAR_SCALE: f64 = 0.85;

/// Indices of `projections` sorted back to front
pub fn draw_order(projections: &[Projection]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..projections.len()).collect();
    order.sort_by(|&a, &b| projections[a].z_order.total_cmp(&projections[b].z_order));
    order
}

/// Grey level for a given opacity; never fully black so far items stay visible
pub fn shade(opacity: f64) -> u8 {
    (64.0 + opacity.clamp(0.0, 1.0) * 191.0).round() as u8
}

/// Top-left cell of a label centred on the projected position, kept on screen
pub fn label_origin(
    projection: &Projection,
    label_len: usize,
    width: u16,
    height: u16,
) -> (u16, u16) {
    let max_col = (width as usize).saturating_sub(label_len) as f64;
    let col = (projection.position.x - label_len as f64 / 2.0)
        .round()
        .clamp(0.0, max_col);
    let row = projection
        .position
        .y
        .floor()
        .clamp(0.0, height.saturating_sub(1) as f64);
    (col as u16, row as u16)
}

/// Draws every label at its projected position, far items first
pub fn draw_cloud<W: Write>(
    out: &mut W,
    labels: &[String],
    projections: &[Projection],
    selected: Option<usize>,
    width: u16,
    height: u16,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for index in draw_order(projections) {
        let projection = &projections[index];
        let label: String = labels[index].chars().take(width as usize).collect();
        let (col, row) = label_origin(projection, label.chars().count(), width, height);
        let level = shade(projection.opacity);

        queue!(
            out,
            MoveTo(col, row),
            SetForegroundColor(Color::Rgb {
                r: level,
                g: level,
                b: level
            })
        )?;
        if selected == Some(index) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        if projection.scale >= NEAR_SCALE {
            queue!(out, SetAttribute(Attribute::Bold))?;
        } else if !projection.interactive {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        queue!(out, Print(label), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    Ok(())
}

/// Draws the debug lines in the top-left corner
pub fn draw_debug<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    Ok(())
}

/// Draws a centred notice, used when spin is paused
pub fn draw_notice<W: Write>(out: &mut W, text: &str, width: u16, height: u16) -> io::Result<()> {
    let col = (width as usize).saturating_sub(text.len()) / 2;
    queue!(
        out,
        MoveTo(col as u16, height / 2),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset)
    )
}
