//! Standings table rendering
//!
//! Formats a standings snapshot as a terminal table: one output row per
//! input row, in input order, with win/draw/loss percentages and a colored
//! zone marker. Two visual styles are supported — a decorative box-drawing
//! table and a plain ASCII one — selected by an explicit capability check
//! rather than a runtime failure.

use std::io::{self, IsTerminal, Write};

use crossterm::style::{Color, Stylize};
use thiserror::Error;

use crate::data::{StandingsResponse, TeamRow};
use crate::zones::{Zone, ZoneTable};

/// Column headers, in output order
const HEADERS: [&str; 14] = [
    "", "#", "pt", "Team", "G", "W", "Win %", "D", "Drw %", "L", "Los %", "GF", "GA", "Dif",
];

/// Index of the team-name column, the only left-aligned one
const TEAM_COL: usize = 3;

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// The snapshot holds no rows to display
    #[error("no standings data available")]
    NoData,

    /// Writing the table to the output failed
    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),
}

/// Visual style of the rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Unicode box drawing with rounded corners
    Decorative,
    /// ASCII borders only
    Plain,
}

/// Options controlling how the table is rendered
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title printed above the table
    pub title: String,
    /// Border style
    pub style: TableStyle,
    /// Whether to color the zone markers
    pub color: bool,
    /// Band table used to classify positions
    pub zones: ZoneTable,
    /// Team whose row gets an accent style, when colors are enabled
    pub highlight_team: Option<String>,
}

impl RenderOptions {
    /// Builds options for a competition, probing the output device
    ///
    /// The decorative style is used only when the device supports it and
    /// no plain style was forced; colors are emitted only to a terminal.
    /// A favorite team to accent can be named in the `TABELA_TEAM`
    /// environment variable.
    pub fn for_terminal(competition: &str, force_plain: bool) -> Self {
        let is_tty = io::stdout().is_terminal();
        let decorative = !force_plain
            && decorative_capable(
                is_tty,
                std::env::var("TERM").ok().as_deref(),
                locale_hint().as_deref(),
            );

        Self {
            title: format!("Tabela {}", competition.to_uppercase()),
            style: if decorative {
                TableStyle::Decorative
            } else {
                TableStyle::Plain
            },
            color: is_tty,
            zones: ZoneTable::default(),
            highlight_team: std::env::var("TABELA_TEAM").ok().filter(|t| !t.is_empty()),
        }
    }
}

/// Border glyph set for one table style
struct Glyphs {
    horizontal: &'static str,
    vertical: &'static str,
    top: [&'static str; 3],
    mid: [&'static str; 3],
    bottom: [&'static str; 3],
}

const DECORATIVE_GLYPHS: Glyphs = Glyphs {
    horizontal: "─",
    vertical: "│",
    top: ["╭", "┬", "╮"],
    mid: ["├", "┼", "┤"],
    bottom: ["╰", "┴", "╯"],
};

const PLAIN_GLYPHS: Glyphs = Glyphs {
    horizontal: "-",
    vertical: "|",
    top: ["+", "+", "+"],
    mid: ["+", "+", "+"],
    bottom: ["+", "+", "+"],
};

/// Decides whether the decorative glyph set can be used
///
/// Requires a terminal whose TERM is not "dumb" and whose locale advertises
/// UTF-8. Pure in its inputs so the check is testable.
fn decorative_capable(is_tty: bool, term: Option<&str>, locale: Option<&str>) -> bool {
    if !is_tty {
        return false;
    }
    if matches!(term, Some("dumb") | None) {
        return false;
    }
    locale
        .map(|l| l.to_uppercase().replace('-', "").contains("UTF8"))
        .unwrap_or(false)
}

/// Returns the first locale environment variable that is set
fn locale_hint() -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
}

/// Formats `part / played` as a percentage with one decimal place
///
/// Zero played games yields "0.0%" rather than a division by zero.
fn percent(part: u32, played: u32) -> String {
    if played == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / played as f64 * 100.0)
}

/// Marker color for a zone, when one applies
fn zone_color(zone: Zone) -> Option<Color> {
    match zone {
        Zone::Continental => Some(Color::Green),
        Zone::Secondary => Some(Color::Yellow),
        Zone::MidTable => Some(Color::Cyan),
        Zone::Relegation => Some(Color::Red),
        Zone::None => None,
    }
}

/// Builds the display cells for one team row (zone marker excluded)
fn row_cells(row: &TeamRow) -> [String; 13] {
    [
        row.position.to_string(),
        row.points.to_string(),
        row.team.short_name.clone(),
        row.played_games.to_string(),
        row.won.to_string(),
        percent(row.won, row.played_games),
        row.draw.to_string(),
        percent(row.draw, row.played_games),
        row.lost.to_string(),
        percent(row.lost, row.played_games),
        row.goals_for.to_string(),
        row.goals_against.to_string(),
        row.goal_difference.to_string(),
    ]
}

/// Renders the standings table to stdout
pub fn render(snapshot: &StandingsResponse, options: &RenderOptions) -> Result<(), RenderError> {
    let stdout = io::stdout();
    render_to(&mut stdout.lock(), snapshot, options)
}

/// Renders the standings table to an arbitrary writer
///
/// # Returns
/// * `Ok(())` after the full table was written
/// * `Err(RenderError::NoData)` when the snapshot has no rows; nothing is
///   written in that case
pub fn render_to<W: Write>(
    writer: &mut W,
    snapshot: &StandingsResponse,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let rows = snapshot.rows();
    if rows.is_empty() {
        return Err(RenderError::NoData);
    }

    let cells: Vec<[String; 13]> = rows.iter().map(row_cells).collect();

    // Column widths: the marker column is a single glyph, the rest take the
    // widest of header and content.
    let mut widths = [0usize; 14];
    widths[0] = 1;
    for (i, header) in HEADERS.iter().enumerate().skip(1) {
        widths[i] = header.chars().count();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            let col = i + 1;
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let glyphs = match options.style {
        TableStyle::Decorative => &DECORATIVE_GLYPHS,
        TableStyle::Plain => &PLAIN_GLYPHS,
    };

    writeln!(writer, "{}", options.title)?;
    write_rule(writer, glyphs, &widths, glyphs.top)?;
    write_row(writer, glyphs, &widths, &HEADERS.map(String::from), None, options.color, false)?;
    write_rule(writer, glyphs, &widths, glyphs.mid)?;

    for (row, formatted) in rows.iter().zip(&cells) {
        let zone = options.zones.classify(row.position);
        let highlight = options
            .highlight_team
            .as_deref()
            .is_some_and(|team| team == row.team.short_name);
        let mut line = Vec::with_capacity(14);
        line.push(String::new()); // marker slot, styled separately
        line.extend(formatted.iter().cloned());
        write_row(writer, glyphs, &widths, &line, Some(zone), options.color, highlight)?;
    }

    write_rule(writer, glyphs, &widths, glyphs.bottom)?;
    Ok(())
}

/// Writes one horizontal border line
fn write_rule<W: Write>(
    writer: &mut W,
    glyphs: &Glyphs,
    widths: &[usize; 14],
    ends: [&str; 3],
) -> io::Result<()> {
    let mut line = String::from(ends[0]);
    for (i, width) in widths.iter().enumerate() {
        line.push_str(&glyphs.horizontal.repeat(width + 2));
        line.push_str(if i + 1 == widths.len() { ends[2] } else { ends[1] });
    }
    writeln!(writer, "{}", line)
}

/// Writes one table row, padding cells to their column width
///
/// `zone` is `Some` for data rows, whose first cell is the zone marker;
/// `None` for the header row. Highlighted rows get an accent style on every
/// cell; padding is applied before styling so widths stay exact.
fn write_row<W: Write>(
    writer: &mut W,
    glyphs: &Glyphs,
    widths: &[usize; 14],
    cells: &[String],
    zone: Option<Zone>,
    color: bool,
    highlight: bool,
) -> io::Result<()> {
    write!(writer, "{}", glyphs.vertical)?;
    for (i, cell) in cells.iter().enumerate() {
        if i == 0 {
            if let Some(zone) = zone {
                let marker = match zone_color(zone).filter(|_| color) {
                    Some(c) => "|".with(c).to_string(),
                    None => "|".to_string(),
                };
                write!(writer, " {} {}", marker, glyphs.vertical)?;
            } else {
                write!(writer, "   {}", glyphs.vertical)?;
            }
            continue;
        }

        let pad = widths[i].saturating_sub(cell.chars().count());
        let padded = if i == TEAM_COL {
            format!("{}{}", cell, " ".repeat(pad))
        } else {
            format!("{}{}", " ".repeat(pad), cell)
        };
        let styled = if highlight && color {
            padded.as_str().with(Color::DarkRed).bold().to_string()
        } else {
            padded
        };
        write!(writer, " {} {}", styled, glyphs.vertical)?;
    }
    writeln!(writer)
}
