//! Chart figures built from assembled tables.
//!
//! Rows are grouped by the color column into one trace per distinct value,
//! in order of first appearance. Only the figure description is produced
//! here; drawing is left to plotly.js in the rendered page.

use crate::Result;
use crate::model::{Cell, Table};
use anyhow::{Context, bail};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x: String,
    pub y: String,
    pub color: String,
    pub log_x: bool,
    pub markers: bool,
}

impl ChartConfig {
    /// Log-scaled x axis with points joined by lines.
    pub fn line(title: &str, x: &str, y: &str, color: &str) -> Self {
        Self {
            title: title.to_string(),
            x: x.to_string(),
            y: y.to_string(),
            color: color.to_string(),
            log_x: true,
            markers: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<i64>,
    pub y: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub log_x: bool,
    /// plotly trace mode, e.g. `lines+markers`.
    pub mode: String,
    pub traces: Vec<Trace>,
}

pub fn build_figure(table: &Table, config: &ChartConfig) -> Result<Figure> {
    let column = |name: &str| {
        table
            .column(name)
            .with_context(|| format!("chart {:?}: no column {:?}", config.title, name))
    };
    let xi = column(&config.x)?;
    let yi = column(&config.y)?;
    let ci = column(&config.color)?;

    let mut traces: Vec<Trace> = Vec::new();
    for (rowno, row) in table.rows.iter().enumerate() {
        let x = int_cell(&row[xi], &config.x, rowno)?;
        let y = int_cell(&row[yi], &config.y, rowno)?;
        let name = match &row[ci] {
            Cell::Text(s) => s.clone(),
            Cell::Int(v) => v.to_string(),
        };

        match traces.iter_mut().find(|t| t.name == name) {
            Some(trace) => {
                trace.x.push(x);
                trace.y.push(y);
            }
            None => traces.push(Trace {
                name,
                x: vec![x],
                y: vec![y],
            }),
        }
    }

    Ok(Figure {
        title: config.title.clone(),
        x_label: config.x.clone(),
        y_label: config.y.clone(),
        legend_title: config.color.clone(),
        log_x: config.log_x,
        mode: if config.markers { "lines+markers" } else { "lines" }.to_string(),
        traces,
    })
}

fn int_cell(cell: &Cell, column: &str, rowno: usize) -> Result<i64> {
    match cell {
        Cell::Int(v) => Ok(*v),
        Cell::Text(s) => bail!(
            "column {:?} row {} is not numeric: {:?}",
            column,
            rowno,
            s
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::{ELEMENT_INDEX, LIBRARY_NAME, TIME_US};
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        let mut t = Table::new(&[ELEMENT_INDEX, TIME_US, LIBRARY_NAME]);
        for (i, time, lib) in [
            (0, 3, "unordered_map"),
            (1, 4, "unordered_map"),
            (0, 1, "hash_table"),
        ] {
            t.rows
                .push(vec![Cell::Int(i), Cell::Int(time), Cell::Text(lib.to_string())]);
        }
        t
    }

    #[test]
    fn groups_rows_by_color_column() {
        let config =
            ChartConfig::line("Insert Profile - Time", ELEMENT_INDEX, TIME_US, LIBRARY_NAME);
        let fig = build_figure(&table(), &config).unwrap();

        assert_eq!(
            fig.traces,
            vec![
                Trace {
                    name: "unordered_map".to_string(),
                    x: vec![0, 1],
                    y: vec![3, 4],
                },
                Trace {
                    name: "hash_table".to_string(),
                    x: vec![0],
                    y: vec![1],
                },
            ]
        );
        assert!(fig.log_x);
        assert_eq!(fig.mode, "lines+markers");
        assert_eq!(fig.legend_title, "library name");
    }

    #[test]
    fn unknown_column_is_an_error() {
        let config = ChartConfig::line("t", ELEMENT_INDEX, "bucket count", LIBRARY_NAME);
        let err = build_figure(&table(), &config).unwrap_err();
        assert!(err.to_string().contains("bucket count"));
    }

    #[test]
    fn text_axis_is_an_error() {
        let config = ChartConfig::line("t", LIBRARY_NAME, TIME_US, LIBRARY_NAME);
        assert!(build_figure(&table(), &config).is_err());
    }

    #[test]
    fn empty_table_gives_no_traces() {
        let empty = Table::new(&[ELEMENT_INDEX, TIME_US, LIBRARY_NAME]);
        let config = ChartConfig::line("t", ELEMENT_INDEX, TIME_US, LIBRARY_NAME);
        assert!(build_figure(&empty, &config).unwrap().traces.is_empty());
    }
}
