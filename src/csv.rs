// src/csv.rs
//
// Flat CSV companions for the JSON dataset files.

use std::collections::BTreeSet;
use std::io::{self, Write};

use serde_json::{Map, Value};

pub const SEP: char = ',';

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Nested objects become `outer_inner_leaf` columns. Arrays stay as JSON text.
pub fn flatten(record: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    match record {
        Value::Object(obj) => flatten_into(&mut out, None, obj),
        other => { out.insert(s!("value"), other.clone()); }
    }
    out
}

fn flatten_into(out: &mut Map<String, Value>, prefix: Option<&str>, obj: &Map<String, Value>) {
    for (k, v) in obj {
        let key = match prefix {
            Some(p) => format!("{p}_{k}"),
            None => k.clone(),
        };
        match v {
            Value::Object(inner) => flatten_into(out, Some(&key), inner),
            _ => { out.insert(key, v.clone()); }
        }
    }
}

fn cell(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => s!(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Header is the union of every record's flattened keys, in first-seen order.
pub fn write_flattened<W: Write>(mut w: W, records: &[Value]) -> io::Result<()> {
    let flat: Vec<Map<String, Value>> = records.iter().map(flatten).collect();

    let mut seen = BTreeSet::new();
    let mut header: Vec<String> = Vec::new();
    for row in &flat {
        for k in row.keys() {
            if seen.insert(k.clone()) {
                header.push(k.clone());
            }
        }
    }
    if header.is_empty() {
        return Ok(());
    }

    write_row(&mut w, &header, SEP)?;
    for row in &flat {
        let cells: Vec<String> = header.iter().map(|h| cell(row.get(h))).collect();
        write_row(&mut w, &cells, SEP)?;
    }
    Ok(())
}
