use carlot::api::{CmdMessage, MessageLevel};
use carlot::error::Result;
use carlot::model::{Car, FieldSet};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 24;
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// `sorted` is the active sort column and whether it is descending.
pub(super) fn print_cars(cars: &[Car], fields: &FieldSet, sorted: Option<(&str, bool)>) {
    if cars.is_empty() {
        println!("No cars found.");
        return;
    }

    let headers: Vec<String> = fields
        .iter()
        .map(|f| {
            let name = f.name().to_uppercase();
            match sorted {
                Some((column, desc)) if column == f.name() => {
                    format!("{} {}", name, if desc { "▼" } else { "▲" })
                }
                _ => name,
            }
        })
        .collect();

    let rows: Vec<Vec<String>> = cars
        .iter()
        .map(|car| {
            fields
                .iter()
                .map(|f| truncate_to_width(car.get(f), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).cyan().bold().to_string())
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    println!("{}", header_line.trim_end());

    for (i, row) in rows.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        let line = line.trim_end();
        if i % 2 == 1 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_car_detail(car: &Car, fields: &FieldSet) {
    let label_width = fields.iter().map(|f| f.name().width()).max().unwrap_or(0);
    for field in fields.iter() {
        println!(
            "{}  {}",
            pad(&field.name().to_uppercase(), label_width).cyan(),
            car.get(field)
        );
    }
    for (key, value) in &car.extra {
        println!(
            "{}  {}",
            pad(&key.to_uppercase(), label_width).dimmed(),
            value
        );
    }
}

pub(super) fn print_json(cars: &[Car]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(cars)?);
    Ok(())
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
