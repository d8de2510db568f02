use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_WIDTH_MAX: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "toggle" => Colour::Cyan,
        "time" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct LogRow {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let entries = stmt
            .query_map([], |row| {
                let raw_date: String = row.get(1)?;
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or(raw_date);

                Ok(LogRow {
                    id: row.get(0)?,
                    date,
                    operation: row.get(2)?,
                    target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    message: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let painted: Vec<String> = entries
            .iter()
            .map(|e| {
                let color = color_for_operation(&e.operation);
                let mut plain = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                if plain.chars().count() > OP_WIDTH_MAX {
                    plain = plain.chars().take(OP_WIDTH_MAX - 3).collect::<String>() + "...";
                }
                // only the operation word is coloured
                match plain.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(plain.as_str()).to_string(),
                }
            })
            .collect();

        let op_w = painted
            .iter()
            .map(|p| visible_width(p))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, op_target) in entries.iter().zip(&painted) {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(op_target)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                op_target,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
