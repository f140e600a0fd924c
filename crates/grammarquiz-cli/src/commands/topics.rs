//! The `grammarquiz topics` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use grammarquiz_core::bank::{self, MIXED_TOPIC_ID};

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Topic", "Name", "Questions", "Description"]);

    let mut total = 0;
    for topic in bank::topics() {
        total += topic.question_count();
        table.add_row(vec![
            Cell::new(topic.id),
            Cell::new(topic.name),
            Cell::new(topic.question_count()),
            Cell::new(topic.description),
        ]);
    }
    table.add_row(vec![
        Cell::new(MIXED_TOPIC_ID),
        Cell::new("Mixed Grammar"),
        Cell::new(total),
        Cell::new("Questions from every topic"),
    ]);

    println!("{table}");
    println!("\nStart a game with: grammarquiz play --topic <TOPIC>");
    Ok(())
}
