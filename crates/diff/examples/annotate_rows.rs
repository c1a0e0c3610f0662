use row_diff::{compare, AnnotatedRow, LineSequence, RowCounts, RowStatus};

fn print_view(name: &str, view: &[AnnotatedRow]) {
    println!("{} - {}", name, RowCounts::of(view));
    for row in view {
        let color = match row.status {
            RowStatus::Unchanged => "\x1b[37m",
            RowStatus::Changed => "\x1b[33m",
            RowStatus::Deleted => "\x1b[31m",
            RowStatus::Inserted => "\x1b[32m",
        };
        println!("  {}{:<9}\x1b[0m {}", color, row.status.to_string(), row.text);
    }
}

fn main() {
    // Two sample texts to compare
    let original = LineSequence::from_text("A\nB\nC\nD\n");
    let revised = LineSequence::from_text("A\nX\nD\nE\nF\n");

    let (original_view, revised_view) = compare(&original, &revised).into_pair();

    match original_view {
        Ok(rows) => print_view("original", &rows),
        Err(err) => println!("original: {}", err),
    }
    match revised_view {
        Ok(rows) => print_view("revised", &rows),
        Err(err) => println!("revised: {}", err),
    }
}
