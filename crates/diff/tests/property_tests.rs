use proptest::prelude::*;
use row_diff::{annotate, compare, EditOperation, LineSequence, RowCounts, RowStatus};

fn line() -> impl Strategy<Value = String> {
    // A small alphabet so generated files share lines
    prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(String::from)
}

fn lines(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line(), 0..max)
}

proptest! {
    #[test]
    fn no_edits_leaves_every_line_unchanged(original in lines(20)) {
        let rows = annotate(&original, &[]).unwrap();

        prop_assert_eq!(rows.len(), original.len());
        for (row, line) in rows.iter().zip(&original) {
            prop_assert_eq!(row.status, RowStatus::Unchanged);
            prop_assert_eq!(&row.text, line);
        }
    }

    #[test]
    fn replace_touches_max_of_both_sides(
        prefix in lines(5),
        source in lines(6),
        target in lines(6),
        suffix in lines(5),
    ) {
        let mut original = prefix.clone();
        original.extend(source.iter().cloned());
        original.extend(suffix.iter().cloned());
        let edits = vec![EditOperation::replace(prefix.len(), source.clone(), prefix.len(), target.clone())];

        let rows = annotate(&original, &edits).unwrap();
        let block = &rows[prefix.len()..prefix.len() + source.len().max(target.len())];
        let counts = RowCounts::of(block);

        let shared = source.len().min(target.len());
        prop_assert_eq!(counts.changed, shared);
        prop_assert_eq!(counts.deleted, source.len().saturating_sub(target.len()));
        prop_assert_eq!(counts.inserted, target.len().saturating_sub(source.len()));
        prop_assert_eq!(counts.unchanged, 0);

        // Rows around the block are untouched
        prop_assert!(rows[..prefix.len()].iter().all(|row| row.status == RowStatus::Unchanged));
        prop_assert_eq!(rows.len(), original.len() + target.len().saturating_sub(source.len()));
    }

    #[test]
    fn views_keep_every_line_of_their_file(a in lines(15), b in lines(15)) {
        let a = LineSequence::new(a);
        let b = LineSequence::new(b);

        let view = compare(&a, &b);

        for (source, target, rows) in [(&a, &b, view.original.unwrap()), (&b, &a, view.revised.unwrap())] {
            // Non-inserted rows are exactly the source lines in order
            let kept: Vec<&String> = rows
                .iter()
                .filter(|row| row.status != RowStatus::Inserted)
                .map(|row| &row.text)
                .collect();
            prop_assert_eq!(kept, source.iter().collect::<Vec<_>>());

            // Every line of the other file shows up as unchanged, changed or inserted
            let counts = RowCounts::of(&rows);
            prop_assert_eq!(counts.unchanged + counts.changed + counts.inserted, target.len());
        }
    }

    #[test]
    fn swapping_inputs_swaps_views(a in lines(12), b in lines(12)) {
        let a = LineSequence::new(a);
        let b = LineSequence::new(b);

        let forward = compare(&a, &b);
        let backward = compare(&b, &a);

        prop_assert_eq!(forward.original, backward.revised);
        prop_assert_eq!(forward.revised, backward.original);
    }
}
