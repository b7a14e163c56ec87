use anyhow::Result;
use pjv_exercises::{
    CalculatorSession, CircularArrayQueue, ExerciseError, Operation, SequenceStats, Tree,
};

#[test]
fn test_queue_behaves_like_fifo_under_churn() {
    let mut queue = CircularArrayQueue::with_capacity(4);
    let mut expected = std::collections::VecDeque::new();

    for round in 0..20 {
        for i in 0..3 {
            let value = round * 10 + i;
            let accepted = queue.enqueue(value);
            assert_eq!(accepted, expected.len() < 4);
            if accepted {
                expected.push_back(value);
            }
        }
        for _ in 0..2 {
            assert_eq!(queue.dequeue(), expected.pop_front());
        }
        assert_eq!(queue.len(), expected.len());
        assert!(queue.iter().eq(expected.iter()));
    }
}

#[test]
fn test_queue_of_strings_prints_in_order() -> Result<()> {
    let mut queue = CircularArrayQueue::new();
    for word in ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"] {
        queue.enqueue(word.to_string());
    }
    assert!(queue.is_full());
    assert_eq!(queue.dequeue().as_deref(), Some("alpha"));
    queue.enqueue("eta".to_string());

    let mut out = Vec::new();
    queue.print_all_elements(&mut out)?;
    assert_eq!(String::from_utf8(out)?, "beta\ngamma\ndelta\nepsilon\neta\n");
    Ok(())
}

#[test]
fn test_tree_in_order_matches_sorted_input_for_many_sizes() {
    for n in 0..64 {
        let values: Vec<i32> = (0..n).map(|i| i * 3 - 20).collect();
        let tree = Tree::from_values(&values);
        assert_eq!(tree.in_order(), values);
        assert_eq!(tree.len(), values.len());

        // 平衡樹高度為 ceil(log2(n + 1))
        let expected_height = (usize::BITS - values.len().leading_zeros()) as usize;
        assert_eq!(tree.height(), expected_height, "n = {}", n);
    }
}

#[test]
fn test_tree_pretty_print_lines() {
    let tree = Tree::from_values(&[10, 20, 30, 40, 50, 60, 70]);
    let rendered = tree.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec!["- 40", " - 20", "  - 10", "  - 30", " - 60", "  - 50", "  - 70"]
    );
}

#[test]
fn test_stats_sequence_of_windows() {
    let mut stats = SequenceStats::new();
    let mut reports = Vec::new();
    for i in 1..=12 {
        stats.add_number(i as f64);
        reports.push(stats.formatted_statistics());
    }

    assert_eq!(reports[0], " 1 1.000 0.000");
    assert_eq!(reports[1], " 2 1.500 0.500");
    assert_eq!(reports[9], "10 5.500 2.872");
    assert_eq!(reports[10], " 1 11.000 0.000");
    assert_eq!(reports[11], " 2 11.500 0.500");
}

#[test]
fn test_calculator_session_per_operation() -> Result<()> {
    let cases = [
        ("1 1.25 2.5 3", Operation::Add, "1.250 + 2.500 = 3.750"),
        ("2 10 4 1", Operation::Subtract, "10.0 - 4.0 = 6.0"),
        ("3 -2 8 0", Operation::Multiply, "-2 * 8 = -16"),
        ("4 1 3 4", Operation::Divide, "1.0000 / 3.0000 = 0.3333"),
    ];

    for (input, operation, expected) in cases {
        let mut session = CalculatorSession::new(input.as_bytes(), Vec::new());
        let calc = session.run()?;
        assert_eq!(calc.operation(), operation);
        let output = String::from_utf8(session.into_output())?;
        assert_eq!(output.lines().last(), Some(expected));
    }
    Ok(())
}

#[test]
fn test_calculator_prompts_name_operands() -> Result<()> {
    let mut session = CalculatorSession::new("2\n7\n5\n0\n".as_bytes(), Vec::new());
    session.run()?;
    let output = String::from_utf8(session.into_output())?;
    assert!(output.contains("Enter minuend: "));
    assert!(output.contains("Enter subtrahend: "));
    assert!(output.contains("Enter number of decimal places: "));
    Ok(())
}

#[test]
fn test_calculator_validation_messages_are_written() -> Result<()> {
    let mut session = CalculatorSession::new("0\n".as_bytes(), Vec::new());
    let err = session.run().unwrap_err();
    assert!(matches!(err, ExerciseError::InvalidChoice { choice: 0 }));
    let output = String::from_utf8(session.into_output())?;
    assert!(output.contains("Invalid choice!"));

    let mut session = CalculatorSession::new("1 1 1 -3".as_bytes(), Vec::new());
    assert!(session.run().is_err());
    let output = String::from_utf8(session.into_output())?;
    assert!(output.contains("precision must be a non-negative number"));
    Ok(())
}
