//! Eviction-heavy workloads: capacity bounds, protection, span lockstep.
//!
//! The cyclic trim is the one non-trivial algorithm in this crate, so these
//! tests hammer it through the public facade: long write sequences against
//! small capacities, protected input threaded between evictable output, and
//! offset-view tracking driven by the reported eviction counts.

use std::collections::HashSet;

use console_buffer::{ConsoleBuffer, ConsoleConfig, ContentKind};
use pretty_assertions::assert_eq;

fn cyclic(capacity: usize, chunk_size: usize) -> ConsoleConfig {
    ConsoleConfig {
        capacity,
        chunk_size,
        ..ConsoleConfig::default()
    }
}

fn assert_index_consistent(console: &ConsoleBuffer) {
    let spans = console.spans();
    let mut expected = 0;
    for span in &spans {
        assert_eq!(span.start, expected, "span index must be gapless");
        expected = span.end;
    }
    assert_eq!(expected, console.len(), "spans must cover the text exactly");
}

#[test]
fn test_eviction_is_oldest_first() {
    let mut console = ConsoleBuffer::new(cyclic(10, 4));

    console.print("aaaa", ContentKind::Stdout, None);
    console.print("bbbb", ContentKind::Stderr, None);
    let outcome = console.print("cccc", ContentKind::Stdout, None);

    assert_eq!(outcome.evicted, 2);
    assert_eq!(console.text(), "aabbbbcccc");

    let spans = console.spans();
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0].kind, ContentKind::Stdout);
    assert_eq!(spans[0].end, 2);
    assert_index_consistent(&console);
}

#[test]
fn test_capacity_bound_holds_without_protected_content() {
    let mut console = ConsoleBuffer::new(cyclic(16, 4));

    for i in 0..60 {
        // Vary the write size and kind to exercise chunk boundaries.
        let piece = "x".repeat(1 + i % 6);
        let kind = if i % 3 == 0 {
            ContentKind::Stderr
        } else {
            ContentKind::Stdout
        };
        console.print(&piece, kind, None);
        assert!(console.len() <= 16, "capacity exceeded at write {i}");
        assert_index_consistent(&console);
    }
}

#[test]
fn test_model_round_trip_across_configs() {
    for (capacity, chunk_size) in [(10, 4), (13, 4), (16, 2), (31, 7)] {
        let mut console = ConsoleBuffer::new(cyclic(capacity, chunk_size));
        let mut model = String::new();

        for i in 0..40 {
            let piece = format!("{i:02}x");
            let outcome = console.print(&piece, ContentKind::Stdout, None);
            assert_eq!(outcome.accepted, piece);

            model.push_str(&piece);
            model.drain(..outcome.evicted);

            assert_eq!(
                console.text(),
                model,
                "divergence with capacity={capacity} chunk={chunk_size}"
            );
            assert!(console.len() <= capacity);
            assert_index_consistent(&console);
        }
    }
}

#[test]
fn test_protected_input_survives_surrounded_by_output() {
    let mut console = ConsoleBuffer::new(cyclic(8, 3));

    console.print("abcd", ContentKind::Stdout, None);
    console.print("in", ContentKind::UserInput, None);
    let third = console.print("wxyz", ContentKind::Stdout, None);

    assert_eq!(third.evicted, 2);
    assert_eq!(console.text(), "cdinwxyz");
    assert_index_consistent(&console);

    let fourth = console.print("123456", ContentKind::Stdout, None);
    assert_eq!(fourth.evicted, 6);
    assert_eq!(console.text(), "in123456");

    let spans = console.spans();
    assert_eq!(spans[0].kind, ContentKind::UserInput);
    assert_eq!(spans[0].end, 2);
    assert_index_consistent(&console);
}

#[test]
fn test_user_input_never_evicted_under_pressure() {
    let mut console = ConsoleBuffer::new(cyclic(8, 4));

    for i in 0..10 {
        console.print(&format!("cmd{i}\n"), ContentKind::UserInput, None);
        console.print("0123456789", ContentKind::Stdout, None);
        assert_index_consistent(&console);
    }

    // Every typed command is still present, in order, even though fifty
    // chars of input went through an eight-char buffer.
    let text = console.text();
    let mut pos = 0;
    for i in 0..10 {
        let cmd = format!("cmd{i}\n");
        let found = text[pos..]
            .find(&cmd)
            .unwrap_or_else(|| panic!("command {i} missing from {text:?}"));
        pos += found + cmd.len();
    }

    let input_chars: usize = console
        .spans()
        .iter()
        .filter(|span| span.kind == ContentKind::UserInput)
        .map(|span| span.end - span.start)
        .sum();
    assert_eq!(input_chars, 50);
    assert_eq!(console.user_input_len(), 50);
}

#[test]
fn test_reported_evictions_keep_external_offsets_valid() {
    let mut console = ConsoleBuffer::new(cyclic(20, 4));

    console.print("0123456789", ContentKind::Stdout, None);
    let marked = console.print("MARK", ContentKind::Stdout, None);
    assert_eq!(marked.evicted, 0);
    let mut mark_start = 10;

    let outcome = console.print("abcdefgh", ContentKind::Stdout, None);
    mark_start -= outcome.evicted;

    let window: String = console
        .text()
        .chars()
        .skip(mark_start)
        .take(4)
        .collect();
    assert_eq!(window, "MARK");
}

#[test]
fn test_linked_span_evicted_entirely() {
    let mut console = ConsoleBuffer::new(cyclic(6, 4));

    console.print("abc", ContentKind::Stdout, None);
    console.print("def", ContentKind::Stderr, Some("file:///d".to_string()));
    let outcome = console.print("ghijkl", ContentKind::Stdout, None);

    assert_eq!(outcome.evicted, 6);
    assert_eq!(console.text(), "ghijkl");

    let spans = console.spans();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].link, None);
    assert_index_consistent(&console);
}

#[test]
fn test_widened_protected_set_pins_system_notices() {
    let mut console = ConsoleBuffer::new(cyclic(12, 4));
    console.set_protected_kinds(HashSet::from([
        ContentKind::UserInput,
        ContentKind::System,
    ]));

    console.print("process started\n", ContentKind::System, None);
    for _ in 0..5 {
        console.print("noise noise\n", ContentKind::Stdout, None);
        assert_index_consistent(&console);
    }

    assert!(console.text().starts_with("process started\n"));
}

#[test]
fn test_eviction_across_many_chunks_in_one_call() {
    let mut console = ConsoleBuffer::new(cyclic(64, 4));

    console.print(&"a".repeat(64), ContentKind::Stdout, None);
    let outcome = console.print(&"b".repeat(48), ContentKind::Stdout, None);

    assert_eq!(outcome.evicted, 48);
    assert_eq!(console.len(), 64);
    let expected = format!("{}{}", "a".repeat(16), "b".repeat(48));
    assert_eq!(console.text(), expected);
    assert_index_consistent(&console);
}
