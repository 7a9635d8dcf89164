use std::{cell::Cell, fs::File, io::Read, path::Path};

use gust::{iter, prelude::*};

#[test]
fn parse_keeps_successes() {
    let words = ["1", "2", "three", "4", "five"];
    let parsed = iter::from_slice(&words)
        .filter_map(|s| Result::from(s.parse::<i32>()).ok())
        .collect();
    assert_eq!(parsed, vec![1, 2, 4]);
}

#[test]
fn checked_fold_breaks_before_overflow() {
    let mut it = iter::from_range(1i8, 30);
    let r = it.try_fold(0i8, |acc, x| match acc.checked_add(x) {
        std::option::Option::Some(sum) => Continue(sum),
        std::option::Option::None => Break(acc),
    });
    assert_eq!(r, Break(120));
    assert_eq!(it.next(), Some(17));
}

fn read_to_string(path: &Path, open_line: &Cell<u32>) -> Result<String> {
    catch(|| {
        open_line.set(line!() + 1);
        let mut file = Result::from(File::open(path)).unwrap();
        let mut contents = String::new();
        Result::from(file.read_to_string(&mut contents)).unwrap();
        Ok(contents)
    })
}

#[test]
fn catch_turns_open_failure_into_err() {
    let open_line = Cell::new(0);
    let path = Path::new("definitely/not/here.txt");
    let r = read_to_string(path, &open_line);
    assert!(r.is_err());

    let e = r.unwrap_err();
    let io = e.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);

    let frame = e.stack_trace().top().unwrap();
    assert_eq!(frame.file(), file!());
    assert_eq!(frame.line(), open_line.get());
}

#[test]
fn catch_returns_contents_on_success() {
    let path = std::env::temp_dir().join(format!("gust-scenario-{}.txt", std::process::id()));
    std::fs::write(&path, "hello").unwrap();
    let r = read_to_string(&path, &Cell::new(0));
    std::fs::remove_file(&path).unwrap();
    assert_eq!(r, Ok("hello".to_string()));
}

#[test]
fn peek_does_not_advance() {
    let v = [1, 2, 3];
    let mut it = iter::from_slice(&v).copied().peekable();
    assert_eq!(it.peek(), Some(&1));
    assert_eq!(it.peek(), Some(&1));
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.peek(), Some(&2));
}

#[test]
fn double_ended_alternation() {
    let v = [1, 2, 3, 4, 5];
    let mut it = iter::from_slice(&v).copied();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(5));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.next(), Some(3));
    assert_eq!(it.next_back(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn zip_with_unbounded_range_stops() {
    let letters = ['a', 'b', 'c'];
    let pairs = iter::from_range_from(1u64)
        .zip(iter::from_slice(&letters).copied())
        .collect();
    assert_eq!(
        pairs,
        vec![Pair::new(1, 'a'), Pair::new(2, 'b'), Pair::new(3, 'c')]
    );
}

#[test]
fn json_round_trip() {
    let values = vec![Some(1), None, Some(3)];
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, "[1,null,3]");
    let back: Vec<Option<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);

    let failed: Result<i32> = gust::result::err_msg("no value");
    let e = serde_json::to_string(&failed).unwrap_err();
    assert!(e.to_string().contains("no value"));
}
