use std::iter::Iterator as _;

use gust::{
    catch,
    iter::{self, DoubleEndedIterator, Iterator},
    option::{self, none, some},
    result::{self, err, err_msg, ok},
    ControlFlow, ErrBox, Pair, Result,
};
use proptest::prelude::*;

fn halve(x: i32) -> Result<i32> {
    if x % 2 == 0 {
        ok(x / 2)
    } else {
        err_msg(format!("{x} is odd"))
    }
}

fn message_strategy() -> impl Strategy<Value = ErrBox> {
    "[a-z]{1,12}".prop_map(ErrBox::msg)
}

proptest! {
    #[test]
    fn option_presence(v in any::<i32>()) {
        prop_assert!(some(v).is_some());
        prop_assert!(!some(v).is_none());
        prop_assert!(none::<i32>().is_none());
        prop_assert!(!none::<i32>().is_some());
    }

    #[test]
    fn option_unwrap(v in any::<i64>()) {
        prop_assert_eq!(some(v).unwrap(), v);
        let failed = catch(|| {
            none::<i64>().unwrap();
            ok(())
        });
        prop_assert!(failed.is_err());
    }

    #[test]
    fn option_map_and_filter(v in any::<i32>(), bound in any::<i32>()) {
        let f = |x: i32| x.wrapping_mul(3);
        prop_assert_eq!(some(v).map(f).unwrap(), f(v));
        let kept = some(v).filter(|x| *x < bound);
        if v < bound {
            prop_assert_eq!(kept, some(v));
        } else {
            prop_assert_eq!(kept, none());
        }
        prop_assert_eq!(none::<i32>().map(f), none());
        prop_assert_eq!(none::<i32>().and_then(|x| some(x + 1)), none());
    }

    #[test]
    fn option_or(v in any::<u8>(), w in any::<u8>()) {
        prop_assert_eq!(some(v).or(some(w)), some(v));
        prop_assert_eq!(some(v).or(none()), some(v));
        prop_assert_eq!(none().or(some(w)), some(w));
    }

    #[test]
    fn option_zip_unzip(a in any::<i16>(), b in ".{0,8}") {
        let pair = some(Pair::new(a, b.clone()));
        let (x, y) = option::unzip(pair.clone());
        prop_assert_eq!(option::zip(x, y), pair);
        prop_assert_eq!(option::unzip(none::<Pair<i16, String>>()), (none(), none()));
    }

    #[test]
    fn option_ok_or_else(v in any::<i32>(), e in message_strategy()) {
        prop_assert_eq!(option::ok_or_else(some(v), || e.clone()), ok(v));
        prop_assert_eq!(option::ok_or_else(none::<i32>(), || e.clone()), err(e.clone()));
    }

    #[test]
    fn result_and_then(v in any::<i32>(), e in message_strategy()) {
        prop_assert_eq!(ok(v).and_then(halve), halve(v));
        prop_assert_eq!(err::<i32, _>(e.clone()).and_then(halve), err(e));
    }

    #[test]
    fn result_or_else(v in any::<i32>(), e in message_strategy()) {
        let recover = |e: ErrBox| ok::<i32>(e.to_string().len() as i32);
        prop_assert_eq!(err(e.clone()).or_else(recover), recover(e));
        prop_assert_eq!(ok(v).or_else(recover), ok(v));
    }

    #[test]
    fn result_ret(v in any::<u32>(), msg in "[a-z]{1,8}") {
        let good: std::result::Result<u32, std::io::Error> = std::result::Result::Ok(v);
        prop_assert_eq!(result::ret(good), ok(v));
        let bad: std::result::Result<u32, std::io::Error> =
            std::result::Result::Err(std::io::Error::new(std::io::ErrorKind::Other, msg.clone()));
        let r = result::ret(bad);
        prop_assert!(r.is_err());
        prop_assert_eq!(r.unwrap_err().to_string(), msg);
    }

    #[test]
    fn result_flatten(v in any::<i32>(), e in message_strategy()) {
        prop_assert_eq!(result::flatten(ok(ok(v))), ok(v));
        prop_assert_eq!(result::flatten(ok(err::<i32, _>(e.clone()))), err(e.clone()));
        prop_assert_eq!(result::flatten(err::<Result<i32>, _>(e.clone())), err(e));
    }

    #[test]
    fn catch_round_trip(v in any::<i32>(), x in any::<i32>()) {
        let outcome = catch(|| {
            halve(v).unwrap();
            ok(x)
        });
        let expected = halve(v).map(|_| x);
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn slice_source(s in prop::collection::vec(any::<i32>(), 0..32)) {
        prop_assert_eq!(iter::from_slice(&s).copied().collect(), s.clone());
        prop_assert_eq!(iter::from_slice(&s).count(), s.len());
        let f = |x: &i32| x.wrapping_add(7);
        let mapped: Vec<i32> = s.iter().map(f).collect();
        prop_assert_eq!(iter::from_slice(&s).map(f).collect(), mapped);
    }

    #[test]
    fn range_source(a in -200i32..200, len in 0i32..64) {
        let b = a + len;
        let expected: Vec<i32> = (a..b).collect();
        prop_assert_eq!(iter::from_range(a, b).collect(), expected);
        prop_assert_eq!(iter::from_range(a, b).size_hint(), (len as usize, gust::Option::Some(len as usize)));
    }

    #[test]
    fn take_and_skip_counts(s in prop::collection::vec(any::<u8>(), 0..32), n in 0usize..40) {
        prop_assert!(iter::from_slice(&s).take(n).count() <= n);
        prop_assert_eq!(iter::from_slice(&s).skip(n).count(), s.len().saturating_sub(n));
    }

    #[test]
    fn chain_with_empty(s in prop::collection::vec(any::<i8>(), 0..16)) {
        let plain = iter::from_slice(&s).collect();
        prop_assert_eq!(iter::from_slice(&s).chain(iter::empty()).collect(), plain.clone());
        prop_assert_eq!(iter::empty().chain(iter::from_slice(&s)).collect(), plain);
    }

    #[test]
    fn zip_count(a in prop::collection::vec(any::<u8>(), 0..16), b in ".{0,16}") {
        let n = iter::from_slice(&a).zip(iter::from_str_chars(&b)).count();
        prop_assert_eq!(n, a.len().min(b.chars().count()));
    }

    #[test]
    fn find_resumes_after_match(s in prop::collection::vec(0u8..10, 1..24), target in 0u8..10) {
        let mut it = iter::from_slice(&s);
        if let gust::Option::Some(found) = it.find(|x| **x == target) {
            prop_assert_eq!(*found, target);
            let idx = s.iter().position(|x| *x == target).unwrap_or_default();
            prop_assert_eq!(it.next(), gust::Option::from(s.get(idx + 1)));
        } else {
            prop_assert!(!s.contains(&target));
        }
    }

    #[test]
    fn fuse_is_sticky(gaps in prop::collection::vec(any::<bool>(), 1..16)) {
        let mut i = 0;
        let source = iter::from_fn(|| {
            let yielded = gaps.get(i).copied().unwrap_or(false);
            i += 1;
            if yielded { option::some(i) } else { option::none() }
        });
        let mut fused = source.fuse();
        while fused.next().is_some() {}
        for _ in 0..gaps.len() + 2 {
            prop_assert!(fused.next().is_none());
        }
    }

    #[test]
    fn rev_rev_identity(s in prop::collection::vec(any::<i32>(), 0..24)) {
        prop_assert_eq!(iter::from_slice(&s).rev().rev().collect(), iter::from_slice(&s).collect());
    }

    #[test]
    fn try_fold_matches_fold(s in prop::collection::vec(any::<i32>(), 0..24)) {
        let folded = iter::from_slice(&s).fold(0i64, |acc, x| acc + i64::from(*x));
        let tried: ControlFlow<(), i64> =
            iter::from_slice(&s).try_fold(0i64, |acc, x| ControlFlow::Continue(acc + i64::from(*x)));
        prop_assert_eq!(tried, ControlFlow::Continue(folded));
    }

    #[test]
    fn partition_is_permutation(s in prop::collection::vec(any::<i32>(), 0..32)) {
        let (evens, odds) = iter::from_slice(&s).copied().partition(|x| x % 2 == 0);
        prop_assert!(evens.iter().all(|x| x % 2 == 0));
        prop_assert!(odds.iter().all(|x| x % 2 != 0));
        let mut joined = [evens, odds].concat();
        let mut sorted = s.clone();
        joined.sort_unstable();
        sorted.sort_unstable();
        prop_assert_eq!(joined, sorted);
    }
}
