use log::{debug, info};
use thiserror::Error;

mod input;
mod union_find;

pub use crate::input::{load_pairs, parse_pairs, InputError, Pairs, MAX_ELEMENT};
pub use crate::union_find::{UnionFind, UnionFindError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
    #[error("largest element {0} exceeds the limit of {max}", max = MAX_ELEMENT)]
    TooLarge(usize),
}

/// Sizes a structure to hold every element in `pairs` and connects each pair in order.
pub fn connect_pairs(pairs: &Pairs) -> Result<UnionFind, Error> {
    let n = match pairs.max_value.checked_add(1) {
        Some(n) if pairs.max_value <= MAX_ELEMENT => n,
        _ => return Err(Error::TooLarge(pairs.max_value)),
    };
    let mut uf = UnionFind::new(n);
    let mut merges = 0usize;
    for &(p, q) in &pairs.pairs {
        if !uf.connected(p, q)? {
            uf.union(p, q)?;
            merges += 1;
        } else {
            debug!("{} and {} already connected", p, q);
        }
    }
    info!(
        "{} elements, {} pairs, {} merges, {} groups",
        uf.len(),
        pairs.pairs.len(),
        merges,
        uf.group_count()
    );
    Ok(uf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_no_pairs() {
        let pairs = parse_pairs(Cursor::new("0\n")).unwrap();
        let uf = connect_pairs(&pairs).unwrap();
        assert_eq!(format!("{:?}", uf.parents()), "[0]");
    }

    #[test]
    fn test_connect_pairs() {
        let pairs = parse_pairs(Cursor::new("5\n0 1\n2 3\n4 5\n1 3\n3 0\n")).unwrap();
        let mut uf = connect_pairs(&pairs).unwrap();
        assert_eq!(uf.len(), 6);
        assert_eq!(uf.group_count(), 2);
        assert_eq!(uf.connected(0, 3), Ok(true));
        assert_eq!(uf.connected(0, 5), Ok(false));
        assert_eq!(format!("{:?}", uf.parents()), "[0, 0, 0, 0, 4, 4]");
    }

    #[test]
    fn test_repeated_pair() {
        let once = connect_pairs(&parse_pairs(Cursor::new("1\n1 2\n")).unwrap()).unwrap();
        let twice = connect_pairs(&parse_pairs(Cursor::new("2\n1 2\n1 2\n")).unwrap()).unwrap();
        assert_eq!(once.parents(), twice.parents());
    }

    #[test]
    fn test_sample_file() {
        let pairs = load_pairs(concat!(env!("CARGO_MANIFEST_DIR"), "/UF.txt")).unwrap();
        assert_eq!(pairs.pairs.len(), 11);
        assert_eq!(pairs.max_value, 9);
        let uf = connect_pairs(&pairs).unwrap();
        assert_eq!(uf.group_count(), 2);
        assert_eq!(format!("{:?}", uf.parents()), "[6, 6, 6, 4, 4, 6, 6, 6, 4, 4]");
    }

    #[test]
    fn test_too_large() {
        for &max_value in &[usize::MAX, MAX_ELEMENT + 1] {
            let pairs = Pairs { max_value, pairs: vec![(0, max_value)] };
            match connect_pairs(&pairs) {
                Err(Error::TooLarge(v)) => assert_eq!(v, max_value),
                other => panic!("unexpected {:?}", other),
            }
        }

        let input = format!("1\n0 {}\n", usize::MAX);
        match parse_pairs(Cursor::new(input)) {
            Err(e @ InputError::ValueTooLarge { .. }) => {
                let message = format!("{}", Error::from(e));
                assert!(message.starts_with("line 2: element"), "{}", message);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_pairs() {
        let pairs = Pairs { max_value: 2, pairs: vec![(0, 1), (1, 5)] };
        match connect_pairs(&pairs) {
            Err(Error::UnionFind(UnionFindError::OutOfBounds { index: 5, len: 3 })) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
