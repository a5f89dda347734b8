use quickcheck::{Arbitrary, Gen};

mod tree;

/// The mutations to apply to a tree in a quicktest. Each mutation comes in
/// its iterative and recursive flavor so the fuzzing exercises both.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the key with the iterative `insert`.
    Insert(K),
    /// Insert the key with `insert_recursive`.
    InsertRecursive(K),
    /// Delete the key with the iterative `delete`.
    Delete(K),
    /// Delete the key with `delete_recursive`.
    DeleteRecursive(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::InsertRecursive(K::arbitrary(g)),
            2 => Op::Delete(K::arbitrary(g)),
            3 => Op::DeleteRecursive(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
